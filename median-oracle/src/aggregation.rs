//! Report selection and median computation, independent of storage.

use multiversx_sc::{
    api::ManagedTypeApi,
    types::{BigUint, ManagedVec},
};

use elastic_common::math::{self, MathResult};

use crate::types::{recent_index, Report, PURGED_TIMESTAMP};

/// Report timestamps usable at a given moment: `[now - expiration, now - delay]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidityWindow {
    pub min_valid: u64,
    pub max_valid: u64,
}

impl ValidityWindow {
    pub fn accepts(&self, timestamp: u64) -> bool {
        timestamp > PURGED_TIMESTAMP && timestamp >= self.min_valid && timestamp <= self.max_valid
    }
}

/// Picks the report of a provider that may be used right now, if any.
///
/// A recent report younger than the delay is not trusted yet; the older
/// slot stands in for it, provided that one is itself inside the window.
pub fn select_report<'a, M: ManagedTypeApi>(
    reports: &'a [Report<M>; 2],
    window: &ValidityWindow,
) -> Option<&'a Report<M>> {
    let recent = recent_index(reports);
    let recent_report = &reports[recent];

    if recent_report.timestamp > window.max_valid {
        let past_report = &reports[1 - recent];
        return if window.accepts(past_report.timestamp) {
            Some(past_report)
        } else {
            None
        };
    }

    if window.accepts(recent_report.timestamp) {
        Some(recent_report)
    } else {
        None
    }
}

// ============================================================
// Tiered sample
// ============================================================

/// Accepted payloads of one aggregation round, tagged by provider tier.
pub struct TieredSample<M: ManagedTypeApi> {
    values: ManagedVec<M, BigUint<M>>,
    main_count: usize,
    regular_count: usize,
    main_representative: Option<BigUint<M>>,
    regular_representative: Option<BigUint<M>>,
}

impl<M: ManagedTypeApi> Default for TieredSample<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: ManagedTypeApi> TieredSample<M> {
    pub fn new() -> Self {
        TieredSample {
            values: ManagedVec::new(),
            main_count: 0,
            regular_count: 0,
            main_representative: None,
            regular_representative: None,
        }
    }

    /// The last recorded payload of each tier becomes its representative.
    pub fn record(&mut self, payload: &BigUint<M>, is_main: bool) {
        self.values.push(payload.clone());
        if is_main {
            self.main_count += 1;
            self.main_representative = Some(payload.clone());
        } else {
            self.regular_count += 1;
            self.regular_representative = Some(payload.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn main_count(&self) -> usize {
        self.main_count
    }

    pub fn regular_count(&self) -> usize {
        self.regular_count
    }

    pub fn has_both_tiers(&self) -> bool {
        self.main_count > 0 && self.regular_count > 0
    }

    /// Pads the sample until `regular == main + 1` by repeating the
    /// representative of the short tier. No-op unless both tiers are present.
    pub fn balance_tiers(&mut self) {
        let (main, regular) = match (&self.main_representative, &self.regular_representative) {
            (Some(main), Some(regular)) => (main.clone(), regular.clone()),
            _ => return,
        };

        while self.regular_count > self.main_count + 1 {
            self.values.push(main.clone());
            self.main_count += 1;
        }
        while self.regular_count < self.main_count + 1 {
            self.values.push(regular.clone());
            self.regular_count += 1;
        }
    }

    pub fn values(&self) -> &ManagedVec<M, BigUint<M>> {
        &self.values
    }

    pub fn median(&self) -> MathResult<BigUint<M>> {
        median(&self.values)
    }
}

// ============================================================
// Median
// ============================================================

/// Insertion sort, ascending.
pub fn sorted<M: ManagedTypeApi>(values: &ManagedVec<M, BigUint<M>>) -> ManagedVec<M, BigUint<M>> {
    let mut result: ManagedVec<M, BigUint<M>> = ManagedVec::new();
    for value in values.iter() {
        let mut next: ManagedVec<M, BigUint<M>> = ManagedVec::new();
        let mut inserted = false;
        for existing in result.iter() {
            if !inserted && *value < *existing {
                next.push((*value).clone());
                inserted = true;
            }
            next.push((*existing).clone());
        }
        if !inserted {
            next.push((*value).clone());
        }
        result = next;
    }
    result
}

/// Middle value for odd lengths, floor of the mean of the two middle
/// values for even lengths. Zero for an empty list.
pub fn median<M: ManagedTypeApi>(values: &ManagedVec<M, BigUint<M>>) -> MathResult<BigUint<M>> {
    let sorted = sorted(values);
    let len = sorted.len();
    if len == 0 {
        return Ok(BigUint::zero());
    }

    let mid = len / 2;
    if len % 2 == 1 {
        return Ok((*sorted.get(mid)).clone());
    }
    let lower = (*sorted.get(mid - 1)).clone();
    let upper = (*sorted.get(mid)).clone();
    math::div(&math::add(&lower, &upper)?, &BigUint::from(2u64))
}
