multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Timestamp of a slot that was never written.
pub const UNSET_TIMESTAMP: u64 = 0;

/// Timestamp marking a registered provider with no usable report:
/// set on registration and on purge. Never passes a freshness check.
pub const PURGED_TIMESTAMP: u64 = 1;

// ============================================================
// Report: one of a provider's two slots
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Report<M: ManagedTypeApi> {
    pub timestamp: u64,
    pub payload: BigUint<M>,
}

impl<M: ManagedTypeApi> Report<M> {
    pub fn unset() -> Self {
        Report {
            timestamp: UNSET_TIMESTAMP,
            payload: BigUint::zero(),
        }
    }

    pub fn purged() -> Self {
        Report {
            timestamp: PURGED_TIMESTAMP,
            payload: BigUint::zero(),
        }
    }
}

/// Index of the more recent slot. Ties go to slot 0.
pub fn recent_index<M: ManagedTypeApi>(reports: &[Report<M>; 2]) -> usize {
    if reports[0].timestamp >= reports[1].timestamp {
        0
    } else {
        1
    }
}
