//! Scheduling and supply-delta arithmetic of the monetary policy.

use multiversx_sc::{
    api::ManagedTypeApi,
    types::{BigInt, BigUint},
};

use elastic_common::math::{self, MathResult};

/// `true` when `rate` is closer to `target` than `target * threshold / 10^18`.
pub fn within_deviation_threshold<M: ManagedTypeApi>(
    rate: &BigUint<M>,
    target: &BigUint<M>,
    threshold: &BigUint<M>,
) -> MathResult<bool> {
    let scaled_threshold = math::mul(target, threshold)?;
    let absolute_threshold = math::div(&scaled_threshold, &elastic_common::rate_unit())?;
    let deviation = if rate >= target {
        math::sub(rate, target)?
    } else {
        math::sub(target, rate)?
    };
    Ok(deviation < absolute_threshold)
}

/// `supply * (rate - target) / target`, or zero inside the deviation threshold.
pub fn compute_supply_delta<M: ManagedTypeApi>(
    supply: &BigUint<M>,
    rate: &BigUint<M>,
    target: &BigUint<M>,
    threshold: &BigUint<M>,
) -> MathResult<BigInt<M>> {
    if within_deviation_threshold(rate, target, threshold)? {
        return Ok(BigInt::zero());
    }

    let signed_target = math::to_signed(target)?;
    let deviation = math::signed_sub(&math::to_signed(rate)?, &signed_target)?;
    let scaled = math::signed_mul(&math::to_signed(supply)?, &deviation)?;
    math::signed_div(&scaled, &signed_target)
}

/// Spreads a correction over `lag` rebases, truncating toward zero.
pub fn dampen<M: ManagedTypeApi>(delta: &BigInt<M>, lag: u64) -> MathResult<BigInt<M>> {
    let lag = math::to_signed(&BigUint::from(lag))?;
    math::signed_div(delta, &lag)
}

/// Caps an expansion so that `supply + delta` stays within `MAX_SUPPLY`.
pub fn clamp_to_max_supply<M: ManagedTypeApi>(
    delta: &BigInt<M>,
    supply: &BigUint<M>,
) -> MathResult<BigInt<M>> {
    if math::is_negative(delta) {
        return Ok(delta.clone());
    }

    let max_supply = elastic_common::max_supply::<M>();
    if math::add(supply, &delta.magnitude())? > max_supply {
        let room = math::sub(&max_supply, supply)?;
        return math::to_signed(&room);
    }
    Ok(delta.clone())
}

/// `now mod interval` falls in `[offset, offset + length)`.
pub fn in_rebase_window(now: u64, interval: u64, offset: u64, length: u64) -> bool {
    match now.checked_rem(interval) {
        Some(phase) => phase >= offset && phase - offset < length,
        None => false,
    }
}

/// Start of the window of the interval containing `now`.
pub fn window_start(now: u64, interval: u64, offset: u64) -> MathResult<u64> {
    let phase = now.checked_rem(interval).ok_or(math::ArithmeticError::DivideByZero)?;
    math::add_u64(math::sub_u64(now, phase)?, offset)
}
