multiversx_sc::imports!();

use crate::math;

/// Checked arithmetic for contract code.
///
/// Every balance, supply, ratio, rate and timestamp computation in the
/// protocol contracts goes through these methods. A failure aborts the
/// whole call with the error message, reverting every write made so far.
#[multiversx_sc::module]
pub trait FixedPointModule {
    fn safe_add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        math::add(a, b).unwrap_or_else(|err| sc_panic!(err.as_str()))
    }

    fn safe_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        math::sub(a, b).unwrap_or_else(|err| sc_panic!(err.as_str()))
    }

    fn safe_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        math::mul(a, b).unwrap_or_else(|err| sc_panic!(err.as_str()))
    }

    fn safe_div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        math::div(a, b).unwrap_or_else(|err| sc_panic!(err.as_str()))
    }

    fn safe_add_u64(&self, a: u64, b: u64) -> u64 {
        math::add_u64(a, b).unwrap_or_else(|err| sc_panic!(err.as_str()))
    }

    fn safe_sub_u64(&self, a: u64, b: u64) -> u64 {
        math::sub_u64(a, b).unwrap_or_else(|err| sc_panic!(err.as_str()))
    }
}
