#![no_std]

multiversx_sc::imports!();

pub mod fixed_point;
pub mod math;

pub use math::ArithmeticError;

// ============================================================
// Protocol constants shared by the ledger and the policy
// ============================================================

/// Fixed-point precision of every rate (target, market, deviation threshold).
pub const RATE_DECIMALS: u32 = 18;

/// Highest market rate the policy will act on, before scaling: 10^6.
const MAX_RATE_UNITS: u64 = 1_000_000;

/// `MAX_SUPPLY = 2^128 - 1`. Rebases never push supply above it.
pub fn max_supply<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(2u64).pow(128) - BigUint::from(1u64)
}

/// One whole unit of a rate, `10^18`.
pub fn rate_unit<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(10u64).pow(RATE_DECIMALS)
}

/// `MAX_RATE = 10^6 * 10^18`.
pub fn max_rate<M: ManagedTypeApi>() -> BigUint<M> {
    rate_unit::<M>() * BigUint::from(MAX_RATE_UNITS)
}
