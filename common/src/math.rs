//! Checked 256-bit arithmetic over managed big integers.
//!
//! Managed `BigUint`/`BigInt` values are arbitrary precision, so the width of
//! the ledger's integers is enforced here: every result must fit `uint256`
//! (unsigned) or `int256` (signed), and every failure is reported instead of
//! wrapping or truncating. Division truncates, toward zero for signed values.

use multiversx_sc::{
    api::ManagedTypeApi,
    types::{BigInt, BigUint, Sign},
};

const UINT_BITS: u32 = 256;
const INT_MAGNITUDE_BITS: u32 = 255;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    Overflow,
    Underflow,
    DivideByZero,
}

impl ArithmeticError {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArithmeticError::Overflow => "Arithmetic overflow",
            ArithmeticError::Underflow => "Arithmetic underflow",
            ArithmeticError::DivideByZero => "Division by zero",
        }
    }
}

pub type MathResult<T> = Result<T, ArithmeticError>;

// ============================================================
// Bounds
// ============================================================

/// `2^256 - 1`
pub fn max_uint256<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(2u64).pow(UINT_BITS) - BigUint::from(1u64)
}

/// `2^255 - 1`
pub fn max_int256<M: ManagedTypeApi>() -> BigInt<M> {
    BigInt::from(int256_min_magnitude::<M>() - BigUint::from(1u64))
}

/// `-2^255`
pub fn min_int256<M: ManagedTypeApi>() -> BigInt<M> {
    -BigInt::from(int256_min_magnitude::<M>())
}

fn int256_min_magnitude<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from(2u64).pow(INT_MAGNITUDE_BITS)
}

fn fit_unsigned<M: ManagedTypeApi>(value: BigUint<M>) -> MathResult<BigUint<M>> {
    if value > max_uint256::<M>() {
        return Err(ArithmeticError::Overflow);
    }
    Ok(value)
}

fn fit_signed<M: ManagedTypeApi>(value: BigInt<M>) -> MathResult<BigInt<M>> {
    let magnitude = value.magnitude();
    let limit = int256_min_magnitude::<M>();
    let fits = match value.sign() {
        Sign::Minus => magnitude <= limit,
        _ => magnitude < limit,
    };
    if fits {
        Ok(value)
    } else {
        Err(ArithmeticError::Overflow)
    }
}

// ============================================================
// Unsigned
// ============================================================

pub fn add<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> MathResult<BigUint<M>> {
    fit_unsigned(a + b)
}

pub fn sub<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> MathResult<BigUint<M>> {
    if b > a {
        return Err(ArithmeticError::Underflow);
    }
    Ok(a - b)
}

pub fn mul<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> MathResult<BigUint<M>> {
    fit_unsigned(a * b)
}

pub fn div<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> MathResult<BigUint<M>> {
    if *b == 0u64 {
        return Err(ArithmeticError::DivideByZero);
    }
    Ok(a / b)
}

pub fn rem<M: ManagedTypeApi>(a: &BigUint<M>, b: &BigUint<M>) -> MathResult<BigUint<M>> {
    if *b == 0u64 {
        return Err(ArithmeticError::DivideByZero);
    }
    Ok(a % b)
}

// ============================================================
// Signed
// ============================================================

pub fn to_signed<M: ManagedTypeApi>(a: &BigUint<M>) -> MathResult<BigInt<M>> {
    fit_signed(BigInt::from(a.clone()))
}

pub fn signed_add<M: ManagedTypeApi>(a: &BigInt<M>, b: &BigInt<M>) -> MathResult<BigInt<M>> {
    fit_signed(a + b)
}

pub fn signed_sub<M: ManagedTypeApi>(a: &BigInt<M>, b: &BigInt<M>) -> MathResult<BigInt<M>> {
    fit_signed(a - b)
}

pub fn signed_mul<M: ManagedTypeApi>(a: &BigInt<M>, b: &BigInt<M>) -> MathResult<BigInt<M>> {
    fit_signed(a * b)
}

/// Truncates toward zero. `MIN / -1` does not fit and is an overflow.
pub fn signed_div<M: ManagedTypeApi>(a: &BigInt<M>, b: &BigInt<M>) -> MathResult<BigInt<M>> {
    if *b == BigInt::zero() {
        return Err(ArithmeticError::DivideByZero);
    }
    fit_signed(a / b)
}

pub fn signed_abs<M: ManagedTypeApi>(a: &BigInt<M>) -> MathResult<BigInt<M>> {
    fit_signed(BigInt::from(a.magnitude()))
}

pub fn is_negative<M: ManagedTypeApi>(a: &BigInt<M>) -> bool {
    matches!(a.sign(), Sign::Minus)
}

// ============================================================
// Timestamps
// ============================================================

pub fn add_u64(a: u64, b: u64) -> MathResult<u64> {
    a.checked_add(b).ok_or(ArithmeticError::Overflow)
}

pub fn sub_u64(a: u64, b: u64) -> MathResult<u64> {
    a.checked_sub(b).ok_or(ArithmeticError::Underflow)
}
