use elastic_common::math::{self, ArithmeticError};
use multiversx_sc::types::{BigInt, BigUint};
use multiversx_sc_scenario::api::StaticApi;

type Uint = BigUint<StaticApi>;
type Int = BigInt<StaticApi>;

fn uint(value: u64) -> Uint {
    BigUint::from(value)
}

fn int(value: i64) -> Int {
    BigInt::from(value)
}

#[test]
fn unsigned_add_stops_at_uint256() {
    let max = math::max_uint256::<StaticApi>();
    assert_eq!(math::add(&max, &uint(0)), Ok(max.clone()));
    assert_eq!(math::add(&max, &uint(1)), Err(ArithmeticError::Overflow));
}

#[test]
fn unsigned_sub_never_goes_negative() {
    assert_eq!(math::sub(&uint(10), &uint(3)), Ok(uint(7)));
    assert_eq!(math::sub(&uint(3), &uint(10)), Err(ArithmeticError::Underflow));
}

#[test]
fn unsigned_mul_overflow_is_reported() {
    let half = BigUint::<StaticApi>::from(2u64).pow(128);
    assert_eq!(math::mul(&half, &half), Err(ArithmeticError::Overflow));

    let just_below = BigUint::<StaticApi>::from(2u64).pow(127);
    assert!(math::mul(&half, &just_below).is_ok());
}

#[test]
fn division_by_zero_is_reported() {
    assert_eq!(math::div(&uint(5), &uint(0)), Err(ArithmeticError::DivideByZero));
    assert_eq!(math::rem(&uint(5), &uint(0)), Err(ArithmeticError::DivideByZero));
    assert_eq!(
        math::signed_div(&int(5), &int(0)),
        Err(ArithmeticError::DivideByZero)
    );
}

#[test]
fn unsigned_division_truncates() {
    assert_eq!(math::div(&uint(7), &uint(2)), Ok(uint(3)));
    assert_eq!(math::rem(&uint(7), &uint(2)), Ok(uint(1)));
}

#[test]
fn signed_division_truncates_toward_zero() {
    assert_eq!(math::signed_div(&int(-7), &int(2)), Ok(int(-3)));
    assert_eq!(math::signed_div(&int(7), &int(-2)), Ok(int(-3)));
    assert_eq!(math::signed_div(&int(-7), &int(-2)), Ok(int(3)));
}

#[test]
fn signed_min_edge_cases_overflow() {
    let min = math::min_int256::<StaticApi>();
    let minus_one = int(-1);

    assert_eq!(math::signed_div(&min, &minus_one), Err(ArithmeticError::Overflow));
    assert_eq!(math::signed_mul(&min, &minus_one), Err(ArithmeticError::Overflow));
    assert_eq!(math::signed_mul(&minus_one, &min), Err(ArithmeticError::Overflow));
    assert_eq!(math::signed_sub(&min, &int(1)), Err(ArithmeticError::Overflow));
    assert_eq!(math::signed_abs(&min), Err(ArithmeticError::Overflow));

    // MIN itself is representable
    assert_eq!(math::signed_add(&min, &int(0)), Ok(min.clone()));
}

#[test]
fn signed_max_edge_cases_overflow() {
    let max = math::max_int256::<StaticApi>();
    assert_eq!(math::signed_add(&max, &int(1)), Err(ArithmeticError::Overflow));
    assert_eq!(math::signed_sub(&int(0), &max), Ok(-max.clone()));
}

#[test]
fn to_signed_rejects_values_above_int256() {
    let max_uint = math::max_uint256::<StaticApi>();
    assert_eq!(math::to_signed(&max_uint), Err(ArithmeticError::Overflow));
    assert_eq!(math::to_signed(&uint(42)), Ok(int(42)));
}

#[test]
fn abs_and_sign() {
    assert_eq!(math::signed_abs(&int(-12)), Ok(int(12)));
    assert!(math::is_negative(&int(-1)));
    assert!(!math::is_negative(&int(0)));
    assert!(!math::is_negative(&int(3)));
}

#[test]
fn timestamp_helpers_are_checked() {
    assert_eq!(math::add_u64(u64::MAX, 1), Err(ArithmeticError::Overflow));
    assert_eq!(math::sub_u64(5, 6), Err(ArithmeticError::Underflow));
    assert_eq!(math::sub_u64(6, 5), Ok(1));
}

#[test]
fn protocol_constants() {
    let unit = elastic_common::rate_unit::<StaticApi>();
    assert_eq!(unit, BigUint::<StaticApi>::from(1_000_000_000_000_000_000u64));
    assert_eq!(
        elastic_common::max_rate::<StaticApi>(),
        &unit * &BigUint::<StaticApi>::from(1_000_000u64)
    );
    assert_eq!(
        elastic_common::max_supply::<StaticApi>() + BigUint::<StaticApi>::from(1u64),
        BigUint::<StaticApi>::from(2u64).pow(128)
    );
}

#[test]
fn error_messages() {
    assert_eq!(ArithmeticError::Overflow.as_str(), "Arithmetic overflow");
    assert_eq!(ArithmeticError::Underflow.as_str(), "Arithmetic underflow");
    assert_eq!(ArithmeticError::DivideByZero.as_str(), "Division by zero");
}
