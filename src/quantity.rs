//! 유량·수량 계산에 쓰는 10진 고정 유효숫자 연산 보조 모듈.
//!
//! 모든 수치는 `rust_decimal::Decimal`로 다룬다. 2진 부동소수점은 단계별
//! 반올림이 누적되면 동일 입력에 대해 동일 결과를 보장하지 못한다.

use rust_decimal::{Decimal, RoundingStrategy};

/// 보고서 수치의 유효숫자 자릿수.
pub const SIGNIFICANT_DIGITS: u32 = 8;

/// 값을 유효숫자 8자리로 반올림한다(은행원 반올림).
pub fn round_sig(v: Decimal) -> Decimal {
    v.round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::MidpointNearestEven)
        .unwrap_or(v)
}

/// 수치 연산 중 발생 가능한 오류.
///
/// 입력 검증을 통과한 뒤에도 남는 0 나눗셈을 산술 예외 대신 오류 값으로
/// 돌려주기 위한 2차 방어선이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// 0으로 나누기 발생 위치
    DivisionByZero(&'static str),
    /// 음수 부하값이 α 결정기에 전달됨
    NegativeLoad(Decimal),
}

impl std::fmt::Display for NumericError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericError::DivisionByZero(what) => write!(f, "0으로 나눌 수 없음: {what}"),
            NumericError::NegativeLoad(np) => write!(f, "부하값이 음수임: {np}"),
        }
    }
}

impl std::error::Error for NumericError {}

/// 분모가 0이면 `NumericError`를 돌려주는 나눗셈.
pub fn div(num: Decimal, den: Decimal, what: &'static str) -> Result<Decimal, NumericError> {
    num.checked_div(den)
        .ok_or(NumericError::DivisionByZero(what))
}
