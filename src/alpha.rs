//! 무차원 계수 α 결정 모듈.
//!
//! 기구 수 × 사용 확률(NP)을 설계유량 계수 α로 바꾸는 단계는 교체 가능한
//! 전략으로 둔다. 기본 구현은 SP 30.13330.2020 부록 B의 2분기 표를 단조
//! 증가 구간선형 보간으로 옮긴 것이다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::quantity::round_sig;

/// NP를 α로 바꾸는 전략.
///
/// NP ≥ 0이면 항상 값을 돌려주고, NP < 0은 선행조건 위반으로 거부한다.
pub trait AlphaResolver {
    fn resolve(&self, np: Decimal) -> Result<Decimal, AlphaError>;
}

/// α 결정 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphaError {
    /// NP가 음수
    NegativeLoad(Decimal),
}

impl std::fmt::Display for AlphaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlphaError::NegativeLoad(np) => write!(f, "NP가 음수임: {np}"),
        }
    }
}

impl std::error::Error for AlphaError {}

/// 표의 한 지점.
#[derive(Debug, Clone, Copy)]
struct AlphaPoint {
    np: Decimal,
    alpha: Decimal,
}

const fn ap(np: Decimal, alpha: Decimal) -> AlphaPoint {
    AlphaPoint { np, alpha }
}

/// 분기 1: P ≤ 0.1(기구 수 무관) 또는 P > 0.1이면서 기구 수 ≤ 200.
/// 두 조건 모두 NP ≤ 20 영역에 해당한다.
const TABLE_B1: &[AlphaPoint] = &[
    ap(dec!(0.015), dec!(0.202)),
    ap(dec!(0.02), dec!(0.215)),
    ap(dec!(0.03), dec!(0.237)),
    ap(dec!(0.04), dec!(0.256)),
    ap(dec!(0.05), dec!(0.273)),
    ap(dec!(0.06), dec!(0.289)),
    ap(dec!(0.07), dec!(0.304)),
    ap(dec!(0.08), dec!(0.318)),
    ap(dec!(0.09), dec!(0.331)),
    ap(dec!(0.1), dec!(0.343)),
    ap(dec!(0.125), dec!(0.373)),
    ap(dec!(0.15), dec!(0.399)),
    ap(dec!(0.175), dec!(0.422)),
    ap(dec!(0.2), dec!(0.444)),
    ap(dec!(0.25), dec!(0.485)),
    ap(dec!(0.3), dec!(0.521)),
    ap(dec!(0.35), dec!(0.555)),
    ap(dec!(0.4), dec!(0.586)),
    ap(dec!(0.45), dec!(0.617)),
    ap(dec!(0.5), dec!(0.645)),
    ap(dec!(0.55), dec!(0.673)),
    ap(dec!(0.6), dec!(0.7)),
    ap(dec!(0.65), dec!(0.727)),
    ap(dec!(0.7), dec!(0.752)),
    ap(dec!(0.75), dec!(0.778)),
    ap(dec!(0.8), dec!(0.803)),
    ap(dec!(0.85), dec!(0.827)),
    ap(dec!(0.9), dec!(0.851)),
    ap(dec!(0.95), dec!(0.874)),
    ap(dec!(1.0), dec!(0.897)),
    ap(dec!(1.1), dec!(0.941)),
    ap(dec!(1.2), dec!(0.984)),
    ap(dec!(1.3), dec!(1.026)),
    ap(dec!(1.4), dec!(1.066)),
    ap(dec!(1.5), dec!(1.105)),
    ap(dec!(1.6), dec!(1.144)),
    ap(dec!(1.7), dec!(1.181)),
    ap(dec!(1.8), dec!(1.218)),
    ap(dec!(1.9), dec!(1.254)),
    ap(dec!(2.0), dec!(1.29)),
    ap(dec!(2.2), dec!(1.36)),
    ap(dec!(2.4), dec!(1.43)),
    ap(dec!(2.6), dec!(1.497)),
    ap(dec!(2.8), dec!(1.563)),
    ap(dec!(3.0), dec!(1.63)),
    ap(dec!(3.5), dec!(1.79)),
    ap(dec!(4.0), dec!(1.95)),
    ap(dec!(4.5), dec!(2.105)),
    ap(dec!(5.0), dec!(2.26)),
    ap(dec!(5.5), dec!(2.41)),
    ap(dec!(6.0), dec!(2.555)),
    ap(dec!(6.5), dec!(2.7)),
    ap(dec!(7.0), dec!(2.845)),
    ap(dec!(7.5), dec!(2.99)),
    ap(dec!(8.0), dec!(3.13)),
    ap(dec!(9.0), dec!(3.39)),
    ap(dec!(10.0), dec!(3.64)),
    ap(dec!(11.0), dec!(3.89)),
    ap(dec!(12.0), dec!(4.14)),
    ap(dec!(13.0), dec!(4.38)),
    ap(dec!(14.0), dec!(4.61)),
    ap(dec!(15.0), dec!(4.84)),
    ap(dec!(16.0), dec!(5.07)),
    ap(dec!(17.0), dec!(5.29)),
    ap(dec!(18.0), dec!(5.51)),
    ap(dec!(19.0), dec!(5.73)),
    ap(dec!(20.0), dec!(5.95)),
];

/// 분기 2: P > 0.1이면서 기구 수 > 200, 즉 NP > 20 영역.
const TABLE_B2: &[AlphaPoint] = &[
    ap(dec!(20.0), dec!(5.95)),
    ap(dec!(25.0), dec!(7.04)),
    ap(dec!(30.0), dec!(8.11)),
    ap(dec!(40.0), dec!(10.2)),
    ap(dec!(50.0), dec!(12.2)),
    ap(dec!(60.0), dec!(14.2)),
    ap(dec!(80.0), dec!(18.1)),
    ap(dec!(100.0), dec!(21.9)),
    ap(dec!(150.0), dec!(31.2)),
    ap(dec!(200.0), dec!(40.4)),
    ap(dec!(300.0), dec!(58.4)),
    ap(dec!(400.0), dec!(76.2)),
    ap(dec!(500.0), dec!(93.8)),
    ap(dec!(600.0), dec!(111.3)),
    ap(dec!(800.0), dec!(146.1)),
    ap(dec!(1000.0), dec!(180.6)),
    ap(dec!(1250.0), dec!(223.6)),
    ap(dec!(1500.0), dec!(266.4)),
    ap(dec!(1750.0), dec!(309.1)),
    ap(dec!(2000.0), dec!(351.7)),
];

const B1_LIMIT: Decimal = dec!(20.0);

/// 부록 B 표 기반 기본 α 결정기.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeTableAlpha;

impl AlphaResolver for CodeTableAlpha {
    fn resolve(&self, np: Decimal) -> Result<Decimal, AlphaError> {
        if np.is_sign_negative() && !np.is_zero() {
            return Err(AlphaError::NegativeLoad(np));
        }
        let table = if np <= B1_LIMIT { TABLE_B1 } else { TABLE_B2 };
        Ok(round_sig(interpolate(table, np)))
    }
}

/// 표 범위 밖 값은 가장자리 값으로 클램프한다.
fn interpolate(points: &[AlphaPoint], np: Decimal) -> Decimal {
    let first = points[0];
    let last = points[points.len() - 1];
    if np <= first.np {
        if np < first.np {
            log::debug!("NP={np}이(가) 표 하한 {} 미만이라 α를 클램프함", first.np);
        }
        return first.alpha;
    }
    if np >= last.np {
        if np > last.np {
            log::debug!("NP={np}이(가) 표 상한 {} 초과라 α를 클램프함", last.np);
        }
        return last.alpha;
    }
    for win in points.windows(2) {
        let a = win[0];
        let b = win[1];
        if np >= a.np && np <= b.np {
            let frac = (np - a.np)
                .checked_div(b.np - a.np)
                .unwrap_or(Decimal::ZERO);
            return a.alpha + frac * (b.alpha - a.alpha);
        }
    }
    last.alpha
}

// NOTE:
// - Alpha values are reference points adapted from SP 30.13330.2020 Appendix B
//   (SNiP 2.04.01-85 Appendix 4) tables; intermediate NP values are obtained by
//   linear interpolation.
// - Always verify against the current edition of the governing code before
//   design use. Regression-fitted approximations are intentionally not shipped.
