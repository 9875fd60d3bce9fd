//! 부록 B 표 기반 α 결정기 회귀 테스트.
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use water_supply_toolbox::alpha::{AlphaError, AlphaResolver, CodeTableAlpha};

#[test]
fn alpha_is_monotonic_over_np() {
    let resolver = CodeTableAlpha;
    let samples = [
        dec!(0), dec!(0.01), dec!(0.015), dec!(0.05), dec!(0.1), dec!(0.3), dec!(0.83),
        dec!(1.5), dec!(3.3), dec!(8), dec!(15), dec!(20), dec!(21), dec!(45), dec!(120),
        dec!(900), dec!(2000), dec!(2500),
    ];
    let mut prev = Decimal::MIN;
    for np in samples {
        let alpha = resolver.resolve(np).expect("NP >= 0이면 항상 값이 있어야 함");
        assert!(
            alpha >= prev,
            "α가 단조 증가하지 않음: NP={np}에서 {alpha} < {prev}"
        );
        prev = alpha;
    }
}

#[test]
fn alpha_clamps_below_table() {
    let resolver = CodeTableAlpha;
    assert_eq!(resolver.resolve(dec!(0)).unwrap(), dec!(0.202));
    assert_eq!(resolver.resolve(dec!(0.001)).unwrap(), dec!(0.202));
}

#[test]
fn alpha_clamps_above_table() {
    let resolver = CodeTableAlpha;
    assert_eq!(resolver.resolve(dec!(5000)).unwrap(), dec!(351.7));
}

#[test]
fn alpha_interpolates_between_grid_points() {
    let resolver = CodeTableAlpha;
    // 0.8(0.803)과 0.85(0.827)의 중간값
    assert_eq!(resolver.resolve(dec!(0.825)).unwrap(), dec!(0.815));
    // 분기 2: 20(5.95)과 25(7.04)의 중간값
    assert_eq!(resolver.resolve(dec!(22.5)).unwrap(), dec!(6.495));
}

#[test]
fn alpha_rejects_negative_np() {
    let resolver = CodeTableAlpha;
    match resolver.resolve(dec!(-0.1)) {
        Err(AlphaError::NegativeLoad(np)) => assert_eq!(np, dec!(-0.1)),
        other => panic!("음수 NP는 거부해야 함: {other:?}"),
    }
}

#[test]
fn alpha_matches_grid_points_exactly() {
    let resolver = CodeTableAlpha;
    assert_eq!(resolver.resolve(dec!(0.1)).unwrap(), dec!(0.343));
    assert_eq!(resolver.resolve(dec!(1.0)).unwrap(), dec!(0.897));
    assert_eq!(resolver.resolve(dec!(20)).unwrap(), dec!(5.95));
    assert_eq!(resolver.resolve(dec!(100)).unwrap(), dec!(21.9));
}
