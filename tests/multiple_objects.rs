//! 복수 수요자 합산 계산 테스트.
use std::cell::Cell;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use water_supply_toolbox::alpha::{AlphaError, AlphaResolver, CodeTableAlpha};
use water_supply_toolbox::catalog::Catalog;
use water_supply_toolbox::consumption::multiple_objects::calculate_multiple_objects_seconds_consumption;
use water_supply_toolbox::consumption::single_object::calculate_max_per_sec_consumption;
use water_supply_toolbox::consumption::{
    calculate_consumption_for_multiple_objects, CalcError, ValidationError, WaterConsumerParams,
};
use water_supply_toolbox::quantity::round_sig;

fn variant_pair() -> Vec<WaterConsumerParams> {
    let catalog = Catalog::builtin();
    let residential = catalog
        .consumer_by_name("Жилые дома с централизованным горячим водоснабжением, с ваннами")
        .unwrap()
        .clone();
    let hotel = catalog
        .consumer_by_name("Гостиницы с ваннами во всех номерах")
        .unwrap()
        .clone();
    vec![
        WaterConsumerParams {
            norms: residential,
            num_of_devices: 2,
            num_of_devices_hot: 1,
            num_of_measurers: 1,
            temp_hot_c: 60,
            temp_cold_c: 15,
            work_hours: 24,
            sewerage_device: None,
        },
        WaterConsumerParams {
            norms: hotel,
            num_of_devices: 2,
            num_of_devices_hot: 1,
            num_of_measurers: 1,
            temp_hot_c: 60,
            temp_cold_c: 15,
            work_hours: 24,
            sewerage_device: None,
        },
    ]
}

/// 호출 횟수를 세는 α 결정기.
struct CountingResolver {
    calls: Cell<u32>,
}

impl AlphaResolver for CountingResolver {
    fn resolve(&self, _np: Decimal) -> Result<Decimal, AlphaError> {
        self.calls.set(self.calls.get() + 1);
        Ok(dec!(1))
    }
}

#[test]
fn np_sum_equals_sum_of_individual_contributions() {
    let consumers = variant_pair();
    let report =
        calculate_consumption_for_multiple_objects(&consumers, &CodeTableAlpha).unwrap();
    let seconds = &report.seconds_report;

    // 각 수요자를 단독 계산했을 때의 초당 확률과 기여분이 같아야 한다
    for (ind, consumer) in consumers.iter().enumerate() {
        let single = calculate_max_per_sec_consumption(consumer, &CodeTableAlpha).unwrap();
        assert_eq!(seconds.np_total[ind], single.p_total);
    }

    let listed: Decimal = seconds.np_total.iter().copied().sum();
    assert_eq!(seconds.np_total_sum, round_sig(listed));
}

#[test]
fn alpha_is_resolved_once_per_channel_from_the_sum() {
    let consumers = variant_pair();
    let resolver = CountingResolver {
        calls: Cell::new(0),
    };
    calculate_multiple_objects_seconds_consumption(&consumers, &resolver).unwrap();
    // 수요자 수와 무관하게 총/온수/냉수 세 번
    assert_eq!(resolver.calls.get(), 3);
}

#[test]
fn effective_q0_is_load_weighted_average() {
    let consumers = variant_pair();
    let report =
        calculate_consumption_for_multiple_objects(&consumers, &CodeTableAlpha).unwrap();
    let seconds = &report.seconds_report;

    let weighted: Decimal = consumers
        .iter()
        .zip(seconds.np_total.iter())
        .map(|(c, np)| *np * c.norms.q0_total_lps)
        .sum();
    assert_eq!(
        seconds.q0_total_lps,
        round_sig(weighted / seconds.np_total_sum)
    );
    assert_eq!(
        seconds.q_total_lps,
        round_sig(dec!(5) * seconds.q0_total_lps * seconds.alpha_total)
    );
}

#[test]
fn day_and_avg_sums_add_per_channel() {
    let consumers = variant_pair();
    let report =
        calculate_consumption_for_multiple_objects(&consumers, &CodeTableAlpha).unwrap();

    let day = &report.total_day_report;
    // 주거 250/105, 호텔 300/180, 측정 단위 1씩
    assert_eq!(day.q_total_sum_m3pd, dec!(0.55));
    assert_eq!(day.q_hot_sum_m3pd, dec!(0.285));
    assert_eq!(day.q_cold_sum_m3pd, dec!(0.265));
    assert_eq!(
        day.q_hot_sum_m3pd + day.q_cold_sum_m3pd,
        day.q_total_sum_m3pd
    );

    let avg = &report.hours_avg_report;
    let diff =
        (avg.q_hot_sum_m3ph + avg.q_cold_sum_m3ph - avg.q_total_sum_m3ph).abs();
    assert!(diff <= dec!(0.0000001), "평균 유량 가산 오차 초과: {diff}");
}

#[test]
fn heat_uses_aggregated_hot_flows() {
    let consumers = variant_pair();
    let report =
        calculate_consumption_for_multiple_objects(&consumers, &CodeTableAlpha).unwrap();
    let q_hr_hot = report.hours_max_report.q_hot_m3ph;
    let temp_diff = Decimal::from(consumers[0].temp_hot_c - consumers[0].temp_cold_c);

    assert_eq!(
        report.heat_report.q_max_hour_kw,
        round_sig(dec!(1.16) * q_hr_hot * temp_diff + q_hr_hot * dec!(0.3))
    );
    assert_eq!(
        report.heat_report.q_avg_hour_kw,
        round_sig(
            dec!(1.16) * report.hours_avg_report.q_hot_sum_m3ph * temp_diff
                + q_hr_hot * dec!(0.3)
        )
    );
}

#[test]
fn empty_variant_is_rejected() {
    match calculate_consumption_for_multiple_objects(&[], &CodeTableAlpha) {
        Err(CalcError::Validation(ValidationError::EmptyConsumers)) => {}
        other => panic!("빈 목록은 검증 오류여야 함: {other:?}"),
    }
}

#[test]
fn mixed_temperatures_are_rejected() {
    let mut consumers = variant_pair();
    consumers[1].temp_hot_c = 55;
    match calculate_consumption_for_multiple_objects(&consumers, &CodeTableAlpha) {
        Err(CalcError::Validation(ValidationError::MixedTemperatures)) => {}
        other => panic!("온도쌍 불일치는 검증 오류여야 함: {other:?}"),
    }
}

#[test]
fn multi_report_is_deterministic() {
    let consumers = variant_pair();
    let a = calculate_consumption_for_multiple_objects(&consumers, &CodeTableAlpha).unwrap();
    let b = calculate_consumption_for_multiple_objects(&consumers, &CodeTableAlpha).unwrap();
    assert_eq!(a, b);
}
