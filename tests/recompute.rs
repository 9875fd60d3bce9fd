//! α 수기 보정 재계산 테스트.
use rust_decimal_macros::dec;
use water_supply_toolbox::alpha::CodeTableAlpha;
use water_supply_toolbox::catalog::Catalog;
use water_supply_toolbox::consumption::{
    calculate_consumption_for_multiple_objects, calculate_consumption_for_one_object,
    recompute_from_overridden_alphas, recompute_multiple_from_overridden_alphas, AlphaOverrides,
    CalcError, ValidationError, WaterConsumerParams,
};
use water_supply_toolbox::quantity::round_sig;

fn hospital_params() -> WaterConsumerParams {
    let norms = Catalog::builtin()
        .consumer_by_name("Больницы с общими ваннами и душевыми")
        .unwrap()
        .clone();
    WaterConsumerParams {
        norms,
        num_of_devices: 30,
        num_of_devices_hot: 12,
        num_of_measurers: 200,
        temp_hot_c: 60,
        temp_cold_c: 15,
        work_hours: 24,
        sewerage_device: None,
    }
}

#[test]
fn overriding_hour_alpha_changes_only_hour_flow_and_rollup() {
    let base = calculate_consumption_for_one_object(&hospital_params(), &CodeTableAlpha).unwrap();
    let overrides = AlphaOverrides {
        hour_alpha_total: Some(dec!(2.5)),
        ..AlphaOverrides::default()
    };
    let updated = recompute_from_overridden_alphas(&base, &overrides).unwrap();

    assert_eq!(
        updated.hours_max_report.q_total_m3ph,
        round_sig(dec!(0.005) * base.consumer_params.norms.q0_total_lph * dec!(2.5))
    );
    assert_ne!(
        updated.hours_max_report.q_total_m3ph,
        base.hours_max_report.q_total_m3ph
    );
    // α에 의존하지 않는 보고서는 그대로
    assert_eq!(updated.hours_avg_report, base.hours_avg_report);
    assert_eq!(updated.total_day_report, base.total_day_report);
    assert_eq!(updated.seconds_report, base.seconds_report);
    // 집계의 시간 유량 행은 따라 움직임
    assert_eq!(
        updated.total_object_report.supply_general.m3_per_hour,
        updated.hours_max_report.q_total_m3ph
    );
}

#[test]
fn overriding_seconds_alpha_changes_seconds_flow_and_rollup() {
    let base = calculate_consumption_for_one_object(&hospital_params(), &CodeTableAlpha).unwrap();
    let overrides = AlphaOverrides {
        seconds_alpha_total: Some(dec!(1.2)),
        ..AlphaOverrides::default()
    };
    let updated = recompute_from_overridden_alphas(&base, &overrides).unwrap();

    assert_eq!(
        updated.seconds_report.q_total_lps,
        round_sig(dec!(5) * base.consumer_params.norms.q0_total_lps * dec!(1.2))
    );
    // 확률은 α 보정의 영향을 받지 않음
    assert_eq!(updated.seconds_report.p_total, base.seconds_report.p_total);
    assert_eq!(updated.hours_max_report, base.hours_max_report);
    assert_eq!(updated.hours_avg_report, base.hours_avg_report);
    assert_eq!(updated.total_day_report, base.total_day_report);
    assert_eq!(
        updated.total_object_report.supply_general.lps,
        updated.seconds_report.q_total_lps
    );
}

#[test]
fn overriding_hour_hot_alpha_moves_heat_report() {
    let base = calculate_consumption_for_one_object(&hospital_params(), &CodeTableAlpha).unwrap();
    let overrides = AlphaOverrides {
        hour_alpha_hot: Some(dec!(3)),
        ..AlphaOverrides::default()
    };
    let updated = recompute_from_overridden_alphas(&base, &overrides).unwrap();

    assert_ne!(updated.heat_report, base.heat_report);
    let q_hr_hot = updated.hours_max_report.q_hot_m3ph;
    let temp_diff = dec!(45);
    assert_eq!(
        updated.heat_report.q_max_hour_kw,
        round_sig(dec!(1.16) * q_hr_hot * temp_diff + q_hr_hot * dec!(0.3))
    );
}

#[test]
fn recompute_is_a_pure_transform() {
    let base = calculate_consumption_for_one_object(&hospital_params(), &CodeTableAlpha).unwrap();
    let snapshot = base.clone();
    let overrides = AlphaOverrides {
        seconds_alpha_total: Some(dec!(1.5)),
        hour_alpha_total: Some(dec!(1.5)),
        ..AlphaOverrides::default()
    };
    let _ = recompute_from_overridden_alphas(&base, &overrides).unwrap();
    assert_eq!(base, snapshot);
}

#[test]
fn negative_override_is_rejected() {
    let base = calculate_consumption_for_one_object(&hospital_params(), &CodeTableAlpha).unwrap();
    let overrides = AlphaOverrides {
        seconds_alpha_hot: Some(dec!(-0.5)),
        ..AlphaOverrides::default()
    };
    match recompute_from_overridden_alphas(&base, &overrides) {
        Err(CalcError::Validation(ValidationError::NegativeAlphaOverride(_))) => {}
        other => panic!("음수 α 보정은 검증 오류여야 함: {other:?}"),
    }
}

#[test]
fn multi_report_recompute_keeps_untouched_stages() {
    let catalog = Catalog::builtin();
    let consumers = vec![
        WaterConsumerParams {
            norms: catalog
                .consumer_by_name("Общежития с душами при всех жилых комнатах")
                .unwrap()
                .clone(),
            num_of_devices: 8,
            num_of_devices_hot: 4,
            num_of_measurers: 40,
            temp_hot_c: 60,
            temp_cold_c: 15,
            work_hours: 24,
            sewerage_device: None,
        },
        WaterConsumerParams {
            norms: catalog
                .consumer_by_name("Административные здания")
                .unwrap()
                .clone(),
            num_of_devices: 6,
            num_of_devices_hot: 2,
            num_of_measurers: 120,
            temp_hot_c: 60,
            temp_cold_c: 15,
            work_hours: 8,
            sewerage_device: None,
        },
    ];
    let base = calculate_consumption_for_multiple_objects(&consumers, &CodeTableAlpha).unwrap();
    let overrides = AlphaOverrides {
        seconds_alpha_total: Some(dec!(2)),
        ..AlphaOverrides::default()
    };
    let updated = recompute_multiple_from_overridden_alphas(&base, &overrides).unwrap();

    assert_eq!(
        updated.seconds_report.q_total_lps,
        round_sig(dec!(5) * base.seconds_report.q0_total_lps * dec!(2))
    );
    assert_eq!(updated.seconds_report.np_total, base.seconds_report.np_total);
    assert_eq!(updated.hours_max_report, base.hours_max_report);
    assert_eq!(updated.hours_avg_report, base.hours_avg_report);
    assert_eq!(updated.total_day_report, base.total_day_report);
    // 초당 α만 보정했으므로 열부하도 그대로
    assert_eq!(updated.heat_report, base.heat_report);
}
