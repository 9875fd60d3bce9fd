//! α 수기 보정 반영 재계산.
//!
//! 기준표 보간으로 얻은 α는 근사값이라 실무자가 손으로 고치는 일이 잦다.
//! 보정된 α를 받아 그 α에 의존하는 유량·열부하·집계만 다시 계산한 새
//! 보고서를 돌려준다. 확률 P, 시간 평균·일 사용량 보고서는 α에 의존하지
//! 않으므로 그대로 둔다. 보고서 자체는 바꾸지 않는 순수 변환이다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::quantity::round_sig;

use super::multiple_objects::calculate_multiple_objects_heat_consumption;
use super::report::{MultipleObjectsDataReport, OneObjectDataReport};
use super::single_object::{calculate_heat_consumption, calculate_total_object_consumption};
use super::{CalcError, ValidationError};

/// 실무자가 바꿔치기할 수 있는 α 값 모음. `None`은 보정 없음.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlphaOverrides {
    pub seconds_alpha_total: Option<Decimal>,
    pub seconds_alpha_hot: Option<Decimal>,
    pub seconds_alpha_cold: Option<Decimal>,
    pub hour_alpha_total: Option<Decimal>,
    pub hour_alpha_hot: Option<Decimal>,
    pub hour_alpha_cold: Option<Decimal>,
}

impl AlphaOverrides {
    fn validate(&self) -> Result<(), ValidationError> {
        let all = [
            self.seconds_alpha_total,
            self.seconds_alpha_hot,
            self.seconds_alpha_cold,
            self.hour_alpha_total,
            self.hour_alpha_hot,
            self.hour_alpha_cold,
        ];
        for value in all.into_iter().flatten() {
            if value.is_sign_negative() {
                return Err(ValidationError::NegativeAlphaOverride(value));
            }
        }
        Ok(())
    }
}

/// 비활성(기구 수 0) 채널은 보정 대상이 아니다.
fn apply(current: Decimal, replacement: Option<Decimal>, active: bool) -> Decimal {
    match replacement {
        Some(v) if active => round_sig(v),
        _ => current,
    }
}

/// 단일 수요자 보고서에 α 보정을 반영한다.
pub fn recompute_from_overridden_alphas(
    report: &OneObjectDataReport,
    overrides: &AlphaOverrides,
) -> Result<OneObjectDataReport, CalcError> {
    overrides.validate()?;

    let params = &report.consumer_params;
    let norms = &params.norms;
    let hot_active = params.num_of_devices_hot > 0;
    let cold_active = params.num_of_devices > params.num_of_devices_hot;

    let mut seconds = report.seconds_report.clone();
    seconds.alpha_total = apply(seconds.alpha_total, overrides.seconds_alpha_total, true);
    seconds.alpha_hot = apply(seconds.alpha_hot, overrides.seconds_alpha_hot, hot_active);
    seconds.alpha_cold = apply(seconds.alpha_cold, overrides.seconds_alpha_cold, cold_active);
    seconds.q_total_lps = round_sig(dec!(5) * norms.q0_total_lps * seconds.alpha_total);
    if hot_active {
        seconds.q_hot_lps = round_sig(dec!(5) * norms.q0_lps * seconds.alpha_hot);
    }
    if cold_active {
        seconds.q_cold_lps = round_sig(dec!(5) * norms.q0_lps * seconds.alpha_cold);
    }

    let mut hours_max = report.hours_max_report.clone();
    hours_max.alpha_total = apply(hours_max.alpha_total, overrides.hour_alpha_total, true);
    hours_max.alpha_hot = apply(hours_max.alpha_hot, overrides.hour_alpha_hot, hot_active);
    hours_max.alpha_cold = apply(hours_max.alpha_cold, overrides.hour_alpha_cold, cold_active);
    hours_max.q_total_m3ph = round_sig(dec!(0.005) * norms.q0_total_lph * hours_max.alpha_total);
    if hot_active {
        hours_max.q_hot_m3ph = round_sig(dec!(0.005) * norms.q0_lph * hours_max.alpha_hot);
    }
    if cold_active {
        hours_max.q_cold_m3ph = round_sig(dec!(0.005) * norms.q0_lph * hours_max.alpha_cold);
    }

    let heat = calculate_heat_consumption(params, &report.hours_avg_report, &hours_max);
    let total_object = calculate_total_object_consumption(
        params,
        &report.grass_watering_report,
        &report.total_day_report,
        &hours_max,
        &seconds,
    );

    Ok(OneObjectDataReport {
        consumer_params: params.clone(),
        seconds_report: seconds,
        hours_max_report: hours_max,
        hours_avg_report: report.hours_avg_report.clone(),
        heat_report: heat,
        grass_watering_report: report.grass_watering_report.clone(),
        total_day_report: report.total_day_report.clone(),
        total_object_report: total_object,
    })
}

/// 복수 수요자 보고서에 α 보정을 반영한다.
pub fn recompute_multiple_from_overridden_alphas(
    report: &MultipleObjectsDataReport,
    overrides: &AlphaOverrides,
) -> Result<MultipleObjectsDataReport, CalcError> {
    overrides.validate()?;

    let mut seconds = report.seconds_report.clone();
    let total_active = !seconds.np_total_sum.is_zero();
    let hot_active = !seconds.np_hot_sum.is_zero();
    let cold_active = !seconds.np_cold_sum.is_zero();
    seconds.alpha_total = apply(seconds.alpha_total, overrides.seconds_alpha_total, total_active);
    seconds.alpha_hot = apply(seconds.alpha_hot, overrides.seconds_alpha_hot, hot_active);
    seconds.alpha_cold = apply(seconds.alpha_cold, overrides.seconds_alpha_cold, cold_active);
    if total_active {
        seconds.q_total_lps = round_sig(dec!(5) * seconds.q0_total_lps * seconds.alpha_total);
    }
    if hot_active {
        seconds.q_hot_lps = round_sig(dec!(5) * seconds.q0_hot_lps * seconds.alpha_hot);
    }
    if cold_active {
        seconds.q_cold_lps = round_sig(dec!(5) * seconds.q0_cold_lps * seconds.alpha_cold);
    }

    let mut hours_max = report.hours_max_report.clone();
    let hr_total_active = !hours_max.np_total_sum.is_zero();
    let hr_hot_active = !hours_max.np_hot_sum.is_zero();
    let hr_cold_active = !hours_max.np_cold_sum.is_zero();
    hours_max.alpha_total = apply(hours_max.alpha_total, overrides.hour_alpha_total, hr_total_active);
    hours_max.alpha_hot = apply(hours_max.alpha_hot, overrides.hour_alpha_hot, hr_hot_active);
    hours_max.alpha_cold = apply(hours_max.alpha_cold, overrides.hour_alpha_cold, hr_cold_active);
    if hr_total_active {
        hours_max.q_total_m3ph =
            round_sig(dec!(0.005) * hours_max.q0_total_lph * hours_max.alpha_total);
    }
    if hr_hot_active {
        hours_max.q_hot_m3ph = round_sig(dec!(0.005) * hours_max.q0_hot_lph * hours_max.alpha_hot);
    }
    if hr_cold_active {
        hours_max.q_cold_m3ph =
            round_sig(dec!(0.005) * hours_max.q0_cold_lph * hours_max.alpha_cold);
    }

    let heat = calculate_multiple_objects_heat_consumption(
        &report.consumers_params,
        &report.hours_avg_report,
        &hours_max,
    );

    Ok(MultipleObjectsDataReport {
        seconds_report: seconds,
        hours_max_report: hours_max,
        hours_avg_report: report.hours_avg_report.clone(),
        total_day_report: report.total_day_report.clone(),
        heat_report: heat,
        consumers_params: report.consumers_params.clone(),
    })
}
