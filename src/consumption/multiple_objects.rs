//! 복수 수요자 합산 설계유량 계산.
//!
//! 초당·최대 시간대 단계는 수요자별 NP 기여분을 먼저 합산한 뒤 채널별로
//! α를 한 번만 결정한다. 유량 공식의 기구 유량 q0는 기여분 가중 평균으로
//! 복원한다. 시간 평균·일 사용량·열부하 단계는 수요자별 독립 기여분을
//! 단일 수요자와 같은 식으로 구해 합산한다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::alpha::AlphaResolver;
use crate::quantity::{div, round_sig};

use super::report::{
    HeatConsumptionReportData, MultipleObjectsAvgHourReport, MultipleObjectsDataReport,
    MultipleObjectsDayReport, MultipleObjectsMaxHourReport, MultipleObjectsSecondsReport,
};
use super::single_object::working_shifts;
use super::{CalcError, ValidationError, WaterConsumerParams};

/// 복수 수요자의 전체 보고서를 만든다.
pub fn calculate_consumption_for_multiple_objects(
    consumers: &[WaterConsumerParams],
    resolver: &dyn AlphaResolver,
) -> Result<MultipleObjectsDataReport, CalcError> {
    if consumers.is_empty() {
        return Err(ValidationError::EmptyConsumers.into());
    }
    for consumer in consumers {
        consumer.validate()?;
        consumer.norms.validate()?;
    }
    let first = &consumers[0];
    if consumers
        .iter()
        .any(|c| c.temp_hot_c != first.temp_hot_c || c.temp_cold_c != first.temp_cold_c)
    {
        return Err(ValidationError::MixedTemperatures.into());
    }

    let seconds_report = calculate_multiple_objects_seconds_consumption(consumers, resolver)?;
    let hours_max_report =
        calculate_multiple_objects_hour_consumption(consumers, &seconds_report, resolver)?;
    let hours_avg_report = calculate_multiple_objects_avg_hour_consumption(consumers)?;
    let total_day_report = calculate_multiple_objects_day_consumption(consumers)?;
    let heat_report =
        calculate_multiple_objects_heat_consumption(consumers, &hours_avg_report, &hours_max_report);

    log::debug!(
        "복수 수요자 계산 완료: {}개 (q_tot={} L/s)",
        consumers.len(),
        seconds_report.q_total_lps
    );

    Ok(MultipleObjectsDataReport {
        seconds_report,
        hours_max_report,
        hours_avg_report,
        total_day_report,
        heat_report,
        consumers_params: consumers.to_vec(),
    })
}

/// 채널 하나의 합산 결과: α는 합계에서 한 번, q0는 가중 평균으로.
fn combined_channel(
    contributions: &[Decimal],
    weighted: Decimal,
    flow_factor: Decimal,
    resolver: &dyn AlphaResolver,
    what: &'static str,
) -> Result<(Decimal, Decimal, Decimal, Decimal), CalcError> {
    let sum: Decimal = contributions.iter().copied().sum();
    let sum = round_sig(sum);
    if sum.is_zero() {
        return Ok((sum, Decimal::ZERO, Decimal::ZERO, Decimal::ZERO));
    }
    let alpha = resolver.resolve(sum)?;
    let q0_eff = round_sig(div(weighted, sum, what)?);
    let q = round_sig(flow_factor * q0_eff * alpha);
    Ok((sum, round_sig(alpha), q0_eff, q))
}

/// 초당 유량 합산 단계.
pub fn calculate_multiple_objects_seconds_consumption(
    consumers: &[WaterConsumerParams],
    resolver: &dyn AlphaResolver,
) -> Result<MultipleObjectsSecondsReport, CalcError> {
    for consumer in consumers {
        consumer.validate()?;
    }
    let mut np_total = Vec::with_capacity(consumers.len());
    let mut np_hot = Vec::with_capacity(consumers.len());
    let mut np_cold = Vec::with_capacity(consumers.len());
    let mut weighted_total = Decimal::ZERO;
    let mut weighted_hot = Decimal::ZERO;
    let mut weighted_cold = Decimal::ZERO;

    for consumer in consumers {
        let norms = &consumer.norms;
        let measurers = Decimal::from(consumer.num_of_measurers);
        let cold_devices = consumer.num_of_devices - consumer.num_of_devices_hot;

        let total = round_sig(div(
            norms.max_hour_total_l * measurers,
            norms.q0_total_lps * Decimal::from(consumer.num_of_devices) * dec!(3600),
            "NP_total 분모",
        )?);
        let hot = if consumer.num_of_devices_hot == 0 {
            Decimal::ZERO
        } else {
            round_sig(div(
                norms.max_hour_hot_l * measurers,
                norms.q0_lps * Decimal::from(consumer.num_of_devices_hot) * dec!(3600),
                "NP_hot 분모",
            )?)
        };
        let cold = if cold_devices == 0 {
            Decimal::ZERO
        } else {
            round_sig(div(
                (norms.max_hour_total_l - norms.max_hour_hot_l) * measurers,
                norms.q0_lps * Decimal::from(cold_devices) * dec!(3600),
                "NP_cold 분모",
            )?)
        };

        weighted_total += total * norms.q0_total_lps;
        weighted_hot += hot * norms.q0_lps;
        weighted_cold += cold * norms.q0_lps;
        np_total.push(total);
        np_hot.push(hot);
        np_cold.push(cold);
    }

    let (np_total_sum, alpha_total, q0_total_lps, q_total_lps) = combined_channel(
        &np_total,
        weighted_total,
        dec!(5),
        resolver,
        "NP_total 합계",
    )?;
    let (np_hot_sum, alpha_hot, q0_hot_lps, q_hot_lps) =
        combined_channel(&np_hot, weighted_hot, dec!(5), resolver, "NP_hot 합계")?;
    let (np_cold_sum, alpha_cold, q0_cold_lps, q_cold_lps) =
        combined_channel(&np_cold, weighted_cold, dec!(5), resolver, "NP_cold 합계")?;

    Ok(MultipleObjectsSecondsReport {
        np_total,
        np_hot,
        np_cold,
        np_total_sum,
        np_hot_sum,
        np_cold_sum,
        alpha_total,
        alpha_hot,
        alpha_cold,
        q0_total_lps,
        q0_hot_lps,
        q0_cold_lps,
        q_total_lps,
        q_hot_lps,
        q_cold_lps,
    })
}

/// 최대 시간대 유량 합산 단계.
pub fn calculate_multiple_objects_hour_consumption(
    consumers: &[WaterConsumerParams],
    seconds: &MultipleObjectsSecondsReport,
    resolver: &dyn AlphaResolver,
) -> Result<MultipleObjectsMaxHourReport, CalcError> {
    let mut np_total = Vec::with_capacity(consumers.len());
    let mut np_hot = Vec::with_capacity(consumers.len());
    let mut np_cold = Vec::with_capacity(consumers.len());
    let mut weighted_total = Decimal::ZERO;
    let mut weighted_hot = Decimal::ZERO;
    let mut weighted_cold = Decimal::ZERO;

    for (ind, consumer) in consumers.iter().enumerate() {
        let norms = &consumer.norms;

        let total = round_sig(div(
            dec!(3600) * seconds.np_total[ind] * norms.q0_total_lps,
            norms.q0_total_lph,
            "NPhr_total 분모",
        )?);
        let hot = round_sig(div(
            dec!(3600) * seconds.np_hot[ind] * norms.q0_lps,
            norms.q0_lph,
            "NPhr_hot 분모",
        )?);
        let cold = round_sig(div(
            dec!(3600) * seconds.np_cold[ind] * norms.q0_lps,
            norms.q0_lph,
            "NPhr_cold 분모",
        )?);

        weighted_total += total * norms.q0_total_lph;
        weighted_hot += hot * norms.q0_lph;
        weighted_cold += cold * norms.q0_lph;
        np_total.push(total);
        np_hot.push(hot);
        np_cold.push(cold);
    }

    let (np_total_sum, alpha_total, q0_total_lph, q_total_m3ph) = combined_channel(
        &np_total,
        weighted_total,
        dec!(0.005),
        resolver,
        "NPhr_total 합계",
    )?;
    let (np_hot_sum, alpha_hot, q0_hot_lph, q_hot_m3ph) = combined_channel(
        &np_hot,
        weighted_hot,
        dec!(0.005),
        resolver,
        "NPhr_hot 합계",
    )?;
    let (np_cold_sum, alpha_cold, q0_cold_lph, q_cold_m3ph) = combined_channel(
        &np_cold,
        weighted_cold,
        dec!(0.005),
        resolver,
        "NPhr_cold 합계",
    )?;

    Ok(MultipleObjectsMaxHourReport {
        np_total,
        np_hot,
        np_cold,
        np_total_sum,
        np_hot_sum,
        np_cold_sum,
        alpha_total,
        alpha_hot,
        alpha_cold,
        q0_total_lph,
        q0_hot_lph,
        q0_cold_lph,
        q_total_m3ph,
        q_hot_m3ph,
        q_cold_m3ph,
    })
}

/// 시간 평균 유량 합산 단계.
pub fn calculate_multiple_objects_avg_hour_consumption(
    consumers: &[WaterConsumerParams],
) -> Result<MultipleObjectsAvgHourReport, CalcError> {
    let mut q_total = Vec::with_capacity(consumers.len());
    let mut q_hot = Vec::with_capacity(consumers.len());
    let mut q_cold = Vec::with_capacity(consumers.len());

    for consumer in consumers {
        let norms = &consumer.norms;
        let measurers = Decimal::from(consumer.num_of_measurers);
        let shifts = working_shifts(consumer)?;
        let denom = dec!(1000) * norms.t_hours * shifts;

        q_total.push(round_sig(div(
            norms.avg_day_total_l * measurers,
            denom,
            "평균 유량 분모",
        )?));
        q_hot.push(round_sig(div(
            norms.avg_day_hot_l * measurers,
            denom,
            "평균 유량 분모",
        )?));
        q_cold.push(round_sig(div(
            (norms.avg_day_total_l - norms.avg_day_hot_l) * measurers,
            denom,
            "평균 유량 분모",
        )?));
    }

    let q_total_sum_m3ph = round_sig(q_total.iter().copied().sum());
    let q_hot_sum_m3ph = round_sig(q_hot.iter().copied().sum());
    let q_cold_sum_m3ph = round_sig(q_cold.iter().copied().sum());

    Ok(MultipleObjectsAvgHourReport {
        q_total,
        q_hot,
        q_cold,
        q_total_sum_m3ph,
        q_hot_sum_m3ph,
        q_cold_sum_m3ph,
    })
}

/// 일 사용량 합산 단계.
pub fn calculate_multiple_objects_day_consumption(
    consumers: &[WaterConsumerParams],
) -> Result<MultipleObjectsDayReport, CalcError> {
    let mut q_total = Vec::with_capacity(consumers.len());
    let mut q_hot = Vec::with_capacity(consumers.len());
    let mut q_cold = Vec::with_capacity(consumers.len());

    for consumer in consumers {
        let norms = &consumer.norms;
        let measurers = Decimal::from(consumer.num_of_measurers);
        let shifts = working_shifts(consumer)?;

        q_total.push(round_sig(
            norms.avg_day_total_l * measurers * shifts / dec!(1000),
        ));
        q_hot.push(round_sig(
            norms.avg_day_hot_l * measurers * shifts / dec!(1000),
        ));
        q_cold.push(round_sig(
            (norms.avg_day_total_l - norms.avg_day_hot_l) * measurers * shifts / dec!(1000),
        ));
    }

    let q_total_sum_m3pd = round_sig(q_total.iter().copied().sum());
    let q_hot_sum_m3pd = round_sig(q_hot.iter().copied().sum());
    let q_cold_sum_m3pd = round_sig(q_cold.iter().copied().sum());

    Ok(MultipleObjectsDayReport {
        q_total,
        q_hot,
        q_cold,
        q_total_sum_m3pd,
        q_hot_sum_m3pd,
        q_cold_sum_m3pd,
    })
}

/// 급탕 열부하 합산 단계.
///
/// 변형 내 온도쌍이 같음을 검증한 뒤이므로 첫 수요자의 온도차가 전체를
/// 대표한다.
pub fn calculate_multiple_objects_heat_consumption(
    consumers: &[WaterConsumerParams],
    hours_avg: &MultipleObjectsAvgHourReport,
    hours_max: &MultipleObjectsMaxHourReport,
) -> HeatConsumptionReportData {
    let temp_diff = Decimal::from(consumers[0].temp_hot_c - consumers[0].temp_cold_c);

    let q_avg_hour_kw = dec!(1.16) * hours_avg.q_hot_sum_m3ph * temp_diff
        + hours_max.q_hot_m3ph * dec!(0.3);
    let q_max_hour_kw =
        dec!(1.16) * hours_max.q_hot_m3ph * temp_diff + hours_max.q_hot_m3ph * dec!(0.3);

    HeatConsumptionReportData {
        q_avg_hour_kw: round_sig(q_avg_hour_kw),
        q_max_hour_kw: round_sig(q_max_hour_kw),
    }
}
