//! 단일 수요자 5단계 설계유량 파이프라인.
//!
//! 초당 유량, 최대 시간대 유량, 시간 평균 유량, 급탕 열부하, 일 사용량
//! 순서로 진행하며 각 단계는 이전 단계 결과와 원단위 행만으로 계산한다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::alpha::AlphaResolver;
use crate::catalog::DeviceWaterConsumptionNorms;
use crate::quantity::{div, round_sig};

use super::report::{
    AvgHourConsumptionReportData, GrassWateringReportData, HeatConsumptionReportData,
    MaxHourConsumptionReportData, OneObjectDataReport, ResultWaterConsumption,
    SecondConsumptionReportData, TotalDayConsumptionReportData, TotalObjectConsumption,
};
use super::{CalcError, WaterConsumerParams};

/// 물 1 m³를 1 °C 올리는 데 드는 열량 [kWh/(m³·°C)].
const WATER_HEAT_KWH_PER_M3_K: Decimal = dec!(1.16);
/// 급탕 배관·순환 손실 계수.
const HEAT_LOSS_FACTOR: Decimal = dec!(0.3);
/// 이 값 이하의 총 유량에는 기구 배수 유량을 더해 오수 설계유량을 구한다 [L/s].
const SEWERAGE_DIRECT_LIMIT_LPS: Decimal = dec!(8);

/// 단일 수요자의 전체 보고서를 만든다.
pub fn calculate_consumption_for_one_object(
    params: &WaterConsumerParams,
    resolver: &dyn AlphaResolver,
) -> Result<OneObjectDataReport, CalcError> {
    params.validate()?;
    params.norms.validate()?;

    let seconds_report = calculate_max_per_sec_consumption(params, resolver)?;
    let hours_max_report = calculate_max_hour_consumption(params, &seconds_report, resolver)?;
    let hours_avg_report = calculate_avg_hour_consumption(params)?;
    let heat_report = calculate_heat_consumption(params, &hours_avg_report, &hours_max_report);
    let total_day_report = calculate_total_day_consumption(params)?;
    let grass_watering_report = calculate_grass_watering(params);
    let total_object_report = calculate_total_object_consumption(
        params,
        &grass_watering_report,
        &total_day_report,
        &hours_max_report,
        &seconds_report,
    );

    log::debug!(
        "단일 수요자 계산 완료: {} (q_tot={} L/s)",
        params.norms.name,
        seconds_report.q_total_lps
    );

    Ok(OneObjectDataReport {
        consumer_params: params.clone(),
        seconds_report,
        hours_max_report,
        hours_avg_report,
        heat_report,
        grass_watering_report,
        total_day_report,
        total_object_report,
    })
}

/// 채널 하나의 초당 유량 계산.
///
/// 기구 수가 0인 채널은 물을 끌어 쓸 수 없으므로 P·α·q 모두 0으로 두고
/// 나눗셈 자체를 만들지 않는다.
fn second_channel(
    norm_l: Decimal,
    measurers: Decimal,
    q0_lps: Decimal,
    device_count: u32,
    resolver: &dyn AlphaResolver,
    what: &'static str,
) -> Result<(Decimal, Decimal, Decimal), CalcError> {
    if device_count == 0 {
        log::debug!("기구 수 0인 채널({what})은 0으로 처리함");
        return Ok((Decimal::ZERO, Decimal::ZERO, Decimal::ZERO));
    }
    let p = div(
        norm_l * measurers,
        q0_lps * Decimal::from(device_count) * dec!(3600),
        what,
    )?;
    let alpha = resolver.resolve(p)?;
    let q = dec!(5) * q0_lps * alpha;
    Ok((round_sig(p), round_sig(alpha), round_sig(q)))
}

/// 1단계: 초당 설계유량.
pub fn calculate_max_per_sec_consumption(
    params: &WaterConsumerParams,
    resolver: &dyn AlphaResolver,
) -> Result<SecondConsumptionReportData, CalcError> {
    params.validate()?;
    let norms = &params.norms;
    let measurers = Decimal::from(params.num_of_measurers);
    let cold_devices = params.num_of_devices - params.num_of_devices_hot;

    let (p_total, alpha_total, q_total_lps) = second_channel(
        norms.max_hour_total_l,
        measurers,
        norms.q0_total_lps,
        params.num_of_devices,
        resolver,
        "P_total 분모",
    )?;
    let (p_hot, alpha_hot, q_hot_lps) = second_channel(
        norms.max_hour_hot_l,
        measurers,
        norms.q0_lps,
        params.num_of_devices_hot,
        resolver,
        "P_hot 분모",
    )?;
    let (p_cold, alpha_cold, q_cold_lps) = second_channel(
        norms.max_hour_total_l - norms.max_hour_hot_l,
        measurers,
        norms.q0_lps,
        cold_devices,
        resolver,
        "P_cold 분모",
    )?;

    Ok(SecondConsumptionReportData {
        alpha_total,
        alpha_hot,
        alpha_cold,
        p_total,
        p_hot,
        p_cold,
        q_total_lps,
        q_hot_lps,
        q_cold_lps,
    })
}

/// 채널 하나의 최대 시간대 유량 계산. 비활성 채널은 0을 유지한다.
fn hour_channel(
    p_sec: Decimal,
    q0_lps: Decimal,
    q0_lph: Decimal,
    active: bool,
    resolver: &dyn AlphaResolver,
    what: &'static str,
) -> Result<(Decimal, Decimal, Decimal), CalcError> {
    if !active {
        return Ok((Decimal::ZERO, Decimal::ZERO, Decimal::ZERO));
    }
    let p_hr = div(dec!(3600) * p_sec * q0_lps, q0_lph, what)?;
    let alpha = resolver.resolve(p_hr)?;
    let q_m3ph = dec!(0.005) * q0_lph * alpha;
    Ok((round_sig(p_hr), round_sig(alpha), round_sig(q_m3ph)))
}

/// 2단계: 최대 사용 시간대 유량.
///
/// 채널별 확률은 각 채널 자신의 1단계 값에서 끌어온다.
pub fn calculate_max_hour_consumption(
    params: &WaterConsumerParams,
    seconds: &SecondConsumptionReportData,
    resolver: &dyn AlphaResolver,
) -> Result<MaxHourConsumptionReportData, CalcError> {
    let norms = &params.norms;
    let hot_active = params.num_of_devices_hot > 0;
    let cold_active = params.num_of_devices > params.num_of_devices_hot;

    let (p_total, alpha_total, q_total_m3ph) = hour_channel(
        seconds.p_total,
        norms.q0_total_lps,
        norms.q0_total_lph,
        true,
        resolver,
        "P_hr_total 분모",
    )?;
    let (p_hot, alpha_hot, q_hot_m3ph) = hour_channel(
        seconds.p_hot,
        norms.q0_lps,
        norms.q0_lph,
        hot_active,
        resolver,
        "P_hr_hot 분모",
    )?;
    let (p_cold, alpha_cold, q_cold_m3ph) = hour_channel(
        seconds.p_cold,
        norms.q0_lps,
        norms.q0_lph,
        cold_active,
        resolver,
        "P_hr_cold 분모",
    )?;

    Ok(MaxHourConsumptionReportData {
        alpha_total,
        alpha_hot,
        alpha_cold,
        p_total,
        p_hot,
        p_cold,
        q_total_m3ph,
        q_hot_m3ph,
        q_cold_m3ph,
    })
}

/// 기준표 T 대비 실제 가동시간으로 산출하는 근무조 수.
pub(crate) fn working_shifts(params: &WaterConsumerParams) -> Result<Decimal, CalcError> {
    if params.norms.t_hours == dec!(24) {
        Ok(Decimal::ONE)
    } else {
        Ok(div(
            Decimal::from(params.work_hours),
            params.norms.t_hours,
            "가동시간 T",
        )?)
    }
}

/// 3단계: 시간 평균 유량.
pub fn calculate_avg_hour_consumption(
    params: &WaterConsumerParams,
) -> Result<AvgHourConsumptionReportData, CalcError> {
    let norms = &params.norms;
    let measurers = Decimal::from(params.num_of_measurers);
    let shifts = working_shifts(params)?;
    let denom = dec!(1000) * norms.t_hours * shifts;

    let q_total_m3ph = div(norms.avg_day_total_l * measurers, denom, "평균 유량 분모")?;
    let q_hot_m3ph = div(norms.avg_day_hot_l * measurers, denom, "평균 유량 분모")?;
    let q_cold_m3ph = div(
        (norms.avg_day_total_l - norms.avg_day_hot_l) * measurers,
        denom,
        "평균 유량 분모",
    )?;

    Ok(AvgHourConsumptionReportData {
        q_total_m3ph: round_sig(q_total_m3ph),
        q_hot_m3ph: round_sig(q_hot_m3ph),
        q_cold_m3ph: round_sig(q_cold_m3ph),
    })
}

/// 4단계: 급탕 열부하.
///
/// 손실 항은 평균·최대 두 식 모두 최대 시간대 온수 유량을 쓴다.
pub fn calculate_heat_consumption(
    params: &WaterConsumerParams,
    hours_avg: &AvgHourConsumptionReportData,
    hours_max: &MaxHourConsumptionReportData,
) -> HeatConsumptionReportData {
    let temp_diff = Decimal::from(params.temp_hot_c - params.temp_cold_c);

    let q_avg_hour_kw = WATER_HEAT_KWH_PER_M3_K * hours_avg.q_hot_m3ph * temp_diff
        + hours_max.q_hot_m3ph * HEAT_LOSS_FACTOR;
    let q_max_hour_kw = WATER_HEAT_KWH_PER_M3_K * hours_max.q_hot_m3ph * temp_diff
        + hours_max.q_hot_m3ph * HEAT_LOSS_FACTOR;

    HeatConsumptionReportData {
        q_avg_hour_kw: round_sig(q_avg_hour_kw),
        q_max_hour_kw: round_sig(q_max_hour_kw),
    }
}

/// 5단계: 일 사용량.
pub fn calculate_total_day_consumption(
    params: &WaterConsumerParams,
) -> Result<TotalDayConsumptionReportData, CalcError> {
    let norms = &params.norms;
    let measurers = Decimal::from(params.num_of_measurers);
    let shifts = working_shifts(params)?;

    let q_total_m3pd = norms.avg_day_total_l * measurers * shifts / dec!(1000);
    let q_hot_m3pd = norms.avg_day_hot_l * measurers * shifts / dec!(1000);
    let q_cold_m3pd =
        (norms.avg_day_total_l - norms.avg_day_hot_l) * measurers * shifts / dec!(1000);

    Ok(TotalDayConsumptionReportData {
        q_total_m3pd: round_sig(q_total_m3pd),
        q_hot_m3pd: round_sig(q_hot_m3pd),
        q_cold_m3pd: round_sig(q_cold_m3pd),
    })
}

/// 옥외 살수 수요.
///
/// 살수 원단위 표 연동 전까지는 항상 0이다 ([`crate::catalog::WateringKind`]
/// 참고).
pub fn calculate_grass_watering(_params: &WaterConsumerParams) -> GrassWateringReportData {
    GrassWateringReportData {
        quc_m3pd: Decimal::ZERO,
    }
}

/// 오수 초당 설계유량.
///
/// 총 유량이 8 L/s 이하이면 대표 기구의 배수 유량을 더한다.
pub(crate) fn sewerage_flow_lps(
    q_total_lps: Decimal,
    device: Option<&DeviceWaterConsumptionNorms>,
) -> Decimal {
    match device {
        Some(d) if q_total_lps <= SEWERAGE_DIRECT_LIMIT_LPS => {
            round_sig(q_total_lps + d.wastewater_lps)
        }
        _ => q_total_lps,
    }
}

/// 계통별 설계유량 집계.
pub fn calculate_total_object_consumption(
    params: &WaterConsumerParams,
    grass: &GrassWateringReportData,
    day: &TotalDayConsumptionReportData,
    hours_max: &MaxHourConsumptionReportData,
    seconds: &SecondConsumptionReportData,
) -> TotalObjectConsumption {
    TotalObjectConsumption {
        supply_general: ResultWaterConsumption {
            m3_per_day: round_sig(day.q_total_m3pd + grass.quc_m3pd),
            m3_per_hour: hours_max.q_total_m3ph,
            lps: seconds.q_total_lps,
        },
        supply_hot: ResultWaterConsumption {
            m3_per_day: round_sig(day.q_hot_m3pd + grass.quc_m3pd),
            m3_per_hour: hours_max.q_hot_m3ph,
            lps: seconds.q_hot_lps,
        },
        supply_cold: ResultWaterConsumption {
            m3_per_day: day.q_cold_m3pd,
            m3_per_hour: hours_max.q_cold_m3ph,
            lps: seconds.q_cold_lps,
        },
        sewerage_general: ResultWaterConsumption {
            m3_per_day: round_sig(day.q_total_m3pd - grass.quc_m3pd),
            m3_per_hour: hours_max.q_total_m3ph,
            lps: sewerage_flow_lps(seconds.q_total_lps, params.sewerage_device.as_ref()),
        },
    }
}
