//! 계산 결과 보고서 자료형.
//!
//! 모든 보고서는 입력에서 결정적으로 파생되는 불변 스냅샷이다. 수치는
//! 생성 시점에 유효숫자 8자리로 반올림해 담는다. 보고서 생성기·UI 층은
//! 이 자료형을 그대로 직렬화해 쓴다.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::WaterConsumerParams;

/// 초당 설계유량 단계 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondConsumptionReportData {
    pub alpha_total: Decimal,
    pub alpha_hot: Decimal,
    pub alpha_cold: Decimal,
    /// 사용 확률 P
    pub p_total: Decimal,
    pub p_hot: Decimal,
    pub p_cold: Decimal,
    /// 설계유량 [L/s]
    pub q_total_lps: Decimal,
    pub q_hot_lps: Decimal,
    pub q_cold_lps: Decimal,
}

/// 최대 사용 시간대 유량 단계 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxHourConsumptionReportData {
    pub alpha_total: Decimal,
    pub alpha_hot: Decimal,
    pub alpha_cold: Decimal,
    pub p_total: Decimal,
    pub p_hot: Decimal,
    pub p_cold: Decimal,
    /// 설계유량 [m³/h]
    pub q_total_m3ph: Decimal,
    pub q_hot_m3ph: Decimal,
    pub q_cold_m3ph: Decimal,
}

/// 시간 평균 유량 단계 결과 [m³/h].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvgHourConsumptionReportData {
    pub q_total_m3ph: Decimal,
    pub q_hot_m3ph: Decimal,
    pub q_cold_m3ph: Decimal,
}

/// 일 사용량 단계 결과 [m³/일].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalDayConsumptionReportData {
    pub q_total_m3pd: Decimal,
    pub q_hot_m3pd: Decimal,
    pub q_cold_m3pd: Decimal,
}

/// 급탕 열부하 결과 [kW].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatConsumptionReportData {
    pub q_avg_hour_kw: Decimal,
    pub q_max_hour_kw: Decimal,
}

/// 옥외 살수 수요 [m³/일].
///
/// 살수 원단위 연동 전까지 항상 0을 담는 확장 지점이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrassWateringReportData {
    pub quc_m3pd: Decimal,
}

/// 계통 하나의 설계유량 3요소.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultWaterConsumption {
    pub m3_per_day: Decimal,
    pub m3_per_hour: Decimal,
    pub lps: Decimal,
}

/// 대상 전체의 계통별 설계유량 집계.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalObjectConsumption {
    /// 생활용수(음용) 급수 - 총
    pub supply_general: ResultWaterConsumption,
    /// 생활용수 급수 - 온수
    pub supply_hot: ResultWaterConsumption,
    /// 생활용수 급수 - 냉수
    pub supply_cold: ResultWaterConsumption,
    /// 생활오수 배수 - 총
    pub sewerage_general: ResultWaterConsumption,
}

/// 단일 수요자 계산 호출 하나의 전체 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneObjectDataReport {
    pub consumer_params: WaterConsumerParams,
    pub seconds_report: SecondConsumptionReportData,
    pub hours_max_report: MaxHourConsumptionReportData,
    pub hours_avg_report: AvgHourConsumptionReportData,
    pub heat_report: HeatConsumptionReportData,
    pub grass_watering_report: GrassWateringReportData,
    pub total_day_report: TotalDayConsumptionReportData,
    pub total_object_report: TotalObjectConsumption,
}

/// 복수 수요자 초당 유량 집계 결과.
///
/// 수요자별 NP 기여분을 합산한 뒤 채널별로 α를 한 번만 결정하고, 유량
/// 공식에는 부하 가중 평균 기구 유량 q0를 쓴다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleObjectsSecondsReport {
    /// 수요자별 NP 기여분
    pub np_total: Vec<Decimal>,
    pub np_hot: Vec<Decimal>,
    pub np_cold: Vec<Decimal>,
    pub np_total_sum: Decimal,
    pub np_hot_sum: Decimal,
    pub np_cold_sum: Decimal,
    pub alpha_total: Decimal,
    pub alpha_hot: Decimal,
    pub alpha_cold: Decimal,
    /// 부하 가중 평균 기구 유량 [L/s]
    pub q0_total_lps: Decimal,
    pub q0_hot_lps: Decimal,
    pub q0_cold_lps: Decimal,
    /// 설계유량 [L/s]
    pub q_total_lps: Decimal,
    pub q_hot_lps: Decimal,
    pub q_cold_lps: Decimal,
}

/// 복수 수요자 최대 시간대 유량 집계 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleObjectsMaxHourReport {
    pub np_total: Vec<Decimal>,
    pub np_hot: Vec<Decimal>,
    pub np_cold: Vec<Decimal>,
    pub np_total_sum: Decimal,
    pub np_hot_sum: Decimal,
    pub np_cold_sum: Decimal,
    pub alpha_total: Decimal,
    pub alpha_hot: Decimal,
    pub alpha_cold: Decimal,
    /// 부하 가중 평균 기구 유량 [L/h]
    pub q0_total_lph: Decimal,
    pub q0_hot_lph: Decimal,
    pub q0_cold_lph: Decimal,
    /// 설계유량 [m³/h]
    pub q_total_m3ph: Decimal,
    pub q_hot_m3ph: Decimal,
    pub q_cold_m3ph: Decimal,
}

/// 복수 수요자 시간 평균 유량 집계 결과 [m³/h].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleObjectsAvgHourReport {
    pub q_total: Vec<Decimal>,
    pub q_hot: Vec<Decimal>,
    pub q_cold: Vec<Decimal>,
    pub q_total_sum_m3ph: Decimal,
    pub q_hot_sum_m3ph: Decimal,
    pub q_cold_sum_m3ph: Decimal,
}

/// 복수 수요자 일 사용량 집계 결과 [m³/일].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleObjectsDayReport {
    pub q_total: Vec<Decimal>,
    pub q_hot: Vec<Decimal>,
    pub q_cold: Vec<Decimal>,
    pub q_total_sum_m3pd: Decimal,
    pub q_hot_sum_m3pd: Decimal,
    pub q_cold_sum_m3pd: Decimal,
}

/// 복수 수요자 계산 호출 하나의 전체 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleObjectsDataReport {
    pub seconds_report: MultipleObjectsSecondsReport,
    pub hours_max_report: MultipleObjectsMaxHourReport,
    pub hours_avg_report: MultipleObjectsAvgHourReport,
    pub total_day_report: MultipleObjectsDayReport,
    pub heat_report: HeatConsumptionReportData,
    pub consumers_params: Vec<WaterConsumerParams>,
}
