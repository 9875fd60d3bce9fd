//! SP 30.13330.2020 기준표의 정적 참조 데이터.
//!
//! 표 A.2(수요자별 급수 원단위), 표 A.1(위생기구별 유량), 살수 원단위를
//! 담는다. 카탈로그는 계산 중 읽기 전용이며, 전역 상태 없이 호출자가
//! 명시적으로 넘긴다.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 수요자별 급수 원단위의 산정 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsumptionMeasurer {
    /// 거주자 1인
    OneInhabitant,
    /// 침상 1개
    OneBed,
    /// 근무조당 1인
    OnePersonPerShift,
    /// 정원 1석
    OnePlace,
    /// 건조 세탁물 1 kg
    OneKgOfDryClothes,
    /// 학생·교사 1인
    OneStudentAndTeacher,
    /// 근무조당 기기 1대
    OneDevicePerShift,
    /// 식기 1벌
    OneDish,
    /// 바닥면적 20 m²당 근로자 1인
    OneEmployeePer20SqM,
    /// 수영장 용적 대비 백분율
    PercentOfPoolCapacity,
    /// 근무조당 샤워기 1대
    OneShowerPerShift,
    /// 1 m²
    OneSquareMeter,
}

impl ConsumptionMeasurer {
    /// 기준표에 인쇄된 산정 단위 표기.
    pub fn label(&self) -> &'static str {
        match self {
            ConsumptionMeasurer::OneInhabitant => "жит.",
            ConsumptionMeasurer::OneBed => "кров.",
            ConsumptionMeasurer::OnePersonPerShift => "человек в смене",
            ConsumptionMeasurer::OnePlace => "мест.",
            ConsumptionMeasurer::OneKgOfDryClothes => "кг. сухой одежды",
            ConsumptionMeasurer::OneStudentAndTeacher => "студент и учитель",
            ConsumptionMeasurer::OneDevicePerShift => "устройство в смене",
            ConsumptionMeasurer::OneDish => "посуда",
            ConsumptionMeasurer::OneEmployeePer20SqM => "рабочий на 20 м.кв.",
            ConsumptionMeasurer::PercentOfPoolCapacity => "процент объема бассейна",
            ConsumptionMeasurer::OneShowerPerShift => "душ на смену",
            ConsumptionMeasurer::OneSquareMeter => "м. кв.",
        }
    }
}

/// 표 A.2: 수요자 종류별 급수 원단위 한 행.
///
/// `id`는 설계 변형에 배치된 인스턴스 구분자이고, 카탈로그 키는 `name`이다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterConsumerNorms {
    #[serde(default = "generate_id")]
    pub id: String,
    pub name: String,
    pub measurer: ConsumptionMeasurer,
    /// 평균일 총(온수 포함) 사용량 [L]
    pub avg_day_total_l: Decimal,
    /// 평균일 온수 사용량 [L]
    pub avg_day_hot_l: Decimal,
    /// 최대 사용 시간대 총 사용량 [L]
    pub max_hour_total_l: Decimal,
    /// 최대 사용 시간대 온수 사용량 [L]
    pub max_hour_hot_l: Decimal,
    /// 기구 총(냉+온) 유량 q0tot [L/s]
    pub q0_total_lps: Decimal,
    /// 기구 총(냉+온) 유량 q0tot,hr [L/h]
    pub q0_total_lph: Decimal,
    /// 기구 냉수 또는 온수 유량 q0 [L/s]
    pub q0_lps: Decimal,
    /// 기구 냉수 또는 온수 유량 q0,hr [L/h]
    pub q0_lph: Decimal,
    /// 기준표 가동시간 T [h]
    pub t_hours: Decimal,
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

impl WaterConsumerNorms {
    /// 설계 변형에 새로 배치할 때 인스턴스 id를 다시 발급한다.
    pub fn with_fresh_id(mut self) -> Self {
        self.id = generate_id();
        self
    }

    /// 행 불변식을 점검한다.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let non_negative = [
            self.avg_day_total_l,
            self.avg_day_hot_l,
            self.max_hour_total_l,
            self.max_hour_hot_l,
        ];
        if non_negative.iter().any(|v| v.is_sign_negative()) {
            return Err(CatalogError::InvalidNorms {
                name: self.name.clone(),
                reason: "음수 원단위",
            });
        }
        if self.avg_day_hot_l > self.avg_day_total_l || self.max_hour_hot_l > self.max_hour_total_l
        {
            return Err(CatalogError::InvalidNorms {
                name: self.name.clone(),
                reason: "온수 원단위가 총 원단위를 초과",
            });
        }
        let rates = [
            self.q0_total_lps,
            self.q0_total_lph,
            self.q0_lps,
            self.q0_lph,
        ];
        if rates.iter().any(|v| *v <= Decimal::ZERO) {
            return Err(CatalogError::InvalidNorms {
                name: self.name.clone(),
                reason: "기구 유량은 0보다 커야 함",
            });
        }
        if self.t_hours <= Decimal::ZERO {
            return Err(CatalogError::InvalidNorms {
                name: self.name.clone(),
                reason: "T는 0보다 커야 함",
            });
        }
        Ok(())
    }
}

/// 표 A.1: 위생기구별 급수·배수 유량 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceWaterConsumptionNorms {
    pub id: u32,
    pub name: String,
    /// 초당 유량 [L/s] - 총
    pub flow_lps_total: Decimal,
    /// 초당 유량 [L/s] - 냉수
    pub flow_lps_cold: Decimal,
    /// 초당 유량 [L/s] - 온수
    pub flow_lps_hot: Decimal,
    /// 시간당 유량 [L/h] - 총
    pub flow_lph_total: Decimal,
    /// 시간당 유량 [L/h] - 냉수
    pub flow_lph_cold: Decimal,
    /// 시간당 유량 [L/h] - 온수
    pub flow_lph_hot: Decimal,
    /// 기구 배수 유량 [L/s]
    pub wastewater_lps: Decimal,
    /// 최소 호칭지름 [mm] - 급수 연결
    pub min_diameter_inlet_mm: Decimal,
    /// 최소 호칭지름 [mm] - 배수 연결
    pub min_diameter_outlet_mm: Decimal,
}

/// 살수 용도별 원단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WateringKind {
    Grass,
    FootballField,
    OtherSportsGrounds,
    IceRink,
}

impl WateringKind {
    /// 1회 살수 원단위 [L/m²].
    pub fn norm_l_per_m2(&self) -> Decimal {
        match self {
            WateringKind::Grass => dec!(3),
            WateringKind::FootballField => dec!(0.5),
            WateringKind::OtherSportsGrounds => dec!(1.5),
            WateringKind::IceRink => dec!(0.5),
        }
    }

    /// 면적에 대한 1회 살수 수요 [m³].
    pub fn demand_m3(&self, area_m2: Decimal) -> Decimal {
        self.norm_l_per_m2() * area_m2 / dec!(1000)
    }
}

/// 카탈로그 조회·검증 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// 이름에 해당하는 수요자 행이 없음
    UnknownConsumer(String),
    /// 이름에 해당하는 기구 행이 없음
    UnknownDevice(String),
    /// 행이 불변식을 위반함
    InvalidNorms { name: String, reason: &'static str },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::UnknownConsumer(name) => write!(f, "수요자 항목 없음: {name}"),
            CatalogError::UnknownDevice(name) => write!(f, "기구 항목 없음: {name}"),
            CatalogError::InvalidNorms { name, reason } => {
                write!(f, "원단위 항목 불량({name}): {reason}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// 읽기 전용 참조 카탈로그.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub consumers: Vec<WaterConsumerNorms>,
    pub devices: Vec<DeviceWaterConsumptionNorms>,
}

impl Catalog {
    /// 내장 기준표로 카탈로그를 만든다.
    pub fn builtin() -> Self {
        Catalog {
            consumers: builtin_consumers(),
            devices: builtin_devices(),
        }
    }

    /// 이름으로 수요자 행을 찾는다.
    pub fn consumer_by_name(&self, name: &str) -> Result<&WaterConsumerNorms, CatalogError> {
        self.consumers
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::UnknownConsumer(name.to_string()))
    }

    /// 이름으로 기구 행을 찾는다.
    pub fn device_by_name(&self, name: &str) -> Result<&DeviceWaterConsumptionNorms, CatalogError> {
        self.devices
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| CatalogError::UnknownDevice(name.to_string()))
    }

    /// 모든 행의 불변식을 점검한다.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for consumer in &self.consumers {
            consumer.validate()?;
        }
        Ok(())
    }
}

fn consumer_row(
    name: &str,
    measurer: ConsumptionMeasurer,
    avg_day_total_l: Decimal,
    avg_day_hot_l: Decimal,
    max_hour_total_l: Decimal,
    max_hour_hot_l: Decimal,
    q0_total_lps: Decimal,
    q0_total_lph: Decimal,
    q0_lps: Decimal,
    q0_lph: Decimal,
    t_hours: Decimal,
) -> WaterConsumerNorms {
    WaterConsumerNorms {
        id: generate_id(),
        name: name.to_string(),
        measurer,
        avg_day_total_l,
        avg_day_hot_l,
        max_hour_total_l,
        max_hour_hot_l,
        q0_total_lps,
        q0_total_lph,
        q0_lps,
        q0_lph,
        t_hours,
    }
}

fn builtin_consumers() -> Vec<WaterConsumerNorms> {
    vec![
        consumer_row(
            "Жилые дома с централизованным горячим водоснабжением, с ваннами",
            ConsumptionMeasurer::OneInhabitant,
            dec!(250),
            dec!(105),
            dec!(15.6),
            dec!(10),
            dec!(0.25),
            dec!(300),
            dec!(0.18),
            dec!(200),
            dec!(24),
        ),
        consumer_row(
            "Общежития с душами при всех жилых комнатах",
            ConsumptionMeasurer::OneInhabitant,
            dec!(110),
            dec!(60),
            dec!(12.5),
            dec!(8),
            dec!(0.2),
            dec!(300),
            dec!(0.14),
            dec!(200),
            dec!(24),
        ),
        consumer_row(
            "Гостиницы с ваннами во всех номерах",
            ConsumptionMeasurer::OneBed,
            dec!(300),
            dec!(180),
            dec!(16),
            dec!(10),
            dec!(0.3),
            dec!(300),
            dec!(0.2),
            dec!(200),
            dec!(24),
        ),
        consumer_row(
            "Больницы с общими ваннами и душевыми",
            ConsumptionMeasurer::OneBed,
            dec!(115),
            dec!(75),
            dec!(8.4),
            dec!(5.4),
            dec!(0.2),
            dec!(300),
            dec!(0.14),
            dec!(200),
            dec!(24),
        ),
        consumer_row(
            "Детские ясли-сады с дневным пребыванием детей",
            ConsumptionMeasurer::OnePlace,
            dec!(21.5),
            dec!(11.5),
            dec!(9.5),
            dec!(4.5),
            dec!(0.14),
            dec!(100),
            dec!(0.1),
            dec!(60),
            dec!(10),
        ),
        consumer_row(
            "Административные здания",
            ConsumptionMeasurer::OnePersonPerShift,
            dec!(12),
            dec!(5),
            dec!(4),
            dec!(2),
            dec!(0.14),
            dec!(80),
            dec!(0.1),
            dec!(60),
            dec!(8),
        ),
        consumer_row(
            "23 Бани: душевая кабина",
            ConsumptionMeasurer::OneInhabitant,
            dec!(360),
            dec!(200),
            dec!(360),
            dec!(200),
            dec!(0.2),
            dec!(360),
            dec!(0.14),
            dec!(240),
            dec!(3),
        ),
        consumer_row(
            "Душевые в бытовых помещениях промышленных предприятий",
            ConsumptionMeasurer::OneShowerPerShift,
            dec!(500),
            dec!(270),
            dec!(500),
            dec!(270),
            dec!(0.2),
            dec!(500),
            dec!(0.14),
            dec!(230),
            dec!(1),
        ),
        consumer_row(
            "Столовые, работающие на полуфабрикатах",
            ConsumptionMeasurer::OneDish,
            dec!(12),
            dec!(4),
            dec!(12),
            dec!(4),
            dec!(0.3),
            dec!(300),
            dec!(0.2),
            dec!(200),
            dec!(8),
        ),
        consumer_row(
            "Прачечные механизированные",
            ConsumptionMeasurer::OneKgOfDryClothes,
            dec!(75),
            dec!(25),
            dec!(75),
            dec!(25),
            dec!(0.3),
            dec!(300),
            dec!(0.2),
            dec!(200),
            dec!(8),
        ),
    ]
}

fn device_row(
    id: u32,
    name: &str,
    flow_lps_total: Decimal,
    flow_lps_cold: Decimal,
    flow_lps_hot: Decimal,
    flow_lph_total: Decimal,
    flow_lph_cold: Decimal,
    flow_lph_hot: Decimal,
    wastewater_lps: Decimal,
    min_diameter_inlet_mm: Decimal,
    min_diameter_outlet_mm: Decimal,
) -> DeviceWaterConsumptionNorms {
    DeviceWaterConsumptionNorms {
        id,
        name: name.to_string(),
        flow_lps_total,
        flow_lps_cold,
        flow_lps_hot,
        flow_lph_total,
        flow_lph_cold,
        flow_lph_hot,
        wastewater_lps,
        min_diameter_inlet_mm,
        min_diameter_outlet_mm,
    }
}

fn builtin_devices() -> Vec<DeviceWaterConsumptionNorms> {
    vec![
        device_row(
            1,
            "Умывальник со смесителем",
            dec!(0.12),
            dec!(0.09),
            dec!(0.09),
            dec!(60),
            dec!(40),
            dec!(40),
            dec!(0.15),
            dec!(10),
            dec!(32),
        ),
        device_row(
            2,
            "Мойка кухонная со смесителем",
            dec!(0.12),
            dec!(0.09),
            dec!(0.09),
            dec!(80),
            dec!(60),
            dec!(60),
            dec!(0.6),
            dec!(10),
            dec!(40),
        ),
        device_row(
            3,
            "Ванна со смесителем",
            dec!(0.25),
            dec!(0.18),
            dec!(0.18),
            dec!(300),
            dec!(200),
            dec!(200),
            dec!(0.8),
            dec!(10),
            dec!(40),
        ),
        device_row(
            4,
            "Душевая кабина со смесителем",
            dec!(0.12),
            dec!(0.09),
            dec!(0.09),
            dec!(115),
            dec!(80),
            dec!(80),
            dec!(0.2),
            dec!(10),
            dec!(40),
        ),
        device_row(
            5,
            "Унитаз со смывным бачком",
            dec!(0.1),
            dec!(0.1),
            dec!(0),
            dec!(83),
            dec!(83),
            dec!(0),
            dec!(1.6),
            dec!(10),
            dec!(85),
        ),
        device_row(
            6,
            "Унитаз со смывным краном",
            dec!(1.4),
            dec!(1.4),
            dec!(0),
            dec!(81),
            dec!(81),
            dec!(0),
            dec!(1.4),
            dec!(25),
            dec!(85),
        ),
        device_row(
            7,
            "Писсуар",
            dec!(0.035),
            dec!(0.035),
            dec!(0),
            dec!(36),
            dec!(36),
            dec!(0),
            dec!(0.1),
            dec!(10),
            dec!(40),
        ),
        device_row(
            8,
            "Поливочный кран",
            dec!(0.3),
            dec!(0.3),
            dec!(0.2),
            dec!(1080),
            dec!(800),
            dec!(800),
            dec!(0.3),
            dec!(15),
            dec!(32),
        ),
    ]
}

// NOTE:
// - Norm values are adapted from SP 30.13330.2020 tables A.1/A.2
//   (SNiP 2.04.01-85) for reference.
// - Always verify against the current edition of the governing code before
//   design use.
