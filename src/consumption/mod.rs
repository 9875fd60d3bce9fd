//! 급수·급탕·배수 설계유량 계산 모듈 모음.
//!
//! 단일 수요자 5단계 파이프라인, 복수 수요자 합산 계산, α 수기 보정
//! 재계산으로 구성한다. 모든 연산은 불변 입력에서 불변 보고서를 만드는
//! 순수 함수이고, 호출 단위로만 실패한다(부분 보고서는 돌려주지 않는다).

pub mod multiple_objects;
pub mod recompute;
pub mod report;
pub mod single_object;

pub use multiple_objects::calculate_consumption_for_multiple_objects;
pub use recompute::{
    recompute_from_overridden_alphas, recompute_multiple_from_overridden_alphas, AlphaOverrides,
};
pub use report::*;
pub use single_object::{calculate_consumption_for_one_object, calculate_grass_watering};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogError, DeviceWaterConsumptionNorms, WaterConsumerNorms};
use crate::quantity::NumericError;

/// 설계 변형에 배치된 수요자 하나의 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterConsumerParams {
    /// 카탈로그에서 복사해 온 원단위 행
    pub norms: WaterConsumerNorms,
    /// 위생기구 총수
    pub num_of_devices: u32,
    /// 온수 공급 기구 수 (총수 이하)
    pub num_of_devices_hot: u32,
    /// 산정 단위 수 (거주자·침상 등)
    pub num_of_measurers: u32,
    /// 온수 온도 [°C]
    pub temp_hot_c: i32,
    /// 냉수 온도 [°C]
    pub temp_cold_c: i32,
    /// 실제 일일 가동시간 [h] (기준표 T와 다를 수 있음)
    pub work_hours: u32,
    /// 오수 설계유량 보정에 쓸 대표 기구 (표 A.1 행)
    #[serde(default)]
    pub sewerage_device: Option<DeviceWaterConsumptionNorms>,
}

impl WaterConsumerParams {
    /// 어느 단계도 실행하기 전에 입력을 검증한다.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.num_of_measurers == 0 {
            return Err(ValidationError::NoMeasurers);
        }
        if self.num_of_devices == 0 {
            return Err(ValidationError::InvalidDeviceConfiguration {
                devices: self.num_of_devices,
                devices_hot: self.num_of_devices_hot,
            });
        }
        if self.num_of_devices_hot > self.num_of_devices {
            return Err(ValidationError::InvalidDeviceConfiguration {
                devices: self.num_of_devices,
                devices_hot: self.num_of_devices_hot,
            });
        }
        if self.temp_hot_c <= self.temp_cold_c {
            return Err(ValidationError::TemperatureOrder {
                hot_c: self.temp_hot_c,
                cold_c: self.temp_cold_c,
            });
        }
        if self.work_hours == 0 {
            return Err(ValidationError::NoWorkHours);
        }
        Ok(())
    }
}

/// 호출자가 고칠 수 있는 입력 오류.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 산정 단위 수가 0이라 계산할 것이 없음
    NoMeasurers,
    /// 수요자 목록이 비어 있음
    EmptyConsumers,
    /// 기구 구성이 잘못됨 (총수 0 또는 온수 기구 수 초과)
    InvalidDeviceConfiguration { devices: u32, devices_hot: u32 },
    /// 온수 온도가 냉수 온도 이하
    TemperatureOrder { hot_c: i32, cold_c: i32 },
    /// 가동시간이 0
    NoWorkHours,
    /// 복수 수요자의 온도쌍이 서로 다름
    MixedTemperatures,
    /// 수기 보정 α가 음수
    NegativeAlphaOverride(Decimal),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoMeasurers => write!(f, "산정 단위 수가 0이라 계산할 것이 없음"),
            ValidationError::EmptyConsumers => write!(f, "수요자 목록이 비어 있음"),
            ValidationError::InvalidDeviceConfiguration {
                devices,
                devices_hot,
            } => write!(f, "기구 구성 불량: 총 {devices}대, 온수 {devices_hot}대"),
            ValidationError::TemperatureOrder { hot_c, cold_c } => {
                write!(f, "온수 온도({hot_c}°C)가 냉수 온도({cold_c}°C) 이하")
            }
            ValidationError::NoWorkHours => write!(f, "가동시간이 0"),
            ValidationError::MixedTemperatures => {
                write!(f, "변형 내 수요자들의 온수/냉수 온도가 일치해야 함")
            }
            ValidationError::NegativeAlphaOverride(alpha) => {
                write!(f, "수기 보정 α가 음수임: {alpha}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// 계산 호출 하나에서 나올 수 있는 오류.
#[derive(Debug)]
pub enum CalcError {
    /// 입력 검증 실패
    Validation(ValidationError),
    /// 참조 데이터 문제
    Catalog(CatalogError),
    /// 검증을 지나친 수치 오류 (해당 호출 전체 중단)
    Numeric(NumericError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::Validation(e) => write!(f, "입력 오류: {e}"),
            CalcError::Catalog(e) => write!(f, "카탈로그 오류: {e}"),
            CalcError::Numeric(e) => write!(f, "수치 오류: {e}"),
        }
    }
}

impl std::error::Error for CalcError {}

impl From<ValidationError> for CalcError {
    fn from(value: ValidationError) -> Self {
        CalcError::Validation(value)
    }
}

impl From<CatalogError> for CalcError {
    fn from(value: CatalogError) -> Self {
        CalcError::Catalog(value)
    }
}

impl From<NumericError> for CalcError {
    fn from(value: NumericError) -> Self {
        CalcError::Numeric(value)
    }
}

impl From<crate::alpha::AlphaError> for CalcError {
    fn from(value: crate::alpha::AlphaError) -> Self {
        match value {
            crate::alpha::AlphaError::NegativeLoad(np) => {
                CalcError::Numeric(NumericError::NegativeLoad(np))
            }
        }
    }
}
