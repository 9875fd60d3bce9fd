use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, CatalogError, DeviceWaterConsumptionNorms, WaterConsumerNorms};

/// 사용자 카탈로그 파일(TOML) 내용.
///
/// 내장 기준표 위에 덧씌우는 행만 담는다. 같은 이름의 행은 교체되고, 새
/// 이름의 행은 추가된다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub consumers: Vec<WaterConsumerNorms>,
    #[serde(default)]
    pub devices: Vec<DeviceWaterConsumptionNorms>,
}

/// 카탈로그 로드/저장 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 행 불변식 위반
    Invalid(CatalogError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "카탈로그 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "카탈로그 직렬화 오류: {e}"),
            ConfigError::Invalid(e) => write!(f, "카탈로그 검증 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl From<CatalogError> for ConfigError {
    fn from(value: CatalogError) -> Self {
        ConfigError::Invalid(value)
    }
}

/// 파일이 있으면 내장 기준표에 병합해 로드하고, 없으면 내장 기준표만 쓴다.
pub fn load_catalog_or_builtin(path: &Path) -> Result<Catalog, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let file: CatalogFile = toml::from_str(&content)?;
        let catalog = merge(Catalog::builtin(), file);
        catalog.validate()?;
        log::debug!(
            "카탈로그 로드 완료: 수요자 {}행, 기구 {}행",
            catalog.consumers.len(),
            catalog.devices.len()
        );
        Ok(catalog)
    } else {
        log::debug!("카탈로그 파일 없음, 내장 기준표 사용: {}", path.display());
        Ok(Catalog::builtin())
    }
}

/// 사용자 카탈로그 파일을 저장한다.
pub fn save_catalog_file(path: &Path, file: &CatalogFile) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(file)?;
    fs::write(path, content)?;
    Ok(())
}

fn merge(mut base: Catalog, file: CatalogFile) -> Catalog {
    for consumer in file.consumers {
        match base
            .consumers
            .iter_mut()
            .find(|c| c.name == consumer.name)
        {
            Some(existing) => *existing = consumer,
            None => base.consumers.push(consumer),
        }
    }
    for device in file.devices {
        match base.devices.iter_mut().find(|d| d.name == device.name) {
            Some(existing) => *existing = device,
            None => base.devices.push(device),
        }
    }
    base
}
