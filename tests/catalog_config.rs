//! 카탈로그·설정 파일·직렬화 테스트.
use std::fs;

use rust_decimal_macros::dec;
use water_supply_toolbox::alpha::CodeTableAlpha;
use water_supply_toolbox::catalog::{Catalog, CatalogError, WateringKind};
use water_supply_toolbox::config::{load_catalog_or_builtin, save_catalog_file, CatalogFile};
use water_supply_toolbox::consumption::{
    calculate_consumption_for_one_object, WaterConsumerParams,
};

#[test]
fn builtin_catalog_passes_validation() {
    let catalog = Catalog::builtin();
    catalog.validate().expect("내장 기준표는 검증을 통과해야 함");
    assert!(!catalog.consumers.is_empty());
    assert!(!catalog.devices.is_empty());
}

#[test]
fn unknown_consumer_is_a_catalog_error() {
    let catalog = Catalog::builtin();
    match catalog.consumer_by_name("존재하지 않는 수요자") {
        Err(CatalogError::UnknownConsumer(name)) => {
            assert_eq!(name, "존재하지 않는 수요자")
        }
        other => panic!("카탈로그 오류여야 함: {other:?}"),
    }
}

#[test]
fn malformed_norms_are_rejected() {
    let catalog = Catalog::builtin();
    let mut row = catalog.consumers[0].clone();
    row.avg_day_hot_l = row.avg_day_total_l + dec!(1);
    match row.validate() {
        Err(CatalogError::InvalidNorms { .. }) => {}
        other => panic!("온수 원단위 초과는 거부해야 함: {other:?}"),
    }

    let mut row = catalog.consumers[0].clone();
    row.q0_total_lps = dec!(0);
    assert!(row.validate().is_err(), "기구 유량 0은 거부해야 함");
}

#[test]
fn fresh_id_changes_only_the_instance_id() {
    let catalog = Catalog::builtin();
    let row = catalog.consumers[0].clone();
    let renewed = row.clone().with_fresh_id();
    assert_ne!(renewed.id, row.id);
    assert_eq!(renewed.name, row.name);
    assert_eq!(renewed.avg_day_total_l, row.avg_day_total_l);
}

#[test]
fn catalog_file_round_trips_through_toml() {
    let path = std::env::temp_dir().join("water_supply_toolbox_catalog_test.toml");

    let mut custom = Catalog::builtin().consumers[0].clone();
    custom.name = "Пользовательский потребитель".to_string();
    custom.avg_day_total_l = dec!(123.45);
    let file = CatalogFile {
        consumers: vec![custom.clone()],
        devices: Vec::new(),
    };
    save_catalog_file(&path, &file).expect("카탈로그 파일 저장");

    let catalog = load_catalog_or_builtin(&path).expect("카탈로그 로드");
    let loaded = catalog
        .consumer_by_name("Пользовательский потребитель")
        .expect("사용자 행이 병합되어야 함");
    assert_eq!(loaded.avg_day_total_l, dec!(123.45));
    assert_eq!(loaded.measurer, custom.measurer);
    // 내장 행도 그대로 남아 있어야 함
    assert!(catalog.consumer_by_name("23 Бани: душевая кабина").is_ok());

    fs::remove_file(&path).ok();
}

#[test]
fn missing_catalog_file_falls_back_to_builtin() {
    let path = std::env::temp_dir().join("water_supply_toolbox_absent_catalog.toml");
    fs::remove_file(&path).ok();
    let catalog = load_catalog_or_builtin(&path).expect("내장 기준표 폴백");
    let builtin = Catalog::builtin();
    assert_eq!(catalog.consumers.len(), builtin.consumers.len());
    assert_eq!(catalog.devices.len(), builtin.devices.len());
    assert!(catalog.consumer_by_name("Административные здания").is_ok());
}

#[test]
fn report_round_trips_through_json() {
    let norms = Catalog::builtin()
        .consumer_by_name("23 Бани: душевая кабина")
        .unwrap()
        .clone();
    let params = WaterConsumerParams {
        norms,
        num_of_devices: 3,
        num_of_devices_hot: 2,
        num_of_measurers: 5,
        temp_hot_c: 61,
        temp_cold_c: 5,
        work_hours: 3,
        sewerage_device: None,
    };
    let report = calculate_consumption_for_one_object(&params, &CodeTableAlpha).unwrap();

    let serialized = serde_json::to_string(&report).expect("보고서 직렬화");
    let restored: water_supply_toolbox::consumption::OneObjectDataReport =
        serde_json::from_str(&serialized).expect("보고서 역직렬화");
    assert_eq!(report, restored, "유효숫자 8자리가 보존되어야 함");
}

#[test]
fn watering_norms_are_exposed_for_the_extension_point() {
    assert_eq!(WateringKind::Grass.demand_m3(dec!(1000)), dec!(3));
    assert_eq!(WateringKind::FootballField.norm_l_per_m2(), dec!(0.5));
}

#[test]
fn measurer_labels_match_the_code_table() {
    let catalog = Catalog::builtin();
    let hotel = catalog
        .consumer_by_name("Гостиницы с ваннами во всех номерах")
        .unwrap();
    assert_eq!(hotel.measurer.label(), "кров.");
}
