use crate::config::AppConfig;

#[test]
fn test_parse_ini() {
    let mut config = AppConfig::default();
    let ini = r#"
# cabinet-optimizer settings
PORT="9090"
BIND_HOST="127.0.0.1"
CAPACITY_DATA="/srv/capacity.csv"
CABINET_RU="48"
CABINET_POWER_KW="32.5"
RU_PERCENT="75"
POWER_PERCENT="60"
MAX_CABINET_RU="96"
"#;
    config.parse_ini(ini);
    assert_eq!(config.port, 9090);
    assert_eq!(config.bind_host, "127.0.0.1");
    assert_eq!(config.capacity_data_path, "/srv/capacity.csv");
    assert!((config.cabinet_ru - 48.0).abs() < f64::EPSILON);
    assert!((config.cabinet_power_kw - 32.5).abs() < f64::EPSILON);
    assert!((config.ru_percent - 75.0).abs() < f64::EPSILON);
    assert!((config.power_percent - 60.0).abs() < f64::EPSILON);
    assert_eq!(config.max_cabinet_ru, 96);
    assert_eq!(config.bind_addr(), "127.0.0.1:9090");
}

#[test]
fn test_parse_ini_keeps_defaults_for_bad_values() {
    let mut config = AppConfig::default();
    config.parse_ini("PORT=\"not-a-port\"\nRU_PERCENT=\"\"\nUNKNOWN_KEY=\"1\"\n");
    assert_eq!(config.port, 8080);
    assert!((config.ru_percent - 80.0).abs() < f64::EPSILON);
}

#[test]
fn test_default_config_validates() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_params_match_request_defaults() {
    let params = AppConfig::default().default_params();
    assert!((params.cabinet_ru - 42.0).abs() < f64::EPSILON);
    assert!((params.cabinet_power_kw - 28.5).abs() < f64::EPSILON);
    assert!((params.ru_percent - 80.0).abs() < f64::EPSILON);
    assert!((params.power_percent - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_validate_rejects_out_of_range_values() {
    let mut config = AppConfig::default();
    config.ru_percent = 120.0;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.cabinet_ru = 42.5;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.max_cabinet_ru = 0;
    assert!(config.validate().is_err());
}
