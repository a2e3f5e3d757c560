//! Tests for pricing configuration loading and stores.

use super::*;
use tierwise_core::{NetNewVolumeRule, RenewalRule};
use tierwise_test::rules::{custom_config, default_config};

/// A store whose every operation fails with the error built by `make`.
struct FailingStore {
    make: fn() -> ConfigError,
}

impl FailingStore {
    fn unavailable() -> Self {
        Self {
            make: || ConfigError::Unavailable("offline".into()),
        }
    }

    fn unauthorized() -> Self {
        Self {
            make: || ConfigError::Unauthorized("Incorrect passcode.".into()),
        }
    }
}

impl ConfigSource for FailingStore {
    fn fetch(&self) -> Result<PricingConfig, ConfigError> {
        Err((self.make)())
    }
}

impl ConfigStore for FailingStore {
    fn save(&self, _config: &PricingConfig) -> Result<PricingConfig, ConfigError> {
        Err((self.make)())
    }
}

#[test]
fn test_toml_parsing() {
    let toml = r#"
        netNewListPrice = 250.0

        [[renewalRules]]
        minCurrentPpl = 0.0
        maxCurrentPpl = 99.0
        lowestAllowedPrice = 170.0

        [[renewalRules]]
        minCurrentPpl = 100.0
        lowestAllowedPrice = 200.0

        [[netNewVolumeRules]]
        minLicenses = 1
        maxLicenses = 9
        discountPct = 0

        [[netNewVolumeRules]]
        minLicenses = 10
        discountPct = 12.5
    "#;

    let config = PricingConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.net_new_list_price, 250.0);
    assert_eq!(
        config.renewal_rules,
        vec![
            RenewalRule::new(0.0, Some(99.0), 170.0),
            RenewalRule::new(100.0, None, 200.0),
        ]
    );
    assert_eq!(
        config.net_new_volume_rules[1],
        NetNewVolumeRule::new(10.0, None, 12.5)
    );
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        netNewListPrice: 225
        renewalRules:
          - minCurrentPpl: 0
            maxCurrentPpl: 108
            lowestAllowedPrice: 175
          - minCurrentPpl: 109
            maxCurrentPpl: null
            lowestAllowedPrice: 190
    "#;

    let config = PricingConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.renewal_rules.len(), 2);
    assert_eq!(config.renewal_rules[1].max_current_ppl, None);
    assert_eq!(
        config.net_new_volume_rules,
        PricingConfig::default_net_new_volume_rules()
    );
}

#[test]
fn test_json_parsing_keeps_stored_field_names() {
    let json = r#"{
        "netNewListPrice": 225,
        "renewalRules": [
            { "minCurrentPpl": 0, "maxCurrentPpl": 108, "lowestAllowedPrice": 175 },
            { "minCurrentPpl": 109, "maxCurrentPpl": 131, "lowestAllowedPrice": 190 },
            { "minCurrentPpl": 132, "maxCurrentPpl": null, "lowestAllowedPrice": 205 }
        ],
        "netNewVolumeRules": [
            { "minLicenses": 1, "maxLicenses": 24, "discountPct": 5 },
            { "minLicenses": 25, "maxLicenses": 49, "discountPct": 10 },
            { "minLicenses": 50, "maxLicenses": 99, "discountPct": 15 },
            { "minLicenses": 100, "maxLicenses": 249, "discountPct": 20 },
            { "minLicenses": 250, "maxLicenses": null, "discountPct": 25 }
        ]
    }"#;

    let config = PricingConfig::from_json_str(json).unwrap();
    assert_eq!(config, default_config());
}

#[test]
fn test_json_output_uses_camel_case_and_null_bounds() {
    let json = default_config().to_json_string().unwrap();
    assert!(json.contains("\"netNewListPrice\""));
    assert!(json.contains("\"minCurrentPpl\""));
    assert!(json.contains("\"lowestAllowedPrice\""));
    assert!(json.contains("\"netNewVolumeRules\""));
    assert!(json.contains("\"maxLicenses\": null"));

    let back = PricingConfig::from_json_str(&json).unwrap();
    assert_eq!(back, default_config());
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let config = PricingConfig::from_json_str("{}").unwrap();
    assert_eq!(config, default_config());

    let config = PricingConfig::from_json_str(r#"{ "netNewListPrice": null }"#).unwrap();
    assert_eq!(config.net_new_list_price, PricingConfig::DEFAULT_LIST_PRICE);
}

#[test]
fn test_non_finite_list_price_falls_back() {
    let raw = RawPricingConfig {
        net_new_list_price: Some(f64::INFINITY),
        ..RawPricingConfig::default()
    };
    assert_eq!(raw.into_config().net_new_list_price, 225.0);
}

#[test]
fn test_raw_from_config_round_trip() {
    let raw = RawPricingConfig::from(custom_config());
    assert_eq!(raw.into_config(), custom_config());
}

#[test]
fn test_malformed_rule_is_an_error() {
    let json = r#"{ "renewalRules": [ { "minCurrentPpl": "cheap" } ] }"#;
    assert!(matches!(
        PricingConfig::from_json_str(json),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_format_from_path() {
    assert_eq!(
        ConfigFormat::from_path("pricing.toml").unwrap(),
        ConfigFormat::Toml
    );
    assert_eq!(
        ConfigFormat::from_path("pricing.yml").unwrap(),
        ConfigFormat::Yaml
    );
    assert_eq!(
        ConfigFormat::from_path("pricing.yaml").unwrap(),
        ConfigFormat::Yaml
    );
    assert_eq!(
        ConfigFormat::from_path("a/b/pricing.json").unwrap(),
        ConfigFormat::Json
    );
    assert!(matches!(
        ConfigFormat::from_path("pricing.ini"),
        Err(ConfigError::UnsupportedFormat(_))
    ));
    assert!(ConfigFormat::from_path("pricing").is_err());
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = PricingConfig::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_file_store_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileConfigStore::new(dir.path().join("pricing.json")).unwrap();

    assert!(matches!(store.fetch(), Err(ConfigError::Missing)));

    let saved = store.save(&custom_config()).unwrap();
    assert_eq!(saved, custom_config());
    assert_eq!(store.fetch().unwrap(), custom_config());
    assert_eq!(PricingConfig::load(store.path()).unwrap(), custom_config());
}

#[test]
fn test_file_store_yaml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileConfigStore::new(dir.path().join("pricing.yaml")).unwrap();
    assert_eq!(store.format(), ConfigFormat::Yaml);

    store.save(&default_config()).unwrap();
    assert_eq!(store.fetch().unwrap(), default_config());
}

#[test]
fn test_file_store_rejects_unknown_extension() {
    assert!(matches!(
        FileConfigStore::new("pricing.txt"),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_memory_store() {
    let store = MemoryConfigStore::new();
    assert!(matches!(store.fetch(), Err(ConfigError::Missing)));

    store.save(&custom_config()).unwrap();
    assert_eq!(store.fetch().unwrap(), custom_config());

    store.clear().unwrap();
    assert!(matches!(store.fetch(), Err(ConfigError::Missing)));
}

#[test]
fn test_get_current_config_falls_back_to_defaults() {
    assert_eq!(
        get_current_config(&FailingStore::unavailable()),
        default_config()
    );

    let store = MemoryConfigStore::with_config(custom_config());
    assert_eq!(get_current_config(&store), custom_config());
}

#[test]
fn test_cached_fetch_refreshes_cache() {
    let source = CachedConfigSource::new(
        MemoryConfigStore::with_config(custom_config()),
        MemoryConfigStore::new(),
    );

    assert_eq!(source.fetch().unwrap(), custom_config());
    assert_eq!(source.cache().fetch().unwrap(), custom_config());
}

#[test]
fn test_cached_fetch_falls_back_to_cache() {
    let source = CachedConfigSource::new(
        FailingStore::unavailable(),
        MemoryConfigStore::with_config(custom_config()),
    );
    assert_eq!(source.fetch().unwrap(), custom_config());
}

#[test]
fn test_cached_fetch_with_empty_cache_uses_defaults() {
    let source = CachedConfigSource::new(FailingStore::unavailable(), MemoryConfigStore::new());
    assert!(source.fetch().is_err());
    assert_eq!(get_current_config(&source), default_config());
}

#[test]
fn test_cached_save_writes_both() {
    let source = CachedConfigSource::new(MemoryConfigStore::new(), MemoryConfigStore::new());
    source.save(&custom_config()).unwrap();

    assert_eq!(source.primary().fetch().unwrap(), custom_config());
    assert_eq!(source.cache().fetch().unwrap(), custom_config());
}

#[test]
fn test_cached_save_falls_back_to_cache() {
    let source = CachedConfigSource::new(FailingStore::unavailable(), MemoryConfigStore::new());
    let saved = source.save(&custom_config()).unwrap();

    assert_eq!(saved, custom_config());
    assert_eq!(source.cache().fetch().unwrap(), custom_config());
}

#[test]
fn test_cached_save_propagates_unauthorized() {
    let source = CachedConfigSource::new(FailingStore::unauthorized(), MemoryConfigStore::new());
    let result = source.save(&custom_config());

    assert!(matches!(result, Err(ConfigError::Unauthorized(_))));
    assert!(matches!(source.cache().fetch(), Err(ConfigError::Missing)));
}
