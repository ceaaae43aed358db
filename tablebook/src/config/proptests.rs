//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, MAX_DEFAULT_DURATION_MINUTES};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
        Just(OutputFormat::Table),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(1u32..=MAX_DEFAULT_DURATION_MINUTES),
        prop::option::of(1u64..=600),
        prop::option::of(any::<bool>()),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(|(duration, wait, autoinit, format)| Config {
            default_duration_minutes: duration,
            maximum_lock_wait_seconds: wait,
            disable_autoinit: autoinit,
            output_format: format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(
            merged.default_duration_minutes,
            high.default_duration_minutes.or(low.default_duration_minutes)
        );
        prop_assert_eq!(
            merged.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    #[test]
    fn config_merge_is_idempotent(base in config_strategy(), layer in config_strategy()) {
        let mut once = base;
        ConfigMerger::merge_into(&mut once, &layer);
        let mut twice = once.clone();
        ConfigMerger::merge_into(&mut twice, &layer);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merging_valid_configs_stays_valid(low in config_strategy(), high in config_strategy()) {
        let mut merged = low;
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    #[test]
    fn config_yaml_roundtrip_preserves_fields(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
