//! Property-based tests for customer-name normalization and `NewReservation`.

use super::{title_case, NewReservation, MAX_CUSTOMER_NAME_LEN};
use crate::table::TableId;
use chrono::NaiveDate;
use proptest::prelude::*;

fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Zа-яА-Я' -]{1,60}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Normalizing twice gives the same result as normalizing once
    #[test]
    fn title_case_is_idempotent(name in name_strategy()) {
        let once = title_case(&name);
        prop_assert_eq!(title_case(&once), once);
    }

    // Non-alphabetic characters are never touched
    #[test]
    fn title_case_preserves_separators(name in name_strategy()) {
        let normalized = title_case(&name);
        let original: Vec<char> = name.chars().filter(|c| !c.is_alphabetic()).collect();
        let kept: Vec<char> = normalized.chars().filter(|c| !c.is_alphabetic()).collect();
        prop_assert_eq!(original, kept);
    }

    // Every accepted name ends up trimmed, title-cased and within bounds
    #[test]
    fn builder_output_is_normalized(
        name in name_strategy(),
        minutes in 1u32..=1440,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap();

        match NewReservation::builder(TableId::new(1), name.clone(), start)
            .duration_minutes(minutes)
            .build()
        {
            Ok(candidate) => {
                let stored = candidate.customer_name();
                prop_assert_eq!(stored, stored.trim());
                prop_assert!(!stored.is_empty());
                prop_assert!(stored.chars().count() <= MAX_CUSTOMER_NAME_LEN);
                prop_assert_eq!(title_case(stored), stored);
                prop_assert_eq!(candidate.duration_minutes(), minutes);
            }
            Err(err) => {
                prop_assert_eq!(err.field.as_str(), "customer_name");
                prop_assert!(name.trim().is_empty());
            }
        }
    }
}
