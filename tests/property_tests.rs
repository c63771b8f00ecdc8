//! Property-based tests for wildcard matching and level parsing.

use proptest::prelude::*;
use relog::{wildcard_match, LogLevel};

proptest! {
    #[test]
    fn prop_star_matches_everything(name in "[a-zA-Z0-9.]{0,30}") {
        prop_assert!(wildcard_match("*", &name));
    }

    #[test]
    fn prop_literal_pattern_matches_itself(name in "[a-zA-Z0-9.]{0,30}") {
        prop_assert!(wildcard_match(&name, &name));
    }

    #[test]
    fn prop_prefix_star_matches_extensions(
        prefix in "[a-z]{1,10}",
        suffix in "[a-zA-Z0-9.]{0,20}",
    ) {
        let pattern = format!("{prefix}*");
        let name = format!("{prefix}{suffix}");
        prop_assert!(wildcard_match(&pattern, &name));
    }

    #[test]
    fn prop_question_marks_require_exact_arity(
        name in "[a-z]{1,20}",
        extra in 1usize..5,
    ) {
        let exact = "?".repeat(name.chars().count());
        prop_assert!(wildcard_match(&exact, &name));

        let too_many = "?".repeat(name.chars().count() + extra);
        prop_assert!(!wildcard_match(&too_many, &name));
    }

    #[test]
    fn prop_star_absorbs_any_infix(
        head in "[a-z]{1,5}",
        infix in "[a-zA-Z0-9]{0,15}",
        tail in "[a-z]{1,5}",
    ) {
        let pattern = format!("{head}*{tail}");
        let name = format!("{head}{infix}{tail}");
        prop_assert!(wildcard_match(&pattern, &name));
    }

    #[test]
    fn prop_level_display_round_trips(level in prop_oneof![
        Just(LogLevel::Disabled),
        Just(LogLevel::Fatal),
        Just(LogLevel::Error),
        Just(LogLevel::Warn),
        Just(LogLevel::Info),
        Just(LogLevel::Debug),
        Just(LogLevel::Trace),
        Just(LogLevel::Everything),
    ]) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(parsed, level);
    }
}
