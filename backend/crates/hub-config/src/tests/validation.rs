use crate::ValidationConfig;
use crate::validation_config::{
    MAX_CONFIGURABLE_COMMENT_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_STATUSES, MAX_TITLE_LENGTH,
    MIN_STATUSES, MIN_TITLE_LENGTH,
};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok, some};

fn key_of(config: &ValidationConfig) -> Option<&'static str> {
    config.validate().err().and_then(|e| e.key())
}

#[test]
fn given_defaults_when_validate_then_ok() {
    assert_that!(ValidationConfig::default().validate(), ok(anything()));
}

#[test]
fn given_title_length_out_of_range_when_validate_then_title_key() {
    for length in [MIN_TITLE_LENGTH - 1, MAX_TITLE_LENGTH + 1] {
        let config = ValidationConfig {
            max_title_length: length,
            ..Default::default()
        };

        assert_that!(key_of(&config), some(eq("validation.max_title_length")));
    }
}

#[test]
fn given_description_length_over_max_when_validate_then_description_key() {
    let config = ValidationConfig {
        max_description_length: MAX_DESCRIPTION_LENGTH + 1,
        ..Default::default()
    };

    assert_that!(key_of(&config), some(eq("validation.max_description_length")));
}

#[test]
fn given_comment_length_over_max_when_validate_then_comment_key() {
    let config = ValidationConfig {
        max_comment_length: MAX_CONFIGURABLE_COMMENT_LENGTH + 1,
        ..Default::default()
    };

    assert_that!(key_of(&config), some(eq("validation.max_comment_length")));
}

#[test]
fn given_status_limit_out_of_range_when_validate_then_statuses_key() {
    for statuses in [MIN_STATUSES - 1, MAX_STATUSES + 1] {
        let config = ValidationConfig {
            max_statuses: statuses,
            ..Default::default()
        };

        assert_that!(key_of(&config), some(eq("validation.max_statuses")));
    }
}

#[test]
fn given_limits_at_bounds_when_validate_then_ok() {
    let config = ValidationConfig {
        max_title_length: MAX_TITLE_LENGTH,
        max_description_length: 0,
        max_comment_length: MAX_CONFIGURABLE_COMMENT_LENGTH,
        max_statuses: MIN_STATUSES,
        enforce_status_membership: true,
    };

    assert_that!(config.validate(), ok(anything()));
}
