//! Environment variable expansion for configuration strings.
//!
//! Supports two forms inside a value:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Everything outside a `${...}` reference is passed through unchanged.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in a value.
///
/// `field` is the config field path used in error messages
/// (e.g. `"bookstack.token_secret"`).
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] for an unset variable without a
/// default, an empty variable name, or an unclosed `${`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut result = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: "unclosed ${ in value".to_owned(),
            });
        };

        let reference = &after[..end];
        let (name, default) = match reference.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (reference, None),
        };

        if name.is_empty() {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: "empty variable name in ${}".to_owned(),
            });
        }

        match std::env::var(name) {
            Ok(val) => result.push_str(&val),
            Err(_) => match default {
                Some(default) => result.push_str(default),
                None => {
                    return Err(ConfigError::EnvVar {
                        field: field.to_owned(),
                        message: format!("${{{name}}} not set"),
                    });
                }
            },
        }

        rest = &after[end + 1..];
    }

    result.push_str(rest);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_literal_passthrough() {
        assert_eq!(
            expand_env("https://wiki.example.com", "f").unwrap(),
            "https://wiki.example.com"
        );
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("KCS_EXPAND_TEST_VAR", "value");
        }
        assert_eq!(
            expand_env("${KCS_EXPAND_TEST_VAR}", "f").unwrap(),
            "value"
        );
        unsafe {
            std::env::remove_var("KCS_EXPAND_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_with_surrounding_text() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("KCS_EXPAND_TEST_HOST", "wiki.internal");
        }
        assert_eq!(
            expand_env("https://${KCS_EXPAND_TEST_HOST}/api", "f").unwrap(),
            "https://wiki.internal/api"
        );
        unsafe {
            std::env::remove_var("KCS_EXPAND_TEST_HOST");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("KCS_EXPAND_TEST_MISSING");
        }
        assert_eq!(
            expand_env("${KCS_EXPAND_TEST_MISSING:-fallback}", "f").unwrap(),
            "fallback"
        );
    }

    #[test]
    fn test_missing_var_errors() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("KCS_EXPAND_TEST_MISSING");
        }
        let err = expand_env("${KCS_EXPAND_TEST_MISSING}", "bookstack.token_id").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("KCS_EXPAND_TEST_MISSING"));
        assert!(err.to_string().contains("bookstack.token_id"));
    }

    #[test]
    fn test_unclosed_reference_errors() {
        let err = expand_env("${UNCLOSED", "f").unwrap_err();
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn test_empty_name_errors() {
        let err = expand_env("${}", "f").unwrap_err();
        assert!(err.to_string().contains("empty variable name"));
    }
}
