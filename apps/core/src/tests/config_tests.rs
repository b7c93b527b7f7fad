//! Configuration Tests
//!
//! Environment overlay on the defaults. Every test pins all `HEALTHCHAT_*`
//! variables so the outer environment cannot leak in.

use crate::config::*;
use crate::error::AppError;

const ALL_VARS: [&str; 7] = [
    ENV_HISTORY_TURNS,
    ENV_LOG_FORMAT,
    ENV_GENERATIVE_URL,
    ENV_GENERATIVE_MODEL,
    ENV_GENERATIVE_TIMEOUT_SECS,
    ENV_GENERATIVE_RETRIES,
    ENV_GENERATIVE_TOKEN,
];

/// Runs `f` with only the given variables set.
fn with_env<R>(set: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let vars: Vec<(&str, Option<&str>)> = ALL_VARS
        .iter()
        .map(|key| (*key, set.iter().find(|(k, _)| k == key).map(|(_, v)| *v)))
        .collect();
    temp_env::with_vars(vars, f)
}

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = with_env(&[], AssistantConfig::from_vars).unwrap();
        assert_eq!(config.history_turns, 4);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.generative.is_none());
    }

    #[test]
    fn test_overrides_applied() {
        let config = with_env(
            &[(ENV_HISTORY_TURNS, "6"), (ENV_LOG_FORMAT, "Bunyan")],
            AssistantConfig::from_vars,
        )
        .unwrap();
        assert_eq!(config.history_turns, 6);
        assert_eq!(config.history_capacity(), 12);
        assert_eq!(config.log_format, LogFormat::Bunyan);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = with_env(&[(ENV_HISTORY_TURNS, "  "), (ENV_GENERATIVE_URL, "")], AssistantConfig::from_vars)
            .unwrap();
        assert_eq!(config.history_turns, 4);
        assert!(config.generative.is_none());
    }

    #[test]
    fn test_invalid_number_is_config_error() {
        let err = with_env(&[(ENV_HISTORY_TURNS, "lots")], AssistantConfig::from_vars).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains(ENV_HISTORY_TURNS));
    }

    #[test]
    fn test_out_of_range_is_validation_error() {
        let err = with_env(&[(ENV_HISTORY_TURNS, "50")], AssistantConfig::from_vars).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_log_format() {
        let err = with_env(&[(ENV_LOG_FORMAT, "xml")], AssistantConfig::from_vars).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}

#[cfg(test)]
mod generative_env_tests {
    use super::*;

    #[test]
    fn test_url_enables_collaborator() {
        let config = with_env(
            &[
                (ENV_GENERATIVE_URL, "http://localhost:8080/"),
                (ENV_GENERATIVE_MODEL, "med-small"),
                (ENV_GENERATIVE_TIMEOUT_SECS, "5"),
                (ENV_GENERATIVE_RETRIES, "0"),
                (ENV_GENERATIVE_TOKEN, "secret"),
            ],
            AssistantConfig::from_vars,
        )
        .unwrap();

        let generative = config.generative.expect("collaborator configured");
        assert_eq!(generative.model, "med-small");
        assert_eq!(generative.timeout_secs, 5);
        assert_eq!(generative.max_retries, 0);
        assert_eq!(generative.auth_token.as_deref(), Some("secret"));
        assert_eq!(
            generative.completion_url().unwrap().as_str(),
            "http://localhost:8080/completion"
        );
    }

    #[test]
    fn test_collaborator_settings_ignored_without_url() {
        let config = with_env(&[(ENV_GENERATIVE_MODEL, "med-small")], AssistantConfig::from_vars).unwrap();
        assert!(config.generative.is_none());
    }

    #[test]
    fn test_bad_url_rejected() {
        let err = with_env(&[(ENV_GENERATIVE_URL, "ftp://example.com")], AssistantConfig::from_vars).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = with_env(&[(ENV_GENERATIVE_URL, "not a url")], AssistantConfig::from_vars).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_token_not_serialized() {
        let config = with_env(
            &[(ENV_GENERATIVE_URL, "https://gen.example"), (ENV_GENERATIVE_TOKEN, "secret")],
            AssistantConfig::from_vars,
        )
        .unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(json.contains("https://gen.example"));
    }
}
