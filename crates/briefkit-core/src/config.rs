use thiserror::Error;

use crate::app_config::AppConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but unparseable.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but unparseable.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("BRIEFKIT_LOG_LEVEL", "info");
    let fetch_timeout_secs = parse_u64("BRIEFKIT_FETCH_TIMEOUT_SECS", "15")?;
    let user_agent = or_default(
        "BRIEFKIT_USER_AGENT",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36",
    );
    let raw_text_max_chars = parse_usize("BRIEFKIT_RAW_TEXT_MAX_CHARS", "5000")?;

    Ok(AppConfig {
        log_level,
        fetch_timeout_secs,
        user_agent,
        raw_text_max_chars,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.fetch_timeout_secs, 15);
        assert_eq!(cfg.raw_text_max_chars, 5000);
        assert!(cfg.user_agent.starts_with("Mozilla/5.0"));
    }

    #[test]
    fn build_app_config_fetch_timeout_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("BRIEFKIT_FETCH_TIMEOUT_SECS", "30");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_fetch_timeout_invalid() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("BRIEFKIT_FETCH_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BRIEFKIT_FETCH_TIMEOUT_SECS"),
            "expected InvalidEnvVar(BRIEFKIT_FETCH_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_raw_text_cap_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("BRIEFKIT_RAW_TEXT_MAX_CHARS", "1000");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.raw_text_max_chars, 1000);
    }

    #[test]
    fn build_app_config_user_agent_override() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("BRIEFKIT_USER_AGENT", "briefkit-test/0.1");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.user_agent, "briefkit-test/0.1");
    }
}
