use tur_config::TurismoConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TurismoConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TurismoConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() {
        if has_env_prefix(&env_keys, "TURISMO_API") {
            warnings.push(
                "API base URL is empty while TURISMO_API* env vars exist. Use double underscores (example: TURISMO_API__BASE_URL)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "API base URL is not configured; requests and image URLs will be malformed. Set TURISMO_API__BASE_URL."
                    .to_string(),
            );
        }
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
