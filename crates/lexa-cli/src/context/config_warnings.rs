use lexa_config::{DEFAULT_API_URL, LEGACY_API_URL_VAR, LexaConfig};

pub fn warn_unconfigured(config: &LexaConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &LexaConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() {
        if has_env_prefix(&env_keys, "LEXA_API_") && !has_env_prefix(&env_keys, "LEXA_API__") {
            warnings.push(
                "API config appears default while LEXA_API_* env vars exist. Use double underscores (example: LEXA_API__URL)."
                    .to_string(),
            );
        } else {
            warnings.push(format!(
                "API url not configured; using {DEFAULT_API_URL}. Set LEXA_API__URL or {LEGACY_API_URL_VAR}."
            ));
        }
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
