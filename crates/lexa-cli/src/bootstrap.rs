use lexa_config::LexaConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`), then apply `--api-url`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LexaConfig> {
    let mut config = LexaConfig::load_with_dotenv()?;
    apply_overrides(&mut config, flags)?;
    Ok(config)
}

fn apply_overrides(config: &mut LexaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(url) = &flags.api_url {
        config.api.url.clone_from(url);
        config.api.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use lexa_config::LexaConfig;

    use super::apply_overrides;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(api_url: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: false,
            verbose: false,
            api_url: api_url.map(str::to_string),
        }
    }

    #[test]
    fn api_url_flag_wins() {
        let mut config = LexaConfig::default();
        apply_overrides(&mut config, &flags(Some("https://api.lexa.test/"))).expect("valid url");
        assert_eq!(config.api.base_url(), "https://api.lexa.test");
        assert!(config.api.is_configured());
    }

    #[test]
    fn api_url_flag_is_validated() {
        let mut config = LexaConfig::default();
        let err = apply_overrides(&mut config, &flags(Some("ftp://api"))).expect_err("bad scheme");
        assert!(err.to_string().contains("api.url"));
    }

    #[test]
    fn no_flag_leaves_config_alone() {
        let mut config = LexaConfig::default();
        apply_overrides(&mut config, &flags(None)).expect("no-op");
        assert!(!config.api.is_configured());
    }
}
