use clap::Parser;
use lexa_api::ApiError;
use lexa_auth::AuthError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("lexa error: {error:#}");
        if needs_sign_in(&error) {
            eprintln!("hint: run `lexa auth sign-in` to start a new session");
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config(&flags)?;
    context::warn_unconfigured(&config);
    let ctx = context::AppContext::init(config)?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LEXA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Whether the failure means the user has to sign in (again).
fn needs_sign_in(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ApiError>(),
            Some(ApiError::Unauthorized | ApiError::Auth(AuthError::NotAuthenticated))
        ) || matches!(
            cause.downcast_ref::<AuthError>(),
            Some(AuthError::NotAuthenticated)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::needs_sign_in;
    use lexa_api::ApiError;
    use lexa_auth::AuthError;

    #[test]
    fn unauthorized_suggests_sign_in() {
        let error = anyhow::Error::from(ApiError::Unauthorized).context("failed to list cases");
        assert!(needs_sign_in(&error));
    }

    #[test]
    fn missing_session_suggests_sign_in() {
        assert!(needs_sign_in(&anyhow::Error::from(AuthError::NotAuthenticated)));
        assert!(needs_sign_in(&anyhow::Error::from(ApiError::Auth(
            AuthError::NotAuthenticated
        ))));
    }

    #[test]
    fn other_failures_do_not() {
        let error = anyhow::Error::from(ApiError::NotFound {
            message: "case not found".into(),
        });
        assert!(!needs_sign_in(&error));
    }
}
