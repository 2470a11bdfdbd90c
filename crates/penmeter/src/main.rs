//! penmeter CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use penmeter::{Cli, Commands, commands};
use penmeter_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;

    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let log_level = cli.log_level.unwrap_or(config.log_level);
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        config_file = ?config_sources.primary_file(),
        "CLI initialized"
    );

    let max_input = config.input_limit();
    let analyzer = config.analyzer();

    let result = match command {
        Commands::Readability(args) => commands::readability::cmd_readability(
            args,
            cli.json,
            &analyzer,
            config.max_grade,
            max_input,
        ),
        Commands::ReadingTime(args) => {
            commands::reading_time::cmd_reading_time(args, cli.json, max_input)
        }
        Commands::Analyze(args) => commands::analyze::cmd_analyze(
            args,
            cli.json,
            &analyzer,
            config.max_grade,
            max_input,
        ),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &config_sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => {
            let rt = tokio::runtime::Runtime::new()
                .context("failed to create async runtime for MCP server")?;
            rt.block_on(commands::serve::cmd_serve(args, config))
        }
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "command failed");
    }
    result
}
