//! Shared context for running CLI commands.

use std::{env, path::PathBuf, process::ExitCode};

use lh_config::Config;
use lh_query::ScoringWeights;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (default if no config files were found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = env::current_dir().map_err(|e| {
            eprintln!("error: could not determine current directory: {e}");
            ExitCode::FAILURE
        })?;
        let config = Config::load(&cwd).map_err(|e| {
            eprintln!("error: failed to load configuration: {e}");
            ExitCode::FAILURE
        })?;
        Ok(Self { cwd, config })
    }

    /// Score function weights from the configuration.
    pub fn weights(&self) -> ScoringWeights {
        let scoring = &self.config.scoring;
        ScoringWeights {
            claim: scoring.claim_weight,
            channel: scoring.channel_weight,
            release_time: scoring.release_weight,
            controlling: scoring.controlling_weight,
        }
    }
}
