//! Implementation of `lh config`.

use std::{
    io::{IsTerminal, stdout},
    process::ExitCode,
};

use lh_highlight::Highlighter;

use crate::cli::context::CommandContext;

/// Shows effective configuration settings.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let highlighter = Highlighter::new(stdout().is_terminal());
    print!("{}", highlighter.highlight_toml(&toml));
    ExitCode::SUCCESS
}
