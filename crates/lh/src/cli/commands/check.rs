//! Implementation of `lh check`.

use std::{
    io::{IsTerminal, stdout},
    process::ExitCode,
};

use lh_config::{ConfigWarning, discover_config_files};
use lh_highlight::Highlighter;

use crate::cli::context::CommandContext;

/// Lists the config files in effect and reports validation warnings.
///
/// Fails when any warning is found.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let hl = Highlighter::new(stdout().is_terminal());

    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", hl.dim("No configuration files found, using defaults."));
    } else {
        println!("{}", hl.header("Config files:"));
        for path in &config_files {
            println!("   {}", path.display());
        }
    }
    if let Some(root) = &ctx.config.config_root {
        println!("{} {}", hl.header("Config root:"), root.display());
    }
    println!();

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("{}", hl.success("No issues found."));
        return ExitCode::SUCCESS;
    }

    println!("{}", hl.header(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("   {}", hl.warning(&w.to_string()));
    }
    println!();

    let mut hints: Vec<&str> = warnings.iter().map(hint).collect();
    hints.sort_unstable();
    hints.dedup();

    println!("Hints:");
    for h in hints {
        println!("   - {h}");
    }

    ExitCode::FAILURE
}

/// Returns a hint for resolving a warning.
fn hint(warning: &ConfigWarning) -> &'static str {
    match warning {
        ConfigWarning::ZeroPageSize => "Set [search] size to at least 1.",
        ConfigWarning::NegativeWeight { .. } => {
            "Use 0 to disable a score function instead of a negative weight."
        }
        ConfigWarning::NonFiniteWeight { .. } => "Replace nan or inf with a plain number.",
        ConfigWarning::DecayOutOfRange(_) => "Pick a release_decay such as 0.5.",
        ConfigWarning::UnknownModifier(_) => "Use one of the listed amount modifiers.",
        ConfigWarning::InvalidDuration { .. } => "Write durations as a number and unit, like 30d.",
        ConfigWarning::InvalidOrigin(_) => {
            "Write release_origin like 2024-01-01T00:00:00Z, or remove it to use the current time."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_warning_has_a_hint() {
        let warnings = [
            ConfigWarning::ZeroPageSize,
            ConfigWarning::NegativeWeight {
                setting: "claim_weight",
                value: -1.0,
            },
            ConfigWarning::NonFiniteWeight {
                setting: "amount_factor",
                value: f64::INFINITY,
            },
            ConfigWarning::DecayOutOfRange(2.0),
            ConfigWarning::UnknownModifier("cube".to_string()),
            ConfigWarning::InvalidDuration {
                setting: "release_scale",
                value: "x".to_string(),
            },
            ConfigWarning::InvalidOrigin("x".to_string()),
        ];
        for w in &warnings {
            assert!(!hint(w).is_empty());
        }
    }
}
