//! Clap argument definitions for the `lh` CLI.

use chrono::{DateTime, Utc};
use clap::{ArgAction, Args, Parser, Subcommand};
use lh_query::SearchRequest;

/// Parses an RFC 3339 timestamp into UTC.
fn parse_origin(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "lh")]
#[command(about = "Compile claim search requests into Elasticsearch queries")]
pub struct Cli {
    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Facets narrowing a search request.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Comma-separated media types: audio, video, text, application, image, cad
    #[arg(long)]
    pub media_type: Option<String>,

    /// Comma-separated content types, e.g. video/mp4
    #[arg(long)]
    pub content_type: Option<String>,

    /// Claim type: channel or file
    #[arg(long)]
    pub claim_type: Option<String>,

    /// Restrict to claims published in this channel claim id
    #[arg(long)]
    pub channel_id: Option<String>,

    /// Restrict to claims published in this channel name
    #[arg(long)]
    pub channel: Option<String>,

    /// Restrict to this claim id
    #[arg(long)]
    pub claim_id: Option<String>,

    /// Require the nsfw flag to be true or false
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub nsfw: Option<bool>,
}

/// Paging and rendering flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Offset of the first result
    #[arg(long, default_value = "0")]
    pub from: usize,

    /// Results per page [default: from config]
    #[arg(long)]
    pub size: Option<usize>,

    /// Fixed release-time origin (RFC 3339) instead of the configured one
    #[arg(long, value_name = "RFC3339", value_parser = parse_origin)]
    pub now: Option<DateTime<Utc>>,

    /// Print the search body on a single line
    #[arg(long)]
    pub compact: bool,

    /// Show the request, query tree and text matchers before the search body
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `lh query`.
#[derive(Args, Debug, Clone)]
pub struct QueryCommand {
    /// Free text to search for
    pub text: String,

    #[command(flatten)]
    /// Request facets.
    pub request: RequestArgs,

    #[command(flatten)]
    /// Output flags.
    pub output: OutputArgs,
}

impl QueryCommand {
    /// Builds the search request described by the arguments.
    pub fn search_request(&self) -> SearchRequest {
        let facets = self.request.clone();
        SearchRequest {
            s: self.text.clone(),
            media_type: facets.media_type,
            content_type: facets.content_type,
            claim_type: facets.claim_type,
            channel_id: facets.channel_id,
            channel: facets.channel,
            claim_id: facets.claim_id,
            nsfw: facets.nsfw,
        }
    }
}

/// Supported `lh` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a search request and print the search body
    #[command(after_help = "\
TEXT:
  words             Matched against claim names, titles and descriptions
  @name             Channel lookup: exact channel names are strongly preferred
  words \"phrase\"    A trailing quoted phrase must appear verbatim

EXAMPLES:
  lh query 'cats'
  lh query '@lbry' --claim-type channel
  lh query 'how to \"build a desk\"' --media-type video,image
  lh query 'podcast' --nsfw false --size 20 --compact")]
    Query(QueryCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and report warnings
    Check,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn query_facets_map_to_request() {
        let cli = Cli::try_parse_from([
            "lh",
            "query",
            "@alice",
            "--media-type",
            "video,audio",
            "--claim-type",
            "channel",
            "--nsfw",
            "false",
        ])
        .unwrap();
        let Commands::Query(cmd) = cli.command else {
            panic!("expected query command");
        };
        assert_eq!(
            cmd.search_request(),
            SearchRequest::new("@alice")
                .with_media_type("video,audio")
                .with_claim_type("channel")
                .with_nsfw(false)
        );
        assert_eq!(cmd.output.from, 0);
        assert!(cmd.output.size.is_none());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["lh", "-vv", "config"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn now_must_be_rfc3339() {
        assert!(Cli::try_parse_from(["lh", "query", "x", "--now", "today"]).is_err());
        let cli =
            Cli::try_parse_from(["lh", "query", "x", "--now", "2024-01-01T00:00:00Z"]).unwrap();
        let Commands::Query(cmd) = cli.command else {
            panic!("expected query command");
        };
        assert!(cmd.output.now.is_some());
    }

    #[test]
    fn nsfw_requires_bool() {
        assert!(Cli::try_parse_from(["lh", "query", "x", "--nsfw", "maybe"]).is_err());
    }
}
