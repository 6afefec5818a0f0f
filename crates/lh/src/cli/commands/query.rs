//! Implementation of `lh query`.

use std::{
    io::{IsTerminal, stdout},
    process::ExitCode,
};

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use lh_elastic::{ElasticCompiler, Page};
use lh_highlight::Highlighter;
use lh_query::{MatchNode, QueryAssembler, QueryNode, SearchRequest};
use log::{info, warn};

use crate::cli::{args::QueryCommand, context::CommandContext};

/// Compiles the request and prints the search body.
pub fn run(ctx: &CommandContext, cmd: &QueryCommand) -> ExitCode {
    for w in ctx.config.validate() {
        warn!("config: {w}");
    }

    let mut compiler = match ElasticCompiler::new(&ctx.config.scoring) {
        Ok(compiler) => compiler,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(now) = cmd.output.now {
        compiler = compiler.with_origin(now);
    }

    let request = cmd.search_request();
    let tree = QueryAssembler::new(ctx.weights()).assemble(&request);
    let page = Page::new(
        cmd.output.from,
        cmd.output.size.unwrap_or(ctx.config.search.size),
    );
    info!(
        "index {}, page {}+{}, release origin {}",
        ctx.config.search.index,
        page.from,
        page.size,
        compiler.origin()
    );

    let hl = Highlighter::new(stdout().is_terminal());
    if cmd.output.explain {
        print_explain(&hl, &ctx.config.search.index, &request, &tree);
    }

    let body = compiler.search_body(&tree, page);
    let rendered = if cmd.output.compact {
        serde_json::to_string(&body)
    } else {
        serde_json::to_string_pretty(&body)
    };
    match rendered {
        Ok(json) => {
            println!("{}", hl.highlight_json(&json));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to render search body: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prints the target index, the request, the query tree and the text matchers.
fn print_explain(hl: &Highlighter, index: &str, request: &SearchRequest, tree: &QueryNode) {
    println!("{}", hl.header("Index:"));
    println!("   {}", search_endpoint(index));
    println!();

    println!("{}", hl.header("Request:"));
    println!("   text: {:?}", request.s);
    let facets = [
        ("media_type", request.media_type.as_deref()),
        ("content_type", request.content_type.as_deref()),
        ("claim_type", request.claim_type.as_deref()),
        ("channel_id", request.channel_id.as_deref()),
        ("channel", request.channel.as_deref()),
        ("claim_id", request.claim_id.as_deref()),
    ];
    for (name, value) in facets {
        if let Some(v) = value {
            println!("   {name}: {v:?}");
        }
    }
    if let Some(nsfw) = request.nsfw {
        println!("   nsfw: {nsfw}");
    }
    println!();

    println!("{}", hl.header("Query tree:"));
    for line in tree.to_string().lines() {
        println!("   {line}");
    }
    println!();

    println!("{}", hl.header("Text matchers:"));
    let matchers = text_matchers(tree);
    if matchers.is_empty() {
        println!("   {}", hl.dim("(none)"));
    } else {
        println!("{}", matcher_table(&matchers));
    }
    println!();
}

/// Returns the endpoint the search body is posted to.
fn search_endpoint(index: &str) -> String {
    format!("POST /{index}/_search")
}

/// Returns the matchers of the minimum-match clause.
fn text_matchers(tree: &QueryNode) -> Vec<&MatchNode> {
    tree.as_bool()
        .and_then(|root| root.must.first())
        .and_then(QueryNode::as_bool)
        .map(|minimum| minimum.should.iter().filter_map(QueryNode::as_match).collect())
        .unwrap_or_default()
}

/// Builds the text matcher table.
fn matcher_table(matchers: &[&MatchNode]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Name", "Field", "Mode", "Boost", "Value"]);
    for m in matchers {
        table.add_row(vec![
            Cell::new(m.name.unwrap_or("-")),
            Cell::new(m.field.as_str()),
            Cell::new(m.mode.label()),
            Cell::new(m.boost.map_or_else(|| "-".to_string(), |b| format!("{b}"))),
            Cell::new(m.value.to_string()),
        ]);
    }
    table
}
