//! Command implementations for the Intentia CLI.

use std::io::{self, BufRead};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ParserConfig;
use crate::pipeline::QueryParser;

/// Execute a CLI command.
pub fn execute_command(args: IntentiaArgs) -> Result<()> {
    let parser = build_parser(&args)?;

    match &args.command {
        Command::Parse(parse_args) => parse_queries(&parser, parse_args, &args),
        Command::Stats(stats_args) => show_stats(&parser, stats_args, &args),
    }
}

/// Build a parser from `--config`, or with default settings.
fn build_parser(args: &IntentiaArgs) -> Result<QueryParser> {
    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            ParserConfig::from_file(path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })?
        }
        None => ParserConfig::default(),
    };
    QueryParser::new(config).context("Failed to build query parser")
}

/// Parse every query and print each result.
fn parse_queries(parser: &QueryParser, args: &ParseArgs, cli_args: &IntentiaArgs) -> Result<()> {
    let queries = collect_queries(&args.queries)?;
    let start = Instant::now();

    for query in &queries {
        let result = parser.parse_query(query);
        output_parsed_query(&result, cli_args)?;
    }

    debug!(
        "Parsed {} queries in {:.2}ms",
        queries.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(())
}

/// Parse the queries (optionally repeatedly) and print the statistics.
fn show_stats(parser: &QueryParser, args: &StatsArgs, cli_args: &IntentiaArgs) -> Result<()> {
    let queries = collect_queries(&args.queries)?;

    for _ in 0..args.repeat.max(1) {
        for query in &queries {
            parser.parse_query(query);
        }
    }

    Ok(output_statistics(&parser.statistics(), cli_args)?)
}

/// Use the given queries, or read non-blank stdin lines when there are none.
fn collect_queries(queries: &[String]) -> Result<Vec<String>> {
    if !queries.is_empty() {
        return Ok(queries.to_vec());
    }
    read_queries(io::stdin().lock())
}

fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            queries.push(line);
        }
    }
    Ok(queries)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_read_queries_skips_blank_lines() {
        let input = "show contract 123456\n\n   \nhello there\n";
        let queries = read_queries(input.as_bytes()).unwrap();
        assert_eq!(queries, vec!["show contract 123456", "hello there"]);
    }

    #[test]
    fn test_collect_prefers_arguments() {
        let queries = collect_queries(&["hi".to_string()]).unwrap();
        assert_eq!(queries, vec!["hi"]);
    }

    #[test]
    fn test_missing_config_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let args = IntentiaArgs::try_parse_from([
            "intentia",
            "--config",
            path.to_str().unwrap(),
            "parse",
            "hello",
        ])
        .unwrap();

        let error = execute_command(args).unwrap_err();
        let message = format!("{error:#}");
        assert!(message.starts_with("Failed to load configuration from"));
        assert!(message.contains("missing.json"));
        assert!(error.downcast_ref::<crate::error::IntentiaError>().is_some());
    }

    #[test]
    fn test_parse_command_runs() {
        let args = IntentiaArgs::try_parse_from(["intentia", "-q", "parse", "hello there"]).unwrap();
        assert!(execute_command(args).is_ok());
    }
}
