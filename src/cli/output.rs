//! Output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;

use crate::cli::args::{IntentiaArgs, OutputFormat};
use crate::error::Result;
use crate::pipeline::ParsedQuery;
use crate::stats::Statistics;

/// Output a parsed query in the requested format.
pub fn output_parsed_query(query: &ParsedQuery, args: &IntentiaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                print!("{}", render_parsed_query(query, args.verbosity()));
            }
            Ok(())
        }
        OutputFormat::Json => output_json(query, args),
    }
}

/// Output parser statistics in the requested format.
pub fn output_statistics(stats: &Statistics, args: &IntentiaArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", render_statistics(stats));
            Ok(())
        }
        OutputFormat::Json => output_json(stats, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &IntentiaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Human-readable rendering of a parsed query. Metadata is included from
/// verbosity 2 upwards.
fn render_parsed_query(query: &ParsedQuery, verbosity: u8) -> String {
    let mut out = String::new();

    out.push_str(&format!("Query: {}\n", query.original_input));
    out.push_str("══════\n");

    if let Some(message) = query.error_message() {
        out.push_str(&format!("Intent: {}\n", query.intent));
        out.push_str(&format!("Error: {message}\n\n"));
        return out;
    }

    out.push_str(&format!("Processed: {}\n", query.processed_input));
    out.push_str(&format!(
        "Intent: {} (confidence {:.2})\n",
        query.intent, query.confidence
    ));

    let found: Vec<_> = query
        .entities
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .collect();
    if found.is_empty() {
        out.push_str("Entities: none\n");
    } else {
        out.push_str("Entities:\n");
        for (entity_type, values) in found {
            out.push_str(&format!("  {entity_type}: {}\n", values.join(", ")));
        }
    }

    if verbosity > 1 && !query.metadata.is_empty() {
        out.push_str("Metadata:\n");
        for (key, value) in &query.metadata {
            out.push_str(&format!("  {key}: {}\n", format_value(value)));
        }
        out.push_str(&format!("Processing id: {}\n", query.processing_id));
    }

    out.push('\n');
    out
}

fn render_statistics(stats: &Statistics) -> String {
    let mut out = String::new();

    out.push_str("Parser Statistics:\n");
    out.push_str("═════════════════\n");
    out.push_str(&format!("Total queries: {}\n", stats.total_queries));
    out.push_str(&format!("Cache hits: {}\n", stats.cache_hits));
    out.push_str(&format!(
        "Cache hit rate: {:.1}%\n",
        stats.cache_hit_rate * 100.0
    ));
    out.push_str(&format!("Cache size: {}\n", stats.cache_size));
    out.push_str(&format!(
        "Loaded models: {}\n",
        stats.loaded_capability_count
    ));

    if !stats.average_processing_times.is_empty() {
        out.push('\n');
        out.push_str("Average processing time:\n");
        out.push_str("───────────────────────\n");
        for (intent, millis) in &stats.average_processing_times {
            out.push_str(&format!("  {intent}: {millis:.3}ms\n"));
        }
    }

    out
}

/// Format a JSON value for display.
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        Value::Object(_) => "[object]".to_string(),
        Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::entity::{Entities, EntityType};
    use crate::intent::Intent;

    fn sample_query() -> ParsedQuery {
        let mut entities = Entities::new();
        entities.push_unique(EntityType::ContractNumbers, "123456");
        let mut query = ParsedQuery::new(
            Intent::ContractDetails,
            0.8,
            entities,
            "Show contract 123456",
            "show contract 123456",
        );
        query.add_metadata("keyPhrases", vec!["contract 123456".to_string()]);
        query
    }

    #[test]
    fn test_render_parsed_query() {
        let rendered = render_parsed_query(&sample_query(), 1);
        assert!(rendered.contains("Intent: CONTRACT_DETAILS (confidence 0.80)"));
        assert!(rendered.contains("contractNumbers: 123456"));
        assert!(!rendered.contains("Metadata"));
    }

    #[test]
    fn test_render_metadata_when_verbose() {
        let rendered = render_parsed_query(&sample_query(), 2);
        assert!(rendered.contains("keyPhrases: [contract 123456]"));
    }

    #[test]
    fn test_render_error() {
        let query = ParsedQuery::error("", "Input cannot be empty");
        let rendered = render_parsed_query(&query, 1);
        assert!(rendered.contains("Intent: ERROR"));
        assert!(rendered.contains("Error: Input cannot be empty"));
    }

    #[test]
    fn test_render_statistics() {
        let mut times = BTreeMap::new();
        times.insert(Intent::Greeting, 0.25);
        let stats = Statistics {
            total_queries: 4,
            cache_hits: 1,
            cache_hit_rate: 0.25,
            cache_size: 3,
            loaded_capability_count: 0,
            average_processing_times: times,
        };
        let rendered = render_statistics(&stats);
        assert!(rendered.contains("Cache hit rate: 25.0%"));
        assert!(rendered.contains("GREETING: 0.250ms"));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&Value::from(3)), "3");
        assert_eq!(format_value(&Value::Null), "null");
    }
}
