//! Merge command implementation.

use crate::cli::MergeArgs;
use crate::commands::read_json;
use crate::error::Result;
use crate::output::Formatter;
use vouch_domain::{merge_conf, Conf};

/// Execute the merge command.
pub fn execute_merge(args: MergeArgs, formatter: &Formatter) -> Result<()> {
    let first: Conf<serde_json::Value> = read_json(&args.first)?;
    let second: Conf<serde_json::Value> = read_json(&args.second)?;

    let merged = merge_conf(&first, &second);
    tracing::debug!(
        first = first.confidence,
        second = second.confidence,
        merged = merged.confidence,
        sources = merged.sources.len(),
        "Merged observations"
    );
    println!("{}", formatter.format_conf(&merged)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use crate::output::OutputFormat;
    use std::io::Write;

    #[test]
    fn test_merge_rejects_sourceless_wrapper() {
        let mut first = tempfile::NamedTempFile::new().unwrap();
        write!(first, r#"{{"value": "x", "confidence": 0.9, "sources": []}}"#).unwrap();

        let args = MergeArgs {
            first: first.path().to_path_buf(),
            second: first.path().to_path_buf(),
        };
        let formatter = Formatter::new(OutputFormat::Json, false);
        match execute_merge(args, &formatter) {
            Err(CliError::Serialization(err)) => {
                assert!(err.to_string().contains("at least one source"))
            }
            other => panic!("Expected Serialization error, got {:?}", other),
        }
    }
}
