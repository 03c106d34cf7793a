//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::commands::read_json;
use crate::error::Result;
use crate::output::Formatter;
use vouch_domain::AttributeNode;
use vouch_gatekeeper::{Gatekeeper, GatingConfig};

/// Execute the score command.
pub fn execute_score(args: ScoreArgs, config: GatingConfig, formatter: &Formatter) -> Result<()> {
    let tree: AttributeNode = read_json(&args.tree)?;
    let gatekeeper = Gatekeeper::new(config)?;

    let score = gatekeeper.score_document(&tree);
    println!("{}", formatter.format_score(&score)?);

    Ok(())
}
