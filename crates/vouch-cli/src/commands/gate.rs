//! Gate command implementation.

use crate::cli::GateArgs;
use crate::commands::read_json;
use crate::error::Result;
use crate::output::Formatter;
use vouch_domain::AttributeNode;
use vouch_gatekeeper::{ComponentBinding, Gatekeeper, GatingConfig};

/// Execute the gate command.
pub fn execute_gate(args: GateArgs, config: GatingConfig, formatter: &Formatter) -> Result<()> {
    let tree: AttributeNode = read_json(&args.tree)?;
    let bindings: Vec<ComponentBinding> = read_json(&args.bindings)?;
    let gatekeeper = Gatekeeper::new(config)?;

    let plan = gatekeeper.plan(&tree, &bindings);
    println!("{}", formatter.format_plan(&plan)?);

    Ok(())
}
