//! Prominence command implementation.

use crate::cli::ProminenceArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use vouch_gatekeeper::{Gatekeeper, GatingConfig};

/// Execute the prominence command.
pub fn execute_prominence(args: ProminenceArgs, config: GatingConfig, formatter: &Formatter) -> Result<()> {
    if !(0.0..=1.0).contains(&args.confidence) {
        return Err(CliError::InvalidInput(
            "Confidence must be between 0.0 and 1.0".to_string(),
        ));
    }

    let gatekeeper = Gatekeeper::new(config)?;
    let level = gatekeeper.prominence(args.confidence);
    let component = args.component.as_deref().map(|id| {
        (
            id,
            gatekeeper.thresholds().minimum_for(id),
            gatekeeper.should_show(id, args.confidence),
        )
    });

    println!("{}", formatter.format_prominence(args.confidence, level, component)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[test]
    fn test_out_of_range_confidence() {
        let args = ProminenceArgs {
            confidence: 1.2,
            component: None,
        };
        let formatter = Formatter::new(OutputFormat::Table, false);
        let result = execute_prominence(args, GatingConfig::default(), &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
