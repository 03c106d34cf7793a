//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use colored::*;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use vouch_domain::{Conf, ProminenceLevel};
use vouch_gatekeeper::{DocumentScore, RenderPlan};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a document score.
    pub fn format_score(&self, score: &DocumentScore) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(score)?);
        }

        if score.leaf_count == 0 {
            return Ok(self.warning("No scored attributes found."));
        }

        let mut builder = Builder::default();
        builder.push_record(["Section", "Confidence", "Prominence"]);
        for (section, confidence) in &score.sections {
            builder.push_record([
                section.clone(),
                format!("{:.2}", confidence),
                self.prominence_label(vouch_domain::get_prominence_level(*confidence)),
            ]);
        }

        let overall = format!(
            "Overall: {:.2} ({} attributes)",
            score.overall, score.leaf_count
        );
        Ok(format!("{}\n{}", self.table(builder), self.info(&overall)))
    }

    /// Format a render plan.
    pub fn format_plan(&self, plan: &RenderPlan) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(plan)?);
        }

        if plan.decisions.is_empty() {
            return Ok(self.warning("No component bindings given."));
        }

        let mut builder = Builder::default();
        builder.push_record(["Component", "Attribute", "Confidence", "Prominence", "Show"]);
        for decision in &plan.decisions {
            let show = match (decision.visible, decision.placeholder, decision.missing) {
                (_, _, true) => self.colorize("missing", "red"),
                (true, true, _) => self.colorize("placeholder", "yellow"),
                (true, false, _) => self.colorize("yes", "green"),
                (false, _, _) => self.colorize("no", "red"),
            };
            builder.push_record([
                decision.component.clone(),
                decision.attribute.clone(),
                format!("{:.2}", decision.confidence),
                self.prominence_label(decision.prominence),
                show,
            ]);
        }

        let summary = format!(
            "{} of {} component(s) visible",
            plan.visible_count(),
            plan.decisions.len()
        );
        Ok(format!("{}\n{}", self.table(builder), self.info(&summary)))
    }

    /// Format a wrapper.
    pub fn format_conf(&self, conf: &Conf<serde_json::Value>) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(conf)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Kind", "Id / URL", "Retrieved"]);
        for source in &conf.sources {
            builder.push_record([
                source.kind.to_string(),
                source
                    .id
                    .clone()
                    .or_else(|| source.url.clone())
                    .unwrap_or_else(|| "-".to_string()),
                source.retrieved_at.to_rfc3339(),
            ]);
        }

        let mut header = format!(
            "Value: {}\nConfidence: {:.2} ({})",
            conf.value,
            conf.confidence,
            self.prominence_label(vouch_domain::get_prominence_level(conf.confidence))
        );
        if let Some(rationale) = &conf.rationale {
            header.push_str(&format!("\nRationale: {}", rationale));
        }
        if conf.is_placeholder {
            header.push_str(&format!("\n{}", self.warning("Placeholder content")));
        }

        Ok(format!("{}\n{}", header, self.table(builder)))
    }

    /// Format a prominence lookup, optionally with a component decision.
    pub fn format_prominence(
        &self,
        confidence: f64,
        level: ProminenceLevel,
        component: Option<(&str, f64, bool)>,
    ) -> Result<String> {
        if self.format == OutputFormat::Json {
            let mut value = json!({
                "confidence": confidence,
                "prominence": level,
            });
            if let Some((id, minimum, show)) = component {
                value["component"] = json!({
                    "id": id,
                    "minimum": minimum,
                    "show": show,
                });
            }
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut out = format!("{:.2} → {}", confidence, self.prominence_label(level));
        if let Some((id, minimum, show)) = component {
            let line = format!("{} requires {:.2}", id, minimum);
            out.push('\n');
            out.push_str(&if show { self.success(&line) } else { self.error(&line) });
        }
        Ok(out)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn prominence_label(&self, level: ProminenceLevel) -> String {
        let color = match level {
            ProminenceLevel::Prominent => "green",
            ProminenceLevel::Standard => "cyan",
            ProminenceLevel::Deemphasize => "yellow",
            ProminenceLevel::HideOrPlaceholder => "red",
        };
        self.colorize(level.as_str(), color)
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
