//! Console output formatter for prediction results

use churn_domain::{ColumnEncoding, DisplayState, FeatureVector, InvocationState, SCHEMA};
use colored::{Color, ColoredString, Colorize};
use serde_json::json;

/// Formats prediction state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn ANSI colours on or off for everything this process prints
    pub fn set_color_enabled(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Message framed by a border, each in its tone's colour
    pub fn format(state: &InvocationState) -> String {
        let display = DisplayState::from(state);
        let text_color = Self::color(display.tone.text_color());
        let border_color = Self::color(display.tone.border_color());

        let width = display.message.chars().count() + 2;
        let edge = format!("+{}+", "-".repeat(width));

        format!(
            "{}\n{} {} {}\n{}",
            edge.color(border_color),
            "|".color(border_color),
            Self::emphasise(&display.message, state).color(text_color),
            "|".color(border_color),
            edge.color(border_color)
        )
    }

    /// JSON record of the state
    pub fn format_json(state: &InvocationState) -> String {
        let display = DisplayState::from(state);
        let mut record = json!({
            "status": state.as_str(),
            "message": display.message,
            "color": display.tone.text_color(),
        });

        if let InvocationState::Succeeded { assessment } = state {
            record["probability"] = json!(assessment.probability);
            record["percentage"] = json!(assessment.percentage());
            record["risk"] = json!(assessment.level);
        }

        serde_json::to_string_pretty(&record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Encoded payload, followed by one line per column
    pub fn format_features(features: &FeatureVector) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n\n", "Payload:".cyan().bold(), features));

        for (i, (name, value)) in features.columns().enumerate() {
            output.push_str(&format!("  {:>2}  {:<40} {}\n", i + 1, name, value));
        }

        output
    }

    pub fn format_features_json(features: &FeatureVector) -> String {
        let columns: serde_json::Map<String, serde_json::Value> = features
            .columns()
            .map(|(name, value)| (name.to_string(), json!(value.as_f64())))
            .collect();

        serde_json::to_string_pretty(&json!({
            "features": features.to_wire(),
            "columns": columns,
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// Table of model input columns in wire order
    pub fn format_schema() -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Feature schema (wire order)"));
        for (i, column) in SCHEMA.iter().enumerate() {
            let encoding = match column.encoding {
                ColumnEncoding::Flag => "Yes -> 1".to_string(),
                ColumnEncoding::Decimal => "decimal".to_string(),
                ColumnEncoding::Indicator(category) => format!("= \"{}\"", category),
            };
            output.push_str(&format!(
                "  {:>2}  {:<40} {:<18} {}\n",
                i + 1,
                column.name,
                column.field.id(),
                encoding.dimmed()
            ));
        }

        output
    }

    fn emphasise(message: &str, state: &InvocationState) -> ColoredString {
        if state.is_terminal() {
            message.bold()
        } else {
            message.normal()
        }
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Terminal colour for a CSS-style colour (`#333`, `#D9534F`, `red`)
    pub fn color(css: &str) -> Color {
        match css.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex).unwrap_or(Color::White),
            None => css.parse().unwrap_or(Color::White),
        }
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        let expanded: String = match hex.len() {
            3 => hex.chars().flat_map(|c| [c, c]).collect(),
            6 => hex.to_string(),
            _ => return None,
        };
        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();

        Some(Color::TrueColor {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}
