use clap::Args;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Args, Debug, Clone, Default)]
pub struct SessionConfig {
    /// Only re-prompt malformed numbers in direct-entry units/grade; abort elsewhere.
    #[arg(long, default_value_t = false)]
    pub legacy_input: bool,

    /// How the end-of-round summary is rendered (table or json).
    #[arg(long, default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,
}

impl SessionConfig {
    pub fn input_policy(&self) -> InputPolicy {
        if self.legacy_input {
            InputPolicy::Legacy
        } else {
            InputPolicy::Uniform
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, EnumIter, Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

/// Which numeric prompts re-ask on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPolicy {
    /// Every numeric prompt re-asks.
    Uniform,
    /// Only the direct-entry units and grade prompts re-ask; any other
    /// malformed number ends the session with an error.
    Legacy,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_report_format_round_trips_through_display() {
        for format in ReportFormat::iter() {
            assert_eq!(ReportFormat::from_str(&format.to_string()), Ok(format));
        }
        assert_eq!(ReportFormat::from_str("JSON"), Ok(ReportFormat::Json));
    }

    #[test]
    fn test_default_policy_is_uniform() {
        assert_eq!(SessionConfig::default().input_policy(), InputPolicy::Uniform);
        let legacy = SessionConfig {
            legacy_input: true,
            ..Default::default()
        };
        assert_eq!(legacy.input_policy(), InputPolicy::Legacy);
    }
}
