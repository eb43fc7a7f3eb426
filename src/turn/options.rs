//! Settings for assembling one report into a turn.

use crate::model::TurnId;

/// Options for [`parse_turn`](super::parse_turn).
///
/// Built with `Default` and the `with_*` methods:
///
/// ```
/// use turnscan::turn::ParseOptions;
/// use turnscan::model::TurnId;
///
/// let options = ParseOptions::default()
///     .with_file_name("0899-12.0987.report.txt")
///     .with_expected_turn(TurnId::new(899, 12))
///     .with_special_names(["Home Base"]);
/// assert_eq!(options.special_names, vec!["Home Base".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name shown in rendered diagnostics
    pub file_name: String,
    /// Turn the caller expects the report to be for
    pub expected_turn: Option<TurnId>,
    /// Hex names that may appear as goto targets
    pub special_names: Vec<String>,
    /// Treat unrecognized observations as errors
    pub strict_observations: bool,
    /// Skip scry lines
    pub ignore_scries: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            file_name: "<input>".to_string(),
            expected_turn: None,
            special_names: Vec::new(),
            strict_observations: false,
            ignore_scries: false,
        }
    }
}

impl ParseOptions {
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn with_expected_turn(mut self, turn: TurnId) -> Self {
        self.expected_turn = Some(turn);
        self
    }

    pub fn with_special_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_strict_observations(mut self, strict: bool) -> Self {
        self.strict_observations = strict;
        self
    }

    pub fn with_ignore_scries(mut self, ignore: bool) -> Self {
        self.ignore_scries = ignore;
        self
    }

    /// The configured spelling of a special hex name, matched ignoring case
    pub fn special_name(&self, name: &str) -> Option<&str> {
        self.special_names
            .iter()
            .find(|known| known.to_lowercase() == name.to_lowercase())
            .map(String::as_str)
    }
}
