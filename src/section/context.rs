//! Section context: settings and state shared while one unit section is read.

use smol_str::SmolStr;

use crate::base::{LineIndex, Span};
use crate::model::{TurnId, UnitId};
use crate::parser::errors::{Diagnostic, DiagnosticCollector, ErrorCode, Severity};
use crate::syntax::{ClauseText, Word};

/// Read-only settings for parsing the sections of one report
#[derive(Debug, Clone, Copy)]
pub struct SectionContext<'a> {
    /// Line index of the report the sections belong to
    pub index: &'a LineIndex,
    pub turn: TurnId,
    /// Report unrecognized observations as errors instead of warnings
    pub strict_observations: bool,
    pub ignore_scries: bool,
}

impl<'a> SectionContext<'a> {
    pub fn new(index: &'a LineIndex, turn: TurnId) -> Self {
        Self {
            index,
            turn,
            strict_observations: false,
            ignore_scries: false,
        }
    }
}

/// Per-section reading state passed through the step and observation readers
pub(super) struct SectionReader<'c, 'd> {
    pub ctx: &'c SectionContext<'c>,
    /// The unit the section reports on, when its id could be read
    pub unit: Option<UnitId>,
    pub diagnostics: &'d mut DiagnosticCollector,
    /// Reading a status line, where settlement names may appear
    pub in_status: bool,
    /// Goto targets given by name rather than coordinates
    pub special_names: Vec<(SmolStr, Span)>,
}

impl SectionReader<'_, '_> {
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.add(diagnostic);
    }

    /// Record a clause no observation rule matched
    pub fn unrecognized(&mut self, clause: &ClauseText) {
        let severity = if self.ctx.strict_observations {
            Severity::Error
        } else {
            Severity::Warning
        };
        self.report(
            Diagnostic::builder(ErrorCode::W0401)
                .message(format!("unrecognized observation '{}'", clause.text.trim()))
                .span(clause_span(clause))
                .severity(severity)
                .build(),
        );
    }

    /// Whether an encountered unit belongs to the reporting unit's clan
    pub fn is_friendly(&self, other: &UnitId) -> bool {
        self.unit.as_ref().is_some_and(|unit| unit.same_clan(other))
    }
}

/// Span of a clause's first word, or of the whole clause when it has none.
/// Clause nodes start at their leading whitespace.
pub(super) fn clause_span(clause: &ClauseText) -> Span {
    clause.words.first().map_or(clause.span, |w| w.span)
}

/// Word texts joined by single spaces
pub(super) fn joined(words: &[Word]) -> String {
    words.iter().map(|w| w.text.as_str()).collect::<Vec<_>>().join(" ")
}
