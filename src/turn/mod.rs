//! Turn assembly: one report → one [`Turn`].
//!
//! ```text
//! source ─▶ parse_report ─▶ turn header ─▶ parse_section (each unit) ─▶ Turn
//!                              │
//!                              └─ missing / malformed / zero / unexpected ─▶ ParseError
//! ```
//!
//! Structural and section problems are diagnostics returned next to the
//! turn. Only a header problem is fatal, since no step can be placed in a
//! turn without it.

mod error;
mod options;

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

pub use error::ParseError;
pub use options::ParseOptions;

use crate::base::LineIndex;
use crate::model::{SpecialHex, Turn, TurnId, UnitId};
use crate::parser::errors::{Diagnostic, DiagnosticCollector, ErrorCode, render_all};
use crate::parser::{AstNode, Parse, TurnReport, parse_report};
use crate::section::{SectionContext, parse_section};
use crate::syntax::extract_turn_info;

/// A parsed turn together with everything noticed along the way
#[derive(Debug, Clone)]
pub struct TurnOutput {
    pub turn: Turn,
    /// Recoverable problems, ordered by position in the report
    pub diagnostics: Vec<Diagnostic>,
    /// The lossless tree the turn was read from
    pub parse: Parse,
}

impl TurnOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Render every diagnostic against the report text
    pub fn render_diagnostics(&self, options: &ParseOptions, source: &str) -> String {
        render_all(&self.diagnostics, &options.file_name, source)
    }
}

/// Parse one report into a turn.
pub fn parse_turn(source: &str, options: &ParseOptions) -> Result<TurnOutput, ParseError> {
    let parse = parse_report(source);
    let index = LineIndex::new(source);
    let root = TurnReport::cast(parse.syntax()).ok_or(ParseError::MissingTurnHeader)?;

    let mut headers = root.turn_infos().map(|info| extract_turn_info(&info, &index));
    let Some(header) = headers.next() else {
        warn!(file = %options.file_name, "no turn header");
        return Err(ParseError::MissingTurnHeader);
    };
    if header.malformed {
        warn!(file = %options.file_name, line = header.span.line, "turn header is malformed");
        return Err(ParseError::MalformedTurnHeader { line: header.span.line });
    }
    if header.current.is_zero() {
        warn!(file = %options.file_name, line = header.span.line, "turn header reads as zero");
        return Err(ParseError::ZeroTurn { line: header.span.line });
    }
    if !(1..=12).contains(&header.current.month) {
        warn!(file = %options.file_name, line = header.span.line, month = header.current.month, "turn header month out of range");
        return Err(ParseError::MalformedTurnHeader { line: header.span.line });
    }
    let id = TurnId::new(header.current.year, header.current.month);
    if let Some(expected) = options.expected_turn {
        if expected != id {
            warn!(file = %options.file_name, %expected, found = %id, "unexpected turn");
            return Err(ParseError::TurnMismatch { expected, found: id });
        }
    }
    debug!(file = %options.file_name, turn = %id, line = header.span.line, "found turn header");

    let mut diagnostics = DiagnosticCollector::new();
    diagnostics.extend(parse.errors.iter().cloned());

    for later in headers {
        if later.current != header.current {
            let found = TurnId::new(later.current.year, later.current.month);
            diagnostics.add(
                Diagnostic::error(
                    ErrorCode::E0501,
                    format!("turn header says {found}, but the report is for {id}"),
                    later.span,
                )
                .with_note(format!("first turn header is on line {}", header.span.line)),
            );
        }
    }

    let mut turn = Turn::new(id);
    for name in &options.special_names {
        turn.special_names.insert(
            name.to_lowercase(),
            SpecialHex {
                name: name.as_str().into(),
                known: true,
            },
        );
    }

    let ctx = SectionContext {
        index: &index,
        turn: id,
        strict_observations: options.strict_observations,
        ignore_scries: options.ignore_scries,
    };
    let mut first_seen: FxHashMap<UnitId, u32> = FxHashMap::default();
    for section in root.sections() {
        let output = parse_section(&section, &ctx, &mut diagnostics);

        for (name, span) in output.special_names {
            if options.special_name(&name).is_some() {
                continue;
            }
            let key = name.to_lowercase();
            if turn.special_names.contains_key(&key) {
                continue;
            }
            diagnostics.add(Diagnostic::info(
                ErrorCode::E0503,
                format!("unknown special hex '{name}'"),
                span,
            ));
            turn.special_names.insert(key, SpecialHex { name, known: false });
        }

        let Some(moves) = output.moves else {
            continue;
        };
        let line = output.location.as_ref().map_or(0, |l| l.span.line);
        match turn.units.get_mut(&moves.unit) {
            Some(existing) => {
                let first = first_seen.get(&moves.unit).copied().unwrap_or_default();
                let span = output.location.map(|l| l.span).unwrap_or_default();
                diagnostics.add(
                    Diagnostic::warning(
                        ErrorCode::E0502,
                        format!("unit {} is reported more than once; moves merged", moves.unit),
                        span,
                    )
                    .with_note(format!("first reported on line {first}")),
                );
                if let Some(conflict) = existing.merge(moves) {
                    diagnostics.add(
                        Diagnostic::info(
                            ErrorCode::E0504,
                            format!("{} from the repeated section ignored", conflict.describe()),
                            span,
                        )
                        .with_note(format!("movement was decided by the section on line {first}")),
                    );
                }
            }
            None => {
                first_seen.insert(moves.unit.clone(), line);
                turn.units.insert(moves.unit.clone(), moves);
            }
        }
    }

    let mut diagnostics = diagnostics.into_vec();
    diagnostics.sort_by_key(|d| d.span.start);
    debug!(
        turn = %id,
        units = turn.units.len(),
        diagnostics = diagnostics.len(),
        "turn assembled"
    );
    Ok(TurnOutput {
        turn,
        diagnostics,
        parse,
    })
}

/// Parse a report given as raw bytes. Invalid UTF-8 is replaced, not rejected.
pub fn parse_turn_bytes(bytes: &[u8], options: &ParseOptions) -> Result<TurnOutput, ParseError> {
    parse_turn(&String::from_utf8_lossy(bytes), options)
}

/// Parse independent reports in parallel. Results keep the input order.
pub fn parse_many<S>(inputs: &[(S, ParseOptions)]) -> Vec<Result<TurnOutput, ParseError>>
where
    S: AsRef<str> + Sync,
{
    inputs
        .par_iter()
        .map(|(source, options)| parse_turn(source.as_ref(), options))
        .collect()
}

/// Read the turn and clan unit from a report file name such as
/// `0899-12.0987.report.txt`. Leading directories are ignored.
pub fn parse_turn_file_name(name: &str) -> Option<(TurnId, UnitId)> {
    let base = name.rsplit(['/', '\\']).next()?;
    let mut parts = base.split('.');
    let turn = parts.next()?.parse().ok()?;
    let unit = parts.next()?.parse().ok()?;
    match (parts.next(), parts.next(), parts.next()) {
        (Some("report"), Some("txt"), None) => Some((turn, unit)),
        _ => None,
    }
}
