//! Section grammar: one unit's lines → that unit's [`Moves`].
//!
//! A unit section starts at its location line and runs to the next one.
//! Within it the first directive decides how the unit moved:
//!
//! ```text
//! Tribe Follows 0988        follows another unit, nothing else moves it
//! Tribe Goes to QQ 0203     sent to a hex, nothing else moves it
//! Tribe Movement: Move ...  its own steps, in source order
//! ```
//!
//! Directive lines after the deciding one are ignored with an info
//! diagnostic. Scout lines and scry lines are read after the unit's own
//! steps. The first status line adds a final observation-only step; any
//! later one is ignored the same way.
//!
//! Structural damage was already recovered by the CST builder, so a bad
//! line costs only what it held. Nothing in this module panics or aborts
//! the report.

mod context;
mod observations;
mod steps;

use smol_str::SmolStr;
use tracing::{debug, trace};

pub use context::SectionContext;
use context::SectionReader;
use steps::{read_status, read_steps};

use crate::base::Span;
use crate::model::{Direction, HexTarget, Move, MoveKind, MoveResult, Moves, Scout, Scry, UnitId, WindStrength, Winds};
use crate::parser::errors::{Diagnostic, DiagnosticCollector, ErrorCode};
use crate::parser::{self, AstNode, Line};
use crate::syntax::{self, HexLocation, TurnInfo, UnitLocation};

/// Everything read from one unit section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutput {
    pub location: Option<UnitLocation>,
    /// Turn headers found inside the section
    pub turn_infos: Vec<TurnInfo>,
    /// `None` when the unit id could not be read
    pub moves: Option<Moves>,
    /// Goto targets given by name, with where they were written
    pub special_names: Vec<(SmolStr, Span)>,
}

/// The directive that decided the unit's movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Follows,
    GoesTo,
    Movement,
}

impl Directive {
    fn describe(self) -> &'static str {
        match self {
            Self::Follows => "the unit follows another unit",
            Self::GoesTo => "the unit was sent to a hex",
            Self::Movement => "the unit moved on its own",
        }
    }
}

/// Parse one unit section into that unit's moves.
pub fn parse_section(
    section: &parser::UnitSection,
    ctx: &SectionContext<'_>,
    diagnostics: &mut DiagnosticCollector,
) -> SectionOutput {
    let location = section
        .location()
        .map(|l| syntax::extract_unit_location(&l, ctx.index));
    let unit = location.as_ref().and_then(|l| unit_id(l, diagnostics));

    let mut reader = SectionReader {
        ctx,
        unit: unit.clone(),
        diagnostics,
        in_status: false,
        special_names: Vec::new(),
    };

    let mut moves = match (&unit, &location) {
        (Some(unit), Some(location)) => {
            debug!(unit = %unit, turn = %ctx.turn, "reading unit section");
            Some(Moves::new(
                unit.clone(),
                ctx.turn,
                location.previous.hex.clone(),
                location.current.hex.clone(),
            ))
        }
        _ => None,
    };

    let mut turn_infos = Vec::new();
    let mut decided: Option<Directive> = None;
    let mut status: Option<Move> = None;
    let mut status_line: Option<u32> = None;
    let mut scouts = Vec::new();
    let mut scries = Vec::new();

    for line in section.lines() {
        let span = Span::from_range(line.syntax().text_range(), ctx.index);
        match &line {
            Line::TurnInfo(info) => turn_infos.push(syntax::extract_turn_info(info, ctx.index)),
            Line::Follows(follows) => {
                if ignored(decided, Directive::Follows, span, &mut reader) {
                    continue;
                }
                let Some(target) = follows.target() else {
                    continue;
                };
                let target = syntax::extract_unit_id(&target, ctx.index);
                let Ok(target) = target.text.parse::<UnitId>() else {
                    reader.report(Diagnostic::error(
                        ErrorCode::E0304,
                        format!("malformed unit id '{}'", target.text),
                        target.span,
                    ));
                    continue;
                };
                trace!(target = %target, "follows");
                decided = Some(Directive::Follows);
                if let Some(moves) = moves.as_mut() {
                    moves.follows = Some(target.clone());
                    moves.directive = Some(directive_move(MoveKind::Follows(target), span));
                }
            }
            Line::GoesTo(goes_to) => {
                if ignored(decided, Directive::GoesTo, span, &mut reader) {
                    continue;
                }
                let Some(target) = goes_to_target(goes_to, &mut reader) else {
                    continue;
                };
                trace!(?target, "goes to");
                decided = Some(Directive::GoesTo);
                if let Some(moves) = moves.as_mut() {
                    moves.goes_to = Some(target.clone());
                    moves.directive = Some(directive_move(MoveKind::GoesTo(target), span));
                }
            }
            Line::Movement(movement) => {
                if matches!(decided, Some(Directive::Follows | Directive::GoesTo)) {
                    ignored(decided, Directive::Movement, span, &mut reader);
                    continue;
                }
                decided = Some(Directive::Movement);
                let steps = movement
                    .step_list()
                    .map(|list| read_steps(&list, &mut reader))
                    .unwrap_or_default();
                trace!(steps = steps.len(), "movement");
                if let Some(moves) = moves.as_mut() {
                    moves.steps.extend(steps);
                    if moves.winds.is_none() {
                        moves.winds = movement.winds().and_then(|w| winds(&w));
                    }
                }
            }
            Line::Scout(scout) => {
                // a scout line that lost its steps to recovery adds nothing
                let Some(list) = scout.step_list() else {
                    continue;
                };
                let index = scout.index().and_then(|t| t.text().parse().ok()).unwrap_or(0);
                let steps = read_steps(&list, &mut reader);
                trace!(index, steps = steps.len(), "scout");
                scouts.push(Scout { index, steps });
            }
            Line::Status(line) => {
                if let Some(first) = status_line {
                    reader.report(
                        Diagnostic::info(ErrorCode::E0504, "status line ignored", span)
                            .with_note(format!("status already reported on line {first}")),
                    );
                    continue;
                }
                status_line = Some(span.line);
                status = line.step_list().and_then(|list| read_status(&list, &mut reader));
            }
            Line::Scry(scry) => {
                if ctx.ignore_scries {
                    continue;
                }
                scries.push(read_scry(scry, &mut reader));
            }
            Line::UnitLocation(_) | Line::Text(_) | Line::Blank(_) => {}
        }
    }

    if let Some(moves) = moves.as_mut() {
        if let Some(status) = status {
            match moves.directive.as_mut() {
                // steps stay empty for follows and goes-to
                Some(directive) => directive.report = status.report,
                None => moves.steps.push(status),
            }
        }
        moves.scouts = scouts;
        moves.scries = scries;
        debug!(
            unit = %moves.unit,
            steps = moves.steps.len(),
            scouts = moves.scouts.len(),
            scries = moves.scries.len(),
            "unit section done"
        );
    }

    SectionOutput {
        location,
        turn_infos,
        moves,
        special_names: reader.special_names,
    }
}

fn unit_id(location: &UnitLocation, diagnostics: &mut DiagnosticCollector) -> Option<UnitId> {
    let text = &location.unit_id.text;
    if text.is_empty() {
        // the CST builder already reported the missing id
        return None;
    }
    match text.parse() {
        Ok(unit) => Some(unit),
        Err(err) => {
            diagnostics.add(Diagnostic::error(ErrorCode::E0304, err.to_string(), location.unit_id.span));
            None
        }
    }
}

/// Record that `line` came after the deciding directive. Returns true when
/// the line is to be skipped.
fn ignored(decided: Option<Directive>, line: Directive, span: Span, reader: &mut SectionReader<'_, '_>) -> bool {
    let Some(decided) = decided else {
        return false;
    };
    let what = match line {
        Directive::Follows => "follows line",
        Directive::GoesTo => "goes to line",
        Directive::Movement => "movement line",
    };
    reader.report(
        Diagnostic::info(ErrorCode::E0504, format!("{what} ignored"), span)
            .with_note(format!("{} earlier in this section", decided.describe())),
    );
    true
}

fn directive_move(kind: MoveKind, span: Span) -> Move {
    Move::new(kind, MoveResult::Succeeded, span)
}

fn goes_to_target(line: &parser::GoesToLine, reader: &mut SectionReader<'_, '_>) -> Option<HexTarget> {
    if let Some(hex) = line.hex() {
        return Some(HexTarget::Hex(syntax::extract_hex(&hex, reader.ctx.index)));
    }
    let name = line.name()?;
    let text = SmolStr::new(name.text());
    let span = Span::from_range(name.syntax().text_range(), reader.ctx.index);
    reader.special_names.push((text.clone(), span));
    Some(HexTarget::Special(text))
}

fn winds(node: &parser::Winds) -> Option<Winds> {
    let strength: WindStrength = node.strength()?.text().parse().ok()?;
    let from: Direction = node.direction()?.text().parse().ok()?;
    Some(Winds { strength, from })
}

fn read_scry(scry: &parser::ScryLine, reader: &mut SectionReader<'_, '_>) -> Scry {
    let index = reader.ctx.index;
    let origin = match scry.origin() {
        Some(hex) => syntax::extract_hex(&hex, index),
        None => HexLocation::Malformed {
            text: SmolStr::default(),
            span: Span::from_range(scry.syntax().text_range(), index),
        },
    };
    let kind = scry.kind().map(|t| SmolStr::new(t.text())).unwrap_or_default();

    let mut moves = None;
    let mut scout = None;
    let mut text = SmolStr::default();
    if let Some(payload) = scry.payload() {
        text = SmolStr::new(payload.text());
        // A plain payload is free text, only move and scout payloads carry steps
        if payload.is_scout() || payload.is_move() {
            let steps = payload
                .step_list()
                .map(|list| read_steps(&list, reader))
                .unwrap_or_default();
            if payload.is_scout() {
                let number = payload
                    .scout_index()
                    .and_then(|t| t.text().parse().ok())
                    .unwrap_or(0);
                scout = Some(Scout { index: number, steps });
            } else {
                moves = Some(steps);
            }
        }
    }
    trace!(kind = %kind, "scry");
    Scry {
        kind,
        origin,
        text,
        moves,
        scout,
    }
}
