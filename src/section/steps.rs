//! Movement steps
//!
//! Each `\`-separated step is read from its first clause:
//!
//! ```text
//! NE-PR                                       advance, succeeded
//! Can't Move on Ocean to N of HEX             advance, prohibited
//! Cannot Move Wagons into Swamp to SW of HEX  advance, prohibited
//! No Ford on River to S of HEX                advance, blocked
//! Not enough M.P's to move to NE into PRAIRIE advance, out of movement points
//! Still | No Movement | (empty)               stay in place
//! anything else                               observation only
//! ```
//!
//! Remaining clauses are observations of the hex the step ended in.

use super::context::{SectionReader, clause_span, joined};
use super::observations::ReportBuilder;
use crate::model::{BorderKind, Direction, Edge, Move, MoveKind, MoveResult, Terrain};
use crate::parser::errors::{Diagnostic, ErrorCode};
use crate::parser::{self, SyntaxKind};
use crate::syntax::{ClauseText, StepText, Word, extract_step};

/// Read every step of a step list, in source order
pub(super) fn read_steps(list: &parser::StepList, reader: &mut SectionReader<'_, '_>) -> Vec<Move> {
    let steps: Vec<StepText> = list.steps().map(|s| extract_step(&s, reader.ctx.index)).collect();

    let mut moves = Vec::new();
    for (position, step) in steps.iter().enumerate() {
        if step.is_empty() {
            continue;
        }
        let Some(mut step_move) = read_step(step, reader) else {
            continue;
        };
        step_move.step_no = position as u32 + 1;
        moves.push(step_move);
    }

    // `Move \` and friends: nothing but empty steps means the unit stayed put
    if moves.is_empty() && steps.iter().all(StepText::is_empty) {
        if let Some(first) = steps.first() {
            moves.push(Move::new(MoveKind::Still, MoveResult::StayedInPlace, first.span));
        }
    }
    moves
}

/// The observation-only step of a status line. Its first clause names the
/// terrain of the hex the unit ended the turn in.
pub(super) fn read_status(list: &parser::StepList, reader: &mut SectionReader<'_, '_>) -> Option<Move> {
    let steps: Vec<StepText> = list.steps().map(|s| extract_step(&s, reader.ctx.index)).collect();
    let mut clauses = steps.iter().flat_map(|s| s.clauses.iter()).filter(|c| !is_wrecked(c));
    let first = clauses.next()?;

    reader.in_status = true;
    let mut builder = ReportBuilder::new();
    match Terrain::lookup(&joined(&first.words)) {
        Some(terrain) if first.groups.is_empty() => builder.set_terrain(terrain),
        _ => builder.observe(first, reader),
    }
    for clause in clauses {
        builder.observe(clause, reader);
    }
    reader.in_status = false;

    let mut status = Move::new(MoveKind::Still, MoveResult::StayedInPlace, clause_span(first));
    status.report = builder.finish();
    Some(status)
}

/// A clause recovery swallowed whole. Its diagnostic is already recorded.
fn is_wrecked(clause: &ClauseText) -> bool {
    clause.bad && clause.words.is_empty() && clause.groups.is_empty()
}

fn read_step(step: &StepText, reader: &mut SectionReader<'_, '_>) -> Option<Move> {
    let clauses: Vec<&ClauseText> = step.clauses.iter().filter(|c| !is_wrecked(c)).collect();
    let (first, rest) = clauses.split_first()?;

    let mut builder = ReportBuilder::new();
    let (kind, result) = match first_clause(first, &mut builder, reader) {
        Some(outcome) => outcome,
        None => {
            builder.observe(first, reader);
            (MoveKind::Still, MoveResult::StayedInPlace)
        }
    };
    for clause in rest {
        builder.observe(clause, reader);
    }

    let mut step_move = Move::new(kind, result, clause_span(first));
    step_move.report = builder.finish();
    Some(step_move)
}

/// What the step did, or `None` for an observation-only step
fn first_clause(
    clause: &ClauseText,
    builder: &mut ReportBuilder,
    reader: &mut SectionReader<'_, '_>,
) -> Option<(MoveKind, MoveResult)> {
    let words = clause.words.as_slice();
    if words.is_empty() {
        return None;
    }
    if let Some(outcome) = advance(words, builder, reader) {
        return Some(outcome);
    }
    if let Some(outcome) = failure(clause, builder, reader) {
        return Some(outcome);
    }
    let texts: Vec<String> = words.iter().map(|w| w.text.to_ascii_lowercase()).collect();
    match texts.as_slice() {
        [still] if still == "still" => Some((MoveKind::Still, MoveResult::StayedInPlace)),
        [no, movement] if no == "no" && movement == "movement" => {
            Some((MoveKind::Still, MoveResult::StayedInPlace))
        }
        _ => None,
    }
}

fn direction(word: &Word) -> Option<Direction> {
    word.text.parse().ok()
}

/// `DIR-TERRAIN`
fn advance(
    words: &[Word],
    builder: &mut ReportBuilder,
    reader: &mut SectionReader<'_, '_>,
) -> Option<(MoveKind, MoveResult)> {
    let [dir, dash, terrain @ ..] = words else {
        return None;
    };
    if !dash.is(SyntaxKind::DASH) {
        return None;
    }
    let direction = direction(dir)?;

    let name = joined(terrain);
    match Terrain::lookup(&name) {
        Some(terrain) => builder.set_terrain(terrain),
        None => {
            let (message, span) = match terrain.first() {
                Some(word) => (format!("unknown terrain '{name}'"), word.span),
                None => (format!("missing terrain after '{}-'", dir.text), dash.span),
            };
            reader.report(Diagnostic::error(ErrorCode::E0402, message, span));
        }
    }
    Some((MoveKind::Advance(direction), MoveResult::Succeeded))
}

/// Failure phrases
fn failure(
    clause: &ClauseText,
    builder: &mut ReportBuilder,
    reader: &mut SectionReader<'_, '_>,
) -> Option<(MoveKind, MoveResult)> {
    let words = clause.words.as_slice();
    let texts: Vec<String> = words.iter().map(|w| w.text.to_ascii_lowercase()).collect();
    let starts = |prefix: &[&str]| texts.len() >= prefix.len() && texts.iter().zip(prefix).all(|(a, b)| a == b);

    let blocked = if starts(&["can't", "move", "on"]) {
        terrain_to_direction(words, &texts, 3).map(|(t, d)| (t.map(BorderKind::Terrain), d, MoveResult::Prohibited))
    } else if starts(&["cannot", "move", "wagons", "into"]) {
        terrain_to_direction(words, &texts, 4).map(|(t, d)| (t.map(BorderKind::Terrain), d, MoveResult::Prohibited))
    } else if starts(&["no", "ford", "on", "river", "to"]) {
        words
            .get(5)
            .and_then(direction)
            .map(|d| (Some(BorderKind::Edge(Edge::River)), d, MoveResult::Blocked))
    } else if starts(&["not", "enough"]) {
        exhausted(words, &texts).map(|(t, d)| {
            (
                t.map(BorderKind::Terrain),
                d,
                MoveResult::ExhaustedMovementPoints,
            )
        })
    } else {
        None
    };
    if let Some((border, direction, result)) = blocked {
        if let Some(kind) = border {
            builder.add_border(direction, kind);
        }
        return Some((MoveKind::Advance(direction), result));
    }

    let first_direction = words.iter().find_map(direction);
    let kind = first_direction.map_or(MoveKind::Still, MoveKind::Advance);
    if texts.iter().any(|t| t.contains("vanished")) {
        return Some((kind, MoveResult::Vanished));
    }
    if texts.iter().any(|t| matches!(t.as_str(), "can't" | "cannot" | "unable")) {
        if first_direction.is_none() {
            reader.report(Diagnostic::warning(
                ErrorCode::W0402,
                format!("failure without a direction '{}'", clause.text.trim()),
                clause_span(clause),
            ));
        }
        return Some((kind, MoveResult::Failed));
    }
    None
}

/// `<terrain words> to DIR` starting at word `from`
fn terrain_to_direction(words: &[Word], texts: &[String], from: usize) -> Option<(Option<Terrain>, Direction)> {
    let to = from + texts.get(from..)?.iter().position(|t| t == "to")?;
    let direction = direction(words.get(to + 1)?)?;
    Some((Terrain::lookup(&joined(&words[from..to])), direction))
}

/// `Not enough M.P's to move to DIR into <terrain words>`
fn exhausted(words: &[Word], texts: &[String]) -> Option<(Option<Terrain>, Direction)> {
    let into = texts.iter().position(|t| t == "into")?;
    let direction = direction(words.get(into.checked_sub(1)?)?)?;
    Some((Terrain::lookup(&joined(&words[into + 1..])), direction))
}
