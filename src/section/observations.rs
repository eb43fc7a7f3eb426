//! Observation clauses: what a unit saw at the hex a step ended in.
//!
//! ```text
//! River S SE         border, edge feature
//! O NE, N            border, terrain, continued by a directions-only clause
//! 0987e1, 1234       encounters
//! Find 2 Jade        found resource or item
//! (Sight Land - N/NE, Sight Water - S)   far horizons
//! ```

use smol_str::SmolStr;

use super::context::{SectionReader, clause_span, joined};
use crate::model::{
    Border, BorderKind, Direction, Edge, Encounter, FarHorizon, FarTerrain, FoundItem, Report, Resource,
    Settlement, Terrain, UnitId,
};
use crate::parser::SyntaxKind;
use crate::parser::errors::{Diagnostic, ErrorCode};
use crate::syntax::{ClauseText, GroupText, Word};

/// Longest multi-word edge or terrain name (`LOW CONIFER MOUNTAINS`)
const MAX_NAME_WORDS: usize = 3;

/// Collects the observations of one step
#[derive(Debug, Default)]
pub(super) struct ReportBuilder {
    report: Report,
    /// Border kind of the previous clause, for directions-only clauses
    last_border: Option<BorderKind>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_terrain(&mut self, terrain: Terrain) {
        self.report.terrain = Some(terrain);
    }

    pub fn add_border(&mut self, direction: Direction, kind: BorderKind) {
        self.report.add_border(Border { direction, kind });
    }

    /// The finished report, or `None` when nothing was observed
    pub fn finish(self) -> Option<Report> {
        if self.report.is_empty() {
            None
        } else {
            Some(self.report.freeze())
        }
    }

    /// Interpret one clause. Unrecognized clauses are reported and skipped.
    pub fn observe(&mut self, clause: &ClauseText, reader: &mut SectionReader<'_, '_>) {
        for group in &clause.groups {
            self.observe_group(group, reader);
        }
        if clause.words.is_empty() {
            return;
        }

        let previous_border = self.last_border.take();
        // `SW` is both a direction and the swamp code: `SW N` is a swamp border
        let leads_with_terrain = clause.words.len() > 1 && Terrain::lookup(&clause.words[0].text).is_some();
        if let Some((kind, directions)) = leads_with_terrain.then(|| border(&clause.words)).flatten() {
            for direction in directions {
                self.add_border(direction, kind);
            }
            self.last_border = Some(kind);
            return;
        }

        if let Some(directions) = directions(&clause.words) {
            match previous_border {
                Some(kind) => {
                    for direction in directions {
                        self.add_border(direction, kind);
                    }
                    self.last_border = Some(kind);
                }
                None => reader.unrecognized(clause),
            }
            return;
        }

        if let Some((kind, directions)) = border(&clause.words) {
            for direction in directions {
                self.add_border(direction, kind);
            }
            self.last_border = Some(kind);
            return;
        }

        let text = joined(&clause.words);
        if text.eq_ignore_ascii_case("Nothing of interest found") {
            return;
        }

        if let Some(units) = encounters(&clause.words) {
            for unit in units {
                let friendly = reader.is_friendly(&unit);
                let encounter = Encounter { unit, friendly };
                if !self.report.encounters.contains(&encounter) {
                    self.report.encounters.push(encounter);
                }
            }
            return;
        }

        if clause.words[0].eq_ignore_case("Find") {
            if !self.find(&clause.words[1..]) {
                reader.unrecognized(clause);
            }
            return;
        }

        if let Some(resource) = Resource::lookup(&text) {
            self.add_resource(resource);
            return;
        }

        if self.report.terrain.is_none() {
            if let Some(terrain) = Terrain::lookup(&text) {
                self.report.terrain = Some(terrain);
                return;
            }
        }

        if reader.in_status && is_name(&clause.words) {
            self.report.settlements.push(Settlement {
                name: SmolStr::new(&text),
            });
            return;
        }

        reader.unrecognized(clause);
    }

    fn observe_group(&mut self, group: &GroupText, reader: &mut SectionReader<'_, '_>) {
        for clause in &group.clauses {
            if clause.words.is_empty() && clause.groups.is_empty() {
                continue;
            }
            match far_horizon(clause) {
                Some(sighting) => {
                    if !self.report.far_horizons.contains(&sighting) {
                        self.report.far_horizons.push(sighting);
                    }
                }
                None => reader.report(Diagnostic::error(
                    ErrorCode::E0403,
                    format!("malformed far horizon sighting '{}'", clause.text.trim()),
                    clause_span(clause),
                )),
            }
        }
    }

    /// `Find [qty] words`. Returns false when nothing follows `Find`.
    fn find(&mut self, rest: &[Word]) -> bool {
        let (quantity, name) = match rest.split_first() {
            Some((first, name)) if first.is(SyntaxKind::NUMBER) => (first.text.parse().ok(), name),
            _ => (None, rest),
        };
        if name.is_empty() {
            return false;
        }
        let name = joined(name);
        match Resource::lookup(&name) {
            Some(resource) => self.add_resource(resource),
            None => self.report.items.push(FoundItem {
                quantity,
                name: SmolStr::new(name),
            }),
        }
        true
    }

    fn add_resource(&mut self, resource: Resource) {
        if !self.report.resources.contains(&resource) {
            self.report.resources.push(resource);
        }
    }
}

fn direction(word: &Word) -> Option<Direction> {
    word.text.parse().ok()
}

/// All words are directions, and there is at least one
fn directions(words: &[Word]) -> Option<Vec<Direction>> {
    if words.is_empty() {
        return None;
    }
    words.iter().map(direction).collect()
}

/// `<edge or terrain name> DIR+`
fn border(words: &[Word]) -> Option<(BorderKind, Vec<Direction>)> {
    let longest = MAX_NAME_WORDS.min(words.len().saturating_sub(1));
    (1..=longest).rev().find_map(|n| {
        let name = joined(&words[..n]);
        let kind = Edge::lookup(&name)
            .map(BorderKind::Edge)
            .or_else(|| Terrain::lookup(&name).map(BorderKind::Terrain))?;
        Some((kind, directions(&words[n..])?))
    })
}

/// A clause of unit ids, optionally after `Patrolled and found`
fn encounters(words: &[Word]) -> Option<Vec<UnitId>> {
    let ids = match words {
        [a, b, c, rest @ ..]
            if a.eq_ignore_case("Patrolled") && b.eq_ignore_case("and") && c.eq_ignore_case("found") =>
        {
            rest
        }
        _ => words,
    };
    if ids.is_empty() {
        return None;
    }
    ids.iter().map(|w| w.text.parse().ok()).collect()
}

/// `Sight Land - N/NE`
fn far_horizon(clause: &ClauseText) -> Option<FarHorizon> {
    let texts = clause.texts();
    let [sight, terrain, "-", point @ ..] = texts.as_slice() else {
        return None;
    };
    if !sight.eq_ignore_ascii_case("Sight") || point.is_empty() {
        return None;
    }
    let terrain = if terrain.eq_ignore_ascii_case("Land") {
        FarTerrain::Land
    } else if terrain.eq_ignore_ascii_case("Water") {
        FarTerrain::Water
    } else {
        return None;
    };
    Some(FarHorizon {
        point: point.concat().parse().ok()?,
        terrain,
    })
}

/// Plain words only, as a settlement name is written
fn is_name(words: &[Word]) -> bool {
    words
        .iter()
        .all(|w| matches!(w.kind, SyntaxKind::TEXT | SyntaxKind::TERRAIN_CODE) || w.kind.is_keyword())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::LineIndex;
    use crate::model::{CompassPoint, TurnId};
    use crate::parser::errors::{DiagnosticCollector, Severity};
    use crate::parser::{AstNode, Step, parse_report};
    use crate::section::SectionContext;
    use crate::syntax::extract_step;

    /// Observe every clause of the first step of a status line
    fn observe(clauses: &str, strict: bool) -> (Option<Report>, DiagnosticCollector) {
        let input = format!("0987 Status: {clauses}\n");
        let parse = parse_report(&input);
        let index = LineIndex::new(&input);
        let step = parse.syntax().descendants().find_map(Step::cast).unwrap();
        let step = extract_step(&step, &index);

        let mut ctx = SectionContext::new(&index, TurnId::new(899, 12));
        ctx.strict_observations = strict;
        let mut diagnostics = DiagnosticCollector::new();
        let mut reader = SectionReader {
            ctx: &ctx,
            unit: "0987".parse().ok(),
            diagnostics: &mut diagnostics,
            in_status: true,
            special_names: Vec::new(),
        };
        let mut builder = ReportBuilder::new();
        for clause in &step.clauses {
            builder.observe(clause, &mut reader);
        }
        (builder.finish(), diagnostics)
    }

    #[test]
    fn test_borders_with_continuation() {
        let (report, diagnostics) = observe("River S SE, O NE, N", false);
        assert!(diagnostics.is_empty());
        let borders = report.unwrap().borders;
        assert_eq!(borders.len(), 4);
        assert_eq!(
            borders[0],
            Border {
                direction: Direction::South,
                kind: BorderKind::Edge(Edge::River)
            }
        );
        assert_eq!(
            borders[3],
            Border {
                direction: Direction::North,
                kind: BorderKind::Terrain(Terrain::Ocean)
            }
        );
    }

    #[test]
    fn test_swamp_code_starts_a_terrain_border() {
        let (report, diagnostics) = observe("River S, SW N, SE", false);
        assert!(diagnostics.is_empty(), "{:?}", diagnostics.diagnostics());
        let borders = report.unwrap().borders;
        assert_eq!(
            borders,
            vec![
                Border {
                    direction: Direction::South,
                    kind: BorderKind::Edge(Edge::River)
                },
                Border {
                    direction: Direction::North,
                    kind: BorderKind::Terrain(Terrain::Swamp)
                },
                Border {
                    direction: Direction::SouthEast,
                    kind: BorderKind::Terrain(Terrain::Swamp)
                },
            ]
        );

        let (report, diagnostics) = observe("SW N", false);
        assert!(diagnostics.is_empty());
        assert_eq!(report.unwrap().borders[0].kind, BorderKind::Terrain(Terrain::Swamp));
    }

    #[test]
    fn test_lone_sw_continues_previous_border() {
        let (report, _) = observe("River S, SW", false);
        let borders = report.unwrap().borders;
        assert_eq!(borders.len(), 2);
        assert_eq!(borders[1].direction, Direction::SouthWest);
        assert_eq!(borders[1].kind, BorderKind::Edge(Edge::River));
    }

    #[test]
    fn test_edge_hides_terrain_in_same_direction() {
        let (report, _) = observe("Lake N, Ford N", false);
        let borders = report.unwrap().borders;
        assert_eq!(
            borders,
            vec![Border {
                direction: Direction::North,
                kind: BorderKind::Edge(Edge::Ford)
            }]
        );
    }

    #[test]
    fn test_encounters_are_flagged_by_clan() {
        let (report, _) = observe("1987e1, 0123, Patrolled and found 0987c2", false);
        let encounters = report.unwrap().encounters;
        assert_eq!(encounters.len(), 3);
        assert!(encounters[0].friendly);
        assert!(!encounters[1].friendly);
        assert!(encounters[2].friendly);
    }

    #[test]
    fn test_find_resources_and_items() {
        let (report, _) = observe("Find Iron Ore, Find 3 Horses, Jade", false);
        let report = report.unwrap();
        assert_eq!(report.resources, vec![Resource::IronOre, Resource::Jade]);
        assert_eq!(
            report.items,
            vec![FoundItem {
                quantity: Some(3),
                name: SmolStr::new("Horses")
            }]
        );
    }

    #[test]
    fn test_far_horizons() {
        let (report, diagnostics) = observe("(Sight Land - N/NE, Sight Water - S)", false);
        assert!(diagnostics.is_empty());
        let far = report.unwrap().far_horizons;
        assert_eq!(far.len(), 2);
        assert_eq!(far[0].point, CompassPoint::Between(Direction::North, Direction::NorthEast));
        assert_eq!(far[0].terrain, FarTerrain::Land);
        assert_eq!(far[1].point, CompassPoint::Toward(Direction::South));
        assert_eq!(far[1].terrain, FarTerrain::Water);
    }

    #[test]
    fn test_malformed_far_horizon() {
        let (_, diagnostics) = observe("(Sight Mountains - N)", false);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.diagnostics()[0].code, ErrorCode::E0403);
    }

    #[test]
    fn test_settlement_and_noop() {
        let (report, diagnostics) = observe("Nothing of interest found, Ourtown", false);
        assert!(diagnostics.is_empty());
        assert_eq!(report.unwrap().settlements[0].name, "Ourtown");
    }

    #[test]
    fn test_unrecognized_observation_severity() {
        let (_, lenient) = observe("17 Horses", false);
        assert_eq!(lenient.len(), 1);
        assert_eq!(lenient.diagnostics()[0].code, ErrorCode::W0401);
        assert_eq!(lenient.diagnostics()[0].severity, Severity::Warning);

        let (_, strict) = observe("17 Horses", true);
        assert_eq!(strict.diagnostics()[0].severity, Severity::Error);
        assert!(strict.has_errors());
    }

    #[test]
    fn test_directions_without_border_are_unrecognized() {
        let (report, diagnostics) = observe("NE SE", false);
        assert!(report.is_none());
        assert_eq!(diagnostics.diagnostics()[0].code, ErrorCode::W0401);
    }
}
