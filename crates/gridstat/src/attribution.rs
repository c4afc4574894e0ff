//! Team attribution: which two roster teams play, and which one is home.
//!
//! Three resolution strategies exist, tried in this order:
//!
//! 1. a `<home> vs <visitor>` header line,
//! 2. `HOME` / `VISITOR` label lines,
//! 3. order of first appearance as a line's leading token.
//!
//! The first-appearance scan always runs; it decides which teams play. An
//! explicit strategy only decides the roles, and a disagreement between the
//! two is reported as a [`WarningCode::RoleDisagreement`] warning.

use gridstat_core::{
    ExtractError, ExtractResult, ExtractWarning, Line, PerTeam, Roster, Side, Team, Teams,
    WarningCode,
};
use tracing::{debug, warn};

use crate::anchors::AttributionMarkers;

/// How the roles were fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoleStrategy {
    VersusHeader,
    HomeVisitorLabels,
    FirstAppearance,
}

/// Resolved teams and the strategy that fixed their roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub teams: Teams,
    pub strategy: RoleStrategy,
}

/// Roster names that lead a line, deduplicated, in document order.
pub fn first_appearance<'a>(lines: &[Line], roster: &'a Roster) -> Vec<&'a str> {
    let mut found: Vec<&str> = Vec::new();
    for line in lines {
        let Some(token) = line.leading_token() else {
            continue;
        };
        if let Some(entry) = roster.by_name(token) {
            if !found.contains(&entry.name.as_str()) {
                found.push(entry.name.as_str());
            }
        }
    }
    found
}

/// Roles from the first `<name> vs <name>` line.
pub fn versus_header<'a>(
    lines: &'a [Line],
    roster: &Roster,
    markers: &AttributionMarkers,
) -> Option<PerTeam<&'a str>> {
    lines.iter().find_map(|line| match line.tokens().as_slice() {
        [home, vs, visitor]
            if *vs == markers.versus
                && home != visitor
                && roster.contains_name(home)
                && roster.contains_name(visitor) =>
        {
            Some(PerTeam::new(*home, *visitor))
        }
        _ => None,
    })
}

/// Roles from `HOME` / `VISITOR` label lines.
///
/// The team name is the token after the label, or else the leading token of
/// the next line. Both labels must resolve.
pub fn home_visitor_labels<'a>(
    lines: &'a [Line],
    roster: &Roster,
    markers: &AttributionMarkers,
) -> Option<PerTeam<&'a str>> {
    let labelled = |label: &str| -> Option<&'a str> {
        lines.iter().enumerate().find_map(|(i, line)| {
            let mut tokens = line.text().split_whitespace();
            if tokens.next() != Some(label) {
                return None;
            }
            tokens
                .next()
                .or_else(|| lines.get(i + 1).and_then(Line::leading_token))
                .filter(|name| roster.contains_name(name))
        })
    };
    let home = labelled(&markers.home_label)?;
    let visitor = labelled(&markers.visitor_label)?;
    (home != visitor).then(|| PerTeam::new(home, visitor))
}

fn team(roster: &Roster, name: &str, side: Side) -> Option<Team> {
    roster.by_name(name).map(|entry| Team {
        name: entry.name.clone(),
        abbreviation: entry.abbreviation.clone(),
        side,
    })
}

/// Resolve the two teams of a document.
///
/// # Errors
///
/// [`ExtractError::TeamCountMismatch`] unless exactly two roster teams lead
/// a line, or when an explicit label names a team that never leads a line.
pub fn resolve_teams(
    lines: &[Line],
    roster: &Roster,
    markers: &AttributionMarkers,
) -> Result<ExtractResult<Attribution>, ExtractError> {
    let found = first_appearance(lines, roster);
    if found.len() != 2 {
        return Err(ExtractError::TeamCountMismatch {
            found: found.iter().map(|s| s.to_string()).collect(),
        });
    }
    let scanned = PerTeam::new(found[0], found[1]);

    let explicit = versus_header(lines, roster, markers)
        .map(|names| (names, RoleStrategy::VersusHeader))
        .or_else(|| {
            home_visitor_labels(lines, roster, markers)
                .map(|names| (names, RoleStrategy::HomeVisitorLabels))
        });

    let mut warnings = Vec::new();
    let (names, strategy) = match explicit {
        Some((names, strategy)) => {
            for (_, name) in names.iter() {
                if !found.contains(name) {
                    let mut all: Vec<String> = found.iter().map(|s| s.to_string()).collect();
                    all.push(name.to_string());
                    return Err(ExtractError::TeamCountMismatch { found: all });
                }
            }
            if names.home != scanned.home {
                let warning = ExtractWarning::new(
                    WarningCode::RoleDisagreement,
                    format!(
                        "{strategy:?} makes {} home, first appearance makes {} home",
                        names.home, scanned.home
                    ),
                );
                warn!("{warning}");
                warnings.push(warning);
            }
            (names, strategy)
        }
        None => (scanned, RoleStrategy::FirstAppearance),
    };

    let teams = match (
        team(roster, names.home, Side::Home),
        team(roster, names.visitor, Side::Visitor),
    ) {
        (Some(home), Some(visitor)) => PerTeam::new(home, visitor),
        _ => {
            return Err(ExtractError::TeamCountMismatch {
                found: vec![names.home.to_string(), names.visitor.to_string()],
            });
        }
    };
    debug!(home = %teams.home.name, visitor = %teams.visitor.name, ?strategy, "teams resolved");

    Ok(ExtractResult::with_warnings(
        Attribution { teams, strategy },
        warnings,
    ))
}
