//! The condensed drive chart: one line per possession.

use gridstat_core::{ExtractError, Line, PerTeam, Side, Teams};
use tracing::debug;

use crate::anchors::DriveChartMarkers;
use crate::plays::field_position;
use crate::records::{FieldPosition, SeriesStats};

/// Lines from the chart header up to the next section header or the end of
/// the document.
///
/// # Errors
///
/// [`ExtractError::AnchorNotFound`] when the chart header is missing.
pub fn drive_chart_section<'a>(
    lines: &'a [Line],
    markers: &DriveChartMarkers,
) -> Result<&'a [Line], ExtractError> {
    let start = lines
        .iter()
        .position(|l| l.contains(&markers.start))
        .ok_or_else(|| ExtractError::anchor_not_found(markers.start.as_str()))?;
    let end = lines[start + 1..]
        .iter()
        .position(|l| l.contains(&markers.end))
        .map_or(lines.len(), |n| start + 1 + n);
    debug!(start, end, "drive chart located");
    Ok(&lines[start..end])
}

/// One drive of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Drive<'a> {
    pub line: &'a Line,
    /// Team whose block the line is in.
    pub team: Side,
    /// Side of the abbreviation printed before the yard line.
    pub marked_side: Side,
    /// Yard line as printed.
    pub yard_line: i32,
    pub scored: bool,
}

impl Drive<'_> {
    /// Yards from the driving team's own goal line.
    pub fn field_position(&self) -> i32 {
        if self.marked_side == self.team {
            self.yard_line
        } else {
            100 - self.yard_line
        }
    }
}

/// Team whose name appears earliest in the line.
fn named_team(line: &Line, teams: &Teams) -> Option<Side> {
    teams
        .iter()
        .filter_map(|(side, team)| line.text().find(&team.name).map(|at| (at, side)))
        .min_by_key(|(at, _)| *at)
        .map(|(_, side)| side)
}

/// Drive lines of every team block.
///
/// A line naming a team opens that team's block; lines after a
/// change-of-possession header that carry `<abbreviation> <yard line>` are
/// drives.
///
/// # Errors
///
/// [`ExtractError::AnchorNotFound`] when no change-of-possession header
/// appears in the section.
pub fn drives<'a>(
    section: &'a [Line],
    teams: &Teams,
    markers: &DriveChartMarkers,
) -> Result<Vec<Drive<'a>>, ExtractError> {
    let mut block = Side::Home;
    let mut listing = false;
    let mut header_seen = false;
    let mut found = Vec::new();

    for line in section {
        if let Some(side) = named_team(line, teams) {
            block = side;
            listing = false;
            continue;
        }
        if line.contains(&markers.possession_change) {
            listing = true;
            header_seen = true;
            continue;
        }
        if !listing {
            continue;
        }
        if let Some((marked_side, yard_line)) = field_position(line, teams) {
            found.push(Drive {
                line,
                team: block,
                marked_side,
                yard_line,
                scored: markers.score_keywords.iter().any(|k| line.has_token(k)),
            });
        }
    }

    if !header_seen {
        return Err(ExtractError::anchor_not_found(
            markers.possession_change.as_str(),
        ));
    }
    debug!(drives = found.len(), "drive chart parsed");
    Ok(found)
}

/// Drive and scoring-drive counts per team.
pub fn extract_series(drives: &[Drive<'_>]) -> PerTeam<SeriesStats> {
    let mut series: PerTeam<SeriesStats> = PerTeam::default();
    for drive in drives {
        let stats = &mut series[drive.team];
        stats.series_count += 1;
        if drive.scored {
            stats.score_count += 1;
        }
    }
    series
}

/// Starting field position of every drive, grouped by driving team.
pub fn starting_field_positions(drives: &[Drive<'_>], teams: &Teams) -> PerTeam<Vec<FieldPosition>> {
    let mut positions: PerTeam<Vec<FieldPosition>> = PerTeam::default();
    for drive in drives {
        positions[drive.team].push(FieldPosition {
            team_name: teams[drive.team].name.clone(),
            opponent_name: teams[drive.team.opponent()].name.clone(),
            field_position: drive.field_position(),
            scored: drive.scored,
        });
    }
    positions
}
