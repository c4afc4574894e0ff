//! The play-by-play section and the offense tracker.
//!
//! [`ModeTracker`] is the only running state of the engine: it walks the
//! section in order and records which team is on offense. Everything else in
//! [`plays`](crate::plays) is a pure function over the resulting
//! [`AttributedLine`]s.

use gridstat_core::{ExtractError, Line, Side, Teams};
use tracing::debug;

use crate::anchors::PlayByPlayMarkers;

/// Lines strictly between the section header and the first terminating
/// marker after it.
///
/// # Errors
///
/// [`ExtractError::AnchorNotFound`] naming the header, or the first
/// terminating marker, when either is missing.
pub fn play_by_play_section<'a>(
    lines: &'a [Line],
    markers: &PlayByPlayMarkers,
) -> Result<&'a [Line], ExtractError> {
    let start = lines
        .iter()
        .position(|l| l.contains(&markers.start))
        .ok_or_else(|| ExtractError::anchor_not_found(markers.start.as_str()))?;
    let len = lines[start + 1..]
        .iter()
        .position(|l| markers.end.iter().any(|m| l.contains(m)))
        .ok_or_else(|| {
            ExtractError::anchor_not_found(markers.end.first().map(String::as_str).unwrap_or(""))
        })?;
    debug!(start, len, "play-by-play section located");
    Ok(&lines[start + 1..start + 1 + len])
}

/// Which tokens of a line can switch the offense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TeamMarker {
    /// Only the leading token (default).
    #[default]
    LeadingToken,
    /// Any token; the first team name in line order wins.
    AnyToken,
}

/// Running "who has the ball" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeTracker {
    offense: Side,
    possession: usize,
    marker: TeamMarker,
}

impl ModeTracker {
    /// Start with the home team on offense.
    pub fn new(marker: TeamMarker) -> Self {
        Self {
            offense: Side::Home,
            possession: 0,
            marker,
        }
    }

    /// Team currently on offense.
    pub fn offense(&self) -> Side {
        self.offense
    }

    /// Number of offense changes seen so far.
    pub fn possession(&self) -> usize {
        self.possession
    }

    /// Team named by the line's marker token, if any.
    pub fn marker_side(&self, line: &Line, teams: &Teams) -> Option<Side> {
        match self.marker {
            TeamMarker::LeadingToken => line.leading_token().and_then(|t| teams.side_of_name(t)),
            TeamMarker::AnyToken => line
                .text()
                .split_whitespace()
                .find_map(|t| teams.side_of_name(t)),
        }
    }

    /// Apply the transition rule for one line and return the offense the line
    /// belongs to.
    pub fn observe(&mut self, line: &Line, teams: &Teams) -> Side {
        if let Some(side) = self.marker_side(line, teams) {
            if side != self.offense {
                self.offense = side;
                self.possession += 1;
            }
        }
        self.offense
    }
}

impl Default for ModeTracker {
    fn default() -> Self {
        Self::new(TeamMarker::default())
    }
}

/// A play-by-play line with the offense it was attributed to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributedLine<'a> {
    pub line: &'a Line,
    pub offense: Side,
    /// Possession counter at this line; consecutive lines of one drive share it.
    pub possession: usize,
}

impl AttributedLine<'_> {
    /// Team on defense for this line.
    pub fn defense(&self) -> Side {
        self.offense.opponent()
    }
}

/// Walk the section once, in order, attributing every line.
pub fn attribute_lines<'a>(
    section: &'a [Line],
    teams: &Teams,
    marker: TeamMarker,
) -> Vec<AttributedLine<'a>> {
    let mut tracker = ModeTracker::new(marker);
    section
        .iter()
        .map(|line| {
            let offense = tracker.observe(line, teams);
            AttributedLine {
                line,
                offense,
                possession: tracker.possession(),
            }
        })
        .collect()
}
