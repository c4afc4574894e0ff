//! Pattern extractors over attributed play-by-play lines.
//!
//! Each function is a single read-only pass; none depends on another's
//! output, so they can run in any order.

use std::collections::HashSet;

use gridstat_core::tokens::{is_integer, parse_signed, parse_yard_token};
use gridstat_core::{ExtractError, Line, PerTeam, Roster, Side, Teams};
use regex::Regex;

use crate::anchors::PlayKeywords;
use crate::play_by_play::AttributedLine;
use crate::records::{PenaltyInfo, PlayYards, RedzoneInfo, TouchdownInfo};

/// Play type of a yardage token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayKind {
    Run,
    Pass,
}

/// Compiled play-by-play matchers.
#[derive(Debug, Clone)]
pub struct PlayPatterns {
    yardage: Regex,
    keywords: PlayKeywords,
}

impl PlayPatterns {
    /// Build the yardage matcher, `(-{0,2}\d+)y(<run>|<pass>)`.
    ///
    /// # Errors
    ///
    /// [`ExtractError::InvalidCatalog`] if the pattern does not compile.
    pub fn compile(keywords: &PlayKeywords) -> Result<Self, ExtractError> {
        let pattern = format!(
            r"(-{{0,2}}\d+)y({}|{})",
            regex::escape(&keywords.run_suffix),
            regex::escape(&keywords.pass_suffix)
        );
        let yardage =
            Regex::new(&pattern).map_err(|e| ExtractError::InvalidCatalog(e.to_string()))?;
        Ok(Self {
            yardage,
            keywords: keywords.clone(),
        })
    }

    /// The keywords these patterns were built from.
    pub fn keywords(&self) -> &PlayKeywords {
        &self.keywords
    }

    /// First yardage token of a line. A line records at most one play.
    pub fn yardage(&self, text: &str) -> Option<(PlayKind, i32)> {
        let caps = self.yardage.captures(text)?;
        let value = parse_signed(caps.get(1)?.as_str(), "yardage").ok()?;
        let kind = if caps.get(2)?.as_str() == self.keywords.run_suffix {
            PlayKind::Run
        } else {
            PlayKind::Pass
        };
        Some((kind, value))
    }
}

/// Rushing and passing gains per offense, in play order.
pub fn extract_yards(lines: &[AttributedLine<'_>], patterns: &PlayPatterns) -> PerTeam<PlayYards> {
    let mut yards: PerTeam<PlayYards> = PerTeam::default();
    for attributed in lines {
        if let Some((kind, value)) = patterns.yardage(attributed.line.text()) {
            let team = &mut yards[attributed.offense];
            match kind {
                PlayKind::Run => team.rushing.push(value),
                PlayKind::Pass => team.passing.push(value),
            }
        }
    }
    yards
}

/// Penalties charged to each team.
///
/// The abbreviation after the penalty marker names the penalized team,
/// independent of who has the ball. Declined penalties count with zero yards.
///
/// # Errors
///
/// [`ExtractError::MalformedToken`] when the abbreviation is unknown or not
/// one of the two teams, or when an accepted penalty has no yard token.
pub fn extract_penalties(
    lines: &[AttributedLine<'_>],
    teams: &Teams,
    roster: &Roster,
    patterns: &PlayPatterns,
) -> Result<PerTeam<PenaltyInfo>, ExtractError> {
    let kw = &patterns.keywords;
    let mut penalties: PerTeam<PenaltyInfo> = PerTeam::default();
    for attributed in lines {
        let line = attributed.line;
        let tokens = line.tokens();
        let Some(at) = tokens.iter().position(|t| *t == kw.penalty) else {
            continue;
        };
        let abbreviation = tokens.get(at + 1).copied().unwrap_or("");
        let side = roster
            .by_abbreviation(abbreviation)
            .and_then(|entry| teams.side_of_name(&entry.name))
            .ok_or_else(|| ExtractError::malformed(kw.penalty.as_str(), abbreviation))?;

        let yards = if line.contains(&kw.decline) {
            0
        } else {
            tokens
                .iter()
                .find_map(|t| parse_yard_token(t))
                .map(i32::abs)
                .ok_or_else(|| ExtractError::malformed(kw.penalty.as_str(), line.text()))?
        };
        let info = &mut penalties[side];
        info.count += 1;
        info.yards += yards;
    }
    Ok(penalties)
}

/// Field position reported on a line: the first token equal to either
/// abbreviation that is followed by an integer.
pub fn field_position(line: &Line, teams: &Teams) -> Option<(Side, i32)> {
    let tokens = line.tokens();
    tokens.windows(2).find_map(|pair| {
        let side = teams.side_of_abbreviation(pair[0])?;
        if !is_integer(pair[1]) {
            return None;
        }
        Some((side, pair[1].parse().ok()?))
    })
}

/// Redzone plays of each offense.
///
/// A play counts when its line names a play type and reports a position of at
/// most the redzone limit on the defense's side of the field. A made field
/// goal scores but is not counted as a play.
pub fn extract_redzone(
    lines: &[AttributedLine<'_>],
    teams: &Teams,
    patterns: &PlayPatterns,
) -> PerTeam<RedzoneInfo> {
    let kw = &patterns.keywords;
    let mut redzone: PerTeam<RedzoneInfo> = PerTeam::default();
    let mut series: PerTeam<HashSet<usize>> = PerTeam::default();

    for attributed in lines {
        let line = attributed.line;
        if !kw.play_types.iter().any(|t| line.has_token(t)) {
            continue;
        }
        let Some((side, position)) = field_position(line, teams) else {
            continue;
        };
        if side != attributed.defense() || position > kw.redzone_limit {
            continue;
        }

        let info = &mut redzone[attributed.offense];
        info.play_count += 1;
        if line.contains(&kw.touchdown) {
            info.touchdown_count += 1;
            info.score_count += 1;
        }
        if line.contains(&kw.field_goal_good) {
            info.field_goal_count += 1;
            info.score_count += 1;
            info.play_count -= 1;
        }
        series[attributed.offense].insert(attributed.possession);
    }

    for side in Side::BOTH {
        redzone[side].series_count = series[side].len() as i32;
    }
    redzone
}

/// Kicking events of one offense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KickingInfo {
    /// 3 per made field goal, 1 per made try after touchdown.
    pub points: i32,
    pub made_yards: i32,
    pub blocked: i32,
    pub blocked_yards: i32,
}

fn kick_distance(line: &Line, marker: &str) -> Result<i32, ExtractError> {
    line.tokens()
        .iter()
        .filter(|t| !t.starts_with('-'))
        .find_map(|t| parse_yard_token(t))
        .ok_or_else(|| ExtractError::malformed(marker, line.text()))
}

/// Field goals, tries after touchdown and blocked kicks of each offense.
///
/// # Errors
///
/// [`ExtractError::MalformedToken`] when a made or blocked field goal has no
/// distance token.
pub fn extract_kicks(
    lines: &[AttributedLine<'_>],
    patterns: &PlayPatterns,
) -> Result<PerTeam<KickingInfo>, ExtractError> {
    let kw = &patterns.keywords;
    let mut kicks: PerTeam<KickingInfo> = PerTeam::default();
    for attributed in lines {
        let line = attributed.line;
        let info = &mut kicks[attributed.offense];
        if line.contains(&kw.field_goal_good) {
            info.points += 3;
            info.made_yards += kick_distance(line, &kw.field_goal_good)?;
        } else if line.contains(&kw.field_goal_blocked) {
            info.blocked += 1;
            info.blocked_yards += kick_distance(line, &kw.field_goal_blocked)?;
        }
        if line.contains(&kw.pat_good) {
            info.points += 1;
        }
    }
    Ok(kicks)
}

/// Touchdowns by play type: a touchdown line that also carries a yardage token.
pub fn extract_touchdowns(
    lines: &[AttributedLine<'_>],
    patterns: &PlayPatterns,
) -> PerTeam<TouchdownInfo> {
    let mut touchdowns: PerTeam<TouchdownInfo> = PerTeam::default();
    for attributed in lines {
        let text = attributed.line.text();
        if !text.contains(&patterns.keywords.touchdown) {
            continue;
        }
        if let Some((kind, _)) = patterns.yardage(text) {
            let info = &mut touchdowns[attributed.offense];
            match kind {
                PlayKind::Run => info.rushing += 1,
                PlayKind::Pass => info.passing += 1,
            }
        }
    }
    touchdowns
}
