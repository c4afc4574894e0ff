//! Fixed-shape stat records, one struct per stat family.
//!
//! Every record describes one team. Extractors build them once and never
//! touch them again.

/// Passing attempts, completions and interceptions thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassingAttempts {
    /// Passes thrown.
    pub attempts: i32,
    /// Passes caught.
    pub completions: i32,
    /// Passes intercepted.
    pub interceptions: i32,
}

/// Team-stats summary of the offense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffenseSummary {
    /// Rushing yards gained.
    pub run_gain: i32,
    /// Number of rushing plays.
    pub run_play: i32,
    /// Passing yards gained.
    pub pass_gain: i32,
    /// Attempts, completions and interceptions.
    pub passing: PassingAttempts,
}

/// Third-down conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThirdDownStats {
    /// Conversions.
    pub success: i32,
    /// Third downs played.
    pub attempts: i32,
}

/// Fumbles, and how many of them the opponent recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FumbleInfo {
    pub fumbles: i32,
    /// Fumbles recovered by the opponent.
    pub lost: i32,
}

/// Time of possession as printed, `MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfPossession {
    pub minutes: i32,
    /// Seconds past the last full minute.
    pub seconds: i32,
}

impl TimeOfPossession {
    /// Possession time in seconds.
    pub fn total_seconds(&self) -> i32 {
        self.minutes * 60 + self.seconds
    }
}

/// Kickoff or punt returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReturnInfo {
    /// Number of returns.
    pub returns: i32,
    /// Return yardage.
    pub yards: i32,
}

/// Punts and gross punting yardage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuntInfo {
    pub punts: i32,
    pub yards: i32,
}

/// Field goals, merged from the team-stats row and the play-by-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldGoalInfo {
    /// Successful kicks, from the team-stats page.
    pub made: i32,
    /// Attempted kicks, from the team-stats page.
    pub attempts: i32,
    /// Blocked kicks seen in the play-by-play.
    pub blocked: i32,
    /// Distance of blocked attempts, summed.
    pub blocked_yards: i32,
    /// Distance of made field goals, summed.
    pub made_yards: i32,
}

/// Gains of every rushing and passing play, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayYards {
    /// Gain of each rushing play.
    pub rushing: Vec<i32>,
    /// Gain of each completed pass.
    pub passing: Vec<i32>,
}

impl PlayYards {
    /// True when no play was recorded.
    pub fn is_empty(&self) -> bool {
        self.rushing.is_empty() && self.passing.is_empty()
    }
}

/// Accepted penalties against a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyInfo {
    /// Penalties called, declined ones included.
    pub count: i32,
    /// Yards assessed; declined penalties add none.
    pub yards: i32,
}

/// Plays run from inside the opponent's 25.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RedzoneInfo {
    /// Non-scoring-kick plays counted inside the redzone.
    pub play_count: i32,
    /// Touchdowns scored on redzone plays.
    pub touchdown_count: i32,
    /// Field goals made on redzone plays.
    pub field_goal_count: i32,
    /// Touchdowns plus field goals.
    pub score_count: i32,
    /// Possessions with at least one redzone play.
    pub series_count: i32,
}

/// Drive totals from the drive chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesStats {
    /// Drives started.
    pub series_count: i32,
    /// Drives ending in a touchdown or made field goal.
    pub score_count: i32,
}

/// Offensive touchdowns by play type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchdownInfo {
    pub rushing: i32,
    pub passing: i32,
}

/// Points scored by kicks (field goals and tries after touchdown).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KickPoints {
    /// Three per made field goal, one per good try.
    pub points: i32,
}

/// Starting field position of one drive, from the offense's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldPosition {
    /// Team on offense.
    pub team_name: String,
    /// Team on defense.
    pub opponent_name: String,
    /// Yards from the offense's own goal line.
    pub field_position: i32,
    /// Whether the drive ended in a score.
    pub scored: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_possession_total_seconds() {
        let top = TimeOfPossession {
            minutes: 31,
            seconds: 5,
        };
        assert_eq!(top.total_seconds(), 1865);
    }

    #[test]
    fn test_play_yards_is_empty() {
        let mut yards = PlayYards::default();
        assert!(yards.is_empty());
        yards.passing.push(-2);
        assert!(!yards.is_empty());
    }
}
