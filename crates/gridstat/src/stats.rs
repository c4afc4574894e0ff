//! Aggregation and derived metrics.
//!
//! [`GameStats`] owns every record of both teams. Derived values are computed
//! once in [`GameStats::new`] and are read-only afterwards.

use gridstat_core::{Config, ExtractError, PerTeam, Side, Team};

use crate::records::{
    FieldGoalInfo, FieldPosition, FumbleInfo, KickPoints, OffenseSummary, PenaltyInfo,
    PlayYards, PuntInfo, RedzoneInfo, ReturnInfo, SeriesStats, ThirdDownStats, TimeOfPossession,
    TouchdownInfo,
};

/// Percentage with integer truncation: `numerator * 100 / denominator`.
///
/// # Errors
///
/// - [`ExtractError::DivisionByZero`] when `denominator` is zero.
/// - [`ExtractError::Overflow`] when the result does not fit an `i32`.
pub fn percentage(
    numerator: i32,
    denominator: i32,
    metric: &'static str,
) -> Result<i32, ExtractError> {
    if denominator == 0 {
        return Err(ExtractError::DivisionByZero { metric });
    }
    let rate = i64::from(numerator) * 100 / i64::from(denominator);
    i32::try_from(rate).map_err(|_| ExtractError::Overflow { metric })
}

/// Every extracted record of one team, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamRecords {
    /// The team these records belong to.
    pub team: Team,
    /// Full name of the other team of the game.
    pub opponent_name: String,
    /// Rushing and passing totals.
    pub offense: OffenseSummary,
    pub third_down: ThirdDownStats,
    pub fumbles: FumbleInfo,
    pub time_of_possession: TimeOfPossession,
    pub punt_returns: ReturnInfo,
    pub kickoff_returns: ReturnInfo,
    pub punting: PuntInfo,
    /// Team-stats totals merged with the play-by-play kicks.
    pub field_goals: FieldGoalInfo,
    /// Final score.
    pub score: i32,
    /// Per-play gains from the play-by-play.
    pub yards: PlayYards,
    /// Accepted penalties charged to the team.
    pub penalties: PenaltyInfo,
    pub redzone: RedzoneInfo,
    /// Drives and scoring drives from the drive chart.
    pub series: SeriesStats,
    pub touchdowns: TouchdownInfo,
    /// Points from kicks only.
    pub kick_points: KickPoints,
}

/// One team's records plus derived metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TeamStats {
    records: TeamRecords,
    big_run_count: i32,
    big_pass_count: i32,
    third_down_success_rate: i32,
    offense_score: i32,
}

impl TeamStats {
    /// Compute derived metrics for one team.
    ///
    /// # Errors
    ///
    /// [`ExtractError::DivisionByZero`] when the team has no third-down
    /// attempts.
    pub fn new(records: TeamRecords, config: &Config) -> Result<Self, ExtractError> {
        let big_run_count = records
            .yards
            .rushing
            .iter()
            .filter(|&&gain| gain > config.run_long_gain_threshold)
            .count() as i32;
        let big_pass_count = records
            .yards
            .passing
            .iter()
            .filter(|&&gain| gain > config.pass_long_gain_threshold)
            .count() as i32;
        let third_down_success_rate = percentage(
            records.third_down.success,
            records.third_down.attempts,
            "third_down_success_rate",
        )?;
        let offense_score = records.score - records.kick_points.points;
        Ok(Self {
            records,
            big_run_count,
            big_pass_count,
            third_down_success_rate,
            offense_score,
        })
    }

    pub fn records(&self) -> &TeamRecords {
        &self.records
    }

    pub fn team(&self) -> &Team {
        &self.records.team
    }

    /// Rushing plays gaining more than the run threshold.
    pub fn big_run_count(&self) -> i32 {
        self.big_run_count
    }

    /// Passing plays gaining more than the pass threshold.
    pub fn big_pass_count(&self) -> i32 {
        self.big_pass_count
    }

    pub fn third_down_success_rate(&self) -> i32 {
        self.third_down_success_rate
    }

    /// Points not scored by kicks.
    pub fn offense_score(&self) -> i32 {
        self.offense_score
    }

    /// Scoring share of redzone plays, truncated percentage.
    ///
    /// # Errors
    ///
    /// [`ExtractError::DivisionByZero`] without redzone plays.
    pub fn redzone_score_rate(&self) -> Result<i32, ExtractError> {
        let redzone = &self.records.redzone;
        percentage(redzone.score_count, redzone.play_count, "redzone_score_rate")
    }

    /// Scoring share of drives, truncated percentage.
    ///
    /// # Errors
    ///
    /// [`ExtractError::DivisionByZero`] without drives.
    pub fn series_score_rate(&self) -> Result<i32, ExtractError> {
        let series = &self.records.series;
        percentage(series.score_count, series.series_count, "series_score_rate")
    }
}

/// Both teams' statistics for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameStats {
    teams: PerTeam<TeamStats>,
    field_positions: PerTeam<Vec<FieldPosition>>,
    config: Config,
}

impl GameStats {
    /// Assemble the game and compute every derived metric.
    ///
    /// # Errors
    ///
    /// Propagates [`TeamStats::new`] failures, home team first.
    pub fn new(
        records: PerTeam<TeamRecords>,
        field_positions: PerTeam<Vec<FieldPosition>>,
        config: Config,
    ) -> Result<Self, ExtractError> {
        let teams = records.map(|r| TeamStats::new(r, &config)).transpose()?;
        Ok(Self {
            teams,
            field_positions,
            config,
        })
    }

    pub fn home(&self) -> &TeamStats {
        &self.teams.home
    }

    pub fn visitor(&self) -> &TeamStats {
        &self.teams.visitor
    }

    pub fn team(&self, side: Side) -> &TeamStats {
        &self.teams[side]
    }

    pub fn teams(&self) -> &PerTeam<TeamStats> {
        &self.teams
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starting field positions of one team's drives.
    pub fn field_positions(&self, side: Side) -> &[FieldPosition] {
        &self.field_positions[side]
    }

    /// Every starting field position, home drives first.
    pub fn all_field_positions(&self) -> impl Iterator<Item = &FieldPosition> {
        self.field_positions
            .home
            .iter()
            .chain(self.field_positions.visitor.iter())
    }
}
