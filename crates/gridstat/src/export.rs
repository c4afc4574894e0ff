//! Flattening of team statistics for CSV and JSON writers.
//!
//! Keys are underscore paths of the record fields, in a fixed order, so every
//! CSV row of every game lines up under one header.

use std::fmt;

use gridstat_core::ExtractError;

use crate::records::FieldPosition;
use crate::stats::TeamStats;

/// A single flattened value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatValue {
    Text(String),
    Int(i32),
}

impl fmt::Display for FlatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlatValue::Text(s) => f.write_str(s),
            FlatValue::Int(v) => write!(f, "{v}"),
        }
    }
}

/// Ordered `(key, value)` pairs of one team.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatRecord {
    fields: Vec<(&'static str, FlatValue)>,
}

impl FlatRecord {
    fn text(&mut self, key: &'static str, value: &str) {
        self.fields.push((key, FlatValue::Text(value.to_string())));
    }

    fn int(&mut self, key: &'static str, value: i32) {
        self.fields.push((key, FlatValue::Int(value)));
    }

    /// Pairs in output order.
    pub fn fields(&self) -> &[(&'static str, FlatValue)] {
        &self.fields
    }

    /// Value of a key.
    pub fn get(&self, key: &str) -> Option<&FlatValue> {
        self.fields.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Comma-joined keys.
    pub fn csv_header(&self) -> String {
        self.fields
            .iter()
            .map(|(k, _)| *k)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Comma-joined values, quoted where needed.
    pub fn csv_row(&self) -> String {
        self.fields
            .iter()
            .map(|(_, v)| csv_escape(&v.to_string()))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FlatValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FlatValue::Text(s) => serializer.serialize_str(s),
            FlatValue::Int(v) => serializer.serialize_i32(*v),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FlatRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, or newlines, wraps it in
/// double quotes and escapes any internal double quotes by doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

impl TeamStats {
    /// Flatten every record and derived metric.
    pub fn flatten(&self) -> FlatRecord {
        let r = self.records();
        let mut flat = FlatRecord::default();
        flat.text("team_name", &r.team.name);
        flat.text("opponent_name", &r.opponent_name);
        flat.text("team_abbreviation", &r.team.abbreviation);
        flat.text("side", &r.team.side.to_string());
        flat.int("score", r.score);
        flat.int("run_play", r.offense.run_play);
        flat.int("run_gain", r.offense.run_gain);
        flat.int("pass_gain", r.offense.pass_gain);
        flat.int("passing_attempts", r.offense.passing.attempts);
        flat.int("passing_completions", r.offense.passing.completions);
        flat.int("passing_interceptions", r.offense.passing.interceptions);
        flat.int("third_down_success", r.third_down.success);
        flat.int("third_down_attempts", r.third_down.attempts);
        flat.int("fumbles", r.fumbles.fumbles);
        flat.int("fumbles_lost", r.fumbles.lost);
        flat.int("time_of_possession_minutes", r.time_of_possession.minutes);
        flat.int("time_of_possession_seconds", r.time_of_possession.seconds);
        flat.int("punt_returns", r.punt_returns.returns);
        flat.int("punt_return_yards", r.punt_returns.yards);
        flat.int("kickoff_returns", r.kickoff_returns.returns);
        flat.int("kickoff_return_yards", r.kickoff_returns.yards);
        flat.int("punts", r.punting.punts);
        flat.int("punt_yards", r.punting.yards);
        flat.int("field_goal_made", r.field_goals.made);
        flat.int("field_goal_attempts", r.field_goals.attempts);
        flat.int("field_goal_blocked", r.field_goals.blocked);
        flat.int("field_goal_blocked_yards", r.field_goals.blocked_yards);
        flat.int("field_goal_made_yards", r.field_goals.made_yards);
        flat.int("kick_points", r.kick_points.points);
        flat.int("rushing_plays", r.yards.rushing.len() as i32);
        flat.int("passing_plays", r.yards.passing.len() as i32);
        flat.int("penalty_count", r.penalties.count);
        flat.int("penalty_yards", r.penalties.yards);
        flat.int("redzone_play_count", r.redzone.play_count);
        flat.int("redzone_touchdown_count", r.redzone.touchdown_count);
        flat.int("redzone_field_goal_count", r.redzone.field_goal_count);
        flat.int("redzone_score_count", r.redzone.score_count);
        flat.int("redzone_series_count", r.redzone.series_count);
        flat.int("series_count", r.series.series_count);
        flat.int("series_score_count", r.series.score_count);
        flat.int("rushing_touchdowns", r.touchdowns.rushing);
        flat.int("passing_touchdowns", r.touchdowns.passing);
        flat.int("big_run_count", self.big_run_count());
        flat.int("big_pass_count", self.big_pass_count());
        flat.int("third_down_success_rate", self.third_down_success_rate());
        flat.int("offense_score", self.offense_score());
        flat
    }

    /// [`flatten`](Self::flatten) plus the on-request rates.
    ///
    /// # Errors
    ///
    /// [`ExtractError::DivisionByZero`] when a team had no redzone plays or no
    /// drives.
    pub fn flatten_with_rates(&self) -> Result<FlatRecord, ExtractError> {
        let mut flat = self.flatten();
        flat.int("redzone_score_rate", self.redzone_score_rate()?);
        flat.int("series_score_rate", self.series_score_rate()?);
        Ok(flat)
    }
}

/// Header of [`field_positions_csv`].
pub const FIELD_POSITION_HEADER: &str = "team_name,opponent_name,field_position,score";

/// Field-position detail as CSV, header first, one line per drive.
pub fn field_positions_csv<'a>(rows: impl IntoIterator<Item = &'a FieldPosition>) -> String {
    let mut out = String::from(FIELD_POSITION_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{}\n",
            csv_escape(&row.team_name),
            csv_escape(&row.opponent_name),
            row.field_position,
            u8::from(row.scored)
        ));
    }
    out
}
