//! The anchor catalog: every literal label and token layout the extractors
//! rely on, kept as data.
//!
//! Retargeting the engine to a different report template means editing a
//! catalog, not the scanning code. [`AnchorCatalog::default`] is the template
//! of the league's official game reports.

use gridstat_core::ExtractError;

/// Which lines an anchor is searched in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Scope {
    /// All lines of the document.
    Document,
    /// Lines of the first page only.
    FirstPage,
    /// Lines of the first page whose text contains the marker.
    PageContaining(String),
}

/// Which line wins when the anchor text appears more than once in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Occurrence {
    /// The first matching line.
    First,
    /// The last matching line. Headings echoed in notes above a table do not
    /// shadow the table row.
    #[default]
    Last,
}

/// How the values of a paired row are laid out around the anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TokenLayout {
    /// The last two tokens of the anchor line hold home then visitor; each is
    /// split on `delimiter` into `fields` integers.
    Trailing {
        /// Integers per team.
        fields: usize,
        /// Separator inside one combined token, if any.
        delimiter: Option<char>,
    },
    /// The first two `a/b` tokens after the anchor text, looking at the anchor
    /// line and the next `window` lines.
    Ratios {
        /// Number of lines after the anchor line to search.
        window: usize,
    },
    /// The first line at or after the anchor that contains `terminal`; the
    /// listed token indices hold each team's values.
    TotalRow {
        /// Marker of the totals row (`Total`).
        terminal: String,
        /// Token indices of the home values.
        home: Vec<usize>,
        /// Token indices of the visitor values.
        visitor: Vec<usize>,
    },
    /// The two lines after the anchor are one row per team, each starting with
    /// the team's name or abbreviation; the value is the token `from_end`
    /// positions from the end (1 = last token).
    FollowingRows {
        /// Position counted from the end of the row.
        from_end: usize,
    },
}

impl TokenLayout {
    /// Number of integers this layout yields per team.
    pub fn field_count(&self) -> usize {
        match self {
            TokenLayout::Trailing { fields, .. } => *fields,
            TokenLayout::Ratios { .. } => 2,
            TokenLayout::TotalRow { home, .. } => home.len(),
            TokenLayout::FollowingRows { .. } => 1,
        }
    }
}

/// One anchor and the layout of the values it labels.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldRule {
    /// Literal label, matched as a substring of a line.
    pub anchor: String,
    /// Lines searched for the anchor.
    pub scope: Scope,
    /// Layout of the values.
    pub layout: TokenLayout,
    /// Matching line used when the anchor repeats.
    #[cfg_attr(feature = "serde", serde(default))]
    pub occurrence: Occurrence,
}

impl FieldRule {
    fn new(anchor: &str, scope: Scope, layout: TokenLayout) -> Self {
        Self {
            anchor: anchor.to_string(),
            scope,
            layout,
            occurrence: Occurrence::Last,
        }
    }

    fn trailing(anchor: &str, fields: usize, delimiter: Option<char>) -> Self {
        Self::new(
            anchor,
            Scope::FirstPage,
            TokenLayout::Trailing { fields, delimiter },
        )
    }

    fn total_row(anchor: &str, page_marker: &str, home: [usize; 2], visitor: [usize; 2]) -> Self {
        Self::new(
            anchor,
            Scope::PageContaining(page_marker.to_string()),
            TokenLayout::TotalRow {
                terminal: "Total".to_string(),
                home: home.to_vec(),
                visitor: visitor.to_vec(),
            },
        )
    }
}

/// Labels used to fix home and visitor roles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributionMarkers {
    /// Separator token of a `<home> vs <visitor>` header.
    pub versus: String,
    /// Leading token of the home label line.
    pub home_label: String,
    /// Leading token of the visitor label line.
    pub visitor_label: String,
}

/// Boundaries of the play-by-play narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayByPlayMarkers {
    /// Section header.
    pub start: String,
    /// The section ends at the first line containing any of these.
    pub end: Vec<String>,
}

/// Markers of the condensed drive chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveChartMarkers {
    /// Section header.
    pub start: String,
    /// Header of the next section; the chart runs to the document end without it.
    pub end: String,
    /// Column header after which drive lines are listed.
    pub possession_change: String,
    /// Tokens marking a drive that ended in a score.
    pub score_keywords: Vec<String>,
}

/// Inline tokens recognised inside play-by-play lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayKeywords {
    /// Suffix of a rushing gain (`12yラン`).
    pub run_suffix: String,
    /// Suffix of a passing gain (`8yパス`).
    pub pass_suffix: String,
    /// Token announcing a penalty.
    pub penalty: String,
    /// Substring marking a declined penalty.
    pub decline: String,
    /// Tokens naming a play type for redzone counting.
    pub play_types: Vec<String>,
    /// Substring of a touchdown.
    pub touchdown: String,
    /// Substring of a made field goal.
    pub field_goal_good: String,
    /// Substring of a made try after touchdown.
    pub pat_good: String,
    /// Substring of a blocked field goal.
    pub field_goal_blocked: String,
    /// Largest field position still inside the redzone.
    pub redzone_limit: i32,
}

/// The full catalog of labels and layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorCatalog {
    /// Number of run plays.
    pub run_plays: FieldRule,
    /// Net rushing yards.
    pub run_gain: FieldRule,
    /// Net passing yards.
    pub pass_gain: FieldRule,
    /// Attempts, completions, interceptions.
    pub passing: FieldRule,
    /// Third-down conversions and attempts.
    pub third_down: FieldRule,
    /// Fumbles and fumbles lost.
    pub fumbles: FieldRule,
    /// Minutes and seconds of possession.
    pub time_of_possession: FieldRule,
    /// Punt returns and return yards.
    pub punt_returns: FieldRule,
    /// Made and attempted field goals.
    pub field_goals: FieldRule,
    /// Final score from the quarter-by-quarter table.
    pub score: FieldRule,
    /// Kickoff returns and return yards from the personal stats totals.
    pub kickoff_returns: FieldRule,
    /// Punts and punt yards from the personal stats totals.
    pub punting: FieldRule,
    /// Labels fixing home and visitor roles.
    pub attribution: AttributionMarkers,
    /// Play-by-play section boundaries.
    pub play_by_play: PlayByPlayMarkers,
    /// Drive chart section markers.
    pub drive_chart: DriveChartMarkers,
    /// Tokens recognised inside plays.
    pub plays: PlayKeywords,
}

impl Default for AnchorCatalog {
    fn default() -> Self {
        const PERSONAL_STATS: &str = "個人スタッツ";
        Self {
            run_plays: FieldRule::trailing("RUNプレイ数", 1, None),
            run_gain: FieldRule::trailing("RUN獲得ヤード", 1, None),
            pass_gain: FieldRule::trailing("PASS獲得ヤード", 1, None),
            passing: FieldRule::trailing("PASS試投-成功-被INT", 3, Some('-')),
            third_down: FieldRule::new(
                "3rd Down",
                Scope::FirstPage,
                TokenLayout::Ratios { window: 2 },
            ),
            fumbles: FieldRule::trailing("FUMBLES-LOST", 2, Some('-')),
            time_of_possession: FieldRule::trailing("TIME OF POSSESSION", 2, Some(':')),
            punt_returns: FieldRule::trailing("パントリターン-ヤード", 2, Some('-')),
            field_goals: FieldRule::trailing("FG成功/試投", 2, Some('/')),
            score: FieldRule::new(
                "1Q 2Q 3Q 4Q",
                Scope::FirstPage,
                TokenLayout::FollowingRows { from_end: 1 },
            ),
            kickoff_returns: FieldRule::total_row("KICKOFF RETURNS ", PERSONAL_STATS, [1, 2], [8, 9]),
            punting: FieldRule::total_row("PUNTING", PERSONAL_STATS, [1, 2], [9, 10]),
            attribution: AttributionMarkers {
                versus: "vs".to_string(),
                home_label: "HOME".to_string(),
                visitor_label: "VISITOR".to_string(),
            },
            play_by_play: PlayByPlayMarkers {
                start: "Play by Play".to_string(),
                end: vec!["ドライブチャート".to_string(), "Lineups".to_string()],
            },
            drive_chart: DriveChartMarkers {
                start: "ドライブチャート".to_string(),
                end: PERSONAL_STATS.to_string(),
                possession_change: "攻守交代時プレイ".to_string(),
                score_keywords: vec!["TouchDown".to_string(), "Good".to_string()],
            },
            plays: PlayKeywords {
                run_suffix: "ラン".to_string(),
                pass_suffix: "パス".to_string(),
                penalty: "+Penalty".to_string(),
                decline: "decline".to_string(),
                play_types: vec!["Run".to_string(), "Pass".to_string(), "FG".to_string()],
                touchdown: "TouchDown".to_string(),
                field_goal_good: "FG GOOD".to_string(),
                pat_good: "PAT GOOD".to_string(),
                field_goal_blocked: "FG BLOCKED".to_string(),
                redzone_limit: 25,
            },
        }
    }
}

impl AnchorCatalog {
    /// The field rules with the record they feed, in extraction order.
    pub fn rules(&self) -> [(&'static str, &FieldRule, usize); 12] {
        [
            ("run_plays", &self.run_plays, 1),
            ("run_gain", &self.run_gain, 1),
            ("pass_gain", &self.pass_gain, 1),
            ("passing", &self.passing, 3),
            ("third_down", &self.third_down, 2),
            ("fumbles", &self.fumbles, 2),
            ("time_of_possession", &self.time_of_possession, 2),
            ("punt_returns", &self.punt_returns, 2),
            ("field_goals", &self.field_goals, 2),
            ("score", &self.score, 1),
            ("kickoff_returns", &self.kickoff_returns, 2),
            ("punting", &self.punting, 2),
        ]
    }

    /// Check that every rule can feed its record.
    ///
    /// # Errors
    ///
    /// [`ExtractError::InvalidCatalog`] naming the first offending entry.
    pub fn validate(&self) -> Result<(), ExtractError> {
        for (name, rule, expected) in self.rules() {
            if rule.anchor.is_empty() {
                return Err(ExtractError::InvalidCatalog(format!("{name}: empty anchor")));
            }
            if let Scope::PageContaining(marker) = &rule.scope {
                if marker.is_empty() {
                    return Err(ExtractError::InvalidCatalog(format!(
                        "{name}: empty page marker"
                    )));
                }
            }
            match &rule.layout {
                TokenLayout::TotalRow {
                    terminal,
                    home,
                    visitor,
                } => {
                    if terminal.is_empty() {
                        return Err(ExtractError::InvalidCatalog(format!(
                            "{name}: empty terminal marker"
                        )));
                    }
                    if home.len() != visitor.len() {
                        return Err(ExtractError::InvalidCatalog(format!(
                            "{name}: home and visitor columns differ in length"
                        )));
                    }
                }
                TokenLayout::FollowingRows { from_end: 0 } => {
                    return Err(ExtractError::InvalidCatalog(format!(
                        "{name}: from_end starts at 1"
                    )));
                }
                _ => {}
            }
            let found = rule.layout.field_count();
            if found != expected {
                return Err(ExtractError::InvalidCatalog(format!(
                    "{name}: layout yields {found} values per team, record needs {expected}"
                )));
            }
        }

        let markers = [
            ("play_by_play.start", &self.play_by_play.start),
            ("drive_chart.start", &self.drive_chart.start),
            ("drive_chart.possession_change", &self.drive_chart.possession_change),
            ("plays.penalty", &self.plays.penalty),
            ("plays.run_suffix", &self.plays.run_suffix),
            ("plays.pass_suffix", &self.plays.pass_suffix),
        ];
        for (name, marker) in markers {
            if marker.is_empty() {
                return Err(ExtractError::InvalidCatalog(format!("{name}: empty marker")));
            }
        }
        if self.play_by_play.end.is_empty() {
            return Err(ExtractError::InvalidCatalog(
                "play_by_play.end: no terminating marker".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a catalog from JSON and validate it.
    ///
    /// # Errors
    ///
    /// [`ExtractError::InvalidCatalog`] for malformed JSON or a rule that
    /// fails [`validate`](Self::validate).
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        let catalog: AnchorCatalog =
            serde_json::from_str(json).map_err(|e| ExtractError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }
}
