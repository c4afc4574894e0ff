//! Whole-document extraction.

use gridstat_core::{
    Config, Document, ExtractError, ExtractOptions, ExtractResult, ExtractWarning, PerTeam,
    Roster, Side, WarningCode, WordSource,
};
use tracing::{info, warn};

use crate::anchors::AnchorCatalog;
use crate::attribution::resolve_teams;
use crate::drive_chart::{drive_chart_section, drives, extract_series, starting_field_positions};
use crate::personal_stats::{extract_kickoff_returns, extract_punting};
use crate::play_by_play::{TeamMarker, attribute_lines, play_by_play_section};
use crate::plays::{
    PlayPatterns, extract_kicks, extract_penalties, extract_redzone, extract_touchdowns,
    extract_yards,
};
use crate::records::KickPoints;
use crate::stats::{GameStats, TeamRecords};
use crate::team_stats::{
    extract_field_goals, extract_fumbles, extract_offense, extract_punt_returns, extract_score,
    extract_third_down, extract_time_of_possession,
};

/// Runs every extractor over one game report.
///
/// # Example
///
/// ```
/// use gridstat::{Document, GameExtractor, Roster, RosterEntry};
///
/// let roster = Roster::new(vec![
///     RosterEntry::new("Lions", "LI"),
///     RosterEntry::new("Bears", "BE"),
/// ]);
/// let extractor = GameExtractor::new(roster).unwrap();
/// let doc = Document::from_text_pages(&[&["Lions vs Bears"]]);
/// // Only one roster team leads a line.
/// assert!(extractor.extract_document(&doc).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct GameExtractor {
    roster: Roster,
    catalog: AnchorCatalog,
    config: Config,
    options: ExtractOptions,
    marker: TeamMarker,
    patterns: PlayPatterns,
}

impl GameExtractor {
    /// Extractor with the default catalog and thresholds.
    ///
    /// # Errors
    ///
    /// [`ExtractError::InvalidCatalog`] if the default catalog fails to compile.
    pub fn new(roster: Roster) -> Result<Self, ExtractError> {
        Self::with_catalog(roster, AnchorCatalog::default())
    }

    /// Extractor for a custom report template.
    ///
    /// # Errors
    ///
    /// [`ExtractError::InvalidCatalog`] if the catalog is invalid.
    pub fn with_catalog(roster: Roster, catalog: AnchorCatalog) -> Result<Self, ExtractError> {
        catalog.validate()?;
        let patterns = PlayPatterns::compile(&catalog.plays)?;
        Ok(Self {
            roster,
            catalog,
            config: Config::default(),
            options: ExtractOptions::default(),
            marker: TeamMarker::default(),
            patterns,
        })
    }

    /// Set the long-gain thresholds.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set line reconstruction and strictness options.
    pub fn options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// Set which tokens switch the offense in the play-by-play.
    pub fn team_marker(mut self, marker: TeamMarker) -> Self {
        self.marker = marker;
        self
    }

    pub fn catalog(&self) -> &AnchorCatalog {
        &self.catalog
    }

    /// Reconstruct the lines of a word source and extract them.
    ///
    /// # Errors
    ///
    /// Any [`ExtractError`]; the source is read exactly once.
    pub fn extract<S: WordSource>(
        &self,
        source: &S,
    ) -> Result<ExtractResult<GameStats>, ExtractError> {
        let doc = Document::load(source, &self.options.lines)?;
        self.extract_document(&doc)
    }

    /// Extract an already reconstructed document.
    ///
    /// # Errors
    ///
    /// The first failing extractor's error. In strict mode the first
    /// warning is returned as [`ExtractError::Strict`].
    pub fn extract_document(&self, doc: &Document) -> Result<ExtractResult<GameStats>, ExtractError> {
        let catalog = &self.catalog;
        let attribution = resolve_teams(doc.lines(), &self.roster, &catalog.attribution)?;
        let mut warnings = attribution.warnings;
        let teams = attribution.value.teams;

        let offense = extract_offense(doc, &teams, catalog)?;
        let third_down = extract_third_down(doc, &teams, catalog)?;
        let fumbles = extract_fumbles(doc, &teams, catalog)?;
        let time_of_possession = extract_time_of_possession(doc, &teams, catalog)?;
        let punt_returns = extract_punt_returns(doc, &teams, catalog)?;
        let mut field_goals = extract_field_goals(doc, &teams, catalog)?;
        let score = extract_score(doc, &teams, catalog)?;
        let kickoff_returns = extract_kickoff_returns(doc, &teams, catalog)?;
        let punting = extract_punting(doc, &teams, catalog)?;

        let section = play_by_play_section(doc.lines(), &catalog.play_by_play)?;
        let plays = attribute_lines(section, &teams, self.marker);
        let yards = extract_yards(&plays, &self.patterns);
        let penalties = extract_penalties(&plays, &teams, &self.roster, &self.patterns)?;
        let redzone = extract_redzone(&plays, &teams, &self.patterns);
        let kicks = extract_kicks(&plays, &self.patterns)?;
        let touchdowns = extract_touchdowns(&plays, &self.patterns);

        for side in Side::BOTH {
            let fg = &mut field_goals[side];
            fg.blocked = kicks[side].blocked;
            fg.blocked_yards = kicks[side].blocked_yards;
            fg.made_yards = kicks[side].made_yards;

            if yards[side].is_empty() {
                let warning = ExtractWarning::new(
                    WarningCode::EmptyPlayByPlay,
                    format!("no plays recorded for {}", teams[side].name),
                );
                warn!("{warning}");
                warnings.push(warning);
            }
        }

        let chart = drive_chart_section(doc.lines(), &catalog.drive_chart)?;
        let drive_list = drives(chart, &teams, &catalog.drive_chart)?;
        let series = extract_series(&drive_list);
        let field_positions = starting_field_positions(&drive_list, &teams);

        if self.options.strict_mode {
            if let Some(first) = warnings.first() {
                return Err(first.to_error());
            }
        }

        let records = PerTeam::from_fn(|side| TeamRecords {
            team: teams[side].clone(),
            opponent_name: teams[side.opponent()].name.clone(),
            offense: offense[side],
            third_down: third_down[side],
            fumbles: fumbles[side],
            time_of_possession: time_of_possession[side],
            punt_returns: punt_returns[side],
            kickoff_returns: kickoff_returns[side],
            punting: punting[side],
            field_goals: field_goals[side],
            score: score[side],
            yards: yards[side].clone(),
            penalties: penalties[side],
            redzone: redzone[side],
            series: series[side],
            touchdowns: touchdowns[side],
            kick_points: KickPoints {
                points: kicks[side].points,
            },
        });
        let game = GameStats::new(records, field_positions, self.config)?;
        info!(
            home = %game.home().team().name,
            visitor = %game.visitor().team().name,
            warnings = warnings.len(),
            "game extracted"
        );
        Ok(ExtractResult::with_warnings(game, warnings))
    }
}
