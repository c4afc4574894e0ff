//! gridstat: per-team statistics from American-football game reports.
//!
//! The engine turns the positioned words of a multi-page game report into
//! typed per-team records:
//!
//! 1. [`Document::load`] rebuilds visual lines from a [`WordSource`].
//! 2. [`attribution`] finds the two teams and their roles.
//! 3. [`team_stats`] and [`personal_stats`] read label-anchored tables using
//!    the [`AnchorCatalog`].
//! 4. [`play_by_play`] tracks the offense through the narrative and
//!    [`plays`] scans it for yardage, penalties, redzone plays and kicks.
//! 5. [`drive_chart`] counts drives and starting field positions.
//! 6. [`GameStats`] aggregates everything and computes derived metrics.
//!
//! [`GameExtractor`] runs the whole pipeline.

pub mod anchors;
pub mod attribution;
pub mod drive_chart;
pub mod export;
pub mod fields;
pub mod personal_stats;
pub mod play_by_play;
pub mod plays;
pub mod records;
pub mod report;
pub mod stats;
pub mod team_stats;

pub use gridstat_core;
pub use gridstat_core::{
    Config, Document, ExtractError, ExtractOptions, ExtractResult, ExtractWarning, Line,
    LineOptions, PagedWords, PerTeam, Roster, RosterEntry, Side, Team, Teams, UnicodeNorm,
    WarningCode, Word, WordSource,
};

pub use anchors::{AnchorCatalog, FieldRule, Occurrence, Scope, TokenLayout};
pub use attribution::{Attribution, RoleStrategy};
pub use export::{FlatRecord, FlatValue, field_positions_csv};
pub use play_by_play::{AttributedLine, ModeTracker, TeamMarker};
pub use records::*;
pub use report::GameExtractor;
pub use stats::{GameStats, TeamRecords, TeamStats};
