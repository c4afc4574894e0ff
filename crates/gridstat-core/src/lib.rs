//! gridstat-core: backend-independent data types for game-report extraction.
//!
//! This crate provides the foundational types ([`Word`], [`Line`],
//! [`Document`], [`Roster`], [`Side`], [`Config`]) and the line
//! reconstruction algorithm used by `gridstat`. It knows nothing about
//! individual statistics.

pub mod config;
pub mod error;
pub mod layout;
pub mod roster;
pub mod tokens;
pub mod unicode_norm;
pub mod words;

pub use config::Config;
pub use error::{ExtractError, ExtractOptions, ExtractResult, ExtractWarning, WarningCode};
pub use layout::{Document, Line, LineOptions, reconstruct_page};
pub use roster::{PerTeam, Roster, RosterEntry, Side, Team, Teams};
pub use unicode_norm::UnicodeNorm;
pub use words::{PagedWords, Word, WordSource};
