//! Extractors for the personal-stats page.
//!
//! Both tables print the two teams side by side and close with a `Total` row,
//! so the values are read from fixed columns of that row.

use gridstat_core::{Document, ExtractError, PerTeam, Teams};

use crate::anchors::AnchorCatalog;
use crate::records::{PuntInfo, ReturnInfo};
use crate::team_stats::extract_with;

/// Kickoff returns and return yardage.
pub fn extract_kickoff_returns(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<ReturnInfo>, ExtractError> {
    extract_with::<2, _>(doc, teams, &catalog.kickoff_returns, |[returns, yards]| ReturnInfo {
        returns,
        yards,
    })
}

/// Punts and punting yardage.
pub fn extract_punting(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<PuntInfo>, ExtractError> {
    extract_with::<2, _>(doc, teams, &catalog.punting, |[punts, yards]| PuntInfo { punts, yards })
}
