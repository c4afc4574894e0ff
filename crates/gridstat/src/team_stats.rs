//! Extractors for the team-stats page (first page of the report).

use gridstat_core::{Document, ExtractError, PerTeam, Teams};

use crate::anchors::{AnchorCatalog, FieldRule};
use crate::fields::{read_field, values};
use crate::records::{
    FieldGoalInfo, FumbleInfo, OffenseSummary, PassingAttempts, ReturnInfo, ThirdDownStats,
    TimeOfPossession,
};

/// Read a rule and convert each side's values into a record.
pub(crate) fn extract_with<const N: usize, T>(
    doc: &Document,
    teams: &Teams,
    rule: &FieldRule,
    build: impl Fn([i32; N]) -> T,
) -> Result<PerTeam<T>, ExtractError> {
    read_field(doc, rule, teams)?
        .map(|v| values::<N>(rule, v).map(&build))
        .transpose()
}

/// Rushing and passing totals plus the attempts-completions-interceptions row.
pub fn extract_offense(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<OffenseSummary>, ExtractError> {
    let run_play = extract_with::<1, _>(doc, teams, &catalog.run_plays, |[v]| v)?;
    let run_gain = extract_with::<1, _>(doc, teams, &catalog.run_gain, |[v]| v)?;
    let pass_gain = extract_with::<1, _>(doc, teams, &catalog.pass_gain, |[v]| v)?;
    let passing = extract_with::<3, _>(doc, teams, &catalog.passing, |[attempts, completions, interceptions]| {
        PassingAttempts {
            attempts,
            completions,
            interceptions,
        }
    })?;
    Ok(PerTeam::from_fn(|side| OffenseSummary {
        run_gain: run_gain[side],
        run_play: run_play[side],
        pass_gain: pass_gain[side],
        passing: passing[side],
    }))
}

/// Third-down conversions, e.g. `3rd Down 4/10 (40%)` followed by `3/8 (38%)`.
pub fn extract_third_down(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<ThirdDownStats>, ExtractError> {
    extract_with::<2, _>(doc, teams, &catalog.third_down, |[success, attempts]| ThirdDownStats {
        success,
        attempts,
    })
}

pub fn extract_fumbles(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<FumbleInfo>, ExtractError> {
    extract_with::<2, _>(doc, teams, &catalog.fumbles, |[fumbles, lost]| FumbleInfo {
        fumbles,
        lost,
    })
}

pub fn extract_time_of_possession(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<TimeOfPossession>, ExtractError> {
    extract_with::<2, _>(doc, teams, &catalog.time_of_possession, |[minutes, seconds]| {
        TimeOfPossession { minutes, seconds }
    })
}

pub fn extract_punt_returns(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<ReturnInfo>, ExtractError> {
    extract_with::<2, _>(doc, teams, &catalog.punt_returns, |[returns, yards]| ReturnInfo {
        returns,
        yards,
    })
}

/// Made and attempted field goals. Block and distance columns stay zero until
/// merged with the play-by-play kicks.
pub fn extract_field_goals(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<FieldGoalInfo>, ExtractError> {
    extract_with::<2, _>(doc, teams, &catalog.field_goals, |[made, attempts]| FieldGoalInfo {
        made,
        attempts,
        ..FieldGoalInfo::default()
    })
}

/// Final score from the quarter-by-quarter table.
pub fn extract_score(
    doc: &Document,
    teams: &Teams,
    catalog: &AnchorCatalog,
) -> Result<PerTeam<i32>, ExtractError> {
    extract_with::<1, _>(doc, teams, &catalog.score, |[score]| score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridstat_core::{Side, Team};

    fn teams() -> Teams {
        PerTeam::from_fn(|side| match side {
            Side::Home => Team {
                name: "オービック".to_string(),
                abbreviation: "OB".to_string(),
                side,
            },
            Side::Visitor => Team {
                name: "富士通".to_string(),
                abbreviation: "FU".to_string(),
                side,
            },
        })
    }

    fn first_page() -> Document {
        Document::from_text_pages(&[&[
            "オービック vs 富士通",
            "1Q 2Q 3Q 4Q Total",
            "オービック 7 3 0 7 17",
            "富士通 0 10 7 3 20",
            "RUNプレイ数 31 24",
            "RUN獲得ヤード 143 --12",
            "PASS獲得ヤード 201 255",
            "PASS試投-成功-被INT 25-14-1 30-18-2",
            "3rd Down 6/12 (50%)",
            "5/11 (45%)",
            "FUMBLES-LOST 2-1 0-0",
            "TIME OF POSSESSION 31:05 28:55",
            "パントリターン-ヤード 3-25 2-8",
            "FG成功/試投 1/2 2/2",
        ]])
    }

    #[test]
    fn test_extract_offense() {
        let o = extract_offense(&first_page(), &teams(), &AnchorCatalog::default()).unwrap();
        assert_eq!(o.home.run_play, 31);
        assert_eq!(o.visitor.run_gain, -12);
        assert_eq!(o.home.pass_gain, 201);
        assert_eq!(
            o.visitor.passing,
            PassingAttempts {
                attempts: 30,
                completions: 18,
                interceptions: 2
            }
        );
    }

    #[test]
    fn test_extract_third_down() {
        let t = extract_third_down(&first_page(), &teams(), &AnchorCatalog::default()).unwrap();
        assert_eq!(t.home, ThirdDownStats { success: 6, attempts: 12 });
        assert_eq!(t.visitor, ThirdDownStats { success: 5, attempts: 11 });
    }

    #[test]
    fn test_extract_fumbles_and_time() {
        let c = AnchorCatalog::default();
        let doc = first_page();
        let f = extract_fumbles(&doc, &teams(), &c).unwrap();
        assert_eq!(f.home, FumbleInfo { fumbles: 2, lost: 1 });
        let t = extract_time_of_possession(&doc, &teams(), &c).unwrap();
        assert_eq!(t.visitor, TimeOfPossession { minutes: 28, seconds: 55 });
    }

    #[test]
    fn test_extract_punt_returns_and_field_goals() {
        let c = AnchorCatalog::default();
        let doc = first_page();
        let r = extract_punt_returns(&doc, &teams(), &c).unwrap();
        assert_eq!(r.home, ReturnInfo { returns: 3, yards: 25 });
        let fg = extract_field_goals(&doc, &teams(), &c).unwrap();
        assert_eq!((fg.home.made, fg.home.attempts), (1, 2));
        assert_eq!(fg.visitor.blocked, 0);
    }

    #[test]
    fn test_extract_score() {
        let s = extract_score(&first_page(), &teams(), &AnchorCatalog::default()).unwrap();
        assert_eq!(s, PerTeam::new(17, 20));
    }

    #[test]
    fn test_missing_anchor_names_label() {
        let doc = Document::from_text_pages(&[&["RUNプレイ数 31 24"]]);
        let err = extract_fumbles(&doc, &teams(), &AnchorCatalog::default()).unwrap_err();
        assert_eq!(err, ExtractError::anchor_not_found("FUMBLES-LOST"));
    }

    #[test]
    fn test_extract_score_follows_team_names() {
        let doc = Document::from_text_pages(&[&[
            "1Q 2Q 3Q 4Q Total",
            "富士通 0 10 7 3 20",
            "オービック 7 3 0 7 17",
        ]]);
        let s = extract_score(&doc, &teams(), &AnchorCatalog::default()).unwrap();
        assert_eq!(s, PerTeam::new(17, 20));
    }

    #[test]
    fn test_third_down_skips_earlier_mention() {
        let doc = Document::from_text_pages(&[&[
            "3rd Down figures exclude 2/2 fake punts",
            "3rd Down 6/12 (50%)",
            "5/11 (45%)",
        ]]);
        let t = extract_third_down(&doc, &teams(), &AnchorCatalog::default()).unwrap();
        assert_eq!(t.home, ThirdDownStats { success: 6, attempts: 12 });
    }
}
