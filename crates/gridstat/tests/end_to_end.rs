//! End-to-end extraction of synthetic three-page game reports.

mod common;

use gridstat::{
    Config, Document, ExtractError, ExtractOptions, FieldGoalInfo, GameExtractor, LineOptions,
    PassingAttempts, PenaltyInfo, RedzoneInfo, SeriesStats, Side, ThirdDownStats, TouchdownInfo,
    WarningCode, field_positions_csv,
};

fn extractor() -> GameExtractor {
    GameExtractor::new(common::roster()).unwrap()
}

fn standard() -> gridstat::GameStats {
    let words = common::report_words(&common::report_pages());
    let result = extractor().extract(&words).unwrap();
    assert!(result.is_clean(), "{:?}", result.warnings);
    result.value
}

// --- reconstruction ---

#[test]
fn test_reconstruction_rebuilds_every_fixture_line() {
    let words = common::report_words(&common::report_pages());
    let doc = Document::load(&words, &LineOptions::default()).unwrap();
    assert_eq!(doc.page_count(), 3);
    let expected: Vec<&str> = common::report_pages().concat();
    let actual: Vec<&str> = doc.lines().iter().map(|l| l.text()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_reconstruction_is_deterministic() {
    let words = common::report_words(&common::report_pages());
    let a = Document::load(&words, &LineOptions::default()).unwrap();
    let b = Document::load(&words, &LineOptions::default()).unwrap();
    assert_eq!(a, b);
}

// --- anchor extractors ---

#[test]
fn test_run_plays_and_third_down() {
    let game = standard();
    assert_eq!(game.home().records().offense.run_play, 12);
    assert_eq!(game.visitor().records().offense.run_play, 9);
    assert_eq!(
        game.home().records().third_down,
        ThirdDownStats { success: 4, attempts: 10 }
    );
    assert_eq!(
        game.visitor().records().third_down,
        ThirdDownStats { success: 3, attempts: 8 }
    );
}

#[test]
fn test_repeated_heading_reads_the_stats_row() {
    let pages = common::report_pages();
    let mut first: Vec<&str> = pages[0].to_vec();
    first.insert(1, "3rd Down 0/1 0/1 (notes)");
    let words = common::report_words(&[&first, pages[1], pages[2]]);

    let game = extractor().extract(&words).unwrap().value;
    assert_eq!(
        game.home().records().third_down,
        ThirdDownStats { success: 4, attempts: 10 }
    );
    assert_eq!(
        game.visitor().records().third_down,
        ThirdDownStats { success: 3, attempts: 8 }
    );
}

#[test]
fn test_team_stats_page() {
    let game = standard();
    let home = game.home().records();
    let visitor = game.visitor().records();
    assert_eq!(home.team.name, "オービック");
    assert_eq!(visitor.team.abbreviation, "FU");
    assert_eq!(home.opponent_name, "富士通");
    assert_eq!(visitor.offense.run_gain, -3);
    assert_eq!(
        visitor.offense.passing,
        PassingAttempts { attempts: 25, completions: 16, interceptions: 0 }
    );
    assert_eq!((home.fumbles.fumbles, home.fumbles.lost), (1, 1));
    assert_eq!(home.time_of_possession.total_seconds(), 31 * 60 + 5);
    assert_eq!(visitor.punt_returns.yards, 22);
    assert_eq!((home.score, visitor.score), (17, 20));
}

#[test]
fn test_personal_stats_page() {
    let game = standard();
    assert_eq!(game.home().records().kickoff_returns.yards, 60);
    assert_eq!(game.visitor().records().kickoff_returns.returns, 4);
    assert_eq!(game.home().records().punting.punts, 4);
    assert_eq!(game.visitor().records().punting.yards, 110);
}

// --- play-by-play ---

#[test]
fn test_yardage_lists_follow_offense() {
    let game = standard();
    assert_eq!(game.home().records().yards.rushing, vec![8, 17, 20, 4]);
    assert_eq!(game.home().records().yards.passing, vec![22]);
    assert_eq!(game.visitor().records().yards.rushing, vec![3]);
    assert_eq!(game.visitor().records().yards.passing, vec![12, 35, 80]);
}

#[test]
fn test_penalties() {
    let game = standard();
    assert_eq!(game.home().records().penalties, PenaltyInfo { count: 1, yards: 10 });
    assert_eq!(game.visitor().records().penalties, PenaltyInfo { count: 1, yards: 0 });
}

#[test]
fn test_redzone() {
    let game = standard();
    assert_eq!(
        game.home().records().redzone,
        RedzoneInfo {
            play_count: 1,
            touchdown_count: 1,
            field_goal_count: 0,
            score_count: 1,
            series_count: 1,
        }
    );
    assert_eq!(
        game.visitor().records().redzone,
        RedzoneInfo {
            play_count: 1,
            touchdown_count: 0,
            field_goal_count: 1,
            score_count: 1,
            series_count: 1,
        }
    );
}

#[test]
fn test_field_goals_merge_anchor_and_play_by_play() {
    let game = standard();
    assert_eq!(
        game.home().records().field_goals,
        FieldGoalInfo { made: 1, attempts: 1, blocked: 1, blocked_yards: 45, made_yards: 0 }
    );
    assert_eq!(
        game.visitor().records().field_goals,
        FieldGoalInfo { made: 2, attempts: 3, blocked: 0, blocked_yards: 0, made_yards: 37 }
    );
}

#[test]
fn test_touchdowns_and_kick_points() {
    let game = standard();
    assert_eq!(
        game.home().records().touchdowns,
        TouchdownInfo { rushing: 1, passing: 0 }
    );
    assert_eq!(
        game.visitor().records().touchdowns,
        TouchdownInfo { rushing: 0, passing: 1 }
    );
    assert_eq!(game.home().records().kick_points.points, 1);
    assert_eq!(game.visitor().records().kick_points.points, 4);
}

// --- drive chart ---

#[test]
fn test_series_and_field_positions() {
    let game = standard();
    assert_eq!(
        game.home().records().series,
        SeriesStats { series_count: 2, score_count: 1 }
    );
    assert_eq!(
        game.visitor().records().series,
        SeriesStats { series_count: 2, score_count: 2 }
    );
    let csv = field_positions_csv(game.all_field_positions());
    assert_eq!(
        csv,
        "team_name,opponent_name,field_position,score\n\
         オービック,富士通,25,1\n\
         オービック,富士通,30,0\n\
         富士通,オービック,30,1\n\
         富士通,オービック,20,1\n"
    );
}

// --- derived metrics ---

#[test]
fn test_derived_metrics() {
    let game = standard();
    assert_eq!(game.home().third_down_success_rate(), 40);
    assert_eq!(game.visitor().third_down_success_rate(), 37);
    assert_eq!(game.home().big_run_count(), 2);
    assert_eq!(game.home().big_pass_count(), 1);
    assert_eq!(game.visitor().big_pass_count(), 2);
    assert_eq!(game.home().offense_score(), 16);
    assert_eq!(game.visitor().offense_score(), 16);
    assert_eq!(game.visitor().series_score_rate().unwrap(), 100);
}

#[test]
fn test_config_thresholds_are_injected() {
    let words = common::report_words(&common::report_pages());
    let game = extractor()
        .config(Config::new(5, 30))
        .extract(&words)
        .unwrap()
        .value;
    assert_eq!(game.home().big_run_count(), 3);
    assert_eq!(game.visitor().big_pass_count(), 2);
}

#[test]
fn test_flatten_round_of_both_teams() {
    let game = standard();
    let home = game.home().flatten();
    let visitor = game.visitor().flatten();
    assert_eq!(home.csv_header(), visitor.csv_header());
    assert!(visitor.csv_row().starts_with("富士通,オービック,FU,VISITOR,20,"));
}

// --- failures ---

#[test]
fn test_missing_anchor_is_named() {
    let words = common::report_with(0, "FUMBLES-LOST 1-1 2-0", "FUMBLES 1-1 2-0");
    assert_eq!(
        extractor().extract(&words).unwrap_err(),
        ExtractError::anchor_not_found("FUMBLES-LOST")
    );
}

#[test]
fn test_malformed_value_is_reported() {
    let words = common::report_with(0, "RUNプレイ数 12 9", "RUNプレイ数 12 nine");
    assert_eq!(
        extractor().extract(&words).unwrap_err(),
        ExtractError::malformed("RUNプレイ数", "nine")
    );
}

#[test]
fn test_zero_third_down_attempts_is_division_by_zero() {
    let words = common::report_with(0, "3/8 (38%)", "0/0 (0%)");
    assert!(matches!(
        extractor().extract(&words).unwrap_err(),
        ExtractError::DivisionByZero { metric: "third_down_success_rate" }
    ));
}

#[test]
fn test_third_team_is_team_count_mismatch() {
    let words = common::report_with(1, "PAT GOOD", "IBM timeout");
    assert!(matches!(
        extractor().extract(&words).unwrap_err(),
        ExtractError::TeamCountMismatch { found } if found.len() == 3
    ));
}

#[test]
fn test_missing_play_by_play_end_marker() {
    let words = common::report_with(1, "ドライブチャート", "Drive summary");
    assert_eq!(
        extractor().extract(&words).unwrap_err(),
        ExtractError::anchor_not_found("ドライブチャート")
    );
}

// --- warnings ---

#[test]
fn test_versus_header_sets_roles() {
    let words = common::report_with(0, "オービック vs 富士通", "富士通 vs オービック");
    let result = extractor().extract(&words).unwrap();
    assert!(result.is_clean());
    let game = result.value;
    assert_eq!(game.home().team().name, "富士通");
    assert_eq!(game.home().records().score, 20);
    assert_eq!(game.visitor().records().score, 17);
}

#[test]
fn test_role_disagreement_warns_and_strict_fails() {
    let pages = common::report_pages();
    let mut first: Vec<&str> = pages[0].to_vec();
    first[0] = "HOME 富士通";
    first.insert(1, "VISITOR オービック");
    let words = common::report_words(&[&first, pages[1], pages[2]]);

    let result = extractor().extract(&words).unwrap();
    assert_eq!(result.value.home().team().name, "富士通");
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].code, WarningCode::RoleDisagreement);

    let strict = extractor().options(ExtractOptions {
        strict_mode: true,
        ..ExtractOptions::default()
    });
    assert!(matches!(
        strict.extract(&words).unwrap_err(),
        ExtractError::Strict(msg) if msg.starts_with("[ROLE_DISAGREEMENT]")
    ));
}

#[test]
fn test_empty_play_by_play_warns() {
    let pages = common::report_pages();
    let pbp: Vec<&str> = pages[1]
        .iter()
        .copied()
        .filter(|l| !l.contains("yラン") && !l.contains("yパス"))
        .collect();
    let words = common::report_words(&[pages[0], &pbp, pages[2]]);
    let result = extractor().extract(&words).unwrap();
    let codes: Vec<WarningCode> = result.warnings.iter().map(|w| w.code).collect();
    assert_eq!(codes, vec![WarningCode::EmptyPlayByPlay, WarningCode::EmptyPlayByPlay]);
    assert_eq!(result.value.team(Side::Home).big_run_count(), 0);
}
