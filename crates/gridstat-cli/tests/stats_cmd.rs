mod common;

use common::{TEAMS, cmd};
use predicates::prelude::*;

#[test]
fn stats_json_lists_both_teams() {
    let file = common::report_file();
    let output = cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let teams = json.as_array().unwrap();
    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0]["team_name"], "オービック");
    assert_eq!(teams[0]["opponent_name"], "富士通");
    assert_eq!(teams[0]["side"], "HOME");
    assert_eq!(teams[0]["score"], 17);
    assert_eq!(teams[0]["third_down_success_rate"], 40);
    assert_eq!(teams[0]["big_run_count"], 2);
    assert_eq!(teams[1]["team_name"], "富士通");
    assert_eq!(teams[1]["big_pass_count"], 2);
    assert_eq!(teams[1]["offense_score"], 16);
    assert!(teams[0].get("redzone_score_rate").is_none());
}

#[test]
fn stats_csv_has_header_and_two_rows() {
    let file = common::report_file();
    let output = cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .args(["--format", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].starts_with("team_name,opponent_name,team_abbreviation,side,score,"));
    assert!(rows[1].starts_with("オービック,富士通,OB,HOME,17,12,"));
    assert!(rows[2].starts_with("富士通,オービック,FU,VISITOR,20,9,"));
    assert_eq!(rows[0].split(',').count(), rows[1].split(',').count());
}

#[test]
fn stats_rates_are_appended() {
    let file = common::report_file();
    let output = cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .arg("--rates")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["redzone_score_rate"], 100);
    assert_eq!(json[0]["series_score_rate"], 50);
    assert_eq!(json[1]["series_score_rate"], 100);
}

#[test]
fn stats_thresholds_change_big_play_counts() {
    let file = common::report_file();
    let output = cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .args(["--run-threshold", "5", "--pass-threshold", "30"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["big_run_count"], 3);
    assert_eq!(json[1]["big_pass_count"], 2);
}

#[test]
fn stats_margin_reaches_reconstruction() {
    let file = common::report_file();
    cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .args(["--margin", "2.5"])
        .assert()
        .success();

    cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .args(["--margin", "20"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn stats_missing_anchor_fails() {
    let file = common::dump_file(&[&["オービック vs 富士通", "富士通 0"]]);
    cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: anchor not found"));
}

#[test]
fn stats_unknown_teams_fail() {
    let file = common::report_file();
    cmd()
        .arg("stats")
        .arg(file.path())
        .args(["--team", "Lions=LI", "--team", "Bears=BE"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("expected exactly 2 teams"));
}

#[test]
fn strict_mode_rejects_role_disagreement() {
    let mut first: Vec<&str> = common::TEAM_STATS.to_vec();
    first[0] = "HOME 富士通";
    first.insert(1, "VISITOR オービック");
    let file = common::dump_file(&[&first, common::PLAY_BY_PLAY, common::PERSONAL_STATS]);

    cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .assert()
        .success();

    cmd()
        .arg("stats")
        .arg(file.path())
        .args(TEAMS)
        .arg("--strict")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("strict mode: [ROLE_DISAGREEMENT]"));
}
