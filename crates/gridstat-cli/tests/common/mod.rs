//! Word-dump fixtures shared by the CLI tests.

#![allow(dead_code)]

use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

pub fn cmd() -> Command {
    Command::cargo_bin("gridstat").unwrap()
}

pub const TEAMS: [&str; 4] = ["--team", "オービック=OB", "--team", "富士通=FU"];

/// Team-stats page.
pub const TEAM_STATS: &[&str] = &[
    "オービック vs 富士通",
    "1Q 2Q 3Q 4Q Total",
    "オービック 7 3 0 7 17",
    "富士通 0 10 7 3 20",
    "RUNプレイ数 12 9",
    "RUN獲得ヤード 48 --3",
    "PASS獲得ヤード 120 201",
    "PASS試投-成功-被INT 20-12-1 25-16-0",
    "3rd Down 4/10 (40%)",
    "3/8 (38%)",
    "FUMBLES-LOST 1-1 2-0",
    "TIME OF POSSESSION 31:05 28:55",
    "パントリターン-ヤード 2-15 3-22",
    "FG成功/試投 1/1 2/3",
];

/// Play-by-play narrative followed by the drive chart.
pub const PLAY_BY_PLAY: &[&str] = &[
    "Play by Play",
    "オービック 1st 10 OB 25",
    "Run OB 25 #21 8yラン",
    "Pass OB 33 #10 22yパス",
    "Run FU 45 #21 17yラン",
    "Run FU 20 #21 20yラン TouchDown",
    "PAT GOOD",
    "富士通 1st 10 FU 30",
    "Pass FU 30 #3 12yパス",
    "+Penalty OB holding --10y",
    "Pass FU 42 #3 35yパス",
    "Run OB 23 #30 3yラン",
    "FG OB 20 37y FG GOOD",
    "オービック 1st 10 OB 30",
    "Run OB 30 #21 4yラン",
    "+Penalty FU offside 5y decline",
    "FG FU 28 45y FG BLOCKED",
    "富士通 1st 10 FU 20",
    "Pass FU 20 #3 80yパス TouchDown",
    "PAT GOOD",
    "ドライブチャート",
    "オービック",
    "Q 攻守交代時プレイ 開始 Plays Yds 結果",
    "1 Kickoff OB 25 4 75 TouchDown",
    "3 Punt OB 30 2 4 Blocked",
    "富士通",
    "Q 攻守交代時プレイ 開始 Plays Yds 結果",
    "1 Kickoff FU 30 4 50 FG Good",
    "4 Kickoff FU 20 1 80 TouchDown",
];

/// Personal-stats page.
pub const PERSONAL_STATS: &[&str] = &[
    "個人スタッツ",
    "KICKOFF RETURNS KICKOFF RETURNS",
    "No Name No Yds Lg No Name No Yds Lg",
    "Total 3 60 25 - - - - 4 88 30",
    "PUNTING",
    "No Name No Yds Avg Lg No Name No Yds Avg",
    "Total 4 160 40.0 45 - - - - 3 110 36.7",
];

/// Word dump JSON for text pages: one word per whitespace token, rows 14
/// units apart with a little jitter inside each row.
pub fn dump(pages: &[&[&str]]) -> String {
    let mut words = Vec::new();
    for (page, lines) in pages.iter().enumerate() {
        for (row, line) in lines.iter().enumerate() {
            for (col, text) in line.split_whitespace().enumerate() {
                words.push(serde_json::json!({
                    "page": page + 1,
                    "text": text,
                    "x0": 30.0 + col as f64 * 40.0,
                    "top": 40.0 + row as f64 * 14.0 + (col % 3) as f64 * 0.8,
                }));
            }
        }
    }
    serde_json::to_string(&words).unwrap()
}

/// Write a dump to a temporary file.
pub fn dump_file(pages: &[&[&str]]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(dump(pages).as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// The full three-page report.
pub fn report_file() -> NamedTempFile {
    dump_file(&[TEAM_STATS, PLAY_BY_PLAY, PERSONAL_STATS])
}
