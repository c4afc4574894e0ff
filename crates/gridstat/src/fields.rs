//! Generic anchor lookup and positional token reading.
//!
//! [`read_field`] interprets one [`FieldRule`] against a [`Document`] and
//! returns the raw integers for both teams; the typed extractors in
//! [`team_stats`](crate::team_stats) and
//! [`personal_stats`](crate::personal_stats) turn them into records.

use gridstat_core::tokens::{parse_ratio, parse_signed, split_fields};
use gridstat_core::{Document, ExtractError, Line, PerTeam, Side, Teams};
use tracing::debug;

use crate::anchors::{FieldRule, Occurrence, Scope, TokenLayout};

/// Lines covered by a scope.
///
/// # Errors
///
/// [`ExtractError::AnchorNotFound`] when a `PageContaining` marker is on no
/// page.
pub fn scope_lines<'a>(doc: &'a Document, scope: &Scope) -> Result<&'a [Line], ExtractError> {
    match scope {
        Scope::Document => Ok(doc.lines()),
        Scope::FirstPage => Ok(doc.page_lines(0)),
        Scope::PageContaining(marker) => doc
            .first_page_containing(marker)
            .ok_or_else(|| ExtractError::anchor_not_found(marker.as_str())),
    }
}

/// Index of the first or last line containing `anchor`.
pub fn find_anchor(
    lines: &[Line],
    anchor: &str,
    occurrence: Occurrence,
) -> Result<usize, ExtractError> {
    let found = match occurrence {
        Occurrence::First => lines.iter().position(|l| l.contains(anchor)),
        Occurrence::Last => lines.iter().rposition(|l| l.contains(anchor)),
    };
    found.ok_or_else(|| ExtractError::anchor_not_found(anchor))
}

/// Team a table row belongs to: the row starts with its name or its
/// abbreviation is the leading token. The longest matching name wins.
fn row_side(row: &Line, teams: &Teams) -> Option<Side> {
    let leading = row.leading_token();
    teams
        .iter()
        .filter(|(_, team)| {
            row.text().starts_with(team.name.as_str())
                || leading == Some(team.abbreviation.as_str())
        })
        .max_by_key(|(_, team)| team.name.len())
        .map(|(side, _)| side)
}

/// Tokens of `line` that follow the first occurrence of `anchor`.
fn tokens_after<'a>(line: &'a Line, anchor: &str) -> Vec<&'a str> {
    let text = line.text();
    let rest = match text.find(anchor) {
        Some(at) => &text[at + anchor.len()..],
        None => text,
    };
    rest.split_whitespace().collect()
}

/// Read the values labelled by `rule`, home then visitor.
///
/// Each side gets exactly [`TokenLayout::field_count`] integers. Positional
/// layouts follow the report's home/visitor column order; `FollowingRows`
/// assigns each row to the team it names.
///
/// # Errors
///
/// - [`ExtractError::AnchorNotFound`] when the anchor, page marker or
///   terminal marker is missing.
/// - [`ExtractError::MalformedToken`] when a value token is missing or does
///   not parse, or when the rows of a `FollowingRows` table do not name one
///   team each.
pub fn read_field(
    doc: &Document,
    rule: &FieldRule,
    teams: &Teams,
) -> Result<PerTeam<Vec<i32>>, ExtractError> {
    let lines = scope_lines(doc, &rule.scope)?;
    let at = find_anchor(lines, &rule.anchor, rule.occurrence)?;
    debug!(anchor = %rule.anchor, line = at, "anchor located");
    let anchor = rule.anchor.as_str();

    match &rule.layout {
        TokenLayout::Trailing { fields, delimiter } => {
            let tokens = tokens_after(&lines[at], anchor);
            if tokens.len() < 2 {
                return Err(ExtractError::malformed(anchor, lines[at].text()));
            }
            let home = tokens[tokens.len() - 2];
            let visitor = tokens[tokens.len() - 1];
            Ok(PerTeam::new(
                split_fields(home, *delimiter, *fields, anchor)?,
                split_fields(visitor, *delimiter, *fields, anchor)?,
            ))
        }
        TokenLayout::Ratios { window } => {
            let end = (at + 1 + window).min(lines.len());
            let mut ratios = tokens_after(&lines[at], anchor)
                .into_iter()
                .chain(lines[at + 1..end].iter().flat_map(|l| l.text().split_whitespace()))
                .filter_map(parse_ratio);
            match (ratios.next(), ratios.next()) {
                (Some((hs, ha)), Some((vs, va))) => Ok(PerTeam::new(vec![hs, ha], vec![vs, va])),
                _ => Err(ExtractError::malformed(anchor, "")),
            }
        }
        TokenLayout::TotalRow {
            terminal,
            home,
            visitor,
        } => {
            let row = lines[at..]
                .iter()
                .find(|l| l.contains(terminal))
                .ok_or_else(|| ExtractError::anchor_not_found(terminal.as_str()))?;
            let tokens = row.tokens();
            let pick = |indices: &[usize]| -> Result<Vec<i32>, ExtractError> {
                indices
                    .iter()
                    .map(|&i| match tokens.get(i) {
                        Some(token) => parse_signed(token, anchor),
                        None => Err(ExtractError::malformed(anchor, "")),
                    })
                    .collect()
            };
            Ok(PerTeam::new(pick(home)?, pick(visitor)?))
        }
        TokenLayout::FollowingRows { from_end } => {
            let mut rows: PerTeam<Option<i32>> = PerTeam::default();
            for offset in 1..=2 {
                let row = lines
                    .get(at + offset)
                    .ok_or_else(|| ExtractError::malformed(anchor, ""))?;
                let side = row_side(row, teams)
                    .ok_or_else(|| ExtractError::malformed(anchor, row.text()))?;
                if rows[side].is_some() {
                    return Err(ExtractError::malformed(anchor, row.text()));
                }
                let tokens = row.tokens();
                let token = tokens
                    .len()
                    .checked_sub(*from_end)
                    .and_then(|i| tokens.get(i))
                    .ok_or_else(|| ExtractError::malformed(anchor, row.text()))?;
                rows[side] = Some(parse_signed(token, anchor)?);
            }
            match (rows.home, rows.visitor) {
                (Some(home), Some(visitor)) => Ok(PerTeam::new(vec![home], vec![visitor])),
                _ => Err(ExtractError::malformed(anchor, "")),
            }
        }
    }
}

/// Convert a side's values into a fixed array.
///
/// # Errors
///
/// [`ExtractError::InvalidCatalog`] when the rule yields a different count.
pub fn values<const N: usize>(rule: &FieldRule, values: Vec<i32>) -> Result<[i32; N], ExtractError> {
    <[i32; N]>::try_from(values).map_err(|v| {
        ExtractError::InvalidCatalog(format!(
            "{}: expected {N} values per team, layout gave {}",
            rule.anchor,
            v.len()
        ))
    })
}
