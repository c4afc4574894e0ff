//! Line reconstruction: grouping words into visual lines.
//!
//! Every downstream extractor works on [`Line`] strings only, never on raw
//! word positions.

use std::ops::Range;

use crate::error::ExtractError;
use crate::unicode_norm::UnicodeNorm;
use crate::words::{Word, WordSource};

/// Options for line reconstruction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineOptions {
    /// A word joins the current line while its `y0` is less than `margin`
    /// below the line's reference `y0` (document units).
    pub margin: f64,
    /// Unicode normalization applied to word text (default: none).
    pub unicode_norm: UnicodeNorm,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            margin: 3.0,
            unicode_norm: UnicodeNorm::None,
        }
    }
}

/// A reconstructed visual line.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    text: String,
    words: Vec<Word>,
    page: usize,
}

impl Line {
    /// Build a line from words already in reading order.
    pub fn from_words(words: Vec<Word>, page: usize) -> Self {
        let text = words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Self { text, words, page }
    }

    /// Build a single-word line from raw text, positioned at `y0 = 0`.
    ///
    /// Handy for synthetic documents where geometry is irrelevant.
    pub fn from_text(text: &str, page: usize) -> Self {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(i, t)| Word::new(t, i as f64, 0.0, i))
            .collect();
        Self::from_words(words, page)
    }

    /// The fragments joined by single spaces.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The words of this line in their original order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// 0-based page this line was reconstructed from.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Whitespace-separated tokens of [`text`](Self::text).
    pub fn tokens(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    /// First token, if any.
    pub fn leading_token(&self) -> Option<&str> {
        self.text.split_whitespace().next()
    }

    /// True if the line text contains `needle` as a substring.
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }

    /// True if one of the tokens equals `token` exactly.
    pub fn has_token(&self, token: &str) -> bool {
        self.text.split_whitespace().any(|t| t == token)
    }
}

/// Group one page's words into lines by vertical proximity.
///
/// Words are visited in `reading_order`. The reference starts below any real
/// position, so the first word always opens a fresh line. A word whose `y0`
/// minus the reference is smaller than `options.margin` is appended to the
/// current line; otherwise the current line is emitted and the word starts a
/// new one, becoming the new reference. The last line is emitted when the page
/// ends.
pub fn reconstruct_page(words: &[Word], page: usize, options: &LineOptions) -> Vec<Line> {
    let mut ordered: Vec<&Word> = words.iter().collect();
    ordered.sort_by_key(|w| w.reading_order);

    let mut lines = Vec::new();
    let mut current: Vec<Word> = Vec::new();
    let mut reference = f64::NEG_INFINITY;

    for word in ordered {
        let mut word = word.clone();
        if options.unicode_norm != UnicodeNorm::None {
            word.text = options.unicode_norm.normalize(&word.text);
        }

        if word.y0 - reference < options.margin {
            current.push(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(Line::from_words(std::mem::take(&mut current), page));
        }
        reference = word.y0;
        current.push(word);
    }

    if !current.is_empty() {
        lines.push(Line::from_words(current, page));
    }

    lines
}

/// The reconstructed lines of a whole report, concatenated in page order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    lines: Vec<Line>,
    pages: Vec<Range<usize>>,
}

impl Document {
    /// Build a document from per-page line lists.
    pub fn from_pages(pages: Vec<Vec<Line>>) -> Self {
        let mut lines = Vec::new();
        let mut ranges = Vec::with_capacity(pages.len());
        for page in pages {
            let start = lines.len();
            lines.extend(page);
            ranges.push(start..lines.len());
        }
        Self {
            lines,
            pages: ranges,
        }
    }

    /// Build a document from literal text lines, one slice per page.
    pub fn from_text_pages(pages: &[&[&str]]) -> Self {
        Self::from_pages(
            pages
                .iter()
                .enumerate()
                .map(|(p, texts)| texts.iter().map(|t| Line::from_text(t, p)).collect())
                .collect(),
        )
    }

    /// Scan every page of a word source exactly once.
    ///
    /// # Errors
    ///
    /// Propagates the first page the source fails to deliver.
    pub fn load<S: WordSource>(source: &S, options: &LineOptions) -> Result<Self, ExtractError> {
        let mut pages = Vec::with_capacity(source.page_count());
        for page in 0..source.page_count() {
            let words = source.page_words(page).map_err(Into::into)?;
            pages.push(reconstruct_page(&words, page, options));
        }
        Ok(Self::from_pages(pages))
    }

    /// All lines, in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lines of one page; empty if the page does not exist.
    pub fn page_lines(&self, page: usize) -> &[Line] {
        match self.pages.get(page) {
            Some(range) => &self.lines[range.clone()],
            None => &[],
        }
    }

    /// Lines of the first page whose text contains `marker`.
    pub fn first_page_containing(&self, marker: &str) -> Option<&[Line]> {
        self.pages
            .iter()
            .map(|range| &self.lines[range.clone()])
            .find(|lines| lines.iter().any(|l| l.contains(marker)))
    }

    /// Line texts joined with newlines.
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
