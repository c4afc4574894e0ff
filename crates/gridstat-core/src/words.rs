//! Positioned text fragments and the word-source seam.
//!
//! Word extraction itself (font decoding, glyph grouping) is done by a PDF
//! library upstream. gridstat only consumes its output through
//! [`WordSource`], so any extractor that can report `(text, x0, top)` per word
//! in reading order can drive the engine.

use std::convert::Infallible;

use crate::error::ExtractError;

/// A word reported by the word source.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Word {
    /// The text content of this word.
    pub text: String,
    /// Left edge of the word's bounding box.
    pub x0: f64,
    /// Top edge of the word's bounding box (grows downwards).
    pub y0: f64,
    /// Position of the word in the page's natural reading order.
    pub reading_order: usize,
}

impl Word {
    /// Create a word.
    pub fn new(text: impl Into<String>, x0: f64, y0: f64, reading_order: usize) -> Self {
        Self {
            text: text.into(),
            x0,
            y0,
            reading_order,
        }
    }
}

/// Trait abstracting the per-page word supply.
///
/// Loading a page is treated as one atomic call; a failing page aborts the
/// document.
///
/// # Associated Types
///
/// - `Error`: source-specific error type, convertible to [`ExtractError`].
pub trait WordSource {
    /// Source-specific error type.
    type Error: std::error::Error + Into<ExtractError>;

    /// Return the number of pages in the document.
    fn page_count(&self) -> usize;

    /// Return the words of a page (0-based) in reading order.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be produced.
    fn page_words(&self, page: usize) -> Result<Vec<Word>, Self::Error>;
}

/// An in-memory word source: one word list per page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagedWords {
    pages: Vec<Vec<Word>>,
}

impl PagedWords {
    /// Create a source from per-page word lists.
    pub fn new(pages: Vec<Vec<Word>>) -> Self {
        Self { pages }
    }

    /// Build a source from `(page, text, x0, y0)` rows such as a word dump.
    ///
    /// Pages are 0-based. Reading order is the row order within each page.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (usize, S, f64, f64)>,
        S: Into<String>,
    {
        let mut pages: Vec<Vec<Word>> = Vec::new();
        for (page, text, x0, y0) in rows {
            if pages.len() <= page {
                pages.resize_with(page + 1, Vec::new);
            }
            let order = pages[page].len();
            pages[page].push(Word::new(text, x0, y0, order));
        }
        Self { pages }
    }

    /// Returns the per-page word lists.
    pub fn pages(&self) -> &[Vec<Word>] {
        &self.pages
    }
}

impl WordSource for PagedWords {
    type Error = Infallible;

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_words(&self, page: usize) -> Result<Vec<Word>, Self::Error> {
        Ok(self.pages.get(page).cloned().unwrap_or_default())
    }
}
