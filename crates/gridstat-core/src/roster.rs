//! Team roster and side types.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

/// Which role a team plays in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The first team; its values are listed first in every paired row.
    Home,
    /// The second team.
    Visitor,
}

impl Side {
    /// Both sides, home first.
    pub const BOTH: [Side; 2] = [Side::Home, Side::Visitor];

    /// The other side.
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Visitor,
            Side::Visitor => Side::Home,
        }
    }

    /// `0` for home, `1` for visitor.
    pub fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Visitor => 1,
        }
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: usize) -> Option<Side> {
        match index {
            0 => Some(Side::Home),
            1 => Some(Side::Visitor),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("HOME"),
            Side::Visitor => f.write_str("VISITOR"),
        }
    }
}

/// A pair of values, one per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerTeam<T> {
    /// Home team's value.
    pub home: T,
    /// Visitor team's value.
    pub visitor: T,
}

impl<T> PerTeam<T> {
    /// Create a pair.
    pub fn new(home: T, visitor: T) -> Self {
        Self { home, visitor }
    }

    /// Build both values from a function of the side.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        Self {
            home: f(Side::Home),
            visitor: f(Side::Visitor),
        }
    }

    /// Value for one side.
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Visitor => &self.visitor,
        }
    }

    /// Mutable value for one side.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Visitor => &mut self.visitor,
        }
    }

    /// Apply `f` to both values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> PerTeam<U> {
        PerTeam {
            home: f(self.home),
            visitor: f(self.visitor),
        }
    }

    /// Borrow both values.
    pub fn each_ref(&self) -> PerTeam<&T> {
        PerTeam {
            home: &self.home,
            visitor: &self.visitor,
        }
    }

    /// Iterate `(side, value)` home first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Home, &self.home), (Side::Visitor, &self.visitor)].into_iter()
    }
}

impl<T, E> PerTeam<Result<T, E>> {
    /// Turn a pair of results into a result of a pair, home checked first.
    pub fn transpose(self) -> Result<PerTeam<T>, E> {
        Ok(PerTeam {
            home: self.home?,
            visitor: self.visitor?,
        })
    }
}

impl<T> Index<Side> for PerTeam<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for PerTeam<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        self.get_mut(side)
    }
}

/// A team resolved from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    /// Full team name as printed in the report.
    pub name: String,
    /// Short code used in play-by-play and drive lines.
    pub abbreviation: String,
    /// Assigned role.
    pub side: Side,
}

/// The two teams of one document.
pub type Teams = PerTeam<Team>;

impl Teams {
    /// Side whose name equals `name`, home checked first.
    pub fn side_of_name(&self, name: &str) -> Option<Side> {
        self.iter().find(|(_, t)| t.name == name).map(|(s, _)| s)
    }

    /// Side whose abbreviation equals `abbreviation`, home checked first.
    pub fn side_of_abbreviation(&self, abbreviation: &str) -> Option<Side> {
        self.iter()
            .find(|(_, t)| t.abbreviation == abbreviation)
            .map(|(s, _)| s)
    }
}

/// One entry of the league roster.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterEntry {
    /// Full team name.
    pub name: String,
    /// Short code.
    pub abbreviation: String,
}

impl RosterEntry {
    /// Create an entry.
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
        }
    }
}

/// The reference list of valid teams with both lookup directions.
///
/// With the `serde` feature a roster deserializes from `{"teams": [...]}`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(from = "RosterDef")
)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    by_abbreviation: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RosterDef {
    teams: Vec<RosterEntry>,
}

#[cfg(feature = "serde")]
impl From<RosterDef> for Roster {
    fn from(def: RosterDef) -> Self {
        Roster::new(def.teams)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Roster {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Roster", 1)?;
        state.serialize_field("teams", &self.entries)?;
        state.end()
    }
}

impl Roster {
    /// Build a roster. On duplicate names or abbreviations the first entry
    /// wins the lookup.
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        let mut by_abbreviation = HashMap::new();
        let mut by_name = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            by_abbreviation.entry(entry.abbreviation.clone()).or_insert(i);
            by_name.entry(entry.name.clone()).or_insert(i);
        }
        Self {
            entries,
            by_abbreviation,
            by_name,
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a full team name.
    pub fn by_name(&self, name: &str) -> Option<&RosterEntry> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Entry for an abbreviation.
    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&RosterEntry> {
        self.by_abbreviation
            .get(abbreviation)
            .map(|&i| &self.entries[i])
    }

    /// Abbreviation of a full team name.
    pub fn abbreviation_of(&self, name: &str) -> Option<&str> {
        self.by_name(name).map(|e| e.abbreviation.as_str())
    }

    /// True if `name` is a roster team name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }
}

impl FromIterator<RosterEntry> for Roster {
    fn from_iter<I: IntoIterator<Item = RosterEntry>>(iter: I) -> Self {
        Roster::new(iter.into_iter().collect())
    }
}
