//! Game and author filtering over the loaded missions
use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::mission::Mission;

/// How the series should be drawn. Only `Marker` is rendered today; the
/// selector exists in the page but does not change the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    Marker,
    Line,
    Both,
}

impl DataType {
    pub const ALL: [Self; 3] = [Self::Marker, Self::Line, Self::Both];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Marker => "Marker",
            Self::Line => "Line",
            Self::Both => "Both",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|dt| dt.label() == label)
    }
}

/// Snapshot of the filter inputs taken for one UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Filter {
    pub game: Game,
    pub data_type: DataType,
}

impl Filter {
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [Mission]) -> Vec<&'a Mission> {
        apply_filter(records, self.game)
    }
}

/// Keep the missions of `selected`, or all of them for the wildcard.
/// Relative order is preserved.
#[must_use]
pub fn apply_filter(records: &[Mission], selected: Game) -> Vec<&Mission> {
    if selected.is_wildcard() {
        return records.iter().collect();
    }
    records
        .iter()
        .filter(|mission| mission.game == selected)
        .collect()
}

/// Keep missions sharing at least one author with `selected`. An empty
/// selection keeps everything.
#[must_use]
pub fn filter_by_authors<'a>(records: Vec<&'a Mission>, selected: &[String]) -> Vec<&'a Mission> {
    if selected.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|mission| mission.authors.iter().any(|a| selected.contains(a)))
        .collect()
}
