//! Projection of missions into the flat tuples the scatter series consumes
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::mission::Mission;

pub const AUTHORS_PER_LINE: usize = 4;
pub const GENRES_PER_LINE: usize = 3;

const ITEM_SEPARATOR: &str = ", ";
const LINE_SEPARATOR: &str = ",<br>";

/// Slot positions inside a [`MissionData`] array. Callbacks running on the
/// chart side only see the raw array, so they index with these.
pub mod field {
    pub const RELEASE_DATE: usize = 0;
    pub const RATING_AVERAGE: usize = 1;
    pub const RATING_COUNT: usize = 2;
    pub const NAME: usize = 3;
    pub const AUTHORS: usize = 4;
    pub const THUMBNAIL: usize = 5;
    pub const GENRES: usize = 6;
}

/// One scatter point. Serializes as a positional array; the field order is
/// pinned by [`field`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionData(
    pub NaiveDate,
    pub f64,
    pub u32,
    pub String,
    pub String,
    pub String,
    pub String,
);

impl MissionData {
    #[must_use]
    pub const fn release_date(&self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub const fn rating_average(&self) -> f64 {
        self.1
    }

    #[must_use]
    pub const fn rating_count(&self) -> u32 {
        self.2
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.3
    }

    #[must_use]
    pub fn authors(&self) -> &str {
        &self.4
    }

    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        &self.5
    }

    #[must_use]
    pub fn genres(&self) -> &str {
        &self.6
    }
}

impl From<&Mission> for MissionData {
    fn from(mission: &Mission) -> Self {
        Self(
            mission.release_date,
            mission.rating_average,
            mission.rating_count,
            mission.name.clone(),
            join_with_line_break(&mission.authors, AUTHORS_PER_LINE),
            mission.thumbnail_url.clone(),
            join_with_line_break(&mission.genres, GENRES_PER_LINE),
        )
    }
}

#[must_use]
pub fn project_for_chart<'a, I>(records: I) -> Vec<MissionData>
where
    I: IntoIterator<Item = &'a Mission>,
{
    records.into_iter().map(MissionData::from).collect()
}

/// Group `items` into lines of `per_line`, separating items with ", " and
/// lines with ",<br>". A `per_line` of zero is treated as one.
#[must_use]
pub fn join_with_line_break<S: AsRef<str>>(items: &[S], per_line: usize) -> String {
    items
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(ITEM_SEPARATOR)
        })
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}
