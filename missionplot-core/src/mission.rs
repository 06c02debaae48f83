//! Mission records and the dataset loader
use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::game::Game;

/// `rating_average` value the dataset uses for missions nobody has rated yet.
pub const UNRATED_SENTINEL: f64 = -1.0;

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One entry of the dataset exactly as it is stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMission {
    pub name: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub release_date: String,
    pub game: String,
    pub id: u64,
    pub rating_average: f64,
    #[serde(default)]
    pub rating_count: u32,
    #[serde(default)]
    pub thumbnail_url: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating_distribution: BTreeMap<String, u32>,
}

/// A catalogued mission with its game resolved and its date parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mission {
    pub name: String,
    pub authors: Vec<String>,
    pub release_date: NaiveDate,
    pub game: Game,
    pub id: u64,
    pub rating_average: f64,
    pub rating_count: u32,
    pub thumbnail_url: String,
    pub genres: Vec<String>,
    pub rating_distribution: BTreeMap<String, u32>,
}

impl Mission {
    /// Map a raw record field by field.
    ///
    /// # Errors
    ///
    /// Returns an error if the game name is not registered or the release
    /// date is not an ISO calendar date.
    pub fn from_raw(raw: RawMission) -> Result<Self, DataError> {
        let game = Game::parse_by_name(&raw.game)?;
        let release_date =
            NaiveDate::parse_from_str(&raw.release_date, RELEASE_DATE_FORMAT).map_err(|source| {
                DataError::InvalidDate {
                    mission: raw.name.clone(),
                    value: raw.release_date.clone(),
                    source,
                }
            })?;
        Ok(Self {
            name: raw.name,
            authors: raw.authors,
            release_date,
            game,
            id: raw.id,
            rating_average: raw.rating_average,
            rating_count: raw.rating_count,
            thumbnail_url: raw.thumbnail_url,
            genres: raw.genres,
            rating_distribution: raw.rating_distribution,
        })
    }

    #[must_use]
    #[allow(clippy::float_cmp)] // the sentinel is an exact literal in the data file
    pub fn is_rated(&self) -> bool {
        self.rating_average != UNRATED_SENTINEL
    }

    /// Sum of the per-rating vote counts.
    #[must_use]
    pub fn distribution_total(&self) -> u32 {
        self.rating_distribution.values().sum()
    }
}

/// Convert every raw record and drop the unrated ones.
///
/// # Errors
///
/// Any malformed record fails the whole load.
pub fn load_missions<I>(raw_records: I) -> Result<Vec<Mission>, DataError>
where
    I: IntoIterator<Item = RawMission>,
{
    let mut missions = Vec::new();
    let mut unrated = 0_usize;
    for raw in raw_records {
        let mission = Mission::from_raw(raw)?;
        if mission.is_rated() {
            missions.push(mission);
        } else {
            unrated += 1;
        }
    }
    log::debug!(
        "loaded {} missions, skipped {unrated} without ratings",
        missions.len()
    );
    Ok(missions)
}

/// Parse a JSON array of raw records and load it.
///
/// # Errors
///
/// Returns an error if the JSON does not match [`RawMission`] or any record
/// fails to convert.
pub fn load_missions_from_json(json: &str) -> Result<Vec<Mission>, DataError> {
    let raw: Vec<RawMission> = serde_json::from_str(json)?;
    load_missions(raw)
}

/// Distinct authors across `records`, in first-seen order.
#[must_use]
pub fn unique_authors<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Mission>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .flat_map(|mission| mission.authors.iter())
        .filter(|author| seen.insert(author.as_str()))
        .cloned()
        .collect()
}


#[cfg(test)]
mod tests {
    use super::fixtures::raw;
    use super::*;

    #[test]
    fn from_raw_maps_fields_and_resolves_game() {
        let mission = Mission::from_raw(raw("Calendra's Legacy", "Thief Gold", 9.1)).unwrap();
        assert_eq!(mission.game, Game::TG);
        assert_eq!(
            mission.release_date,
            NaiveDate::from_ymd_opt(2004, 5, 12).unwrap()
        );
        assert_eq!(mission.rating_count, 12);
        assert_eq!(mission.authors, ["Tannar"]);
    }

    #[test]
    fn unknown_game_fails_the_load() {
        let records = vec![
            raw("ok", "Thief Gold", 7.0),
            raw("bad", "Thief 4", 7.0),
        ];
        let err = load_missions(records).unwrap_err();
        assert!(matches!(err, DataError::UnknownGame(ref name) if name == "Thief 4"));
    }

    #[test]
    fn invalid_date_names_the_mission() {
        let mut record = raw("Broken", "The Dark Mod", 6.0);
        record.release_date = "12/05/2004".to_string();
        let err = Mission::from_raw(record).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Broken"));
        assert!(message.contains("12/05/2004"));
    }

    #[test]
    fn unrated_missions_are_dropped() {
        let missions = load_missions(vec![
            raw("unrated", "Thief Gold", UNRATED_SENTINEL),
            raw("rated", "Thief Gold", 8.5),
        ])
        .unwrap();
        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].name, "rated");
        assert!((missions[0].rating_average - 8.5).abs() < f64::EPSILON);
    }

    #[test]
    fn json_loader_reads_snake_case_fields() {
        let json = r#"[
            {
                "name": "Rocksbourg",
                "authors": ["Gecko"],
                "release_date": "2011-02-01",
                "game": "Thief II: The Metal Age",
                "id": 42,
                "rating_average": 9.4,
                "rating_count": 310,
                "thumbnail_url": "https://example.org/r.jpg",
                "genres": ["City", "Story"],
                "rating_distribution": {"9": 120, "10": 190}
            }
        ]"#;
        let missions = load_missions_from_json(json).unwrap();
        assert_eq!(missions.len(), 1);
        assert_eq!(missions[0].game, Game::T2);
        assert_eq!(missions[0].id, 42);
        assert_eq!(missions[0].distribution_total(), 310);
    }

    #[test]
    fn malformed_json_surfaces_as_json_error() {
        assert!(matches!(
            load_missions_from_json("{not json"),
            Err(DataError::Json(_))
        ));
    }

    #[test]
    fn unique_authors_keeps_first_seen_order() {
        let mut first = raw("a", "Thief Gold", 7.0);
        first.authors = vec!["Sensut".into(), "Komag".into()];
        let mut second = raw("b", "Thief Gold", 7.0);
        second.authors = vec!["Komag".into(), "Yandros".into()];
        let missions = load_missions(vec![first, second]).unwrap();
        assert_eq!(unique_authors(&missions), ["Sensut", "Komag", "Yandros"]);
    }
}
