//! Web-specific dataset loading
//!
//! The mission catalogue is bundled into the wasm binary, so loading never
//! touches the network.

pub use missionplot_core::*;

/// The catalogue shipped with the page.
pub const EMBEDDED_MISSIONS: &str = include_str!("../static/assets/data/missions.json");

/// Web-specific mission source that reads the embedded catalogue
pub struct WebMissionSource;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("Dataset error: {0}")]
    Data(#[from] DataError),
}

impl MissionSource for WebMissionSource {
    type Error = WebDataError;

    fn load_missions(&self) -> Result<Vec<Mission>, Self::Error> {
        let missions = load_missions_from_json(EMBEDDED_MISSIONS)?;
        log::info!("loaded {} rated missions", missions.len());
        Ok(missions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalogue_loads_without_unrated_entries() {
        let missions = WebMissionSource.load_missions().expect("embedded dataset loads");
        assert!(!missions.is_empty());
        assert!(missions.iter().all(Mission::is_rated));
        assert!(missions.iter().all(|m| !m.game.is_wildcard()));
    }

    #[test]
    fn embedded_catalogue_contains_unrated_records_to_skip() {
        let raw: Vec<RawMission> = serde_json::from_str(EMBEDDED_MISSIONS).unwrap();
        let loaded = WebMissionSource.load_missions().unwrap();
        assert!(raw.len() > loaded.len());
    }
}
