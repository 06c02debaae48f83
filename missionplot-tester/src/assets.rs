use anyhow::{Context, Result};
use missionplot_core::{Mission, load_missions_from_json};
use std::fs;
use std::path::Path;

/// Dataset shipped with the web front end.
pub const EMBEDDED_MISSIONS: &str =
    include_str!("../../missionplot-web/static/assets/data/missions.json");

/// Load missions from `path`, or from the embedded dataset when no path is given.
pub fn load_dataset(path: Option<&Path>) -> Result<Vec<Mission>> {
    let Some(path) = path else {
        log::debug!("using embedded dataset");
        return load_missions_from_json(EMBEDDED_MISSIONS).context("parsing embedded dataset");
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let missions = load_missions_from_json(&json)
        .with_context(|| format!("failed to load missions from {}", path.display()))?;
    log::info!("loaded {} missions from {}", missions.len(), path.display());
    Ok(missions)
}
