use thiserror::Error;

/// Failures while turning the bundled dataset into missions.
///
/// Every variant is fatal for the whole load: the dataset ships with the
/// application, so a bad record is a build problem rather than user input.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("unknown game name: {0:?}")]
    UnknownGame(String),
    #[error("mission {mission:?} has an invalid release date {value:?}: {source}")]
    InvalidDate {
        mission: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
