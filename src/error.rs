use thiserror::Error;

pub type DashResult<T> = Result<T, DashError>;

#[derive(Debug, Error)]
pub enum DashError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("scenario limit reached: at most {max} scenarios are supported")]
    ScenarioLimit { max: usize },

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
