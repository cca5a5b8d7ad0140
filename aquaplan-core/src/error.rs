use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanningError {
    #[error("Invalid species '{0}': {1}")]
    InvalidSpecies(String, String),

    #[error("Invalid production system: {0}")]
    InvalidSystem(String),

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to process CSV file '{0}': {1}")]
    CsvError(String, #[source] csv::Error),

    #[error("An error occurred during export: {0}")]
    ExportError(#[from] anyhow::Error),
}
