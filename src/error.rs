use thiserror::Error;

#[derive(Error, Debug)]
pub enum GwaError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid choice. Please enter '1' or '2'.")]
    InvalidChoice(String),

    #[error("Invalid input for {field}: '{input}' is not a valid number")]
    InvalidNumericInput { field: &'static str, input: String },

    #[error("Weights must sum to 1.0 (100%), got {0:.3}")]
    WeightSumMismatch(f64),

    #[error("No subjects entered.")]
    EmptySubjectList,

    #[error("Input stream closed")]
    InputClosed,
}

pub type GwaResult<T> = Result<T, GwaError>;
