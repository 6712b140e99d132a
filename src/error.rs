use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdError {
    #[error("polynomial order must be at least 1, got {0}")]
    InvalidOrder(usize),

    #[error("unsupported spatial dimension {0}: only 2-D quadrilaterals are implemented")]
    UnsupportedDimension(usize),

    #[error("initial state has {actual} components, expected dimension + 2 = {expected}")]
    InitialStateLength { expected: usize, actual: usize },

    #[error("solver used before setup: reference nodes have not been created")]
    NotSetUp,

    #[error("{field}: expected {expected} entries, found {actual}")]
    LayoutMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field}: state vector has {actual} components, expected {expected}")]
    StateWidthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("element {0} has no diffusive flux storage")]
    MissingViscousState(usize),

    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse parameter file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SdError {
    pub fn layout_mismatch(field: &'static str, expected: usize, actual: usize) -> Self {
        Self::LayoutMismatch {
            field,
            expected,
            actual,
        }
    }
}

pub type Result<T> = std::result::Result<T, SdError>;
