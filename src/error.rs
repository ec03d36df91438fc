use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures while reading or writing the account sheet.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("account sheet I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("account sheet is malformed: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown user: {0}")]
    UnknownUser(String),
}

/// Failures while loading the historical datasets or training the forest.
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("dataset I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset is malformed: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported gender value: {0:?}")]
    UnknownGender(String),

    #[error("not enough samples: {0}")]
    NotEnoughSamples(String),

    #[error("invalid forest parameters: {0}")]
    InvalidParams(String),

    #[error("{records} feature rows but {targets} targets")]
    ShapeMismatch { records: usize, targets: usize },

    #[error("array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error(transparent)]
    Linfa(#[from] linfa::Error),
}

/// Rejected query parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid age. Please enter an age between 10 and 100.")]
    AgeOutOfRange(u32),

    #[error("Invalid {field}: {value}. Please enter a value between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Everything the HTTP surface can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Predictor(#[from] PredictorError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("{0}")]
    BadRequest(String),

    #[error("not logged in: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Input(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) | AppError::Store(StoreError::UnknownUser(_)) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
