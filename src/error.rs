//! Defines the app level error type and its conversion to an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The email used to register a user is already in use.
    #[error("a user with the given email already exists")]
    DuplicateUser,

    /// The user provided an invalid combination of email and password.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// There was no user that matched the given ID.
    #[error("no user found with the given details")]
    UserNotFound,

    /// The requested resource was not found.
    ///
    /// Callers should check that the parameters (e.g., ID) are correct and
    /// that the resource has been created.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// A zero or negative amount was used to create a transaction.
    ///
    /// Transactions record money that was spent or earned; the direction is
    /// carried by the transaction type, so the amount must be positive.
    #[error("{0} is not a valid transaction amount, amounts must be greater than zero")]
    NonPositiveAmount(f64),

    /// The transaction type did not match the type of the referenced category.
    #[error("the transaction type does not match the category's type")]
    CategoryTypeMismatch,

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// An unhandled/unexpected error from the file storage backend.
    #[error("an unexpected file storage error occurred: {0}")]
    Io(String),

    /// An error occurred while serializing a collection as JSON.
    #[error("could not serialize as JSON: {0}")]
    Json(String),
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        tracing::error!("an unhandled file storage error occurred: {}", value);
        Error::Io(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        tracing::error!("an unhandled JSON error occurred: {}", value);
        Error::Json(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            Error::NotFound | Error::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Error::DuplicateUser => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::EmptyCategoryName
            | Error::NonPositiveAmount(_)
            | Error::CategoryTypeMismatch => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (status_code, message).into_response()
    }
}
