use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Envelope for every JSON body the API returns:
///
/// ```json
/// { "success": true, "data": { ... }, "message": "Workshop created" }
/// ```
///
/// Error bodies carry `T::default()` as `data`, except for check-ins, whose
/// error body still reports the outcome code and signal.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub message: String,
}

/// What handlers hand back to axum.
pub type ApiReply<T> = (StatusCode, Json<ApiResponse<T>>);

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self::with_outcome(true, data, message)
    }

    /// Failure envelope with explicit `data`.
    pub fn failure(data: T, message: impl Into<String>) -> Self {
        Self::with_outcome(false, data, message)
    }

    pub fn error(message: impl Into<String>) -> Self
    where
        T: Default,
    {
        Self::failure(T::default(), message)
    }

    /// Pairs the envelope with a status code.
    pub fn reply(self, status: StatusCode) -> ApiReply<T> {
        (status, Json(self))
    }

    fn with_outcome(success: bool, data: T, message: impl Into<String>) -> Self {
        Self {
            success,
            data,
            message: message.into(),
        }
    }
}
