use axum::{Extension, Json, extract::State, http::StatusCode};
use services::guest_service::{CreateGuest, GuestService};
use util::state::AppState;
use validator::Validate;

use super::common::CreateGuestReq;
use crate::auth::AuthUser;
use crate::response::ApiResponse;
use crate::routes::common::{GuestResponse, bad_request, error_reply, format_validation_errors};

/// POST /api/guests
///
/// Registers a guest and issues their QR token (`guest-<id>`).
///
/// ### Request Body
/// ```json
/// { "name": "Ada Lovelace", "email": "ada@example.com", "is_vip": false }
/// ```
///
/// ### Responses
/// - `201 Created` with the guest, including `qr_code`
/// - `400 Bad Request` on an empty name or malformed email
/// - `409 Conflict` if the email is already registered
pub async fn create_guest(
    State(state): State<AppState>,
    Extension(AuthUser(claims)): Extension<AuthUser>,
    Json(req): Json<CreateGuestReq>,
) -> (StatusCode, Json<ApiResponse<GuestResponse>>) {
    if let Err(e) = req.validate() {
        return bad_request(format_validation_errors(&e));
    }

    let params = CreateGuest {
        owner_id: claims.sub,
        name: req.name,
        email: req.email,
        is_vip: req.is_vip,
    };

    match GuestService::new(state.db_clone()).create(params).await {
        Ok(g) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(GuestResponse::from(g), "Guest registered")),
        ),
        Err(e) => error_reply(e),
    }
}
