//! Route guards.
//!
//! Each `allow_*` function is an axum middleware meant for
//! `from_fn_with_state(app_state, allow_*)`. It authenticates the bearer token,
//! reloads the account so the role comes from the database rather than the token,
//! checks one [`Capability`] and stores the resulting [`AuthUser`] in the request
//! extensions for handlers to pick up with `Extension<AuthUser>`.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use db::models::user;
use sea_orm::EntityTrait;
use util::state::AppState;

use crate::auth::capabilities::{Capability, allows};
use crate::auth::claims::{AuthUser, Claims};
use crate::response::{ApiReply, ApiResponse};

#[derive(serde::Serialize, Default)]
pub struct Empty;

type GuardResult = Result<Response, ApiReply<Empty>>;

fn reject(status: StatusCode, message: &str) -> ApiReply<Empty> {
    ApiResponse::error(message).reply(status)
}

/// Base guard the capability guards below build upon.
async fn allow_capability(
    app_state: AppState,
    req: Request<Body>,
    next: Next,
    capability: Capability,
    failure_msg: &str,
) -> GuardResult {
    let (mut parts, body) = req.into_parts();
    let AuthUser(claims) = AuthUser::from_request_parts(&mut parts, &())
        .await
        .map_err(|(status, reason)| reject(status, reason))?;

    let account = match user::Entity::find_by_id(claims.sub).one(app_state.db()).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            tracing::warn!(user_id = claims.sub, "Token for unknown account");
            return Err(reject(StatusCode::UNAUTHORIZED, "Unknown account"));
        }
        Err(e) => {
            tracing::error!(error = %e, user_id = claims.sub, "DB error while loading account");
            return Err(reject(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to verify account",
            ));
        }
    };

    if !allows(account.role, capability) {
        tracing::info!(user_id = account.id, role = %account.role, ?capability, "Access denied");
        return Err(reject(StatusCode::FORBIDDEN, failure_msg));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuthUser(Claims {
        role: account.role,
        ..claims
    }));
    Ok(next.run(req).await)
}

pub async fn allow_view_workshops(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::ViewWorkshops,
        "Not allowed to view workshops",
    )
    .await
}

pub async fn allow_manage_workshops(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::ManageWorkshops,
        "Admin access required to manage workshops",
    )
    .await
}

pub async fn allow_view_attendance(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::ViewAttendance,
        "Not allowed to view attendance",
    )
    .await
}

pub async fn allow_view_analytics(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::ViewAnalytics,
        "Admin access required to view analytics",
    )
    .await
}

pub async fn allow_manage_vip_access(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::ManageVipAccess,
        "Admin access required to manage VIP access",
    )
    .await
}

pub async fn allow_manage_guests(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::ManageGuests,
        "Admin access required to manage guests",
    )
    .await
}

pub async fn allow_record_check_in(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::RecordCheckIn,
        "Not allowed to record check-ins",
    )
    .await
}

pub async fn allow_remove_attendance(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::RemoveAttendance,
        "Not allowed to remove attendance",
    )
    .await
}

pub async fn allow_issue_certificate(
    State(app_state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> GuardResult {
    allow_capability(
        app_state,
        req,
        next,
        Capability::IssueCertificate,
        "Admin access required to issue certificates",
    )
    .await
}
