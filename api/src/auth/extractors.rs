use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::extract::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, errors::ErrorKind};
use util::config;

use crate::auth::claims::{AuthUser, Claims};

/// Verifies an HS256 token against `JWT_SECRET` with no expiry leeway.
pub fn decode_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config::jwt_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}

/// Pulls `AuthUser` out of `Authorization: Bearer <jwt>`.
///
/// Only proves the token is genuine and current. The guards in
/// [`crate::auth::guards`] also check that the account still exists.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| (StatusCode::UNAUTHORIZED, "Authentication required"))?;

        match decode_token(bearer.token()) {
            Ok(claims) => Ok(AuthUser(claims)),
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => {
                Err((StatusCode::UNAUTHORIZED, "Token expired"))
            }
            Err(_) => Err((StatusCode::UNAUTHORIZED, "Invalid token")),
        }
    }
}
