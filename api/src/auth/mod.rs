pub mod capabilities;
pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use capabilities::Capability;
pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use db::models::user::Role;
use jsonwebtoken::{EncodingKey, Header, encode};
use util::config;

/// Generates a JWT and its expiry timestamp for a given staff account.
///
/// Tokens are normally minted by the event's identity service with the shared
/// `JWT_SECRET`; this is what the seeder and the tests use.
pub fn generate_jwt(user_id: i64, role: Role) -> (String, String) {
    let claims = Claims::new(
        user_id,
        role,
        Duration::minutes(config::jwt_duration_minutes() as i64),
    );

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config::jwt_secret().as_bytes()),
    )
    .expect("Token encoding failed");

    let expiry = claims.expires_at().unwrap_or_else(Utc::now);
    (token, expiry.to_rfc3339())
}
