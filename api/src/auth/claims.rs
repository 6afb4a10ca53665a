use chrono::{DateTime, Duration, Utc};
use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// JWT payload: the staff account id, its role and an expiry in unix seconds.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: i64,
    pub exp: usize,
    pub role: Role,
}

impl Claims {
    pub fn new(user_id: i64, role: Role, ttl: Duration) -> Self {
        Self {
            sub: user_id,
            exp: (Utc::now() + ttl).timestamp() as usize,
            role,
        }
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp as i64, 0)
    }
}

/// The caller behind a verified token. Guards replace the token's role with the
/// one currently stored for the account.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> i64 {
        self.0.sub
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}
