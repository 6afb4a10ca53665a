use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkshopReq {
    #[validate(length(min = 1, max = 200, message = "Workshop name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,
    #[validate(length(max = 200, message = "Location is too long"))]
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub is_vip: bool,
    pub max_capacity: Option<i32>,
}

/// Keeps an explicit `null` apart from a missing field: missing stays `None`,
/// `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// `description` and `location` may be sent as `null` to clear them.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWorkshopReq {
    #[validate(length(min = 1, max = 200, message = "Workshop name must be 1-200 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(length(max = 200, message = "Location is too long"))]
    pub location: Option<Option<String>>,
    pub starts_at: Option<DateTime<Utc>>,
    pub is_vip: Option<bool>,
    pub max_capacity: Option<i32>,
}

impl UpdateWorkshopReq {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.starts_at.is_none()
            && self.is_vip.is_none()
            && self.max_capacity.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct GrantVipReq {
    pub guest_id: i64,
}

#[derive(Debug, Serialize, Default)]
pub struct VipGrantResponse {
    pub id: i64,
    pub guest_id: i64,
    pub workshop_id: i64,
    pub granted_at: String,
    pub newly_granted: bool,
}

#[derive(Debug, Serialize, Default)]
pub struct RevokeVipResponse {
    pub revoked: bool,
}
