use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGuestReq {
    #[validate(length(min = 1, max = 200, message = "Guest name must be 1-200 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub is_vip: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGuestReq {
    #[validate(length(min = 1, max = 200, message = "Guest name must be 1-200 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub is_vip: Option<bool>,
}
