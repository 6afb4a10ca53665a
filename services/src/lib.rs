pub mod analytics;
pub mod attendance_recorder;
pub mod error;
pub mod guest_service;
pub mod vip_access_service;
pub mod workshop_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{AppError, ErrorCategory};
