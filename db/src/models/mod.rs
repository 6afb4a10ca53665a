pub mod attendance;
pub mod guest;
pub mod user;
pub mod vip_access;
pub mod workshop;

pub use attendance::Entity as Attendance;
pub use guest::Entity as Guest;
pub use user::Entity as User;
pub use vip_access::Entity as VipAccess;
pub use workshop::Entity as Workshop;
