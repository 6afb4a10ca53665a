//! Role to capability table.
//!
//! Staff roles form a closed set, so the table is a plain `match`. Every route
//! names the single capability it needs and the guard consults [`allows`].

use db::models::user::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ViewWorkshops,
    ManageWorkshops,
    ViewAttendance,
    ViewAnalytics,
    ManageVipAccess,
    ManageGuests,
    RecordCheckIn,
    RemoveAttendance,
    IssueCertificate,
}

impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::ViewWorkshops,
        Capability::ManageWorkshops,
        Capability::ViewAttendance,
        Capability::ViewAnalytics,
        Capability::ManageVipAccess,
        Capability::ManageGuests,
        Capability::RecordCheckIn,
        Capability::RemoveAttendance,
        Capability::IssueCertificate,
    ];
}

pub fn allows(role: Role, capability: Capability) -> bool {
    match role {
        Role::Admin => true,
        Role::Scanner => matches!(
            capability,
            Capability::RecordCheckIn
                | Capability::RemoveAttendance
                | Capability::ViewWorkshops
                | Capability::ViewAttendance
        ),
    }
}
