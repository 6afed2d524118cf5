use std::fmt;

use records::models::status;
use records::{CaseLookup, UserLookup, UserType};

/// A single-record query against either collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    User(UserLookup),
    Case(CaseLookup),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::User(lookup) => write!(f, "users[{lookup}]"),
            Lookup::Case(lookup) => write!(f, "cases[{lookup}]"),
        }
    }
}

/// The Postman variables exported, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKey {
    AdminUser,
    OrgUser,
    NormalUser,
    ApprovedCase,
    PendingCase,
}

impl ExportKey {
    pub const ALL: [ExportKey; 5] = [
        ExportKey::AdminUser,
        ExportKey::OrgUser,
        ExportKey::NormalUser,
        ExportKey::ApprovedCase,
        ExportKey::PendingCase,
    ];

    /// Variable name in the Postman environment.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKey::AdminUser => "adminUserId",
            ExportKey::OrgUser => "orgUserId",
            ExportKey::NormalUser => "normalUserId",
            ExportKey::ApprovedCase => "approvedCaseId",
            ExportKey::PendingCase => "pendingCaseId",
        }
    }

    /// The record this variable is filled from.
    pub fn lookup(&self) -> Lookup {
        match self {
            ExportKey::AdminUser => Lookup::User(UserLookup::tag("admin")),
            ExportKey::OrgUser => Lookup::User(UserLookup::UserType(UserType::Organization)),
            ExportKey::NormalUser => Lookup::User(UserLookup::UserType(UserType::Individual)),
            ExportKey::ApprovedCase => Lookup::Case(CaseLookup::status(status::APPROVED)),
            ExportKey::PendingCase => Lookup::Case(CaseLookup::status(status::PENDING)),
        }
    }
}

impl fmt::Display for ExportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
