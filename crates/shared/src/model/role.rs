use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    SuperAdmin,
    Admin,
    Csr,
    Instructor,
    Student,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Csr,
        Role::Instructor,
        Role::Student,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Admin => "ADMIN",
            Role::Csr => "CSR",
            Role::Instructor => "INSTRUCTOR",
            Role::Student => "STUDENT",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }

    /// Everyone who works for the school, as opposed to its students.
    pub fn is_staff(&self) -> bool {
        !matches!(self, Role::Student)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SUPER_ADMIN" => Ok(Role::SuperAdmin),
            "ADMIN" => Ok(Role::Admin),
            "CSR" => Ok(Role::Csr),
            "INSTRUCTOR" => Ok(Role::Instructor),
            "STUDENT" => Ok(Role::Student),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Role filter accepted by `GET /user/get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleFilter {
    #[default]
    All,
    Student,
    Instructor,
    Csr,
    Admin,
    NotStudent,
}

impl RoleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleFilter::All => "ALL",
            RoleFilter::Student => "STUDENT",
            RoleFilter::Instructor => "INSTRUCTOR",
            RoleFilter::Csr => "CSR",
            RoleFilter::Admin => "ADMIN",
            RoleFilter::NotStudent => "NOT_STUDENT",
        }
    }

    pub fn admits(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Student => role == Role::Student,
            RoleFilter::Instructor => role == Role::Instructor,
            RoleFilter::Csr => role == Role::Csr,
            RoleFilter::Admin => role.is_admin(),
            RoleFilter::NotStudent => role.is_staff(),
        }
    }
}

impl fmt::Display for RoleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roles an administrator may assign through `PATCH /user/update/role/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleUpdate {
    Student,
    Instructor,
    Csr,
}

impl RoleUpdate {
    pub fn as_str(&self) -> &'static str {
        self.role().as_str()
    }

    pub fn role(&self) -> Role {
        match self {
            RoleUpdate::Student => Role::Student,
            RoleUpdate::Instructor => Role::Instructor,
            RoleUpdate::Csr => Role::Csr,
        }
    }
}

impl fmt::Display for RoleUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
