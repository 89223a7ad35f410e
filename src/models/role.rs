use serde::{Deserialize, Serialize};
use std::fmt;

/// One role row per user; defaults to Parent on first sign-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Parent,
    Admin,
}

impl Role {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "parent" => Some(Role::Parent),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn to_db_str(self) -> &'static str {
        match self {
            Role::Parent => "parent",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

/// The signed-in identity plus its resolved role. Built once per run,
/// then passed down; views never re-check role strings.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl Session {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }
}
