//! Authenticated back-office user as reported by the session provider

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::payload::deserialize_id;

/// Back-office role, normalised at decode time
///
/// The session provider sends the role either as a scalar (`"ADMIN"`) or as
/// a collection (`["ADMIN"]`); both decode to the same variant so nothing
/// downstream inspects the raw shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
    #[default]
    Unknown,
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw
            .trim()
            .trim_start_matches("ROLE_")
            .replace(['-', ' '], "_")
            .to_uppercase();
        match normalized.as_str() {
            "USER" => Role::User,
            "ADMIN" => Role::Admin,
            "SUPER_ADMIN" | "SUPERADMIN" => Role::SuperAdmin,
            _ => Role::Unknown,
        }
    }

    /// Highest-privilege role in a collection
    fn strongest(roles: impl IntoIterator<Item = Role>) -> Role {
        roles
            .into_iter()
            .max_by_key(|role| role.rank())
            .unwrap_or(Role::Unknown)
    }

    fn rank(self) -> u8 {
        match self {
            Role::Unknown => 0,
            Role::User => 1,
            Role::Admin => 2,
            Role::SuperAdmin => 3,
        }
    }

    pub fn is_super_admin(self) -> bool {
        self == Role::SuperAdmin
    }

    /// Wire spelling of the role, as shown in the users table
    pub fn code(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(role_from_value(&value))
    }
}

fn role_from_value(value: &Value) -> Role {
    match value {
        Value::String(raw) => Role::parse(raw),
        Value::Array(items) => Role::strongest(items.iter().map(role_from_value)),
        _ => Role::Unknown,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "nom", alias = "username")]
    pub name: Option<String>,
    #[serde(default, alias = "roles")]
    pub role: Role,
}

impl AuthUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("Administrateur")
    }
}
