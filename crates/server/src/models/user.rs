use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub type UserId = u32;

/// Serialized as `"student"` on profiles. Admin user rows show the display
/// form (`"Student"`).
#[derive(Clone, Debug, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Faculty,
    Admin,
}

/// Profile of the signed in user, as edited on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Row of the admin user table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(with = "display_role")]
    pub role: UserRole,
}

mod display_role {
    use std::str::FromStr;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::UserRole;

    pub fn serialize<S: Serializer>(role: &UserRole, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(role)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<UserRole, D::Error> {
        let role = String::deserialize(deserializer)?;
        UserRole::from_str(&role).map_err(|e| D::Error::custom(format!("{e}: {role}")))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleCounts {
    pub admin: u32,
    pub faculty: u32,
    pub student: u32,
}

impl RoleCounts {
    pub fn total(&self) -> u32 {
        self.admin + self.faculty + self.student
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_users: u32,
    pub user_roles: RoleCounts,
    pub total_resources: u32,
    pub total_downloads: u64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn role_wire_and_display_names() {
        assert_eq!(serde_json::to_value(UserRole::Faculty).unwrap(), json!("faculty"));
        assert_eq!(UserRole::Faculty.to_string(), "Faculty");
    }

    #[test]
    fn user_rows_carry_display_role() {
        let user = User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            role: UserRole::Faculty,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["role"], "Faculty");
        assert_eq!(serde_json::from_value::<User>(value).unwrap(), user);

        let unknown = json!({ "id": 9, "name": "X", "email": "x@example.com", "role": "Dean" });
        assert!(serde_json::from_value::<User>(unknown).is_err());
    }

    #[test]
    fn statistics_use_camel_case() {
        let stats = Statistics {
            total_users: 3,
            user_roles: RoleCounts {
                admin: 1,
                faculty: 1,
                student: 1,
            },
            total_resources: 0,
            total_downloads: 0,
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["totalUsers"], 3);
        assert_eq!(value["userRoles"]["faculty"], 1);
    }
}
