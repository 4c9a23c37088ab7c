//! Permission model: which CRUD modes a user holds on an entity table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// CRUD mode granted on a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Create,
    Read,
    Update,
    Delete,
}

impl Mode {
    /// All modes in canonical order
    pub const ALL: [Mode; 4] = [Mode::Create, Mode::Read, Mode::Update, Mode::Delete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Create => "create",
            Mode::Read => "read",
            Mode::Update => "update",
            Mode::Delete => "delete",
        }
    }

    /// Parse the wire form, case-insensitive. Unknown strings yield `None`.
    pub fn parse(s: &str) -> Option<Mode> {
        let s = s.trim();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One grant of the user's role, as delivered by the WMS API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub table: String,
    pub mode: String,
}

impl Permission {
    pub fn new(table: &str, mode: Mode) -> Self {
        Self {
            table: table.to_string(),
            mode: mode.as_str().to_string(),
        }
    }
}

/// Modes granted on `table_name`.
///
/// Tables compare case-insensitively, unknown modes are skipped, the result
/// is de-duplicated and ordered Create, Read, Update, Delete.
pub fn get_modes_from_permissions(
    permissions: Option<&[Permission]>,
    table_name: &str,
) -> Vec<Mode> {
    let Some(permissions) = permissions else {
        return Vec::new();
    };
    let table_name = table_name.trim();

    let mut modes: Vec<Mode> = permissions
        .iter()
        .filter(|p| p.table.trim().eq_ignore_ascii_case(table_name))
        .filter_map(|p| Mode::parse(&p.mode))
        .collect();
    modes.sort();
    modes.dedup();
    modes
}

/// Permission set of the logged-in user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub is_admin: bool,
    pub permissions: Vec<Permission>,
}

impl UserPermissions {
    pub fn new(is_admin: bool, permissions: Vec<Permission>) -> Self {
        Self {
            is_admin,
            permissions,
        }
    }

    /// Admins hold every mode on every table
    pub fn modes_for(&self, table_name: &str) -> Vec<Mode> {
        if self.is_admin {
            return Mode::ALL.to_vec();
        }
        get_modes_from_permissions(Some(&self.permissions), table_name)
    }

    pub fn can(&self, table_name: &str, mode: Mode) -> bool {
        self.modes_for(table_name).contains(&mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(table: &str, mode: &str) -> Permission {
        Permission {
            table: table.to_string(),
            mode: mode.to_string(),
        }
    }

    #[test]
    fn test_modes_for_matching_table_only() {
        let permissions = vec![
            perm("article", "read"),
            perm("article", "update"),
            perm("delivery", "delete"),
        ];
        assert_eq!(
            get_modes_from_permissions(Some(&permissions), "article"),
            vec![Mode::Read, Mode::Update]
        );
        assert_eq!(
            get_modes_from_permissions(Some(&permissions), "delivery"),
            vec![Mode::Delete]
        );
        assert!(get_modes_from_permissions(Some(&permissions), "load").is_empty());
    }

    #[test]
    fn test_modes_are_ordered_and_deduplicated() {
        let permissions = vec![
            perm("Article ", "DELETE"),
            perm("article", "read"),
            perm("article", "create"),
            perm("article", "read"),
        ];
        assert_eq!(
            get_modes_from_permissions(Some(&permissions), "article"),
            vec![Mode::Create, Mode::Read, Mode::Delete]
        );
    }

    #[test]
    fn test_unknown_modes_are_skipped() {
        let permissions = vec![perm("article", "export"), perm("article", "read")];
        assert_eq!(
            get_modes_from_permissions(Some(&permissions), "article"),
            vec![Mode::Read]
        );
    }

    #[test]
    fn test_absent_or_empty_permissions() {
        assert!(get_modes_from_permissions(None, "article").is_empty());
        assert!(get_modes_from_permissions(Some(&[]), "article").is_empty());
    }

    #[test]
    fn test_admin_holds_everything() {
        let admin = UserPermissions::new(true, vec![]);
        assert_eq!(admin.modes_for("anything"), Mode::ALL.to_vec());

        let user = UserPermissions::new(false, vec![Permission::new("load", Mode::Read)]);
        assert!(user.can("load", Mode::Read));
        assert!(!user.can("load", Mode::Update));
    }

    #[test]
    fn test_mode_wire_form() {
        assert_eq!(serde_json::to_string(&Mode::Update).unwrap(), "\"update\"");
        assert_eq!(Mode::parse(" Read "), Some(Mode::Read));
        assert_eq!(Mode::parse("write"), None);
    }
}
