use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SecurityConfig;
use crate::database::models::Tenant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    TenantAdmin,
}

/// Session object returned by login. No token, no expiry: the client
/// holds it in memory for as long as it wants to stay signed in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub display_name: String,
    pub tenant_id: Option<Uuid>,
}

impl Session {
    pub fn super_admin() -> Self {
        Self {
            role: Role::SuperAdmin,
            display_name: "Super Admin".to_string(),
            tenant_id: None,
        }
    }

    pub fn tenant_admin(tenant: &Tenant) -> Self {
        Self {
            role: Role::TenantAdmin,
            display_name: tenant.name.clone(),
            tenant_id: Some(tenant.id),
        }
    }
}

/// The super-admin pair comes from configuration and never from the
/// Tenant Directory, so this check succeeds or fails regardless of
/// directory contents.
pub fn super_admin_matches(security: &SecurityConfig, username: &str, password: &str) -> bool {
    username == security.super_admin_username && password == security.super_admin_password
}

/// Scan the directory for a tenant-admin credential match. First match in
/// listing order wins; the directory enforces username uniqueness, so at
/// most one can match in practice.
pub fn find_tenant_admin<'a>(
    tenants: &'a [Tenant],
    username: &str,
    password: &str,
) -> Option<&'a Tenant> {
    tenants
        .iter()
        .find(|t| t.username == username && t.password == password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn security() -> SecurityConfig {
        SecurityConfig {
            super_admin_username: "admin".to_string(),
            super_admin_password: "admin".to_string(),
            enable_cors: false,
            cors_origins: vec![],
        }
    }

    fn tenant(name: &str, username: &str, password: &str) -> Tenant {
        Tenant {
            id: Uuid::new_v4(),
            name: name.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            partition_url: "postgres://localhost/p".to_string(),
            port: None,
            api_key: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn super_admin_pair_must_match_exactly() {
        let sec = security();
        assert!(super_admin_matches(&sec, "admin", "admin"));
        assert!(!super_admin_matches(&sec, "admin", "wrong"));
        assert!(!super_admin_matches(&sec, "Admin", "admin"));
    }

    #[test]
    fn tenant_admin_scan_takes_first_match() {
        let tenants = vec![
            tenant("Sadar", "admin1", "pw1"),
            tenant("Mirzapur", "admin1", "pw1"),
        ];
        let hit = find_tenant_admin(&tenants, "admin1", "pw1").unwrap();
        assert_eq!(hit.name, "Sadar");
    }

    #[test]
    fn tenant_admin_scan_rejects_unknown_credentials() {
        let tenants = vec![tenant("Sadar", "admin1", "pw1")];
        assert!(find_tenant_admin(&tenants, "admin1", "bad").is_none());
        assert!(find_tenant_admin(&tenants, "nobody", "pw1").is_none());
        assert!(find_tenant_admin(&[], "admin1", "pw1").is_none());
    }
}
