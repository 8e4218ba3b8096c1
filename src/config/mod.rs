use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub advisory: AdvisoryConfig,
    pub image_host: ImageHostConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

/// The super-admin identity is a single fixed credential pair supplied by
/// configuration, not a general user system. Development defaults mirror
/// the observed admin/admin pair; production deployments must override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub super_admin_username: String,
    pub super_admin_password: String,
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageHostConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PORT") {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECT_TIMEOUT_SECS") {
            self.database.connect_timeout_secs =
                v.parse().unwrap_or(self.database.connect_timeout_secs);
        }

        // Security overrides
        if let Ok(v) = env::var("SUPER_ADMIN_USERNAME") {
            self.security.super_admin_username = v;
        }
        if let Ok(v) = env::var("SUPER_ADMIN_PASSWORD") {
            self.security.super_admin_password = v;
        }
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v.split(',').map(|s| s.trim().to_string()).collect();
        }

        // Advisory upstream overrides
        if let Ok(v) = env::var("ADVISORY_ENDPOINT") {
            self.advisory.endpoint = v;
        }
        if let Ok(v) = env::var("ADVISORY_MODEL") {
            self.advisory.model = v;
        }
        if let Ok(v) = env::var("ADVISORY_API_KEY") {
            self.advisory.api_key = Some(v);
        }
        if let Ok(v) = env::var("ADVISORY_TIMEOUT_SECS") {
            self.advisory.timeout_secs = v.parse().unwrap_or(self.advisory.timeout_secs);
        }

        // Image host overrides
        if let Ok(v) = env::var("IMAGE_HOST_ENDPOINT") {
            self.image_host.endpoint = v;
        }
        if let Ok(v) = env::var("IMAGE_HOST_API_KEY") {
            self.image_host.api_key = Some(v);
        }
        if let Ok(v) = env::var("IMAGE_HOST_TIMEOUT_SECS") {
            self.image_host.timeout_secs = v.parse().unwrap_or(self.image_host.timeout_secs);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                max_connections: 10,
                connect_timeout_secs: 30,
            },
            security: SecurityConfig {
                super_admin_username: "admin".to_string(),
                super_admin_password: "admin".to_string(),
                enable_cors: true,
                cors_origins: vec![
                    "http://localhost:5173".to_string(),
                    "http://127.0.0.1:5173".to_string(),
                ],
            },
            advisory: AdvisoryConfig {
                endpoint: "https://api.advisory.example.com/v1/generate".to_string(),
                model: "text-advisor-1".to_string(),
                api_key: None,
                timeout_secs: 20,
            },
            image_host: ImageHostConfig {
                endpoint: "https://api.imgbb.com/1/upload".to_string(),
                api_key: None,
                timeout_secs: 30,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                max_connections: 20,
                connect_timeout_secs: 10,
            },
            security: SecurityConfig {
                super_admin_username: "admin".to_string(),
                super_admin_password: "admin".to_string(),
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
            advisory: AdvisoryConfig {
                endpoint: "https://api.advisory.example.com/v1/generate".to_string(),
                model: "text-advisor-1".to_string(),
                api_key: None,
                timeout_secs: 20,
            },
            image_host: ImageHostConfig {
                endpoint: "https://api.imgbb.com/1/upload".to_string(),
                api_key: None,
                timeout_secs: 30,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig { port: 3000 },
            database: DatabaseConfig {
                max_connections: 50,
                connect_timeout_secs: 5,
            },
            security: SecurityConfig {
                // Must be overridden via SUPER_ADMIN_USERNAME/_PASSWORD
                super_admin_username: "admin".to_string(),
                super_admin_password: "admin".to_string(),
                enable_cors: true,
                cors_origins: vec!["https://app.example.com".to_string()],
            },
            advisory: AdvisoryConfig {
                endpoint: "https://api.advisory.example.com/v1/generate".to_string(),
                model: "text-advisor-1".to_string(),
                api_key: None,
                timeout_secs: 20,
            },
            image_host: ImageHostConfig {
                endpoint: "https://api.imgbb.com/1/upload".to_string(),
                api_key: None,
                timeout_secs: 30,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.security.super_admin_username, "admin");
        assert!(config.security.enable_cors);
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.database.max_connections, 50);
        assert_eq!(config.database.connect_timeout_secs, 5);
    }
}
