//! Shared support for integration tests.
use blog_service::config::{AppConfig, AuthConfig, Config, CorsConfig, DatabaseConfig};

pub const TEST_SECRET: &str = "test-secret-at-least-32-bytes-long";

pub fn test_config(database_url: &str) -> Config {
    Config {
        app: AppConfig {
            env: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        cors: CorsConfig {
            allowed_origins: "*".to_string(),
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
        },
        auth: AuthConfig {
            jwt_secret: TEST_SECRET.to_string(),
        },
    }
}
