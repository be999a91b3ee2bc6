use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL")?,
            max_connections: max_connections(std::env::var("DATABASE_MAX_CONNECTIONS").ok())?,
        };
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        Ok(Self {
            database,
            host,
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Defaults to 10. Zero is rejected: such a pool never hands out a connection.
fn max_connections(raw: Option<String>) -> anyhow::Result<u32> {
    let value = raw
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(10);
    if value == 0 {
        anyhow::bail!("DATABASE_MAX_CONNECTIONS must be at least 1");
    }
    Ok(value)
}
