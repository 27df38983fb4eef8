use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_url: String,
    pub secret_key: String,
    pub allowed_origins: Vec<String>,
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        // The test environment substitutes an ephemeral in-memory store;
        // every other environment must name its database explicitly.
        let database_url = match env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) if environment == "test" => "sqlite::memory:".to_string(),
            Err(_) => return Err("DATABASE_URL must be set".to_string()),
        };

        let secret_key =
            env::var("SECRET_KEY").map_err(|_| "SECRET_KEY must be set".to_string())?;

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        Ok(Config {
            server_host,
            server_port,
            database_url,
            secret_key,
            allowed_origins,
            environment,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
