use std::env;
use std::fmt;
use std::str::FromStr;
use anyhow::{Context, Result, bail};

/// Which persistence backend serves the recipe routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" => Ok(StoreBackend::Memory),
            other => bail!("RECIPE_STORE must be one of: mongodb, memory, got '{}'", other),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::MongoDb => f.write_str("mongodb"),
            StoreBackend::Memory => f.write_str("memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,
    pub service_port: u16,
    pub service_host: String,
    pub public_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let store_backend = env::var("RECIPE_STORE")
            .unwrap_or_else(|_| "mongodb".to_string())
            .parse::<StoreBackend>()?;

        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string());

        let mongodb_database = env::var("MONGODB_DATABASE")
            .unwrap_or_else(|_| "express-mongoose-recipes-dev".to_string());

        let mongodb_collection = env::var("MONGODB_COLLECTION")
            .unwrap_or_else(|_| "recipes".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let public_dir = env::var("PUBLIC_DIR")
            .unwrap_or_else(|_| "public".to_string());

        Ok(Config {
            store_backend,
            mongodb_uri,
            mongodb_database,
            mongodb_collection,
            service_port,
            service_host,
            public_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Recipe store: {}", self.store_backend);
        if self.store_backend == StoreBackend::MongoDb {
            tracing::info!("  MongoDB database: {}", self.mongodb_database);
            tracing::info!("  MongoDB collection: {}", self.mongodb_collection);
        }
        tracing::info!("  Static files: {}", self.public_dir);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("RECIPE_STORE");
            env::remove_var("MONGODB_URI");
            env::remove_var("MONGODB_DATABASE");
            env::remove_var("MONGODB_COLLECTION");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
            env::remove_var("PUBLIC_DIR");
        }
    }

    #[test]
    #[serial]
    fn test_config_with_all_vars() {
        clear_env_vars();
        unsafe {
            env::set_var("RECIPE_STORE", "memory");
            env::set_var("MONGODB_URI", "mongodb://db.internal:27017");
            env::set_var("MONGODB_DATABASE", "cookbook");
            env::set_var("MONGODB_COLLECTION", "dishes");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
            env::set_var("PUBLIC_DIR", "/srv/www");
        }

        let config = Config::from_env().unwrap();
        clear_env_vars();

        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.mongodb_uri, "mongodb://db.internal:27017");
        assert_eq!(config.mongodb_database, "cookbook");
        assert_eq!(config.mongodb_collection, "dishes");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        assert_eq!(config.public_dir, "/srv/www");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    #[serial]
    fn test_config_with_defaults() {
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.store_backend, StoreBackend::MongoDb);
        assert_eq!(config.mongodb_uri, "mongodb://127.0.0.1:27017");
        assert_eq!(config.mongodb_database, "express-mongoose-recipes-dev");
        assert_eq!(config.mongodb_collection, "recipes");
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "0.0.0.0");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    #[serial]
    fn test_unknown_store_backend() {
        clear_env_vars();
        unsafe {
            env::set_var("RECIPE_STORE", "postgres");
        }

        let result = Config::from_env();
        clear_env_vars();

        let error = result.unwrap_err();
        assert!(error.to_string().contains("RECIPE_STORE"));
        assert!(error.to_string().contains("postgres"));
    }

    #[test]
    #[serial]
    fn test_invalid_port() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    #[serial]
    fn test_port_out_of_range() {
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        clear_env_vars();

        assert!(result.is_err());
    }

    #[test]
    fn test_store_backend_parsing() {
        assert_eq!("Mongo".parse::<StoreBackend>().unwrap(), StoreBackend::MongoDb);
        assert_eq!(" memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!(StoreBackend::MongoDb.to_string(), "mongodb");
    }
}
