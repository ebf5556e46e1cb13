use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HTTPS_PORT: u16 = 5003;
const DEFAULT_TLS_KEY_PATH: &str = "private_key.pem";
const DEFAULT_TLS_CERT_PATH: &str = "certificate.pem";

const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "https://frontend-s-sl-cloud.vercel.app",
    "https://userportal-five.vercel.app",
    "https://adminportal-wine.vercel.app",
    "http://localhost:3000",
    "http://localhost:3001",
    "http://localhost:3002",
    "http://localhost:3003",
];

/// Deployment mode, `Development` exposes panic details in error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(format!("unknown environment '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub port: u16,
    pub https_port: u16,
    pub environment: Environment,

    pub tls_key_path: PathBuf,
    pub tls_cert_path: PathBuf,

    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(origins) => origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            https_port: parse_or(&lookup, "HTTPS_PORT", DEFAULT_HTTPS_PORT)?,
            environment: parse_or(&lookup, "APP_ENV", Environment::Production)?,
            tls_key_path: lookup("TLS_KEY_PATH")
                .unwrap_or_else(|| DEFAULT_TLS_KEY_PATH.to_string())
                .into(),
            tls_cert_path: lookup("TLS_CERT_PATH")
                .unwrap_or_else(|| DEFAULT_TLS_CERT_PATH.to_string())
                .into(),
            cors_origins,
        })
    }

    /// Whether both TLS files are present on disk.
    pub fn tls_material_present(&self) -> bool {
        self.tls_key_path.is_file() && self.tls_cert_path.is_file()
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(value) => value
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: value.clone(),
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
