//! Application settings and configuration
//!
//! This module binds environment variables (optionally seeded from a `.env`
//! file) into a typed [`Settings`] value with defaults for every field.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::config::env_file::{apply_env_file, DEFAULT_ENV_FILE};
use crate::config::hosts::{
    default_allowed_hosts, parse_allowed_hosts, ALLOWED_HOSTS_KEY, ANY_HOST,
};
use crate::config::source::EnvSource;
use crate::error::ConfigError;

const DEFAULT_JWT_SECRET_KEY: &str = "your-secret-key-change-this";

/// Main application settings
///
/// Serialized field names match the environment variable names. Secrets are
/// never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct Settings {
    // App settings
    pub project_name: String,
    pub version: String,
    pub description: String,
    pub api_v1_str: String,
    pub environment: String,

    // CORS
    pub allowed_hosts: Vec<String>,

    // AWS settings
    pub aws_region: String,
    #[serde(skip_serializing)]
    pub aws_access_key_id: Option<String>,
    #[serde(skip_serializing)]
    pub aws_secret_access_key: Option<String>,

    // DynamoDB
    pub dynamodb_table_prefix: String,
    pub users_table_name: String,

    // Cognito
    pub cognito_user_pool_id: Option<String>,
    pub cognito_client_id: Option<String>,
    #[serde(skip_serializing)]
    pub cognito_client_secret: Option<String>,
    pub cognito_region: String,

    // S3
    pub s3_bucket_name: Option<String>,
    pub s3_region: String,

    // JWT
    #[serde(skip_serializing)]
    pub jwt_secret_key: String,
    pub jwt_algorithm: String,
    pub access_token_expire_minutes: i64,

    /// Cache time-to-live in seconds
    pub cache_ttl: i64,
}

impl Settings {
    /// Load settings, seeding the process environment from `./.env` first
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Some(Path::new(DEFAULT_ENV_FILE)))
    }

    /// Load settings, optionally seeding the process environment from
    /// `env_file`
    ///
    /// Values from the file override variables already set in the process.
    pub fn load_from(env_file: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = env_file {
            apply_env_file(path)?;
        }

        let settings = Self::from_source(&EnvSource::from_process())?;
        settings.validate();

        tracing::debug!(
            project = %settings.project_name,
            environment = %settings.environment,
            aws_region = %settings.aws_region,
            "Settings loaded"
        );

        Ok(settings)
    }

    /// Bind settings from an environment snapshot, applying defaults for
    /// unset variables
    pub fn from_source(source: &EnvSource) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let string = |key: &str, default: String| {
            source.get(key).map(str::to_string).unwrap_or(default)
        };
        let optional = |key: &str| source.get(key).map(str::to_string);

        Ok(Self {
            // App settings
            project_name: string("PROJECT_NAME", defaults.project_name),
            version: string("VERSION", defaults.version),
            description: string("DESCRIPTION", defaults.description),
            api_v1_str: string("API_V1_STR", defaults.api_v1_str),
            environment: string("ENVIRONMENT", defaults.environment),

            // CORS
            allowed_hosts: match source.get(ALLOWED_HOSTS_KEY) {
                Some(raw) => parse_allowed_hosts(raw)?,
                None => defaults.allowed_hosts,
            },

            // AWS settings
            aws_region: string("AWS_REGION", defaults.aws_region),
            aws_access_key_id: optional("AWS_ACCESS_KEY_ID"),
            aws_secret_access_key: optional("AWS_SECRET_ACCESS_KEY"),

            // DynamoDB
            dynamodb_table_prefix: string("DYNAMODB_TABLE_PREFIX", defaults.dynamodb_table_prefix),
            users_table_name: string("USERS_TABLE_NAME", defaults.users_table_name),

            // Cognito
            cognito_user_pool_id: optional("COGNITO_USER_POOL_ID"),
            cognito_client_id: optional("COGNITO_CLIENT_ID"),
            cognito_client_secret: optional("COGNITO_CLIENT_SECRET"),
            cognito_region: string("COGNITO_REGION", defaults.cognito_region),

            // S3
            s3_bucket_name: optional("S3_BUCKET_NAME"),
            s3_region: string("S3_REGION", defaults.s3_region),

            // JWT
            jwt_secret_key: string("JWT_SECRET_KEY", defaults.jwt_secret_key),
            jwt_algorithm: string("JWT_ALGORITHM", defaults.jwt_algorithm),
            access_token_expire_minutes: env_int(
                source,
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                defaults.access_token_expire_minutes,
            )?,

            cache_ttl: env_int(source, "CACHE_TTL", defaults.cache_ttl)?,
        })
    }

    /// Settings that are legal but likely misconfigured
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();

        if self.is_production() {
            if self.jwt_secret_key == DEFAULT_JWT_SECRET_KEY {
                warnings.push("Running in production with the default JWT_SECRET_KEY!");
            }
            if self.allows_any_host() {
                warnings.push("Running in production with a wildcard ALLOWED_HOSTS entry");
            }
        }

        if self.aws_access_key_id.is_some() != self.aws_secret_access_key.is_some() {
            warnings.push(
                "Only one of AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY is set; static credentials will be ignored",
            );
        }

        if self.cognito_client_secret.is_some() && self.cognito_client_id.is_none() {
            warnings.push("COGNITO_CLIENT_SECRET is set without COGNITO_CLIENT_ID");
        }

        warnings
    }

    /// Log every entry of [`Settings::warnings`]; never fails
    fn validate(&self) {
        for warning in self.warnings() {
            tracing::warn!("{}", warning);
        }
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Whether the CORS allow-list contains the wildcard entry
    pub fn allows_any_host(&self) -> bool {
        self.allowed_hosts.iter().any(|host| host == ANY_HOST)
    }

    /// Whether both halves of a static AWS key pair are configured
    pub fn has_static_aws_credentials(&self) -> bool {
        self.aws_access_key_id.is_some() && self.aws_secret_access_key.is_some()
    }

    /// Full DynamoDB table name for `suffix`, e.g. `fastapi-app-sessions`
    pub fn table_name(&self, suffix: &str) -> String {
        format!("{}-{}", self.dynamodb_table_prefix, suffix)
    }

    /// Access token lifetime, or `None` if the minute count overflows
    pub fn access_token_expiry(&self) -> Option<chrono::Duration> {
        chrono::Duration::try_minutes(self.access_token_expire_minutes)
    }

    /// Cache TTL as a duration, or `None` when negative
    pub fn cache_ttl_duration(&self) -> Option<Duration> {
        u64::try_from(self.cache_ttl).ok().map(Duration::from_secs)
    }

    /// Parse `JWT_ALGORITHM` into a signing algorithm
    pub fn signing_algorithm(&self) -> Result<jsonwebtoken::Algorithm, ConfigError> {
        self.jwt_algorithm
            .parse()
            .map_err(|err: jsonwebtoken::errors::Error| ConfigError::InvalidValue {
                key: "JWT_ALGORITHM",
                reason: format!("{:?}: {}", self.jwt_algorithm, err),
            })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_name: "FastAPI AWS Boilerplate".to_string(),
            version: "1.0.0".to_string(),
            description: "FastAPI application with AWS services".to_string(),
            api_v1_str: "/api/v1".to_string(),
            environment: "development".to_string(),
            allowed_hosts: default_allowed_hosts(),
            aws_region: "us-east-1".to_string(),
            aws_access_key_id: None,
            aws_secret_access_key: None,
            dynamodb_table_prefix: "fastapi-app".to_string(),
            users_table_name: "fastapi-app-users".to_string(),
            cognito_user_pool_id: None,
            cognito_client_id: None,
            cognito_client_secret: None,
            cognito_region: "us-east-1".to_string(),
            s3_bucket_name: None,
            s3_region: "us-east-1".to_string(),
            jwt_secret_key: DEFAULT_JWT_SECRET_KEY.to_string(),
            jwt_algorithm: "HS256".to_string(),
            access_token_expire_minutes: 30,
            cache_ttl: 300,
        }
    }
}

/// Parse a base-10 integer variable, falling back to `default` when unset
fn env_int(source: &EnvSource, key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match source.get(key) {
        Some(raw) => raw.trim().parse().map_err(|source| ConfigError::InvalidInteger {
            key,
            value: raw.to_string(),
            source,
        }),
        None => Ok(default),
    }
}
