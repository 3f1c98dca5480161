//! Configuration management for the image store.
//!
//! Options come from command-line arguments via clap, with every option also
//! readable from the environment:
//!
//! - `IMAGE_STORE_HOST` - Server bind address (default: 0.0.0.0)
//! - `IMAGE_STORE_PORT` - Server port (default: 8080)
//! - `ADMIN_PASSWORD` - Password for the `/admin` endpoint (required)
//! - `IMAGE_STORE_CORS_ORIGINS` - Allowed CORS origins, comma-separated
//! - `IMAGE_STORE_RNG_SEED` - Fixed seed for random image selection
//!
//! # Example
//!
//! ```ignore
//! use clap::Parser;
//! use image_store::Config;
//!
//! let config = Config::parse();
//! config.validate()?;
//! println!("Listening on {}", config.bind_address());
//! ```

use clap::Parser;

use crate::error::ConfigError;

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Image Store - in-memory image metadata over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(name = "image-store")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "IMAGE_STORE_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "IMAGE_STORE_PORT")]
    pub port: u16,

    // =========================================================================
    // Admin Configuration
    // =========================================================================
    /// Password required (with username `admin`) for the `/admin` endpoint.
    ///
    /// The server refuses to start without it.
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    pub admin_password: Option<String>,

    // =========================================================================
    // Random Selection
    // =========================================================================
    /// Seed for the random generator behind `/images/random`.
    ///
    /// If not specified, the generator is seeded from the OS once at startup.
    #[arg(long, env = "IMAGE_STORE_RNG_SEED")]
    pub rng_seed: Option<u64>,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "IMAGE_STORE_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.admin_password.as_deref() {
            Some(password) if !password.is_empty() => Ok(()),
            _ => Err(ConfigError::MissingAdminPassword),
        }
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the admin password, or "" if unset (call validate() first).
    pub fn admin_password_or_empty(&self) -> &str {
        self.admin_password.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Tests
// =============================================================================
