use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const UPLOAD_DIR: &str = "UPLOAD_DIR";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 5000;
    pub const UPLOAD_DIR: &str = "uploads";
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub upload_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
            upload_dir: env::var(env_vars::UPLOAD_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(defaults::UPLOAD_DIR)),
        }
    }
}
