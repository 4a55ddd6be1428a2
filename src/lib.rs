//! Environment Reporter Library
//!
//! Loads a dotenv-style `KEY=VALUE` file into the process environment and
//! reports a few values from it: a fixed greeting, a secret-like variable and
//! an integer successor.

pub mod config;
pub mod loader;
pub mod report;

pub use config::{Config, DEFAULT_CONFIG_FILE};
pub use loader::{ENV_FILE_NAME, LoadOutcome, load_env, load_env_from};
pub use report::{
    ABSENT, DEFAULT_SECRET_KEY, GREETING, PASSWORD_LABEL, inc_num, print_hello, print_password,
    secret_line, write_hello, write_password,
};

/// Load the environment once and return what happened.
///
/// Uses the configured file when one is set, otherwise searches for `.env`
/// in the current directory and its ancestors.
pub fn init_env(config: &Config) -> LoadOutcome {
    match config.env_file.as_deref() {
        Some(path) => load_env_from(path),
        None => load_env(),
    }
}
