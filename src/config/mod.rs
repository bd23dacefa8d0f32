//! Configuration loading
//!
//! Handles loading from config files and environment variables with proper
//! precedence (CLI > Env > File > Defaults). CLI overrides are applied by the
//! command that owns them.

pub mod loader;

pub use loader::{load_config, ENV_PREFIX};
