use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Carelog";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default address the HTTP API binds to. Loopback only — Carelog is a
/// single-user application and the API is consumed by the local UI.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";

/// Get the application data directory
/// ~/Carelog/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Carelog")
}

/// Path of the record database inside the data directory
pub fn database_path() -> PathBuf {
    app_data_dir().join("carelog.db")
}

/// Default tracing filter when RUST_LOG is not set
pub fn default_log_filter() -> String {
    format!("{}=debug,info", env!("CARGO_PKG_NAME"))
}
