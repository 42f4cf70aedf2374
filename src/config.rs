use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "HMS Client";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend origin when `HMS_BASE_URL` is unset.
/// Matches the dev backend the mobile shells point at.
pub const DEFAULT_BASE_URL: &str = "http://192.168.1.46:8081";

/// Backend base URL, overridable via `HMS_BASE_URL`.
pub fn base_url() -> String {
    std::env::var("HMS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Seconds to wait for a TCP connect before giving up.
pub const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Get the application data directory
/// ~/HmsClient/ on all platforms (user-visible, shared with the shell)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("HmsClient")
}

/// Where the file-backed credential store keeps its JSON blob.
pub fn credentials_path() -> PathBuf {
    app_data_dir().join("credentials.json")
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "info,hms_client=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("HmsClient"));
    }

    #[test]
    fn credentials_path_under_app_data() {
        let path = credentials_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with("credentials.json"));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.3.0");
    }
}
