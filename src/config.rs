use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000/api";

pub struct Config {
    pub api_url: String,
    pub session_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let api_url = std::env::var("NUTRIDB_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let session_path = std::env::var_os("NUTRIDB_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(default_session_path);

        Self { api_url, session_path }
    }
}

fn default_session_path() -> PathBuf {
    if let Some(dir) = std::env::var_os("XDG_CONFIG_HOME") {
        return PathBuf::from(dir).join("nutridb").join("session.json");
    }
    if let Some(home) = std::env::var_os("HOME") {
        return PathBuf::from(home).join(".config").join("nutridb").join("session.json");
    }
    PathBuf::from(".nutridb-session.json")
}
