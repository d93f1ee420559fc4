use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("MEMO_SERVICE_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("MEMO_SERVICE_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            data_path: lookup("MEMO_SERVICE_DATA_PATH")
                .unwrap_or_else(|| "data/memos.json".to_string())
                .into(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
