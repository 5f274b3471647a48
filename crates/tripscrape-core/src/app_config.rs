use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub start_url: String,
    pub output_dir: PathBuf,
    pub locations_file: String,
    pub hotels_file: String,
    pub images_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
}

impl AppConfig {
    /// Full path of the locations artifact.
    #[must_use]
    pub fn locations_path(&self) -> PathBuf {
        self.output_dir.join(&self.locations_file)
    }

    /// Full path of the hotels artifact.
    #[must_use]
    pub fn hotels_path(&self) -> PathBuf {
        self.output_dir.join(&self.hotels_file)
    }
}
