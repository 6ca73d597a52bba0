use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub log_level: String,
    pub companies_path: PathBuf,
    pub fetch_timeout_secs: u64,
    pub reasoning_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_companies: usize,
    pub run_limit: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &"[redacted]")
            .field("openai_base_url", &self.openai_base_url)
            .field("model", &self.model)
            .field("log_level", &self.log_level)
            .field("companies_path", &self.companies_path)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("reasoning_timeout_secs", &self.reasoning_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field(
                "max_concurrent_companies",
                &self.max_concurrent_companies,
            )
            .field("run_limit", &self.run_limit)
            .finish()
    }
}
