use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: String,
    pub feed_api_url: String,
    pub assist_api_hostname: String,
    pub assist_api_keys: Vec<String>,
    pub assist_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let host = "127.0.0.1";
        let port = "3344";
        let storage_path = env::var("POPCUE_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let feed_api_url =
            env::var("POPCUE_FEED_API_URL").unwrap_or(format!("http://{}:{}", host, port));
        let assist_api_hostname = env::var("POPCUE_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        // Comma separated list of provider keys. Empty is allowed; the
        // assist endpoint reports an error when no key is configured.
        let assist_api_keys = env::var("POPCUE_LLM_API_KEYS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        let assist_model =
            env::var("POPCUE_LLM_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());

        Self {
            db_path,
            feed_api_url,
            assist_api_hostname,
            assist_api_keys,
            assist_model,
        }
    }
}
