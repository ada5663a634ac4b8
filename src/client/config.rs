use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub predict_host: String,
    pub predict_port: u16,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            predict_host: env::var("PREDICT_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            predict_port: env::var("PREDICT_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(5000),
        }
    }

    /// Full URL of the classification endpoint.
    pub fn predict_url(&self) -> String {
        format!("http://{}:{}/predict", self.predict_host, self.predict_port)
    }
}
