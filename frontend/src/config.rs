//! Where the remote marketplace API lives.

const DEFAULT_API_URL: &str = "http://localhost:3007/api";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = option_env!("MARKET_API_URL").unwrap_or(DEFAULT_API_URL);
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }
}

impl ApiConfig {
    pub fn list_url(&self, resource: &str) -> String {
        format!("{}/{}/list", self.base_url, resource)
    }

    pub fn toggle_url(&self, resource: &str, target_id: &str, action: &str) -> String {
        format!("{}/{}/{}/{}", self.base_url, resource, urlencoding::encode(target_id), action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls() {
        let config = ApiConfig { base_url: "https://market.test/api".into() };
        assert_eq!(config.list_url("property"), "https://market.test/api/property/list");
        assert_eq!(
            config.toggle_url("member", "M 2", "subscribe"),
            "https://market.test/api/member/M%202/subscribe"
        );
    }
}
