use urlencoding::encode;

/// Endpoint urls of the public novel API, rooted at a configured origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrls {
    base_url: String,
}

impl ApiUrls {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn novels(&self) -> String {
        format!("{}/api/public/novels", self.base_url)
    }

    pub fn novel(&self, slug: &str) -> String {
        format!("{}/api/public/novels/{}", self.base_url, encode(slug))
    }

    pub fn related_novels(&self, slug: &str) -> String {
        format!("{}/related", self.novel(slug))
    }

    pub fn chapters(&self, slug: &str) -> String {
        format!("{}/chapters", self.novel(slug))
    }

    pub fn chapter(&self, slug: &str) -> String {
        format!("{}/api/public/chapters/{}", self.base_url, encode(slug))
    }
}
