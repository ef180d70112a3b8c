use std::fmt::Debug;

pub trait DocumentationRegistry: Debug {
    fn documentation_for(&self, id: &str, section: &str) -> String;
}

/// Links into the hosted user guide of a given product version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationLinks {
    pub base_url: String,
    pub version: String,
}

impl DocumentationLinks {
    pub fn new(base_url: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: version.into(),
        }
    }

    pub fn user_guide_page(&self, id: &str) -> String {
        format!(
            "{}/{}/userguide/{id}.html",
            self.base_url.trim_end_matches('/'),
            self.version
        )
    }
}

impl Default for DocumentationLinks {
    fn default() -> Self {
        Self::new("https://docs.gradle.org", "current")
    }
}

impl DocumentationRegistry for DocumentationLinks {
    fn documentation_for(&self, id: &str, section: &str) -> String {
        format!("{}#{section}", self.user_guide_page(id))
    }
}
