use lazy_static::lazy_static;
use regex::Regex;

use crate::events::filter::ALL_FILTER_KEY;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("Failed to create whitespace regex");
}

/// "IoT Systems" is `iot-systems`, "AI/ML" is `ai-ml`. Only the first slash is replaced.
pub fn category_slug(category: &str) -> String {
    WHITESPACE
        .replace_all(&category.to_lowercase(), "-")
        .replacen('/', "-", 1)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    /// Matches every category slug containing the key
    Slug(String),
}

impl ProjectFilter {
    pub fn from_key(key: &str) -> Self {
        if key == ALL_FILTER_KEY {
            ProjectFilter::All
        } else {
            ProjectFilter::Slug(key.to_string())
        }
    }

    pub fn matches_slug(&self, slug: &str) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Slug(key) => slug.contains(key.as_str()),
        }
    }
}
