use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_config: CatalogConfig,
    pub output_dir: PathBuf,
    pub event_filter: String,
    pub project_filter: String,
    pub calendar_domain: String,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// URL or local path of the events document
    pub events_source: String,
    /// URL or local path of the projects document
    pub projects_source: String,
    pub max_retries: u32,
    pub use_fallback: bool,
}
