use super::error::CatalogError;
use super::fallback::{fallback_events, fallback_projects};
use super::model::Catalog;
use crate::events::dto::EventsResponse;
use crate::events::model::Event;
use crate::projects::dto::ProjectsResponse;
use crate::projects::model::Project;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use serde::de::DeserializeOwned;
use tracing::{error, info};

pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Reads catalog documents from an `http(s)://` URL or a local path
pub struct CatalogLoader {
    client: ClientWithMiddleware,
    use_fallback: bool,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RETRIES)
    }
}

impl CatalogLoader {
    pub fn new(max_retries: u32) -> Self {
        let client = ClientBuilder::new(Client::new())
            .with(RetryTransientMiddleware::new_with_policy(
                ExponentialBackoff::builder().build_with_max_retries(max_retries),
            ))
            .build();

        Self {
            client,
            use_fallback: true,
        }
    }

    /// Without fallbacks a failed load yields an unavailable, empty catalog
    pub fn with_fallback(mut self, use_fallback: bool) -> Self {
        self.use_fallback = use_fallback;
        self
    }

    /**
    Never fails: when the source can't be read the hand-authored events are used instead,
    unless fallbacks are disabled
    */
    #[tracing::instrument(skip(self))]
    pub async fn load_events(&self, source: &str) -> Catalog<Event> {
        match self.fetch_events(source).await {
            Ok(events) => {
                info!("Loaded {} events", events.len());
                Catalog::from_source(events)
            }
            Err(e) if self.use_fallback => {
                error!("Error loading events, using fallback: {}", e);
                Catalog::fallback(fallback_events())
            }
            Err(e) => {
                error!("Error loading events: {}", e);
                Catalog::unavailable()
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn load_projects(&self, source: &str) -> Catalog<Project> {
        match self.fetch_projects(source).await {
            Ok(projects) => {
                info!("Loaded {} projects", projects.len());
                Catalog::from_source(projects)
            }
            Err(e) if self.use_fallback => {
                error!("Error loading projects, using fallback: {}", e);
                Catalog::fallback(fallback_projects())
            }
            Err(e) => {
                error!("Error loading projects: {}", e);
                Catalog::unavailable()
            }
        }
    }

    pub async fn fetch_events(&self, source: &str) -> Result<Vec<Event>, CatalogError> {
        let response: EventsResponse = self.fetch_document(source).await?;

        Ok(response
            .events
            .into_iter()
            .map(|event| event.to_model())
            .collect())
    }

    pub async fn fetch_projects(&self, source: &str) -> Result<Vec<Project>, CatalogError> {
        let response: ProjectsResponse = self.fetch_document(source).await?;

        Ok(response
            .projects
            .into_iter()
            .map(|project| project.to_model())
            .collect())
    }

    async fn fetch_document<T: DeserializeOwned>(&self, source: &str) -> Result<T, CatalogError> {
        let json_response = if is_remote(source) {
            self.client
                .get(source)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await?
        } else {
            tokio::fs::read_to_string(source).await?
        };

        Ok(serde_json::from_str::<T>(&json_response)?)
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_tell_urls_from_paths() {
        assert!(is_remote("https://example.org/data/events.json"));
        assert!(is_remote("http://localhost:8000/data/events.json"));
        assert!(!is_remote("data/events.json"));
        assert!(!is_remote("/srv/site/data/projects.json"));
    }
}
