use crate::catalog::api::DEFAULT_MAX_RETRIES;
use crate::config::model::{CatalogConfig, Config};
use crate::events::filter::ALL_FILTER_KEY;
use std::env;

pub fn load_config() -> Config {
    let events_source = load_string_config("SHOWCASE_EVENTS_SOURCE", "data/events.json");
    let projects_source = load_string_config("SHOWCASE_PROJECTS_SOURCE", "data/projects.json");
    let max_retries = load_u32_config("SHOWCASE_MAX_RETRIES").unwrap_or(DEFAULT_MAX_RETRIES);
    let use_fallback = load_bool_config("SHOWCASE_USE_FALLBACK", true);

    Config {
        catalog_config: CatalogConfig {
            events_source,
            projects_source,
            max_retries,
            use_fallback,
        },
        output_dir: load_string_config("SHOWCASE_OUTPUT_DIR", "public").into(),
        event_filter: load_string_config("SHOWCASE_EVENT_FILTER", ALL_FILTER_KEY),
        project_filter: load_string_config("SHOWCASE_PROJECT_FILTER", ALL_FILTER_KEY),
        calendar_domain: load_string_config("SHOWCASE_CALENDAR_DOMAIN", "showcase.local"),
    }
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn load_bool_config(name: &str, default: bool) -> bool {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_u32_config(name: &str) -> Option<u32> {
    match env::var(name) {
        Ok(value) => Some(value.parse().unwrap_or_else(|_| {
            panic!("Invalid config '{}'. Expected a non-negative integer.", name)
        })),
        Err(_) => None,
    }
}
