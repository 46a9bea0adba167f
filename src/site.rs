use crate::calendar::clipboard::{export_details, ClipboardError, FileClipboard};
use crate::calendar::export::{CalendarExport, CalendarExporter};
use crate::calendar::ics::{calendar_file_path, file_stem, CALENDAR_DIR};
use crate::catalog::api::CatalogLoader;
use crate::catalog::model::{Catalog, CatalogOrigin};
use crate::config::model::Config;
use crate::events::detail::{CloseTrigger, DetailOverlay};
use crate::events::filter::{EventFilter, EventsManager};
use crate::events::model::Event;
use crate::projects::enrich::enrich;
use crate::projects::filter::ProjectFilter;
use crate::projects::model::Project;
use crate::projects::view::{featured_cards, project_cards};
use crate::render::events::{detail_overlay, events_page, load_error_panel, mount_listing};
use crate::render::projects::{
    featured_grid, home_page, project_grid, projects_page, FEATURED_CONTAINER, PROJECTS_CONTAINER,
};
use crate::render::page::Page;
use chrono::{Local, TimeZone};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, instrument, warn};

const LINKS_FILE: &str = "links.txt";
const DETAILS_FILE: &str = "details.txt";

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Default)]
pub struct SiteReport {
    pub pages: Vec<PathBuf>,
    pub calendar_files: Vec<PathBuf>,
    pub events_origin: Option<CatalogOrigin>,
    pub projects_origin: Option<CatalogOrigin>,
}

/// Loads both catalogs and writes every page and calendar artifact into the output directory
#[instrument(skip(config), fields(output_dir = %config.output_dir.display()))]
pub async fn build_site(config: &Config) -> Result<SiteReport, SiteError> {
    let catalog_config = &config.catalog_config;
    let loader =
        CatalogLoader::new(catalog_config.max_retries).with_fallback(catalog_config.use_fallback);

    let (events, projects) = futures::join!(
        loader.load_events(&catalog_config.events_source),
        loader.load_projects(&catalog_config.projects_source)
    );

    let output_dir = config.output_dir.as_path();
    tokio::fs::create_dir_all(output_dir.join(CALENDAR_DIR)).await?;

    let exporter = CalendarExporter::new(Local, &config.calendar_domain);
    let mut report = SiteReport {
        events_origin: Some(events.origin),
        projects_origin: Some(projects.origin),
        ..SiteReport::default()
    };

    write_events(config, events, &exporter, &mut report).await?;
    write_projects(config, projects, &mut report).await?;

    info!(
        "Wrote {} pages and {} calendar files",
        report.pages.len(),
        report.calendar_files.len()
    );

    Ok(report)
}

async fn write_events<Tz: TimeZone>(
    config: &Config,
    catalog: Catalog<Event>,
    exporter: &CalendarExporter<Tz>,
    report: &mut SiteReport,
) -> Result<(), SiteError> {
    let output_dir = config.output_dir.as_path();
    let unavailable = catalog.is_unavailable();
    let mut manager = EventsManager::from_catalog(catalog);
    let listing = manager.apply_filter(EventFilter::from_key(&config.event_filter));

    let mut page = events_page();
    if unavailable {
        page.replace_sections(load_error_panel());
    } else {
        mount_listing(&mut page, &listing);
    }
    page.set_overlay(detail_overlay(None, None));
    write_page(output_dir, "events.html", page, report).await?;

    let mut overlay = DetailOverlay::new();
    let mut links = vec![];

    for event in manager.filtered() {
        overlay.open(event);

        let export = match overlay.add_to_calendar(exporter) {
            Some(Ok(export)) => Some(export),
            Some(Err(e)) => {
                warn!("Skipping calendar export of '{}': {}", event.id, e);
                None
            }
            None => None,
        };

        let mut page = events_page();
        mount_listing(&mut page, &listing);
        page.set_overlay(detail_overlay(overlay.view(), export.as_ref()));
        write_page(
            output_dir,
            &format!("event-{}.html", file_stem(&event.id)),
            page,
            report,
        )
        .await?;

        if let Some(export) = export {
            write_calendar(output_dir, event, &export, report).await?;
            links.push(format!("{}\t{}", event.title, export.link));
        }

        overlay.dismiss(CloseTrigger::Explicit);
    }

    tokio::fs::write(
        output_dir.join(CALENDAR_DIR).join(LINKS_FILE),
        links.join("\n"),
    )
    .await?;

    Ok(())
}

async fn write_calendar(
    output_dir: &Path,
    event: &Event,
    export: &CalendarExport,
    report: &mut SiteReport,
) -> Result<(), SiteError> {
    let ics_path = output_dir.join(calendar_file_path(&event.id, &export.file.filename));
    let event_dir = ics_path.parent().unwrap_or(output_dir).to_path_buf();

    tokio::fs::create_dir_all(&event_dir).await?;

    warn_if_written(&report.calendar_files, &ics_path);
    tokio::fs::write(&ics_path, &export.file.content).await?;
    report.calendar_files.push(ics_path);

    let mut details = FileClipboard::new(event_dir.join(DETAILS_FILE));
    export_details(event, None, &mut details)?;

    Ok(())
}

async fn write_projects(
    config: &Config,
    catalog: Catalog<Project>,
    report: &mut SiteReport,
) -> Result<(), SiteError> {
    let output_dir = config.output_dir.as_path();

    let mut home = home_page();
    mount_or_log(&mut home, FEATURED_CONTAINER, featured_grid(&featured_cards(&catalog.records)));
    write_page(output_dir, "index.html", home, report).await?;

    let enriched: Vec<_> = catalog.records.into_iter().map(enrich).collect();
    let filter = ProjectFilter::from_key(&config.project_filter);

    let mut page = projects_page();
    mount_or_log(&mut page, PROJECTS_CONTAINER, project_grid(&project_cards(&enriched, &filter)));
    write_page(output_dir, "projects.html", page, report).await?;

    Ok(())
}

fn mount_or_log(page: &mut Page, container: &str, content: maud::Markup) {
    if let Err(e) = page.mount(container, content) {
        error!("Skipping render: {}", e);
    }
}

async fn write_page(
    output_dir: &Path,
    name: &str,
    page: Page,
    report: &mut SiteReport,
) -> Result<(), SiteError> {
    let path = output_dir.join(name);

    warn_if_written(&report.pages, &path);
    tokio::fs::write(&path, page.into_html()).await?;
    report.pages.push(path);

    Ok(())
}

/// Duplicate or colliding ids map to the same file, the later write wins
fn warn_if_written(written: &[PathBuf], path: &Path) -> bool {
    let overwrites = written.iter().any(|existing| existing == path);

    if overwrites {
        warn!("Overwriting {} written earlier in this build", path.display());
    }

    overwrites
}
