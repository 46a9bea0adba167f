use crate::events::model::Event;
use std::path::PathBuf;
use std::time::Duration;
use std::{fs, io};
use thiserror::Error;
use tracing::{info, warn};

const COPIED_MESSAGE: &str = "Event details copied to clipboard!";
const TOAST_DURATION: Duration = Duration::from_secs(2);

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard is not available")]
    Unavailable,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Keeps every copied text, newest last
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub entries: Vec<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.entries.push(text.to_string());
        Ok(())
    }
}

/// Writes the copied text to a file, replacing what was there
#[derive(Debug)]
pub struct FileClipboard {
    pub path: PathBuf,
}

impl FileClipboard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Clipboard for FileClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Transient confirmation shown after copying
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub duration: Duration,
}

pub fn format_details(event: &Event) -> String {
    format!(
        "{}\nDate: {} {}, {}\nTime: {}\nLocation: {}\nDescription: {}\nRegister: {}",
        event.title,
        event.date.month,
        event.date.day,
        event.date.year,
        event.time,
        event.location,
        event.description,
        event.registration.url
    )
}

/// Copies the event summary, trying the system clipboard first when one is given
pub fn export_details(
    event: &Event,
    system: Option<&mut dyn Clipboard>,
    fallback: &mut dyn Clipboard,
) -> Result<Toast, ClipboardError> {
    let details = format_details(event);

    let copied = match system {
        Some(clipboard) => clipboard.write_text(&details).inspect_err(|err| {
            warn!("Clipboard write failed ({}), using the fallback", err);
        }),
        None => Err(ClipboardError::Unavailable),
    };

    if copied.is_err() {
        fallback.write_text(&details)?;
    }

    info!("Copied details of '{}'", event.title);

    Ok(Toast {
        message: COPIED_MESSAGE.to_string(),
        duration: TOAST_DURATION,
    })
}
