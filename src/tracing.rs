use lazy_static::lazy_static;
use std::{env, io};
use tokio::task::JoinHandle;
use tracing::{info, warn, Level};
use tracing_loki::url::Url;
use tracing_loki::BackgroundTaskController;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{filter, fmt};

const SERVICE_NAME: &str = "showcase";

lazy_static! {
    static ref LOKI_URL: Option<String> = env::var("LOKI_URL").ok();
}

/// Keeps the Loki background task alive, shut it down before exiting to flush logs
pub struct LokiHandle {
    pub controller: BackgroundTaskController,
    pub task: JoinHandle<()>,
}

impl LokiHandle {
    pub async fn shutdown(self) {
        self.controller.shutdown().await;

        if let Err(e) = self.task.await {
            warn!("Loki task ended abnormally: {}", e);
        }
    }
}

/// Logs to stdout, and to Loki as well when `LOKI_URL` points at a reachable instance
pub async fn setup_tracing() -> Option<LokiHandle> {
    let filter = filter::Targets::new()
        .with_target(SERVICE_NAME, Level::TRACE)
        .with_default(Level::WARN);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stdout));

    let Some(base_url) = LOKI_URL.as_ref() else {
        registry.init();
        warn!("Loki URL not provided. Continuing without it.");
        return None;
    };

    let base_url: Url = match base_url.parse() {
        Ok(url) => url,
        Err(e) => {
            registry.init();
            warn!("Invalid Loki URL ({}). Continuing without it.", e);
            return None;
        }
    };

    if reqwest::get(base_url.clone()).await.is_err() {
        registry.init();
        warn!("Couldn't connect to Loki. Continuing without it.");
        return None;
    }

    let built = tracing_loki::builder()
        .label("service", SERVICE_NAME)
        .and_then(|builder| builder.build_controller_url(base_url));

    match built {
        Ok((layer, controller, task)) => {
            registry.with(layer).init();
            let task = tokio::spawn(task);

            info!("Loki initialized");

            Some(LokiHandle { controller, task })
        }
        Err(e) => {
            registry.init();
            warn!("Failed building the Loki layer ({}). Continuing without it.", e);
            None
        }
    }
}
