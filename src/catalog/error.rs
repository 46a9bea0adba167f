use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),

    #[error("Bad response: {0}")]
    Response(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Response parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}
