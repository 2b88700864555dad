use thiserror::Error;

/// Transport and decode failures caught at a flow's outer boundary. The
/// display form is the bare message; callers prepend `"Error: "`.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0}")]
    Http(#[from] gloo_net::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    FileRead(#[from] gloo_file::FileReadError),
}
