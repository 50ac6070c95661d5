use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site content is malformed: {0}")]
    Content(#[from] serde_json::Error),

    #[error("panel {index} is out of range for {len} panels")]
    PanelOutOfRange { index: usize, len: usize },

    #[error("browser api unavailable: {0}")]
    Browser(&'static str),
}
