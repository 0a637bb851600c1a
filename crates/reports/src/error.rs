/// Failures while rendering a report body.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer could not be flushed: {0}")]
    Flush(String),

    #[error("Report body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
