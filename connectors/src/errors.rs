use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum ConnectorError {
    #[error("HTTP client error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("invalid value for header {0}")]
    InvalidHeader(&'static str),

    #[error("{connector} responded with unexpected status {status}")]
    UnexpectedStatus {
        connector: &'static str,
        status: StatusCode,
    },
}
