use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("unknown quantity action: {0:?}")]
    UnknownAction(String),
    #[error("invalid storefront config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
    #[error("cookie {0:?} not present")]
    MissingCsrfCookie(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
