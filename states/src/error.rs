use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No async runtime available: {0}")]
    NoRuntime(String),
}
