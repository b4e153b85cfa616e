use thiserror::Error;

#[derive(Debug, Error)]
#[error("HTTP error: {msg}")]
pub struct HttpError {
    msg: String,
}

impl HttpError {
    pub fn from_msg<D>(msg: D) -> Self
    where
        D: std::fmt::Display,
    {
        Self {
            msg: msg.to_string(),
        }
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }
}

pub type HttpResult<T> = Result<T, HttpError>;
