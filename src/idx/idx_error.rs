use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum IdxError {
    Config(String),
    Network(String),
    Status(u16, String),
    JsonParse(String),
}

impl fmt::Display for IdxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdxError::Config(msg) => write!(f, "IDX config error: {msg}"),
            IdxError::Network(msg) => write!(f, "Network error: {msg}"),
            IdxError::Status(code, body) => write!(f, "IDX API error: {code} - {body}"),
            IdxError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl Error for IdxError {}
