use std::{error, fmt, io};

#[derive(Debug)]
pub enum Error {
    UnexpectedResponse,
    InvalidUrl(String),
    HttpStatus { code: u16 },
    WebApiError(String),
    JsonError(Box<dyn error::Error + Send>),
    IoError(io::Error),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedResponse => write!(f, "Unknown server response"),
            Self::InvalidUrl(url) => write!(f, "Invalid URL: {url}"),
            Self::HttpStatus { code } => write!(f, "Server responded with status {code}"),
            Self::WebApiError(err) => f.write_str(err),
            Self::JsonError(err) => err.fmt(f),
            Self::IoError(err) => err.fmt(f),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::JsonError(Box::new(err))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Error {
        Error::InvalidUrl(err.to_string())
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        match err {
            ureq::Error::StatusCode(code) => Error::HttpStatus { code },
            ureq::Error::Io(err) => Error::IoError(err),
            err => Error::WebApiError(err.to_string()),
        }
    }
}
