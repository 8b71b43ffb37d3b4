use crate::http::request::{Method, Request};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("request is not valid UTF-8")]
    InvalidEncoding,
    #[error("request line has no method token")]
    MissingMethod,
    #[error("request line has no path token")]
    MissingPath,
    #[error("request path must start with '/': {0}")]
    InvalidPath(String),
}

/// Parses the request line out of a bounded chunk of received bytes.
///
/// Splits on whitespace: the first token is the method, the second the path.
/// Remaining tokens, the protocol version included, are ignored.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let text = decode(buf)?;
    let mut tokens = text.split_whitespace();

    let method = tokens.next().ok_or(ParseError::MissingMethod)?;
    let path = tokens.next().ok_or(ParseError::MissingPath)?;

    if !path.starts_with('/') {
        return Err(ParseError::InvalidPath(path.to_string()));
    }

    Ok(Request {
        method: Method::from_token(method),
        path: path.to_string(),
    })
}

fn decode(buf: &[u8]) -> Result<&str, ParseError> {
    match std::str::from_utf8(buf) {
        Ok(text) => Ok(text),
        // The receive bound may split a multi-byte character at the very end
        Err(e) if e.error_len().is_none() => {
            std::str::from_utf8(&buf[..e.valid_up_to()]).map_err(|_| ParseError::InvalidEncoding)
        }
        Err(_) => Err(ParseError::InvalidEncoding),
    }
}
