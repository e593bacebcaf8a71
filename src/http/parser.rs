use crate::http::headers::{CONTENT_LENGTH, Headers};
use crate::http::request::Request;
use crate::http::request_line::RequestLine;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("request is incomplete")]
    Incomplete,
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),
    #[error("unsupported method: {0:?}")]
    UnsupportedMethod(String),
    #[error("invalid header line: {0:?}")]
    InvalidHeader(String),
    #[error("invalid Content-Length: {0:?}")]
    InvalidContentLength(String),
    #[error("request head is not valid UTF-8")]
    InvalidEncoding,
}

/// Parses one request from the front of `buf`.
///
/// Returns the request and the number of bytes it occupied, or
/// [`ParseError::Incomplete`] when the head terminator or the full body has
/// not arrived yet.
pub fn parse_http_request(buf: &[u8]) -> Result<(Request, usize), ParseError> {
    // Look for header/body separator
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;
    let header_bytes = &buf[..headers_end];
    let body_bytes = &buf[headers_end + 4..];

    let head = std::str::from_utf8(header_bytes).map_err(|_| ParseError::InvalidEncoding)?;

    let mut lines = head.split("\r\n");

    // Request line
    let request_line = lines
        .next()
        .ok_or_else(|| ParseError::MalformedRequestLine(String::new()))?;
    let request_line = RequestLine::parse(request_line)?;

    // Headers
    let headers = Headers::parse(lines)?;

    // Body
    let content_length = headers
        .get(CONTENT_LENGTH)
        .map(|v| {
            v.parse::<usize>()
                .map_err(|_| ParseError::InvalidContentLength(v.to_string()))
        })
        .transpose()?
        .unwrap_or(0);

    if body_bytes.len() < content_length {
        return Err(ParseError::Incomplete);
    }

    let body = body_bytes[..content_length].to_vec();

    let request = Request {
        request_line,
        headers,
        body,
    };

    let total_consumed = headers_end + 4 + content_length;
    Ok((request, total_consumed))
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}
