use std::io::Read;

use crate::error::HandlerError;
use crate::request::{Headers, Method, Reply};


const MODULE: &str = "HANDLERS";

pub const HTTP_200: u16 = 200;
pub const HTTP_500: u16 = 500;
pub const HTTP_501: u16 = 501;

pub const GET_ACK: &str = "Hello! You made GET request.";
pub const POST_ACK: &str = "POST request received. Thank you!";
pub const POST_LOG_PREFIX: &str = "Received POST data: ";

const CONTENT_LENGTH: &str = "Content-Length";


pub fn handle_get() -> Reply {
    Reply::new(HTTP_200, GET_ACK)
}

/// Reads exactly `Content-Length` bytes, logs them as text and acknowledges
pub fn handle_post(headers: &Headers, body: &mut dyn Read) -> Result<Reply, HandlerError> {
    let data = read_post_data(headers, body)?;
    info!("[{}] {}{}", MODULE, POST_LOG_PREFIX, data);

    Ok(Reply::new(HTTP_200, POST_ACK))
}

pub fn not_implemented(method: &Method) -> Reply {
    info!("[{}] Method {} is not implemented", MODULE, method);
    error_reply(HTTP_501, "Not Implemented")
}

pub fn internal_error(err: &HandlerError) -> Reply {
    error!("[{}] Failed to handle request: {}", MODULE, err);
    error_reply(HTTP_500, "Internal Server Error")
}

fn error_reply(code: u16, reason: &str) -> Reply {
    Reply::new(code, format!("{}: {}", code, reason))
}

pub fn content_length(headers: &Headers) -> Result<usize, HandlerError> {
    let raw = headers.get(CONTENT_LENGTH)
        .ok_or_else(|| HandlerError::Protocol(format!("missing {} header", CONTENT_LENGTH)))?;

    raw.trim().parse::<usize>()
        .map_err(|_| HandlerError::Protocol(format!("invalid {} header: `{}`", CONTENT_LENGTH, raw)))
}

pub fn read_post_data(headers: &Headers, body: &mut dyn Read) -> Result<String, HandlerError> {
    let length = content_length(headers)?;

    let mut buf: Vec<u8> = Vec::new();
    body.take(length as u64).read_to_end(&mut buf)?;
    if buf.len() < length {
        return Err(HandlerError::Protocol(
            format!("body is {} bytes, {} declared {}", buf.len(), CONTENT_LENGTH, length)
        ));
    }

    Ok(String::from_utf8(buf)?)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn headers_from(lines: &[String]) -> Headers {
        let raw: Vec<tiny_http::Header> = lines.iter().map(|l| l.parse().unwrap()).collect();
        Headers::from(raw.as_slice())
    }

    fn headers_with_length(len: &str) -> Headers {
        headers_from(&["Host: localhost".to_string(), format!("content-length: {}", len)])
    }

    #[test]
    fn get_is_fixed() {
        let r = handle_get();
        assert_eq!(r.status, 200);
        assert_eq!(r.content_type(), "text/html");
        assert_eq!(r.body, "Hello! You made GET request.");
        assert_eq!(handle_get(), r);
    }

    #[test]
    fn post_acknowledges() {
        let h = headers_with_length("5");
        let r = handle_post(&h, &mut &b"hello"[..]).unwrap();
        assert_eq!(r.status, 200);
        assert_eq!(r.body, "POST request received. Thank you!");
    }

    #[test]
    fn post_reads_exactly_declared_length() {
        let h = headers_with_length("5");
        let data = read_post_data(&h, &mut &b"hello world"[..]).unwrap();
        assert_eq!(data, "hello");
    }

    #[test]
    fn empty_body_with_zero_length() {
        let h = headers_with_length("0");
        assert_eq!(read_post_data(&h, &mut &b""[..]).unwrap(), "");
    }

    #[test]
    fn missing_length_is_protocol_error() {
        let h = headers_from(&["Host: localhost".to_string()]);
        let res = handle_post(&h, &mut &b"hello"[..]);
        assert!(matches!(res, Err(HandlerError::Protocol(_))));
    }

    #[test]
    fn unparsable_length_is_protocol_error() {
        for bad in ["abc", "-5", "5.0", "18446744073709551616"] {
            let h = headers_with_length(bad);
            let res = read_post_data(&h, &mut &b"hello"[..]);
            assert!(matches!(res, Err(HandlerError::Protocol(_))), "accepted `{}`", bad);
        }
    }

    #[test]
    fn short_body_is_protocol_error() {
        let h = headers_with_length("10");
        let res = read_post_data(&h, &mut &b"hello"[..]);
        assert!(matches!(res, Err(HandlerError::Protocol(_))));
    }

    #[test]
    fn huge_declared_length_is_not_preallocated() {
        for huge in ["18446744073709551615", "1099511627776"] {
            let h = headers_with_length(huge);
            let res = read_post_data(&h, &mut &b"hello"[..]);
            assert!(matches!(res, Err(HandlerError::Protocol(_))), "accepted `{}`", huge);
        }
    }

    #[test]
    fn invalid_utf8_is_encoding_error() {
        let h = headers_with_length("2");
        let res = handle_post(&h, &mut &[0xffu8, 0xfe][..]);
        assert!(matches!(res, Err(HandlerError::Encoding(_))));
    }

    #[test]
    fn multibyte_text_is_decoded() {
        let text = "привет";
        let h = headers_with_length(&text.len().to_string());
        assert_eq!(read_post_data(&h, &mut text.as_bytes()).unwrap(), text);
    }

    #[test]
    fn other_methods_get_501() {
        let r = not_implemented(&Method::Other("DELETE".to_string()));
        assert_eq!(r.status, 501);
        assert_eq!(r.body, "501: Not Implemented");
    }

    #[test]
    fn failures_become_500() {
        let r = internal_error(&HandlerError::Protocol("missing".to_string()));
        assert_eq!(r.status, 500);
        assert_eq!(r.body, "500: Internal Server Error");
    }
}
