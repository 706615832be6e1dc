use std::fmt;


const MODULE: &str = "REQUEST";

pub const CONTENT_TYPE: &str = "Content-type";
pub const TEXT_HTML: &str = "text/html";


/// Request method as far as the handler cares
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other(String),
}

impl From<&tiny_http::Method> for Method {
    fn from(m: &tiny_http::Method) -> Self {
        match m {
            tiny_http::Method::Get => Method::Get,
            tiny_http::Method::Post => Method::Post,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Other(name) => write!(f, "{}", name),
        }
    }
}


/// Request headers as received, looked up with tiny_http's case-insensitive `equiv`
#[derive(Debug, Default, Clone)]
pub struct Headers(Vec<tiny_http::Header>);

impl Headers {
    /// First value stored under `name`
    pub fn get(&self, name: &'static str) -> Option<&str> {
        self.0.iter()
            .find(|h| h.field.equiv(name))
            .map(|h| h.value.as_str())
    }
}

impl From<&[tiny_http::Header]> for Headers {
    fn from(raw: &[tiny_http::Header]) -> Self {
        Headers(raw.to_vec())
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.0.iter()
            .map(|h| h.to_string())
            .collect::<Vec<String>>()
            .join("\\r\\n");
        write!(f, "{}", joined)
    }
}


/// What gets written back: status line, one content-type header, body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, body: impl Into<String>) -> Reply {
        Reply { status, body: body.into() }
    }

    pub fn content_type(&self) -> &'static str {
        TEXT_HTML
    }

    pub fn into_response(self) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
        let content_type = self.content_type();
        let mut response = tiny_http::Response::from_data(self.body.into_bytes())
            .with_status_code(tiny_http::StatusCode(self.status));
        match tiny_http::Header::from_bytes(CONTENT_TYPE.as_bytes(), content_type.as_bytes()) {
            Ok(header) => response.add_header(header),
            Err(_) => error!("[{}] Could not build `{}: {}` header", MODULE, CONTENT_TYPE, content_type),
        }
        response
    }
}
