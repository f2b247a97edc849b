use axum::http::Uri;

/// Read-only view of the failing request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub path: String,
}

impl RequestDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Path only; the query string is not part of it
    pub fn from_uri(uri: &Uri) -> Self {
        Self::new(uri.path())
    }
}
