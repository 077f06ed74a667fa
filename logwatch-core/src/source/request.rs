use serde::Serialize;

/// The tokenized form of an HTTP request line such as `GET /api/user HTTP/1.0`.
///
/// A request line that does not split into exactly three space-separated tokens yields
/// empty fields, which puts the hit in the empty section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
    pub section: String,
    pub protocol: String,
}

impl RequestLine {
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split(' ');

        let (Some(method), Some(path), Some(protocol), None) =
            (tokens.next(), tokens.next(), tokens.next(), tokens.next())
        else {
            return Self::default();
        };

        Self {
            method: method.to_string(),
            path: path.to_string(),
            section: section_of(path).to_string(),
            protocol: protocol.to_string(),
        }
    }
}

/// Returns the first `/segment` of a request path.
///
/// `/api/user` is in section `/api`, `/report` is its own section and a bare `/` (or any path
/// whose first segment is empty, like `///`) is the root section. Paths that are empty or not
/// absolute have no section and map to the empty string.
pub fn section_of(path: &str) -> &str {
    let Some(rest) = path.strip_prefix('/') else {
        return "";
    };

    match rest.find('/') {
        Some(end) => &path[..end + 1],
        None => path,
    }
}
