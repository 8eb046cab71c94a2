//! Input-kind detection.
//!
//! The backend decides for itself what to do with the text; this only lets
//! the input box tell the user what it looks like before they submit.

/// What the composed input looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Contains a YouTube link.
    Video,
    /// Contains an http(s) link.
    WebPage,
    /// Anything else that is not blank.
    Search,
}

impl InputKind {
    pub fn label(&self) -> &'static str {
        match self {
            InputKind::Video => "YouTube video",
            InputKind::WebPage => "web page",
            InputKind::Search => "search",
        }
    }
}

/// Classifies `text`. Returns `None` for blank input.
///
/// A video link anywhere wins over plain links; links win over search.
pub fn classify(text: &str) -> Option<InputKind> {
    if text.trim().is_empty() {
        return None;
    }

    let mut saw_link = false;
    for token in text.split_whitespace() {
        if !is_http_link(token) {
            continue;
        }
        if is_youtube_link(token) {
            return Some(InputKind::Video);
        }
        saw_link = true;
    }

    Some(if saw_link {
        InputKind::WebPage
    } else {
        InputKind::Search
    })
}

fn is_http_link(token: &str) -> bool {
    let rest = token
        .strip_prefix("https://")
        .or_else(|| token.strip_prefix("http://"));
    rest.is_some_and(|r| !r.is_empty())
}

fn is_youtube_link(url: &str) -> bool {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let host_and_path = without_scheme.strip_prefix("www.").unwrap_or(without_scheme);
    let (host, path) = host_and_path
        .split_once('/')
        .unwrap_or((host_and_path, ""));
    let host = host.to_ascii_lowercase();
    (host == "youtube.com" || host == "m.youtube.com" || host == "youtu.be") && !path.is_empty()
}
