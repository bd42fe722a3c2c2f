/// Port of the mock records API (backend `server.port`)
pub const API_PORT: u16 = 3000;

/// Records API origin on the page's host, e.g. "http://localhost:3000".
/// Empty outside a browser window, so URLs stay relative.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

