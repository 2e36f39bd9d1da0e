//! URL construction for the suggestion and search endpoints

use reqwest::Url;

use crate::codes::SearchType;
use crate::error::FinderError;

const SEARCH_PATH: &str = "/search";

/// Parse and check the server base URL (`http` or `https` only)
pub fn parse_base_url(raw: &str) -> Result<Url, FinderError> {
    let url = Url::parse(raw.trim()).map_err(|e| FinderError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(FinderError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url)
}

/// `base` with `path` appended to its own path and the query string replaced
fn join_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    let path = path.trim_start_matches('/');
    url.set_path(&format!("{}/{}", prefix, path));
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// `<base><endpoint>?q=<query>`
pub fn suggest_url(base: &Url, endpoint: &str, query: &str) -> Url {
    let mut url = join_path(base, endpoint);
    url.query_pairs_mut().append_pair("q", query);
    url
}

/// `<base>/search?q=<query>&type=<search type>`
pub fn search_url(base: &Url, query: &str, search_type: SearchType) -> Url {
    let mut url = join_path(base, SEARCH_PATH);
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("type", search_type.as_param());
    url
}
