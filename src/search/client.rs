use tracing::{debug, trace};
use url::Url;

use crate::search::error::ResolveError;
use crate::search::parameters::{SearchParameters, CONTINUATION_TOKEN};
use crate::search::response::SearchPage;
use crate::util::http_transport::SearchTransport;

pub const SEARCH_ASSETS_PATH: &str = "service/rest/v1/search/assets";

/// The asset search endpoint below a Nexus 3 base URL (e.g. "https://nexus.example.com/" or
///  "https://example.com/nexus")
pub fn search_endpoint(base_uri: &str) -> Result<Url, ResolveError> {
    let mut base_uri = base_uri.trim().to_string();
    if !base_uri.ends_with('/') {
        base_uri.push('/');
    }

    let base = Url::parse(&base_uri)?;
    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ResolveError::Configuration(format!("unsupported repository URL scheme: {}", base.scheme())));
    }
    Ok(base.join(SEARCH_ASSETS_PATH)?)
}

/// Retrieves all pages of a search, following continuation tokens until the server
///  returns a page without one. Pages are fetched strictly one after the other.
pub struct PaginatedSearchClient<'a> {
    transport: &'a dyn SearchTransport,
    max_pages: Option<usize>,
}
impl <'a> PaginatedSearchClient<'a> {
    pub fn new(transport: &'a dyn SearchTransport, max_pages: Option<usize>) -> PaginatedSearchClient<'a> {
        PaginatedSearchClient {
            transport,
            max_pages,
        }
    }

    /// Fails as a whole if any page fails, pages retrieved up to that point are discarded.
    pub async fn fetch_all_pages(&self, endpoint: &Url, parameters: &SearchParameters) -> Result<Vec<SearchPage>, ResolveError> {
        let mut parameters = parameters.clone();
        let mut pages = Vec::new();

        loop {
            if let Some(limit) = self.max_pages {
                if pages.len() >= limit {
                    return Err(ResolveError::PageLimitExceeded { limit });
                }
            }

            let url = request_url(endpoint, &parameters);
            trace!("URI: {}", url);

            let body = self.transport.get(&url).await?;
            let page: SearchPage = serde_json::from_slice(&body)?;
            debug!("page {} has {} items, continuation token {:?}", pages.len() + 1, page.items.len(), page.continuation_token);

            // NB: a page can be empty and still have a continuation token
            let continuation_token = page.continuation_token.clone();
            pages.push(page);

            match continuation_token {
                Some(token) => parameters.set(CONTINUATION_TOKEN, token),
                None => return Ok(pages),
            }
        }
    }
}

fn request_url(endpoint: &Url, parameters: &SearchParameters) -> Url {
    let mut url = endpoint.clone();
    if !parameters.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(parameters.iter());
    }
    url
}
