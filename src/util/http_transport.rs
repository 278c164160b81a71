use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hyper::{Body, Client, Method, Request};
use hyper::body::to_bytes;
use hyper::client::HttpConnector;
use hyper::header::{ACCEPT, USER_AGENT};
use hyper_tls::HttpsConnector;
use tracing::trace;
use url::Url;

use crate::config::ResolverConfig;
use crate::search::error::ResolveError;

/// Performs a single GET against the search endpoint, returning the raw response body.
///  Implementations must treat non-success status codes as failures.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, ResolveError>;
}

/// hyper based transport. Connections are pooled inside the client and closed when the
///  transport is dropped, so create one per resolution.
pub struct HyperSearchTransport {
    client: Client<HttpsConnector<HttpConnector>>,
    timeout: Duration,
    user_agent: String,
}
impl HyperSearchTransport {
    pub fn new(config: &ResolverConfig) -> HyperSearchTransport {
        HyperSearchTransport {
            client: Client::builder()
                .build::<_, Body>(HttpsConnector::new()),
            timeout: config.request_timeout,
            user_agent: config.user_agent.clone(),
        }
    }

    async fn do_get(&self, url: &Url) -> Result<Vec<u8>, ResolveError> {
        let request = Request::builder()
            .method(Method::GET)
            .uri(url.as_str())
            .header(USER_AGENT, self.user_agent.as_str())
            .header(ACCEPT, "application/json")
            .body(Body::empty())?;

        trace!("getting {:?}", request);

        let response = self.client.request(request)
            .await?;

        if !response.status().is_success() {
            return Err(ResolveError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = to_bytes(response.into_body())
            .await?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl SearchTransport for HyperSearchTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, ResolveError> {
        match tokio::time::timeout(self.timeout, self.do_get(url)).await {
            Ok(result) => result,
            Err(_) => Err(ResolveError::Timeout { after: self.timeout }),
        }
    }
}

#[async_trait]
impl <T: SearchTransport + ?Sized> SearchTransport for Arc<T> {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, ResolveError> {
        (**self).get(url).await
    }
}
