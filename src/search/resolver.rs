use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use url::Url;

use crate::config::ResolverConfig;
use crate::maven::classifier::ClassifierPolicy;
use crate::maven::coordinates::ArtifactCoordinates;
use crate::search::client::{search_endpoint, PaginatedSearchClient};
use crate::search::diagnostics::{Diagnostic, DiagnosticSink};
use crate::search::error::ResolveError;
use crate::search::parameters::build_parameters;
use crate::search::response::{normalize, ResultFormat};
use crate::util::http_transport::SearchTransport;

/// A search API that can list the available artifacts for some coordinates. Results are
///  unordered and free of duplicates.
#[async_trait]
pub trait VersionReader: Send + Sync {
    async fn call_service(
        &self,
        endpoint: &str,
        coordinates: &ArtifactCoordinates,
        classifiers: &ClassifierPolicy,
    ) -> Result<BTreeSet<String>, ResolveError>;
}

/// Nexus 3 REST search (`service/rest/v1/search/assets`)
pub struct Nexus3SearchService<T: SearchTransport> {
    transport: T,
    max_pages: Option<usize>,
    format: ResultFormat,
}
impl <T: SearchTransport> Nexus3SearchService<T> {
    pub fn new(transport: T, config: &ResolverConfig) -> Nexus3SearchService<T> {
        Nexus3SearchService {
            transport,
            max_pages: config.max_pages,
            format: ResultFormat::default(),
        }
    }

    pub fn with_format(mut self, format: ResultFormat) -> Nexus3SearchService<T> {
        self.format = format;
        self
    }

    async fn fetch(&self, endpoint: &Url, coordinates: &ArtifactCoordinates, classifiers: &ClassifierPolicy) -> Result<BTreeSet<String>, ResolveError> {
        let parameters = build_parameters(coordinates, classifiers);
        let pages = PaginatedSearchClient::new(&self.transport, self.max_pages)
            .fetch_all_pages(endpoint, &parameters)
            .await?;

        let mut result = BTreeSet::new();
        for page in &pages {
            result.extend(normalize(page, classifiers, self.format));
        }
        Ok(result)
    }
}

#[async_trait]
impl <T: SearchTransport> VersionReader for Nexus3SearchService<T> {
    async fn call_service(
        &self,
        endpoint: &str,
        coordinates: &ArtifactCoordinates,
        classifiers: &ClassifierPolicy,
    ) -> Result<BTreeSet<String>, ResolveError> {
        let endpoint = search_endpoint(endpoint)?;
        info!("call nexus service at {}", endpoint);
        self.fetch(&endpoint, coordinates, classifiers).await
    }
}

/// Resolves the list of available artifacts, sorted in descending order. Failures are
///  reported to the diagnostic sink.
pub struct VersionResolver {
    reader: Box<dyn VersionReader>,
    diagnostics: Arc<dyn DiagnosticSink>,
}
impl VersionResolver {
    pub fn new(reader: impl VersionReader + 'static, diagnostics: Arc<dyn DiagnosticSink>) -> VersionResolver {
        VersionResolver {
            reader: Box::new(reader),
            diagnostics,
        }
    }

    /// The classifier specification is parsed before any network access, so configuration
    ///  errors never cost a request.
    pub async fn try_resolve(&self, coordinates: &ArtifactCoordinates, classifier_raw: &str, endpoint: &str) -> Result<Vec<String>, ResolveError> {
        let classifiers = ClassifierPolicy::parse(classifier_raw)?;
        let found = self.reader.call_service(endpoint, coordinates, &classifiers).await?;

        if found.is_empty() {
            self.diagnostics.note(&format!("search for {}:{} at {} does not contain any results", coordinates.group_id.0, coordinates.artifact_id.0, endpoint));
        }

        // NB: plain string ordering, '1.10' sorts before '1.9'
        Ok(found.into_iter().rev().collect())
    }

    /// like `try_resolve`, but failures result in an empty list
    pub async fn resolve(&self, coordinates: &ArtifactCoordinates, classifier_raw: &str, endpoint: &str) -> Vec<String> {
        match self.try_resolve(coordinates, classifier_raw, endpoint).await {
            Ok(versions) => versions,
            Err(e) => {
                self.report(coordinates, classifier_raw, endpoint, &e);
                Vec::new()
            }
        }
    }

    pub(crate) fn report(&self, coordinates: &ArtifactCoordinates, classifier_raw: &str, endpoint: &str, e: &ResolveError) {
        let context = format!(
            "failed to retrieve versions for r:{}, g:{}, a:{}, p:{}, c:{}, url:{}",
            coordinates.repository_id.as_deref().unwrap_or(""),
            coordinates.group_id.0,
            coordinates.artifact_id.0,
            coordinates.packaging.as_deref().unwrap_or(""),
            classifier_raw,
            endpoint,
        );
        self.diagnostics.record(Diagnostic::from_error(&context, e));
    }
}
