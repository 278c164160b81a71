pub mod client;
pub mod diagnostics;
pub mod error;
pub mod parameters;
pub mod resolver;
pub mod response;

use std::sync::Arc;

use serde::Deserialize;

use crate::config::ResolverConfig;
use crate::maven::coordinates::ArtifactCoordinates;
use crate::search::diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};
use crate::search::error::ErrorKind;
use crate::search::resolver::{Nexus3SearchService, VersionResolver};
use crate::search::response::ResultFormat;
use crate::util::http_transport::HyperSearchTransport;

pub const ERROR_PREFIX: &str = "ERROR: ";

/// The raw (untrimmed, unvalidated) values a host passes in
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionQuery {
    // missing values behave like blank ones, so they are reported like any invalid input
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub repository_id: Option<String>,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub artifact_id: String,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default)]
    pub format: ResultFormat,
}

/// Entry point for hosts that display the result as a choice list. This never fails:
///  invalid input results in a single "ERROR: ..." entry, failed searches result in an empty
///  list. Details go to the log either way.
pub async fn resolve_versions(endpoint_url: &str, group_id: &str, artifact_id: &str, packaging: &str, classifier_spec: &str) -> Vec<String> {
    let query = VersionQuery {
        url: endpoint_url.to_string(),
        repository_id: None,
        group_id: group_id.to_string(),
        artifact_id: artifact_id.to_string(),
        packaging: Some(packaging.to_string()),
        classifier: Some(classifier_spec.to_string()),
        format: ResultFormat::DownloadUrl,
    };
    resolve_query(&query, &ResolverConfig::default(), Arc::new(TracingDiagnostics)).await
}

pub async fn resolve_query(query: &VersionQuery, config: &ResolverConfig, diagnostics: Arc<dyn DiagnosticSink>) -> Vec<String> {
    let coordinates = match ArtifactCoordinates::new(
        query.repository_id.as_deref(),
        &query.group_id,
        &query.artifact_id,
        query.packaging.as_deref(),
    ) {
        Ok(c) => c,
        Err(e) => {
            diagnostics.record(Diagnostic::from_error(&format!("invalid coordinates g:{}, a:{}", query.group_id, query.artifact_id), &e));
            return vec![format!("{}{}", ERROR_PREFIX, e)];
        }
    };

    // one transport per resolution: its connections are released when it goes out of scope
    let service = Nexus3SearchService::new(HyperSearchTransport::new(config), config)
        .with_format(query.format);
    let resolver = VersionResolver::new(service, diagnostics);

    let classifier = query.classifier.as_deref().unwrap_or("");
    match resolver.try_resolve(&coordinates, classifier, &query.url).await {
        Ok(versions) => versions,
        Err(e) => {
            resolver.report(&coordinates, classifier, &query.url, &e);
            match e.kind() {
                ErrorKind::Configuration => vec![format!("{}{}", ERROR_PREFIX, e)],
                _ => Vec::new(),
            }
        }
    }
}
