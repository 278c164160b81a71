use std::sync::Mutex;

use tracing::{error, info, warn};

use crate::search::error::{ErrorKind, ResolveError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub message: String,
}
impl Diagnostic {
    pub fn from_error(context: &str, e: &ResolveError) -> Diagnostic {
        Diagnostic {
            kind: e.kind(),
            message: format!("{}: {}", context, e),
        }
    }
}

/// Where the resolver reports failures it swallows. Results degrade to an empty list, so
///  this is the only place the difference between 'no versions' and 'failed' shows up.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);

    /// informational events, e.g. an empty search result
    fn note(&self, _message: &str) {}
}

/// forwards to the `tracing` infrastructure
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic.kind {
            ErrorKind::Unexpected => error!(kind = ?diagnostic.kind, "{}", diagnostic.message),
            _ => warn!(kind = ?diagnostic.kind, "{}", diagnostic.message),
        }
    }

    fn note(&self, message: &str) {
        info!("{}", message);
    }
}

/// keeps diagnostics in memory, for inspection by callers (and tests)
#[derive(Default)]
pub struct CollectingDiagnostics {
    diagnostics: Mutex<Vec<Diagnostic>>,
}
impl CollectingDiagnostics {
    pub fn new() -> CollectingDiagnostics {
        Default::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CollectingDiagnostics {
    fn record(&self, diagnostic: Diagnostic) {
        if let Ok(mut diagnostics) = self.diagnostics.lock() {
            diagnostics.push(diagnostic);
        }
    }
}
