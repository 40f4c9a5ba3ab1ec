//! Fault-code analyzer
//!
//! Resolves operator-entered codes against the built-in catalog. A remote
//! backend can eventually take over unresolved codes through the
//! `FaultBackend` trait; no production backend exists yet, and analysis
//! without one is still a complete, non-failing operation.

use crate::diagnostics::{normalize_code, CodeShape, FaultCatalog, FaultEntry};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Result type for diagnostics operations
pub type DiagnosticsResult<T> = Result<T, DiagnosticsError>;

/// Errors crossing the analyzer's backend seam
#[derive(Error, Debug)]
pub enum DiagnosticsError {
    #[error("Fault backend error: {message}")]
    Backend { message: String },

    #[error("Fault backend is not configured")]
    BackendNotConfigured,
}

impl DiagnosticsError {
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// Remote fault-analysis capability.
///
/// Extension point for a future telematics service; the dashboard declares
/// the seam but ships no implementation.
#[async_trait]
pub trait FaultBackend: Send + Sync {
    /// Backend name for logs and reports.
    fn name(&self) -> &str;

    /// Resolve a normalized code remotely.
    async fn query(&self, code: &str) -> DiagnosticsResult<FaultEntry>;
}

/// Where a report's entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportSource {
    Catalog,
    Backend,
}

/// Outcome of analyzing one code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultReport {
    /// Normalized code the analysis ran against.
    pub code: String,
    pub shape: CodeShape,
    pub entry: Option<FaultEntry>,
    pub source: ReportSource,
}

impl FaultReport {
    pub fn is_hit(&self) -> bool {
        self.entry.is_some()
    }
}

/// Analyzer combining normalization, the local catalog, and the optional
/// remote backend
pub struct FaultAnalyzer {
    catalog: FaultCatalog,
    backend: Option<Arc<dyn FaultBackend>>,
}

impl FaultAnalyzer {
    pub fn new() -> Self {
        Self {
            catalog: FaultCatalog::builtin(),
            backend: None,
        }
    }

    pub fn with_backend(mut self, backend: Arc<dyn FaultBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn set_backend(&mut self, backend: Arc<dyn FaultBackend>) {
        self.backend = Some(backend);
    }

    pub fn catalog(&self) -> &FaultCatalog {
        &self.catalog
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Analyze one operator-entered code.
    ///
    /// Never fails: a catalog miss without a backend, or a backend error,
    /// both produce a miss report the caller can present.
    pub async fn analyze(&self, raw_code: &str) -> FaultReport {
        let code = normalize_code(raw_code);
        let shape = CodeShape::classify(&code);
        info!("Analyzing fault code: {}", code);

        if let Some(entry) = self.catalog.lookup(&code) {
            return FaultReport {
                code,
                shape,
                entry: Some(entry.clone()),
                source: ReportSource::Catalog,
            };
        }

        if let Some(backend) = &self.backend {
            match backend.query(&code).await {
                Ok(entry) => {
                    return FaultReport {
                        code,
                        shape,
                        entry: Some(entry),
                        source: ReportSource::Backend,
                    };
                }
                Err(e) => {
                    warn!("Backend {} could not resolve {}: {}", backend.name(), code, e);
                }
            }
        } else {
            debug!("Remote fault analysis not configured, catalog only");
        }

        FaultReport {
            code,
            shape,
            entry: None,
            source: ReportSource::Catalog,
        }
    }
}

impl Default for FaultAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
