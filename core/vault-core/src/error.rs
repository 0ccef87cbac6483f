//! Error types for vault-core operations.
//!
//! Two families live here. [`StorageError`] covers the persisted key-value
//! layer and never escapes [`crate::SessionController`]; [`VaultError`] is what
//! everything else (config, content, contact form) returns.

use std::path::PathBuf;

// ═══════════════════════════════════════════════════════════════════════════════
// Storage Errors (recovered locally by the session controller)
// ═══════════════════════════════════════════════════════════════════════════════

/// Failures of the persisted key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or inaccessible (private mode, no writable root).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded: {used} of {limit} bytes")]
    QuotaExceeded { used: usize, limit: usize },

    #[error("Storage I/O error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

// ═══════════════════════════════════════════════════════════════════════════════
// Vault Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// All errors that can surface from vault-core outside the session core.
#[derive(Debug, thiserror::Error)]
pub enum VaultError {
    // ─────────────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Configuration file malformed: {path}: {details}")]
    ConfigMalformed { path: PathBuf, details: String },

    #[error("Configuration write failed: {path}: {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────────────
    // Content Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Embedded content is invalid: {name}: {source}")]
    ContentInvalid {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Case study not found: {0}")]
    CaseStudyNotFound(String),

    #[error("Workflow not found: {0}")]
    WorkflowNotFound(String),

    #[error("Workflow {workflow} connects unknown node {node}")]
    WorkflowDanglingNode { workflow: String, node: String },

    // ─────────────────────────────────────────────────────────────────────
    // Contact Form Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("Contact form invalid: {field}: {reason}")]
    ContactInvalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("No contact endpoint configured (set PRISI_OPS_API_URL or contact_endpoint)")]
    ContactEndpointMissing,

    #[error("Failed to send email: {0}")]
    ContactSendFailed(String),

    // ─────────────────────────────────────────────────────────────────────
    // I/O Errors
    // ─────────────────────────────────────────────────────────────────────
    #[error("I/O error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using VaultError.
pub type Result<T> = std::result::Result<T, VaultError>;

impl From<VaultError> for String {
    fn from(err: VaultError) -> String {
        err.to_string()
    }
}
