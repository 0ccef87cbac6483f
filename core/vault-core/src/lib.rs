//! # vault-core
//!
//! Core library for the Prisi Ops vault tour: the session state machine that
//! drives the six-section walkthrough, the persisted "returning visitor"
//! flags, the static content catalog, and contact-form submission.
//!
//! ## Design Principles
//!
//! - **Synchronous**: No async runtime dependency. Every dispatch runs to completion.
//! - **Not thread-safe**: One controller per front end; callers serialize access.
//! - **Graceful degradation**: Storage failures are logged and ignored. The
//!   in-memory session stays authoritative for the lifetime of the process.
//! - **Pure transitions**: [`reduce`] never touches storage. Persistence is
//!   described as [`Effect`]s and executed by [`SessionController`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vault_core::{Action, FileStore, SessionController, StorageConfig};
//!
//! let config = StorageConfig::default();
//! let mut session = SessionController::new(FileStore::new(config.storage_file()));
//! session.dispatch(Action::Unlock);
//! session.dispatch(Action::Enter);
//! session.next();
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod sections;
pub mod session;
pub mod storage;

pub use config::VaultConfig;
pub use contact::{
    ContactForm, ContactStatus, ContactSubmission, EmailTransport, HttpTransport, SUBJECT_OPTIONS,
};
pub use content::{catalog, AgentWorkflow, CaseStudy, Catalog, Metric};
pub use error::{Result, StorageError, VaultError};
pub use sections::{Section, TOTAL_SECTIONS};
pub use session::{
    has_visited_before, hydrate, reduce, Action, Effect, SessionController, SessionState,
    Transition,
};
pub use storage::{
    DisabledStore, FileStore, KeyValueStore, MemoryStore, StorageConfig, LAST_SECTION_KEY,
    VISITED_AT_KEY, VISITED_BEFORE_KEY,
};
