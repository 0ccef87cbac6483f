//! Contact-form submission.
//!
//! One outbound POST per submit: no retry, no backoff, no dedup. The outcome
//! is a three-way [`ContactStatus`] for the front end to show; errors never
//! reach the session core.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::VaultConfig;
use crate::error::{Result, VaultError};

pub const SUBJECT_OPTIONS: [&str; 7] = [
    "General Inquiry",
    "AI Agent Development",
    "Workflow Automation",
    "System Integration",
    "Technical Consulting",
    "Partnership Opportunity",
    "Other",
];

static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm {
            name: String::new(),
            email: String::new(),
            subject: SUBJECT_OPTIONS[0].to_string(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(VaultError::ContactInvalid {
                    field,
                    reason: "required",
                });
            }
        }
        if !RE_EMAIL.is_match(self.email.trim()) {
            return Err(VaultError::ContactInvalid {
                field: "email",
                reason: "not an email address",
            });
        }
        Ok(())
    }
}

/// Delivers a contact form somewhere.
pub trait EmailTransport {
    fn send(&self, form: &ContactForm) -> Result<()>;
}

/// Posts the form as JSON to the contact API gateway.
pub struct HttpTransport {
    endpoint: String,
    region: Option<String>,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VaultError::ContactSendFailed(e.to_string()))?;
        Ok(HttpTransport {
            endpoint: endpoint.into(),
            region: None,
            client,
        })
    }

    /// Records the gateway region the endpoint is deployed in.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn from_config(config: &VaultConfig) -> Result<Self> {
        let endpoint = config
            .contact_endpoint
            .clone()
            .ok_or(VaultError::ContactEndpointMissing)?;
        Ok(Self::new(endpoint, config.request_timeout())?.with_region(&config.api_region))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl EmailTransport for HttpTransport {
    fn send(&self, form: &ContactForm) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .and_then(|r| r.error_for_status());

        match response {
            Ok(response) => {
                tracing::debug!(
                    status = %response.status(),
                    region = self.region(),
                    "Contact form delivered"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    endpoint = %self.endpoint,
                    region = self.region(),
                    "Error sending email"
                );
                Err(VaultError::ContactSendFailed(err.to_string()))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Form contents plus the status of the last submission.
#[derive(Debug, Default)]
pub struct ContactSubmission {
    form: ContactForm,
    status: ContactStatus,
    last_error: Option<String>,
}

impl ContactSubmission {
    pub fn new(form: ContactForm) -> Self {
        ContactSubmission {
            form,
            ..Default::default()
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn status(&self) -> ContactStatus {
        self.status
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Sends the form once. Success clears the form; failure keeps it for another try.
    pub fn submit<T: EmailTransport + ?Sized>(&mut self, transport: &T) -> ContactStatus {
        self.status = ContactStatus::Idle;
        self.last_error = None;

        let outcome = self
            .form
            .validate()
            .and_then(|()| transport.send(&self.form));

        match outcome {
            Ok(()) => {
                self.status = ContactStatus::Success;
                self.form = ContactForm::default();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Contact form submission failed");
                self.status = ContactStatus::Error;
                self.last_error = Some(err.to_string());
            }
        }
        self.status
    }
}
