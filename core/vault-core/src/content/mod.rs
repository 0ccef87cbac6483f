//! Static portfolio content: profile, case studies, and agent workflows.
//!
//! The content ships inside the binary as JSON (`data/*.json`) and is parsed
//! once on first access. It is immutable for the life of the process.

mod types;

use once_cell::sync::OnceCell;
use serde::Deserialize;

use crate::error::{Result, VaultError};

pub use types::{
    AgentWorkflow, CaseStudy, ChartDataPoint, ChartType, ContactInfo, Expertise, Metric,
    MetricChart, NodeType, Position, Profile, Roi, Testimonial, Trend, WorkflowConnection,
    WorkflowNode,
};

const PROFILE_JSON: &str = include_str!("../../data/profile.json");
const CASE_STUDIES_JSON: &str = include_str!("../../data/case_studies.json");
const WORKFLOWS_JSON: &str = include_str!("../../data/workflows.json");

static CATALOG: OnceCell<Catalog> = OnceCell::new();

#[derive(Debug, Deserialize)]
struct ProfileFile {
    profile: Profile,
    expertise: Expertise,
    contact: ContactInfo,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    pub profile: Profile,
    pub expertise: Expertise,
    pub contact: ContactInfo,
    pub case_studies: Vec<CaseStudy>,
    pub workflows: Vec<AgentWorkflow>,
}

/// Returns the embedded catalog, parsing it on first use.
pub fn catalog() -> Result<&'static Catalog> {
    CATALOG.get_or_try_init(Catalog::load_embedded)
}

impl Catalog {
    fn load_embedded() -> Result<Catalog> {
        let profile_file: ProfileFile = parse("profile.json", PROFILE_JSON)?;
        let case_studies: Vec<CaseStudy> = parse("case_studies.json", CASE_STUDIES_JSON)?;
        let workflows: Vec<AgentWorkflow> = parse("workflows.json", WORKFLOWS_JSON)?;

        for workflow in &workflows {
            workflow.validate()?;
        }

        tracing::debug!(
            case_studies = case_studies.len(),
            workflows = workflows.len(),
            "Loaded content catalog"
        );

        Ok(Catalog {
            profile: profile_file.profile,
            expertise: profile_file.expertise,
            contact: profile_file.contact,
            case_studies,
            workflows,
        })
    }

    /// Case-study detail lookup by slug.
    pub fn case_study(&self, id: &str) -> Result<&CaseStudy> {
        self.case_studies
            .iter()
            .find(|cs| cs.id == id)
            .ok_or_else(|| VaultError::CaseStudyNotFound(id.to_string()))
    }

    pub fn workflow(&self, id: &str) -> Result<&AgentWorkflow> {
        self.workflows
            .iter()
            .find(|wf| wf.id == id)
            .ok_or_else(|| VaultError::WorkflowNotFound(id.to_string()))
    }
}

fn parse<T: serde::de::DeserializeOwned>(name: &'static str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| VaultError::ContentInvalid { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = catalog().unwrap();
        assert_eq!(catalog.profile.name, "Prisi Ops");
        assert_eq!(catalog.expertise.services.len(), 6);
        assert_eq!(catalog.contact.email, "hello@prisiops.com");
        assert_eq!(catalog.case_studies.len(), 3);
        assert_eq!(catalog.workflows.len(), 3);
    }

    #[test]
    fn case_study_lookup_by_id() {
        let catalog = catalog().unwrap();
        let study = catalog.case_study("ai-operations-command-center").unwrap();
        assert_eq!(study.roi.investment, 25000);
        assert_eq!(study.hero_metrics[0].display_value(), "+24.6hrs");
        assert!(study.testimonial.is_some());

        assert!(matches!(
            catalog.case_study("missing"),
            Err(VaultError::CaseStudyNotFound(_))
        ));
    }

    #[test]
    fn every_workflow_is_connected() {
        let catalog = catalog().unwrap();
        for workflow in &catalog.workflows {
            workflow.validate().unwrap();
            assert!(!workflow.connections.is_empty());
        }
        assert!(catalog.workflow("lead-qualification-system").is_ok());
    }
}
