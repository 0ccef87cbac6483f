//! Typed shapes of the embedded portfolio content.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VaultError};

// ═══════════════════════════════════════════════════════════════════════════════
// Profile
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub image_src: String,
    pub bio: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expertise {
    pub tools: Vec<String>,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendly: Option<String>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Case Studies
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub id: String,
    pub label: String,
    pub value: f64,
    /// One of `%`, `$`, `hrs`, `x`, `min`.
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Metric {
    /// Headline rendering of the metric, e.g. `+24.6hrs`, `-87.0%`, `+156,000`.
    ///
    /// Dollar amounts carry no unit suffix; the label says what they are.
    pub fn display_value(&self) -> String {
        let prefix = self.prefix.as_deref().unwrap_or("");
        match self.unit.as_str() {
            "$" => format!("{}{}", prefix, group_thousands(self.value.round() as i64)),
            "%" | "hrs" | "x" => format!("{}{:.1}{}", prefix, self.value, self.unit),
            unit => format!("{}{}{}", prefix, self.value.round() as i64, unit),
        }
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Bar,
    Line,
    Area,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricChart {
    pub id: String,
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub data: Vec<ChartDataPoint>,
    pub data_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roi {
    pub investment: u64,
    pub annual_savings: u64,
    pub payback_period: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub client: String,
    pub industry: String,
    pub duration: String,
    pub problem: String,
    pub solution: String,
    pub outcome: String,
    pub tools: Vec<String>,
    pub hero_metrics: Vec<Metric>,
    pub charts: Vec<MetricChart>,
    pub roi: Roi,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<Testimonial>,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Workflows
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeType {
    Input,
    Process,
    Output,
    AiAgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowConnection {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentWorkflow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub nodes: Vec<WorkflowNode>,
    pub connections: Vec<WorkflowConnection>,
}

impl AgentWorkflow {
    pub fn node(&self, id: &str) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Checks that every connection endpoint names a node in this workflow.
    pub fn validate(&self) -> Result<()> {
        for connection in &self.connections {
            for endpoint in [&connection.from, &connection.to] {
                if self.node(endpoint).is_none() {
                    return Err(VaultError::WorkflowDanglingNode {
                        workflow: self.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(value: f64, unit: &str, prefix: Option<&str>) -> Metric {
        Metric {
            id: "m".to_string(),
            label: "Metric".to_string(),
            value,
            unit: unit.to_string(),
            prefix: prefix.map(str::to_string),
            trend: None,
            description: None,
        }
    }

    #[test]
    fn display_value_formats_by_unit() {
        assert_eq!(metric(24.6, "hrs", Some("+")).display_value(), "+24.6hrs");
        assert_eq!(metric(87.0, "%", Some("-")).display_value(), "-87.0%");
        assert_eq!(metric(156000.0, "$", Some("+")).display_value(), "+156,000");
        assert_eq!(metric(3.5, "x", None).display_value(), "3.5x");
        assert_eq!(metric(17.6, "min", Some("~")).display_value(), "~18min");
    }

    #[test]
    fn group_thousands_handles_small_and_negative() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(-1234567), "-1,234,567");
    }

    #[test]
    fn validate_rejects_dangling_connection() {
        let workflow = AgentWorkflow {
            id: "wf".to_string(),
            title: "Workflow".to_string(),
            description: String::new(),
            nodes: vec![WorkflowNode {
                id: "a".to_string(),
                label: "A".to_string(),
                node_type: NodeType::Input,
                position: Position { x: 0.0, y: 0.0 },
            }],
            connections: vec![WorkflowConnection {
                from: "a".to_string(),
                to: "ghost".to_string(),
                animated: false,
            }],
        };

        match workflow.validate() {
            Err(VaultError::WorkflowDanglingNode { node, .. }) => assert_eq!(node, "ghost"),
            other => panic!("expected dangling node error, got {:?}", other),
        }
    }

    #[test]
    fn node_type_uses_kebab_case() {
        let parsed: NodeType = serde_json::from_str("\"ai-agent\"").unwrap();
        assert_eq!(parsed, NodeType::AiAgent);
    }
}
