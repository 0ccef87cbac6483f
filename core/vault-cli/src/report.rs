//! Text and JSON rendering for CLI output.

use serde::Serialize;
use vault_core::content::{AgentWorkflow, CaseStudy, Catalog};
use vault_core::sections::{self, Section};
use vault_core::{ContactStatus, KeyValueStore, SessionController, SessionState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionReport<'a> {
    state: &'a SessionState,
    section: Section,
    title: &'static str,
    progress: String,
    can_go_previous: bool,
    can_go_next: bool,
    visited_before: bool,
}

#[derive(Serialize)]
struct SectionRow {
    index: usize,
    id: &'static str,
    label: &'static str,
    visited: bool,
    current: bool,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let out = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize output: {}", e))?;
    println!("{}", out);
    Ok(())
}

pub fn print_session<S: KeyValueStore>(
    session: &SessionController<S>,
    json: bool,
) -> Result<(), String> {
    let state = session.state();
    let section = Section::from_index(state.current_section);
    let report = SessionReport {
        state,
        section,
        title: section.title(),
        progress: sections::progress_label(state.current_section),
        can_go_previous: sections::can_go_previous(state.current_section),
        can_go_next: sections::can_go_next(state.current_section),
        visited_before: session.has_visited_before(),
    };

    if json {
        return print_json(&report);
    }

    let phase = match (state.is_unlocked, state.has_entered) {
        (_, true) => "inside",
        (true, false) => "unlocked",
        (false, false) => "locked",
    };
    println!("vault:    {}", phase);
    println!(
        "section:  {} {} ({})",
        report.progress,
        report.title,
        section.id()
    );
    let visited: Vec<String> = state
        .unlocked_sections
        .iter()
        .map(|i| i.to_string())
        .collect();
    println!("visited:  [{}]", visited.join(", "));
    println!(
        "nav:      {} prev / {} next",
        if report.can_go_previous { "can" } else { "no" },
        if report.can_go_next { "can" } else { "no" }
    );
    Ok(())
}

pub fn print_sections(state: &SessionState, json: bool) -> Result<(), String> {
    let current = sections::clamp_index(state.current_section);
    let rows: Vec<SectionRow> = Section::ALL
        .iter()
        .map(|s| SectionRow {
            index: s.index(),
            id: s.id(),
            label: s.label(),
            visited: state.has_visited_section(s.index()),
            current: s.index() == current,
        })
        .collect();

    if json {
        return print_json(&rows);
    }

    for row in rows {
        let marker = match (row.current, row.visited) {
            (true, _) => '>',
            (false, true) => '*',
            (false, false) => ' ',
        };
        println!("{} {:02} {:<10} {}", marker, row.index + 1, row.id, row.label);
    }
    Ok(())
}

pub fn print_profile(catalog: &Catalog, json: bool) -> Result<(), String> {
    if json {
        return print_json(&serde_json::json!({
            "profile": catalog.profile,
            "expertise": catalog.expertise,
            "contact": catalog.contact,
        }));
    }

    let profile = &catalog.profile;
    println!("{} - {}", profile.name, profile.title);
    println!("{}", profile.location);
    println!();
    println!("{}", profile.bio);
    println!();
    println!("Services: {}", catalog.expertise.services.join(", "));
    println!("Tools:    {}", catalog.expertise.tools.join(", "));
    println!("Email:    {}", catalog.contact.email);
    for (label, link) in [
        ("LinkedIn", &catalog.contact.linkedin),
        ("GitHub", &catalog.contact.github),
        ("Calendly", &catalog.contact.calendly),
    ] {
        if let Some(link) = link {
            println!("{:<9} {}", format!("{}:", label), link);
        }
    }
    Ok(())
}

pub fn print_case_study_list(catalog: &Catalog, json: bool) -> Result<(), String> {
    if json {
        return print_json(&catalog.case_studies);
    }
    for study in &catalog.case_studies {
        println!("{:<36} {} ({})", study.id, study.title, study.industry);
    }
    Ok(())
}

pub fn print_case_study(study: &CaseStudy, json: bool) -> Result<(), String> {
    if json {
        return print_json(study);
    }

    println!("{}", study.title);
    println!("{} | {} | {}", study.client, study.industry, study.duration);
    println!();
    for metric in &study.hero_metrics {
        println!("  {:>12}  {}", metric.display_value(), metric.label);
    }
    println!();
    println!("Problem:  {}", study.problem);
    println!("Solution: {}", study.solution);
    println!("Outcome:  {}", study.outcome);
    println!();
    println!(
        "ROI: ${} invested, ${} saved per year, payback {}",
        study.roi.investment, study.roi.annual_savings, study.roi.payback_period
    );
    println!("Tools: {}", study.tools.join(", "));
    if let Some(testimonial) = &study.testimonial {
        println!();
        println!("\"{}\"", testimonial.quote);
        println!("  - {}, {}", testimonial.author, testimonial.role);
    }
    Ok(())
}

pub fn print_workflow_list(catalog: &Catalog, json: bool) -> Result<(), String> {
    if json {
        return print_json(&catalog.workflows);
    }
    for workflow in &catalog.workflows {
        println!(
            "{:<32} {} ({} nodes)",
            workflow.id,
            workflow.title,
            workflow.nodes.len()
        );
    }
    Ok(())
}

pub fn print_workflow(workflow: &AgentWorkflow, json: bool) -> Result<(), String> {
    if json {
        return print_json(workflow);
    }

    println!("{}", workflow.title);
    println!("{}", workflow.description);
    println!();
    for connection in &workflow.connections {
        let label = |id: &str| {
            workflow
                .node(id)
                .map(|n| n.label.clone())
                .unwrap_or_else(|| id.to_string())
        };
        let arrow = if connection.animated { "==>" } else { "-->" };
        println!(
            "  {} {} {}",
            label(&connection.from),
            arrow,
            label(&connection.to)
        );
    }
    Ok(())
}

pub fn print_contact_status(
    status: ContactStatus,
    error: Option<&str>,
    json: bool,
) -> Result<(), String> {
    if json {
        return print_json(&serde_json::json!({ "status": status, "error": error }));
    }
    match status {
        ContactStatus::Success => println!("Message sent. We'll be in touch."),
        ContactStatus::Error => println!("Message not sent: {}", error.unwrap_or("unknown error")),
        ContactStatus::Idle => {}
    }
    Ok(())
}
