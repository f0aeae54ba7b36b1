//! Interviewer dashboard commands.
//!
//! Read-only views over the same service API the interview flow uses;
//! these never touch the session state machine.

use anyhow::Result;
use colored::{ColoredString, Colorize};

use viva_core::candidate::{CandidateOverview, CandidateReport};
use viva_core::{CandidateId, InterviewGateway, Turn};

/// Prints the all-candidates overview.
pub async fn list(gateway: &dyn InterviewGateway) -> Result<()> {
    let candidates = gateway.list_candidates().await?;
    if candidates.is_empty() {
        println!("{}", "No candidates found for review.".bright_black());
        return Ok(());
    }

    for candidate in &candidates {
        render_overview(candidate);
    }
    println!(
        "{}",
        format!("{} candidate(s)", candidates.len()).bright_black()
    );
    Ok(())
}

/// Prints one candidate's full report.
pub async fn show(gateway: &dyn InterviewGateway, id: &str) -> Result<()> {
    let report = gateway.fetch_candidate(&CandidateId::new(id)).await?;
    render_report(id, &report);
    Ok(())
}

fn status_badge(finished: bool) -> ColoredString {
    if finished {
        "finished".bright_green()
    } else {
        "in progress".bright_yellow()
    }
}

fn render_overview(candidate: &CandidateOverview) {
    let name = candidate
        .resume
        .name
        .as_deref()
        .unwrap_or("Unknown candidate");
    println!(
        "{} {}",
        name.bold(),
        format!("[{}]", candidate.id).bright_black()
    );
    println!(
        "  email: {}",
        candidate.resume.email.as_deref().unwrap_or("-")
    );
    println!(
        "  phone: {}",
        candidate.resume.phone.as_deref().unwrap_or("-")
    );
    println!("  status: {}", status_badge(candidate.finished));
    match candidate.score {
        Some(score) => println!("  score: {score:.2}"),
        None => println!("  score: -"),
    }
    if candidate.finished {
        if let Some(summary) = &candidate.summary {
            println!("  summary: {summary}");
        }
    }
    println!();
}

fn render_report(id: &str, report: &CandidateReport) {
    println!("{}", "=== Interviewee profile ===".bold());
    println!("Candidate: {}", id.bright_black());
    println!("Name:   {}", report.name.as_deref().unwrap_or("-"));
    println!("Email:  {}", report.email.as_deref().unwrap_or("-"));
    println!("Phone:  {}", report.phone.as_deref().unwrap_or("-"));
    println!("Status: {}", status_badge(report.finished));
    match report.score {
        Some(score) => println!("Score:  {score:.2}"),
        None => println!("Score:  -"),
    }
    println!();

    if report.turns.is_empty() {
        println!("{}", "No questions answered yet.".bright_black());
    } else {
        println!("{}", "Question & answer log".bold());
        for turn in &report.turns {
            render_turn(turn);
        }
    }

    if report.finished {
        if let Some(summary) = &report.summary {
            println!("{}", "Final interview summary".bold());
            println!("{summary}");
        }
    }
}

fn render_turn(turn: &Turn) {
    println!(
        "{}",
        format!("Q{} ({})", turn.question_no, turn.difficulty).bold()
    );
    println!("  {}", turn.question);
    match &turn.answer {
        Some(answer) => println!("  A: {answer}"),
        None => println!("  A: {}", "pending".bright_black().italic()),
    }
    if let Some(score) = turn.score {
        println!("  score: {score:.2}");
    }
    if let Some(limit) = turn.time_limit {
        println!("  time limit: {limit}s");
    }
    println!();
}
