//! Interactive interview command.
//!
//! Drives the full flow in a rustyline REPL: resume upload, missing-field
//! prompts, one answer per open question, final result banner. While a
//! submission is outstanding the REPL is not prompting, so the "one
//! mutating request in flight" rule holds by construction here; the flow
//! still enforces it underneath.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use viva_application::InterviewFlow;
use viva_core::{InterviewGateway, Phase, ResumeFile, Session, Turn, VivaError};

pub async fn run(gateway: Arc<dyn InterviewGateway>, resume_path: &Path) -> Result<()> {
    let file = load_resume(resume_path).await?;

    let flow = InterviewFlow::new(gateway);
    let mut editor = DefaultEditor::new()?;

    println!("{}", "=== Viva interview ===".bright_magenta().bold());
    println!("{}", "Uploading your resume...".bright_black());
    let mut session = flow
        .upload_resume(&file)
        .await
        .context("resume upload failed")?;

    loop {
        match session.phase() {
            Phase::AwaitingMissingInfo => {
                println!();
                println!(
                    "{}",
                    "The service needs a bit more information:".bright_yellow()
                );
                let mut values = Vec::new();
                for field in session.missing_fields().to_vec() {
                    match read_line(&mut editor, &format!("{}: ", field.label()))? {
                        Some(value) => values.push((field, value)),
                        None => {
                            abandon(&flow).await;
                            return Ok(());
                        }
                    }
                }
                match flow.submit_missing_info(&values).await {
                    Ok(next) => session = next,
                    Err(err) => report_failure(&err),
                }
            }
            Phase::InChat => {
                let Some(question) = session.open_question().cloned() else {
                    // Every turn is answered but the service has not
                    // closed the interview; nothing to prompt for.
                    println!(
                        "{}",
                        "The service has not issued a new question yet.".bright_black()
                    );
                    break;
                };
                render_question(&question);

                match editor.readline("> ") {
                    Ok(line) => {
                        let answer = line.trim().to_string();
                        if answer.is_empty() {
                            continue;
                        }
                        if answer == "/quit" {
                            abandon(&flow).await;
                            return Ok(());
                        }
                        let _ = editor.add_history_entry(&line);

                        match flow.submit_answer(&answer).await {
                            Ok(next) => {
                                render_score(&next, question.question_no);
                                session = next;
                            }
                            Err(err) => report_failure(&err),
                        }
                    }
                    Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                        abandon(&flow).await;
                        return Ok(());
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            Phase::Finished => {
                render_result(&session);
                break;
            }
            // Upload either advanced the phase or errored out above.
            Phase::AwaitingResume => break,
        }
    }

    Ok(())
}

/// Reads the resume from disk and stages it for upload.
async fn load_resume(resume_path: &Path) -> Result<ResumeFile> {
    let bytes = tokio::fs::read(resume_path)
        .await
        .with_context(|| format!("failed to read {}", resume_path.display()))?;
    let file_name = resume_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("resume")
        .to_string();
    Ok(ResumeFile::new(file_name, bytes)?)
}

/// Reads one trimmed line. `None` means the user bailed out with
/// Ctrl-C/Ctrl-D. Empty input is returned as-is: for missing fields the
/// service decides what still counts as missing.
fn read_line(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => Ok(Some(line.trim().to_string())),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

async fn abandon(flow: &InterviewFlow) {
    flow.reset().await;
    println!("{}", "Interview abandoned.".bright_black());
}

fn render_question(question: &Turn) {
    println!();
    println!(
        "{}",
        format!("Q{} ({})", question.question_no, question.difficulty).bold()
    );
    println!("{}", question.question.bright_blue());
    if let Some(limit) = question.time_limit {
        println!("{}", format!("(time limit: {limit}s)").bright_black());
    }
}

/// Shows the score the service assigned to the answer just submitted,
/// when it is already in the returned transcript.
fn render_score(session: &Session, question_no: u32) {
    let scored = session
        .turns()
        .iter()
        .find(|turn| turn.question_no == question_no)
        .and_then(|turn| turn.score);
    if let Some(score) = scored {
        println!("{}", format!("Scored {score:.2}").green());
    }
}

fn render_result(session: &Session) {
    println!();
    println!("{}", "=== Interview complete ===".bright_green().bold());
    if let Some(result) = session.result() {
        println!(
            "Final score: {}",
            format!("{:.2}", result.final_score).bright_green().bold()
        );
        println!("Summary: {}", result.summary);
    }
}

fn report_failure(err: &VivaError) {
    eprintln!("{}", err.to_string().red());
    if err.is_retryable() {
        eprintln!("{}", "Check your connection and try again.".bright_black());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_resume_stages_a_pdf_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        tokio::fs::write(&path, b"%PDF-1.4 stub").await.unwrap();

        let file = load_resume(&path).await.unwrap();
        assert_eq!(file.file_name(), "resume.pdf");
        assert_eq!(file.mime_type(), "application/pdf");
        assert_eq!(file.bytes(), b"%PDF-1.4 stub");
    }

    #[tokio::test]
    async fn load_resume_rejects_unsupported_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.txt");
        tokio::fs::write(&path, b"plain text").await.unwrap();

        let err = load_resume(&path).await.unwrap_err();
        assert!(err.to_string().contains("not an accepted resume type"));
    }

    #[tokio::test]
    async fn load_resume_fails_for_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.pdf");

        let err = load_resume(&path).await.unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
