use anyhow::Result;
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::time::Duration;

use super::{PlaythroughRecord, QuizCheck, ValidationReport};

/// Per-policy rollup across every lecture and seed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PolicySummary {
    pub policy: String,
    pub runs: usize,
    pub perfect_runs: usize,
    pub mean_accuracy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct QaReport {
    pub generated_at: DateTime<Utc>,
    pub content_source: String,
    pub validation: ValidationReport,
    pub summaries: Vec<PolicySummary>,
    pub playthroughs: Vec<PlaythroughRecord>,
    #[serde(skip)]
    pub total_duration: Duration,
}

impl QaReport {
    #[must_use]
    pub fn new(
        content_source: String,
        validation: ValidationReport,
        playthroughs: Vec<PlaythroughRecord>,
        total_duration: Duration,
    ) -> Self {
        let summaries = summarize(&playthroughs);
        Self {
            generated_at: Utc::now(),
            content_source,
            validation,
            summaries,
            playthroughs,
            total_duration,
        }
    }

    /// Content is valid and the oracle finished every deck with a perfect score.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.validation.passed()
            && self.playthroughs.iter().all(|r| r.completed)
            && self
                .playthroughs
                .iter()
                .filter(|r| r.policy == "Oracle")
                .all(PlaythroughRecord::is_perfect)
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(records: &[PlaythroughRecord]) -> Vec<PolicySummary> {
    let mut grouped: BTreeMap<&str, Vec<&PlaythroughRecord>> = BTreeMap::new();
    for record in records {
        grouped.entry(record.policy.as_str()).or_default().push(record);
    }
    grouped
        .into_iter()
        .map(|(policy, runs)| {
            let total_accuracy: f64 = runs.iter().map(|r| r.accuracy()).sum();
            PolicySummary {
                policy: policy.to_string(),
                runs: runs.len(),
                perfect_runs: runs.iter().filter(|r| r.is_perfect()).count(),
                mean_accuracy: total_accuracy / runs.len() as f64,
            }
        })
        .collect()
}

fn quiz_line(check: &QuizCheck) -> String {
    format!(
        "{} {} quiz: {}/{} ({:.1}%)",
        check.lecture_id,
        check.quiz,
        check.grade.correct,
        check.grade.total,
        check.grade.percent()
    )
}

pub fn write_console_report(out: &mut dyn Write, report: &QaReport) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📋 Content Validation".bright_cyan().bold())?;
    writeln!(out, "{}", "=====================".cyan())?;
    let v = &report.validation;
    writeln!(out, "Source: {}", report.content_source)?;
    writeln!(
        out,
        "Lectures: {}  Decision games: {}  Quiz questions: {}  Simulators: {}",
        v.lectures, v.decision_games, v.quiz_questions, v.simulators
    )?;
    for check in &v.quiz_grades {
        let line = quiz_line(check);
        if check.grade.correct == check.grade.total && check.grade.total > 0 {
            writeln!(out, "   📝 {}", line.green())?;
        } else {
            writeln!(out, "   📝 {}", line.red())?;
        }
    }
    if v.passed() {
        writeln!(out, "{}", "✅ No content problems".green())?;
    } else {
        writeln!(out, "{}", format!("❌ {} problem(s)", v.problems.len()).red())?;
        for problem in &v.problems {
            writeln!(out, "   • {}", problem.red())?;
        }
    }

    if !report.summaries.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "🎯 Policy Playthroughs".bright_yellow().bold())?;
        writeln!(out, "{}", "======================".yellow())?;
        for summary in &report.summaries {
            writeln!(
                out,
                "{:14} runs: {:3}  perfect: {:3}  mean accuracy: {:5.1}%",
                summary.policy.bold(),
                summary.runs,
                summary.perfect_runs,
                summary.mean_accuracy
            )?;
        }
        for record in report.playthroughs.iter().filter(|r| !r.completed) {
            writeln!(
                out,
                "   {} {} / {} stopped early",
                "⚠".yellow(),
                record.lecture_id,
                record.policy
            )?;
        }
    }

    writeln!(out)?;
    let status = if report.passed() {
        "✅ PASS".green()
    } else {
        "❌ FAIL".red()
    };
    writeln!(out, "{status}  (total time: {:?})", report.total_duration)?;
    Ok(())
}

pub fn write_json_report(out: &mut dyn Write, report: &QaReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn write_markdown_report(out: &mut dyn Write, report: &QaReport) -> Result<()> {
    writeln!(out, "# Hazard Lesson QA Results\n")?;
    writeln!(out, "_Generated {}_\n", report.generated_at.to_rfc3339())?;

    let v = &report.validation;
    writeln!(out, "## Content\n")?;
    writeln!(out, "- **Source**: {}", report.content_source)?;
    writeln!(out, "- **Lectures**: {}", v.lectures)?;
    writeln!(out, "- **Decision games**: {}", v.decision_games)?;
    writeln!(out, "- **Quiz questions**: {}", v.quiz_questions)?;
    writeln!(out, "- **Problems**: {}\n", v.problems.len())?;
    for problem in &v.problems {
        writeln!(out, "  - {problem}")?;
    }

    if !v.quiz_grades.is_empty() {
        writeln!(out, "## Quizzes\n")?;
        writeln!(out, "| Lecture | Quiz | Correct | Total | Score |")?;
        writeln!(out, "|---|---|---|---|---|")?;
        for check in &v.quiz_grades {
            writeln!(
                out,
                "| {} | {} | {} | {} | {:.1}% |",
                check.lecture_id,
                check.quiz,
                check.grade.correct,
                check.grade.total,
                check.grade.percent()
            )?;
        }
        writeln!(out)?;
    }

    if !report.summaries.is_empty() {
        writeln!(out, "## Policies\n")?;
        writeln!(out, "| Policy | Runs | Perfect | Mean accuracy |")?;
        writeln!(out, "|---|---|---|---|")?;
        for s in &report.summaries {
            writeln!(
                out,
                "| {} | {} | {} | {:.1}% |",
                s.policy, s.runs, s.perfect_runs, s.mean_accuracy
            )?;
        }
        writeln!(out)?;
    }

    let status = if report.passed() { "✅ PASS" } else { "❌ FAIL" };
    writeln!(out, "**Status**: {status}")?;
    Ok(())
}
