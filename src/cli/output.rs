use crate::{Issue, Report};
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One analysed input and where it came from.
#[derive(Debug)]
pub struct SourceReport {
    pub source: String,
    pub report: Report,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    #[serde(flatten)]
    report: &'a Report,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    inputs_checked: usize,
    total_issues: usize,
    reports: Vec<JsonReport<'a>>,
}

pub fn print_reports(reports: &[SourceReport], colored_output: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in reports {
                print!("{}", render_text(&entry.source, &entry.report, colored_output));
            }
            print_summary(total_issues(reports), reports.len(), colored_output);
        }
        OutputFormat::Json => println!("{}", render_json(reports)?),
    }
    Ok(())
}

pub fn total_issues(reports: &[SourceReport]) -> usize {
    reports.iter().map(|r| r.report.total_issues()).sum()
}

pub fn render_json(reports: &[SourceReport]) -> Result<String> {
    let output = JsonOutput {
        inputs_checked: reports.len(),
        total_issues: total_issues(reports),
        reports: reports
            .iter()
            .map(|r| JsonReport {
                source: &r.source,
                report: &r.report,
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

pub fn render_text(source: &str, report: &Report, colored_output: bool) -> String {
    let mut out = String::new();

    if colored_output {
        let _ = writeln!(out, "\n{}", source.bold().underline());
    } else {
        let _ = writeln!(out, "\n{}", source);
    }

    let sections = [
        ("Spelling", report.spelling()),
        ("Grammar", report.grammar()),
        ("Punctuation", report.punctuation()),
        ("Style", report.style()),
    ];
    for (title, issues) in sections {
        if issues.is_empty() {
            continue;
        }
        if colored_output {
            let _ = writeln!(out, "  {}", title.cyan().bold());
        } else {
            let _ = writeln!(out, "  {}", title);
        }
        for issue in issues {
            render_issue(&mut out, issue, colored_output);
        }
    }

    let metrics = report.metrics();
    let metrics_line = format!(
        "chars {}, words {}, sentences {}, readability {:.1}, water {:.1}%",
        metrics.char_count,
        metrics.word_count,
        metrics.sentence_count,
        metrics.readability_index,
        metrics.water_percentage
    );
    let score = format!("{}/100", report.quality_score());

    if colored_output {
        let _ = writeln!(out, "  {} {}", "Metrics:".dimmed(), metrics_line);
        let score = if report.quality_score() >= 80 {
            score.green().bold()
        } else {
            score.yellow().bold()
        };
        let _ = writeln!(out, "  {} {}", "Quality:".dimmed(), score);
    } else {
        let _ = writeln!(out, "  Metrics: {}", metrics_line);
        let _ = writeln!(out, "  Quality: {}", score);
    }

    out
}

fn render_issue(out: &mut String, issue: &Issue, colored_output: bool) {
    if colored_output {
        let _ = writeln!(out, "    {}", issue.detailed_description().red());
    } else {
        let _ = writeln!(out, "    {}", issue.detailed_description());
    }

    if !issue.suggestions().is_empty() {
        let suggestions = if colored_output {
            issue
                .suggestions()
                .iter()
                .map(|s| s.green().to_string())
                .collect::<Vec<_>>()
                .join(&", ".dimmed().to_string())
        } else {
            issue.suggestions().join(", ")
        };
        if colored_output {
            let _ = writeln!(out, "      {} {}", "→".dimmed(), suggestions);
        } else {
            let _ = writeln!(out, "      → {}", suggestions);
        }
    }
}

pub fn print_summary(total_issues: usize, inputs: usize, colored: bool) {
    println!();
    if total_issues == 0 {
        if colored {
            println!("{}", "✓ No issues found!".green().bold());
        } else {
            println!("✓ No issues found!");
        }
    } else {
        let issue_word = if total_issues == 1 { "issue" } else { "issues" };
        let input_word = if inputs == 1 { "input" } else { "inputs" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_issues.to_string().red().bold(),
                issue_word,
                inputs,
                input_word
            );
        } else {
            println!("✗ {} {} found in {} {}", total_issues, issue_word, inputs, input_word);
        }
    }
}

pub fn print_word_check(word: &str, valid: bool, suggestions: &[String], colored: bool) {
    match (valid, colored) {
        (true, true) => println!("{} {}", "✓".green().bold(), word.bold()),
        (true, false) => println!("✓ {}", word),
        (false, true) => println!("{} {}", "✗".red().bold(), word.red().bold()),
        (false, false) => println!("✗ {}", word),
    }

    if !valid && !suggestions.is_empty() {
        if colored {
            println!("    {} {}", "→".dimmed(), suggestions.join(", ").green());
        } else {
            println!("    → {}", suggestions.join(", "));
        }
    }
}
