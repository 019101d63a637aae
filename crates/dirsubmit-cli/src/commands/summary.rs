use crate::OutputFormat;
use anyhow::Result;
use dirsubmit_core::{Project, SubmissionResult};

/// Everything one orchestration run produced for a project
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProjectReport {
    pub project: String,
    pub name: String,
    pub started_at: String,
    pub results: Vec<SubmissionResult>,
}

impl ProjectReport {
    pub fn new(project: &Project, results: Vec<SubmissionResult>) -> Self {
        Self {
            project: project.key.clone(),
            name: project.name.clone(),
            started_at: chrono::Local::now().to_rfc3339(),
            results,
        }
    }

    pub fn filled(&self) -> usize {
        self.results.iter().filter(|r| r.success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.filled()
    }
}

pub fn render(report: &ProjectReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(format_pretty(report)),
        OutputFormat::Table => Ok(format_table(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// All reports of a batch as one JSON document
pub fn render_json_batch(reports: &[ProjectReport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

pub fn print(report: &ProjectReport, format: OutputFormat) -> Result<()> {
    print!("{}", render(report, format)?);
    Ok(())
}

fn format_pretty(report: &ProjectReport) -> String {
    use console::style;

    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        style(format!("📊 Submission Summary for {}:", report.name)).bold()
    ));
    output.push_str(&format!("{}\n", "─".repeat(50)));

    for result in &report.results {
        let (icon, detail) = if result.success() {
            ("✅", style(result.outcome.detail()).green())
        } else {
            ("❌", style(result.outcome.detail()).red())
        };
        output.push_str(&format!("  {} {}: {}\n", icon, result.directory, detail));
    }

    output.push_str(&format!(
        "\n  Filled: {}  Failed: {}\n",
        style(report.filled()).green(),
        style(report.failed()).red()
    ));
    output
}

fn format_table(report: &ProjectReport) -> String {
    let mut output = String::new();
    output.push_str("Project,Directory,Success,Detail\n");
    for result in &report.results {
        output.push_str(&format!(
            "{},{},{},{}\n",
            report.project,
            csv_quote(&result.directory),
            result.success(),
            csv_quote(result.outcome.detail())
        ));
    }
    output
}

/// Project keys are validated slugs; directory names and details are free text
fn csv_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirsubmit_core::{Catalog, SubmissionOutcome};

    fn report() -> ProjectReport {
        let catalog = Catalog::builtin();
        let project = catalog.get("badge-generator").unwrap();
        ProjectReport::new(
            project,
            vec![
                SubmissionResult::new("AlternativeTo", SubmissionOutcome::manual_submit()),
                SubmissionResult::new("SaaSHub", SubmissionOutcome::login_required()),
                SubmissionResult::new("DevHunt", SubmissionOutcome::error("said \"no\"")),
            ],
        )
    }

    #[test]
    fn test_counts() {
        let report = report();
        assert_eq!(report.filled(), 1);
        assert_eq!(report.failed(), 2);
    }

    #[test]
    fn test_pretty_lists_results_in_order() {
        let output = render(&report(), OutputFormat::Pretty).unwrap();

        assert!(output.contains("Submission Summary for Badge Generator"));
        let alt = output.find("AlternativeTo").unwrap();
        let saas = output.find("SaaSHub").unwrap();
        let dev = output.find("DevHunt").unwrap();
        assert!(alt < saas && saas < dev);
        assert!(output.contains("login-required"));
    }

    #[test]
    fn test_table_escapes_quotes() {
        let output = render(&report(), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Project,Directory,Success,Detail");
        assert_eq!(lines[1], "badge-generator,\"AlternativeTo\",true,\"manual-submit\"");
        assert_eq!(lines[3], "badge-generator,\"DevHunt\",false,\"said \"\"no\"\"\"");
    }

    #[test]
    fn test_table_quotes_directory_with_comma() {
        let mut report = report();
        report.results = vec![SubmissionResult::new(
            "Tools, Apps & More",
            SubmissionOutcome::login_required(),
        )];

        let output = render(&report, OutputFormat::Table).unwrap();
        let row = output.lines().nth(1).unwrap();

        assert_eq!(row, "badge-generator,\"Tools, Apps & More\",false,\"login-required\"");
    }

    #[test]
    fn test_json_shape() {
        let output = render(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["project"], "badge-generator");
        assert_eq!(value["results"][0]["action"], "manual-submit");
        assert_eq!(value["results"][1]["reason"], "login-required");
        assert_eq!(value["results"][2]["success"], false);
    }
}
