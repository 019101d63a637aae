//! Library half of the `dirsubmit` binary, split out so the orchestrator can
//! be driven from integration tests with stub browsers.

use clap::ValueEnum;

pub mod commands;

/// How a run reports its results
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Styled summary after each project
    Pretty,
    /// One JSON document at the end of the run
    Json,
    /// CSV rows after each project
    Table,
}

impl OutputFormat {
    /// Whether progress lines and per-project summaries go to stdout.
    ///
    /// JSON keeps stdout to the final document only.
    pub fn streams_progress(self) -> bool {
        self != OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_json_is_quiet() {
        assert!(OutputFormat::Pretty.streams_progress());
        assert!(OutputFormat::Table.streams_progress());
        assert!(!OutputFormat::Json.streams_progress());
    }
}
