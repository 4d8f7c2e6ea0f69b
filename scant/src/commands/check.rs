//! Check command implementation.
//!
//! Scans one input without printing tokens. Fatal errors fail the command;
//! unclassified characters are reported as warnings.

use scanc_lex::ScannerConfig;
use tracing::debug;

use crate::commands::common::{print_diagnostics, scan_source, Input};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;

/// Arguments for the check command.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Source to scan.
    pub input: Input,
    /// Print a summary line on success.
    pub verbose: bool,
    /// Scanner options.
    pub scanner: ScannerConfig,
}

/// Counts reported by a successful check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Tokens produced, end of file included.
    pub tokens: usize,
    /// Unclassified characters found.
    pub warnings: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<CheckSummary> {
        let source = self.args.input.read_to_string()?;
        self.check_source(&source)
    }

    /// Check an already loaded source.
    pub fn check_source(&self, source: &str) -> Result<CheckSummary> {
        let report = scan_source(&self.args.input, source, self.args.scanner)?;
        print_diagnostics(&self.args.input, &report.handler);

        let summary = CheckSummary {
            tokens: report.stream.len(),
            warnings: report.handler.diagnostics().len(),
        };

        if self.args.verbose {
            eprintln!(
                "{}: ok ({} tokens, {} warnings)",
                self.args.input, summary.tokens, summary.warnings
            );
        }

        Ok(summary)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Scan a source file and report errors"
    }

    fn help() -> &'static str {
        "Scans FILE (or standard input when FILE is `-`) without printing \
         tokens. Unclassified characters are reported as warnings and do not \
         fail the check. A fatal scan error prints a diagnostic and exits with \
         status 1."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<()> {
    debug!(command = CheckCommand::name(), input = %args.input, "running");
    let command = CheckCommand::new(args);
    let summary = command.execute()?;
    debug!(tokens = summary.tokens, warnings = summary.warnings, "check passed");
    Ok(())
}
