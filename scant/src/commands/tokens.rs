//! Tokens command implementation.
//!
//! Scans one input and prints its token stream, end-of-file token included.

use std::io::{self, Write};

use scanc_lex::{ScannerConfig, Token, TokenStream};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{scan_source, Input, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Source to scan.
    pub input: Input,
    /// Listing format.
    pub format: OutputFormat,
    /// Include each token's span.
    pub show_spans: bool,
    /// Scanner options.
    pub scanner: ScannerConfig,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<SpanRecord>,
}

#[derive(Serialize)]
struct SpanRecord {
    line: u32,
    start: usize,
    end: usize,
}

impl TokensCommand {
    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let source = self.args.input.read_to_string()?;
        let report = scan_source(&self.args.input, &source, self.args.scanner)?;
        debug!(tokens = report.stream.len(), "listing tokens");

        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_listing(&report.stream, &mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the listing for `stream` in the configured format.
    pub fn write_listing(&self, stream: &TokenStream, out: &mut impl Write) -> Result<()> {
        match self.args.format {
            OutputFormat::Text => {
                for token in stream {
                    if self.args.show_spans {
                        writeln!(out, "{} @ {}", token, token.span())?;
                    } else {
                        writeln!(out, "{}", token)?;
                    }
                }
            },
            OutputFormat::Json => {
                let records: Vec<TokenRecord<'_>> =
                    stream.iter().map(|t| self.record(t)).collect();
                serde_json::to_writer_pretty(&mut *out, &records)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }

    fn record<'a>(&self, token: &'a Token) -> TokenRecord<'a> {
        let span = token.span();
        TokenRecord {
            kind: token.kind().name(),
            text: token.text(),
            span: self.args.show_spans.then_some(SpanRecord {
                line: span.line,
                start: span.start,
                end: span.end,
            }),
        }
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = ();

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        self.run()
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Print the token stream of a source file"
    }

    fn help() -> &'static str {
        "Scans FILE (or standard input when FILE is `-`) and prints one entry \
         per token, ending with END_OF_FILE. Unclassified characters appear as \
         ERRONEOUS tokens; a fatal scan error prints a diagnostic and exits \
         with status 1."
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    debug!(command = TokensCommand::name(), input = %args.input, "running");
    let command = TokensCommand::new(args);
    command.execute()
}
