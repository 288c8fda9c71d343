//! `wpd copy-text` command implementation.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use wpd_codeblock::{CodeBlock, CopyStatus};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the copy-text command.
#[derive(Args)]
pub(crate) struct CopyTextArgs {
    /// File holding the code block text.
    file: PathBuf,

    /// Class attribute of the code element (e.g. "language-diff").
    #[arg(long, default_value = "")]
    class: String,

    /// Print the block, its copy text and the button status as JSON.
    #[arg(long)]
    json: bool,
}

/// JSON report of a copy.
#[derive(Debug, Serialize)]
struct CopyReport {
    block: CodeBlock,
    copy_text: String,
    status: CopyStatus,
}

impl CopyReport {
    fn new(block: CodeBlock) -> Self {
        let copy_text = block.copy_text();
        let status = CopyStatus::after_copy(&copy_text, true);
        Self {
            block,
            copy_text,
            status,
        }
    }
}

impl CopyTextArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let text = std::fs::read_to_string(&self.file).map_err(|source| CliError::Read {
            path: self.file.clone(),
            source,
        })?;
        let report = CopyReport::new(CodeBlock::new(self.class, text));

        if self.json {
            output.data(&serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        match report.status {
            CopyStatus::Copied => output.raw(&report.copy_text),
            status => output.warning(&format!("{}: nothing to copy", status.label())),
        }
        Ok(())
    }
}
