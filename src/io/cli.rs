//! Command-line interface for batch analysis of FlexTiles session files

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{ArgAction, Parser};

use crate::io::configuration::SESSION_EXTENSIONS;
use crate::io::error::{Result, WithPath, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::report::{ReportFormat, SessionReport, is_report_path, report_path};
use crate::io::session::SessionRecord;
use crate::io::text::extract_non_digit_prefix;

#[derive(Parser, Debug)]
#[command(name = "flextiles")]
#[command(
    author,
    version,
    about = "Analyse symmetry and entropy of saved FlexTiles sessions"
)]
/// Command-line arguments for the session analysis tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Session file or directory of session files to analyse
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Treat tiles as two-state (0 versus anything else)
    #[arg(short, long)]
    pub binary: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Only analyse files whose name starts with this prefix followed by digits
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if a report exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log detail (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing reports should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Counts of what happened to each file in a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Reports written
    pub written: usize,
    /// Files whose session could not be analysed
    pub failed: usize,
}

/// Orchestrates batch analysis of session files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Analyse every selected file and write its report
    ///
    /// A file that cannot be read, parsed or written is logged and counted as
    /// failed; the rest of the batch still runs.
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid
    pub fn process(&mut self) -> Result<BatchOutcome> {
        let files = self.collect_files()?;
        let mut outcome = BatchOutcome::default();

        if files.is_empty() {
            tracing::info!(path = %self.cli.target.display(), "no session files to analyse");
            return Ok(outcome);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if self.process_file(file) {
                outcome.written += 1;
            } else {
                outcome.failed += 1;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        tracing::info!(
            written = outcome.written,
            failed = outcome.failed,
            "batch finished"
        );
        Ok(outcome)
    }

    /// Files under the target that should be analysed, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is neither a session file nor a
    /// readable directory
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_session_path(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("expected a .{} file", SESSION_EXTENSIONS.join(" or .")),
                ));
            }
            Ok(self
                .should_process_file(target)
                .then(|| target.clone())
                .into_iter()
                .collect())
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "listing directory")? {
                let path = entry.with_path(target, "listing directory")?.path();
                if path.is_file() && is_session_path(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a session file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if is_report_path(input_path) {
            return false;
        }

        if let Some(prefix) = &self.cli.prefix {
            let name = input_path.file_name().unwrap_or_default().to_string_lossy();
            if extract_non_digit_prefix(&name) != prefix.as_str() {
                return false;
            }
        }

        if self.cli.skip_existing() && report_path(input_path, self.cli.format).exists() {
            tracing::info!(file = %input_path.display(), "skipping, report exists");
            return false;
        }

        true
    }

    /// Returns whether a report was written
    fn process_file(&self, input_path: &Path) -> bool {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let session = match SessionRecord::from_file(input_path) {
            Ok(validated) => validated.log("parsing session"),
            Err(error) => {
                tracing::error!("{error}");
                if let Some(ref pm) = self.progress_manager {
                    pm.complete_file();
                }
                return false;
            }
        };

        let output_path = report_path(input_path, self.cli.format);
        let written =
            SessionReport::new(session, self.cli.binary).write_to(&output_path, self.cli.format);

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        if let Err(error) = written {
            tracing::error!(file = %input_path.display(), "{error}");
            return false;
        }

        tracing::info!(
            file = %input_path.display(),
            report = %output_path.display(),
            elapsed_ms = start_time.elapsed().as_millis(),
            "report written"
        );
        true
    }
}

fn is_session_path(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| SESSION_EXTENSIONS.contains(&extension))
}
