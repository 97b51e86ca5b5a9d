//! Report rendering and writing for analysed sessions

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::analysis::summary::GridAnalysis;
use crate::io::configuration::{
    ANALYSIS_HEADER, CLICK_COLUMNS_NOTE, CLICK_COUNT_HEADER, CLICK_SEQUENCE_HEADER,
    CLICK_TIME_NOTE, FINAL_STATE_HEADER, GLYPH_HEADER, GRID_CELL_WIDTH, GRID_NOTE, OUTPUT_SUFFIX,
    SECTION_RULE,
};
use crate::io::error::{Result, WithPath};
use crate::io::session::SessionRecord;
use crate::io::visualization::{arrow_glyph, binary_glyph};

/// Output format of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Commented plain text in the session file layout
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl ReportFormat {
    /// File extension used for reports in this format
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "csv",
            Self::Json => "json",
        }
    }
}

/// Path of the report written for `input`: `<stem>_report.<ext>` beside it
pub fn report_path(input: &Path, format: ReportFormat) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let name = format!(
        "{}{OUTPUT_SUFFIX}.{}",
        stem.to_string_lossy(),
        format.extension()
    );
    input
        .parent()
        .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
}

/// Whether `path` names a report produced by this tool
pub fn is_report_path(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}

/// A session together with its analysis
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    /// Whether tiles were read as binary states
    pub binary: bool,
    /// The parsed session
    pub session: SessionRecord,
    /// Metrics of the final orientation grid
    pub analysis: GridAnalysis,
}

impl SessionReport {
    /// Analyse a session
    pub fn new(session: SessionRecord, binary: bool) -> Self {
        let analysis = GridAnalysis::compute(&session.orientations, session.shape(), binary);
        Self {
            binary,
            session,
            analysis,
        }
    }

    /// Render the report in the requested format
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Serialization` if JSON encoding fails
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Render the plain-text report
    ///
    /// Rows follow the session's own column count, so grids with no square
    /// or composite reading still render.
    pub fn render_text(&self) -> String {
        let session = &self.session;
        let mut lines = vec![
            FINAL_STATE_HEADER.to_string(),
            GRID_NOTE.to_string(),
            SECTION_RULE.to_string(),
        ];
        lines.extend(grid_lines(&session.orientations, session.columns));
        lines.push(String::new());

        if let Some(counts) = &session.click_counts {
            lines.extend([
                CLICK_COUNT_HEADER.to_string(),
                GRID_NOTE.to_string(),
                SECTION_RULE.to_string(),
            ]);
            lines.extend(grid_lines(counts, session.columns));
            lines.push(String::new());
        }

        let glyph: fn(i32) -> char = if self.binary {
            binary_glyph
        } else {
            arrow_glyph
        };
        lines.extend([GLYPH_HEADER.to_string(), SECTION_RULE.to_string()]);
        lines.extend(glyph_lines(&session.orientations, session.columns, glyph));
        lines.push(String::new());

        lines.extend([ANALYSIS_HEADER.to_string(), SECTION_RULE.to_string()]);
        lines.extend(self.analysis_lines());
        lines.push(String::new());

        lines.extend([
            CLICK_SEQUENCE_HEADER.to_string(),
            CLICK_TIME_NOTE.to_string(),
            CLICK_COLUMNS_NOTE.to_string(),
            SECTION_RULE.to_string(),
        ]);
        lines.extend(session.clicks.iter().map(|click| {
            format!(
                "{}, {}, {}, {:.3}",
                click.sequence, click.row, click.column, click.seconds
            )
        }));
        lines.push(String::new());

        lines.join("\n")
    }

    fn analysis_lines(&self) -> Vec<String> {
        let a = &self.analysis;
        vec![
            format!("The Entropy of this final state, {:.3}", a.entropy),
            format!(
                "Orientation ratio [0/90/180/270], [{}]",
                slash_joined(&a.orientation_ratios)
            ),
            format!(
                "Symmetries [hor/ver/1dia/2dia], [{}]",
                slash_joined(&a.symmetries)
            ),
            format!("Translational Symmetry, {:.3}", a.translational_symmetry),
            format!("Tile Maker Symmetry, {:.3}", a.tile_maker_symmetry),
            format!(
                "Rotational Symmetries [180/90], [{}]",
                slash_joined(&a.rotational_symmetries)
            ),
            format!("Spiral, {:.0}", a.spiral),
        ]
    }

    /// Render the report and write it to `path`
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::FileSystem` if the file cannot be written, or
    /// any rendering error
    pub fn write_to(&self, path: &Path, format: ReportFormat) -> Result<()> {
        let content = self.render(format)?;
        std::fs::write(path, content).with_path(path, "writing report")
    }
}

fn grid_lines<T: std::fmt::Display>(values: &[T], columns: usize) -> Vec<String> {
    values
        .chunks(columns.max(1))
        .map(|row| {
            row.iter()
                .map(|value| format!("{value:>width$}", width = GRID_CELL_WIDTH))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}

fn glyph_lines(values: &[i32], columns: usize, glyph: fn(i32) -> char) -> Vec<String> {
    values
        .chunks(columns.max(1))
        .map(|row| row.iter().map(|&value| glyph(value)).collect())
        .collect()
}

fn slash_joined(values: &[f64]) -> String {
    values
        .iter()
        .map(|value| format!("{value:.3}"))
        .collect::<Vec<_>>()
        .join("/")
}
