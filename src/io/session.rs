//! Reading saved FlexTiles sessions
//!
//! A session file is plain text split into `#`-headed sections: the final
//! orientation of every tile, the click count of every tile and the click
//! sequence. Lines before the first header belong to the orientation grid,
//! so a bare comma-separated grid is also a valid session. Sections written
//! by reports (analysis results, glyphs) are skipped.

use std::path::Path;

use serde::Serialize;

use crate::io::configuration::{
    ANALYSIS_HEADER, CLICK_COUNT_HEADER, CLICK_SEQUENCE_HEADER, FINAL_STATE_HEADER, GLYPH_HEADER,
};
use crate::io::error::{Result, Validated, ValueWarning, WithPath, invalid_session};
use crate::io::text::{find_all, trim_all_whitespace};
use crate::spatial::grid::GridShape;
use crate::spatial::tiles::validate_orientations;

/// Fields on every click sequence line
const CLICK_FIELDS: usize = 4;

/// One recorded tile click
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickEvent {
    /// One-based position in the sequence
    pub sequence: usize,
    /// Row of the clicked tile
    pub row: usize,
    /// Column of the clicked tile
    pub column: usize,
    /// Seconds after program start
    pub seconds: f64,
}

/// Contents of a session file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    /// Final orientation of every tile, row-major
    pub orientations: Vec<i32>,
    /// Number of tile rows
    pub rows: usize,
    /// Number of tile columns
    pub columns: usize,
    /// Clicks per tile, row-major, when the file records them
    pub click_counts: Option<Vec<u32>>,
    /// Click sequence in recorded order
    pub clicks: Vec<ClickEvent>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Orientations,
    ClickCounts,
    Clicks,
    Skipped,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        match line {
            FINAL_STATE_HEADER => Some(Self::Orientations),
            CLICK_COUNT_HEADER => Some(Self::ClickCounts),
            CLICK_SEQUENCE_HEADER => Some(Self::Clicks),
            ANALYSIS_HEADER | GLYPH_HEADER => Some(Self::Skipped),
            _ => None,
        }
    }
}

impl SessionRecord {
    /// Parse session text
    ///
    /// Tokens that are not numbers and orientations off the 90° lattice are
    /// replaced by 0 and reported as warnings.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidSessionData` if the grid is missing or
    /// ragged, the click counts do not match the grid, or a click sequence
    /// line is malformed
    pub fn parse(text: &str) -> Result<Validated<Self>> {
        let mut section = Section::Orientations;
        let mut warnings = Vec::new();
        let mut raw_orientations = Vec::new();
        let mut rows = 0;
        let mut columns = None;
        let mut click_counts: Option<Vec<u32>> = None;
        let mut clicks = Vec::new();

        for (offset, line) in text.lines().enumerate() {
            let line_number = offset + 1;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                if let Some(next) = Section::from_header(line) {
                    section = next;
                }
                continue;
            }

            match section {
                Section::Orientations => {
                    let fields = field_count(line);
                    let expected = *columns.get_or_insert(fields);
                    if expected != fields {
                        return Err(invalid_session(
                            line_number,
                            &format!("row has {fields} columns, expected {expected}"),
                        ));
                    }
                    for token in line.split(',') {
                        let index = raw_orientations.len();
                        raw_orientations.push(parse_or_zero(token, index, &mut warnings));
                    }
                    rows += 1;
                }
                Section::ClickCounts => {
                    let counts = click_counts.get_or_insert_with(Vec::new);
                    let fields = field_count(line);
                    if columns.is_some_and(|expected| expected != fields) {
                        return Err(invalid_session(
                            line_number,
                            &format!("click count row has {fields} columns"),
                        ));
                    }
                    for token in line.split(',') {
                        let index = counts.len();
                        counts.push(parse_or_zero(token, index, &mut warnings));
                    }
                }
                Section::Clicks => clicks.push(parse_click(line, line_number)?),
                Section::Skipped => {}
            }
        }

        let line_count = text.lines().count();
        let Some(columns) = columns else {
            return Err(invalid_session(line_count, &"no orientation rows found"));
        };
        if let Some(counts) = &click_counts
            && counts.len() != raw_orientations.len()
        {
            return Err(invalid_session(
                line_count,
                &format!(
                    "{} click counts for {} tiles",
                    counts.len(),
                    raw_orientations.len()
                ),
            ));
        }

        let validated = validate_orientations(&raw_orientations);
        warnings.extend(validated.warnings);

        Ok(Validated {
            value: Self {
                orientations: validated.value,
                rows,
                columns,
                click_counts,
                clicks,
            },
            warnings,
        })
    }

    /// Read and parse a session file
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::FileSystem` if the file cannot be read and
    /// `AnalysisError::InvalidSessionData` if its content is malformed
    pub fn from_file(path: &Path) -> Result<Validated<Self>> {
        let text = std::fs::read_to_string(path).with_path(path, "reading session")?;
        Self::parse(&text).with_path(path, "parsing session")
    }

    /// Shape of the orientation grid
    pub const fn shape(&self) -> GridShape {
        GridShape {
            width: self.columns,
            height: self.rows,
        }
    }
}

fn field_count(line: &str) -> usize {
    find_all(line, ",").len() + 1
}

fn parse_or_zero<T: std::str::FromStr + Default>(
    token: &str,
    index: usize,
    warnings: &mut Vec<ValueWarning>,
) -> T {
    let token = trim_all_whitespace(token);
    match token.parse() {
        Ok(value) => value,
        Err(_) => {
            warnings.push(ValueWarning::NonNumeric { index, token });
            T::default()
        }
    }
}

fn parse_click(line: &str, line_number: usize) -> Result<ClickEvent> {
    let fields: Vec<String> = line.split(',').map(trim_all_whitespace).collect();
    let [sequence, row, column, seconds] = fields.as_slice() else {
        return Err(invalid_session(
            line_number,
            &format!("click line has {} fields, expected {CLICK_FIELDS}", fields.len()),
        ));
    };

    let bad_field = |name: &str, value: &str| {
        invalid_session(line_number, &format!("{name} '{value}' is not a number"))
    };

    Ok(ClickEvent {
        sequence: sequence.parse().map_err(|_| bad_field("sequence", sequence))?,
        row: row.parse().map_err(|_| bad_field("row", row))?,
        column: column.parse().map_err(|_| bad_field("column", column))?,
        seconds: seconds.parse().map_err(|_| bad_field("click time", seconds))?,
    })
}
