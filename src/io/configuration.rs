//! Analysis constants and runtime configuration defaults

// Orientation model
/// Number of discrete tile orientations
pub const ORIENTATION_STATES: usize = 4;
/// Angle between neighbouring orientations in degrees
pub const QUARTER_TURN_DEGREES: i32 = 90;
/// Full revolution in degrees
pub const FULL_TURN_DEGREES: i32 = 360;

// Report formatting
/// Decimal places used for every reported metric
pub const REPORT_DECIMAL_PLACES: u32 = 3;
/// Numeric stand-in for a metric that is undefined for the grid shape
pub const UNDEFINED_SCORE: f64 = -1.0;
/// Width used when right-aligning grid values in text reports
pub const GRID_CELL_WIDTH: usize = 3;

// Session file sections
/// Header line opening the orientation grid section
pub const FINAL_STATE_HEADER: &str = "# Final state of each tile";
/// Header line opening the click count section
pub const CLICK_COUNT_HEADER: &str = "# Number of clicks in each tile";
/// Header line opening the glyph rendering section
pub const GLYPH_HEADER: &str = "# Orientation glyphs";
/// Header line opening the analysis section
pub const ANALYSIS_HEADER: &str = "# Analysis results";
/// Header line opening the click sequence section
pub const CLICK_SEQUENCE_HEADER: &str = "# Sequence of FlexTile-Clicks";
/// Note printed under the click sequence header
pub const CLICK_TIME_NOTE: &str = "# - click-time is seconds after program-start-time.";
/// Column legend printed under the click sequence header
pub const CLICK_COLUMNS_NOTE: &str = "# [sequence], [row-index], [column-index], [click-time]";
/// Note printed under grid headers
pub const GRID_NOTE: &str = "# - rows and columns match with FlexTiles shown in UI";
/// Rule separating section headers from data
pub const SECTION_RULE: &str = "# -----------------------------------------------------";

// Output settings
/// Suffix added to report filenames
pub const OUTPUT_SUFFIX: &str = "_report";
/// File extensions accepted as session input
pub const SESSION_EXTENSIONS: [&str; 2] = ["csv", "txt"];

// Logging
/// Log directive used without `-v`
pub const DEFAULT_LOG_DIRECTIVE: &str = "warn";
/// Log directive used with a single `-v`
pub const VERBOSE_LOG_DIRECTIVE: &str = "info";
/// Log directive used with `-vv` or more
pub const DEBUG_LOG_DIRECTIVE: &str = "debug";

// Progress bar display settings
/// Minimum number of files before a progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
