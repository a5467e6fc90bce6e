//! Constants for carousel timing, gesture thresholds, and persistence keys.

/// Delay before the track-level animation tag is cleared, in milliseconds.
///
/// Matches the length of the card transition.
pub const DEFAULT_DEBOUNCE_MS: u64 = 700;

/// Longest accepted debounce window, in milliseconds.
pub const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Longest single `wait` step accepted in a script, in milliseconds (one day).
pub const MAX_SCRIPT_WAIT_MS: u64 = 86_400_000;

/// Minimum horizontal travel (in pixels) for a touch gesture to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Approximate width of one terminal cell in pixels, used to turn column
/// deltas into swipe distances.
pub const CELL_WIDTH_PX: f32 = 8.0;

/// Preference key holding the visitor's chosen language.
pub const PREFERRED_LANG_KEY: &str = "preferred-lang";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Review data could not be read or parsed.
    pub const ERROR_DATA: i32 = 2;
    /// A scripted action referenced an item outside the review set.
    pub const ERROR_NAVIGATION: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
