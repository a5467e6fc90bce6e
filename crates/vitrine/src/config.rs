//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::Parser;

use vitrine_core::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_SWIPE_THRESHOLD_PX, MAX_SCRIPT_WAIT_MS};
use vitrine_core::locale::{Locale, UnknownLocale};
use vitrine_core::options::CarouselOptions;

/// vitrine: drive the studio's review carousel from the terminal.
#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about)]
pub struct AppConfig {
    /// JSON file of reviews (defaults to the bundled testimonials).
    #[arg(long, env = "VITRINE_REVIEWS")]
    pub reviews: Option<PathBuf>,

    /// Comma-separated actions: next, prev, click:N, dot:N, swipe:DX, wait:MS.
    #[arg(long)]
    pub script: Option<String>,

    /// Page language: fr or en. Saved as the visitor preference.
    #[arg(long, env = "VITRINE_LANG")]
    pub lang: Option<String>,

    /// Preference file (defaults to the XDG config directory).
    #[arg(long, env = "VITRINE_PREFS")]
    pub prefs: Option<PathBuf>,

    /// How long the animation tag stays on the track after a move, in ms.
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
    pub debounce_ms: u64,

    /// Minimum swipe distance in pixels.
    #[arg(long, default_value_t = DEFAULT_SWIPE_THRESHOLD_PX)]
    pub swipe_threshold: f32,

    /// Print the offline cache strategy for a request path and exit.
    #[arg(long)]
    pub route: Option<String>,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Quiet mode (only print the centered index: once at start, then after each move).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Carousel options from the flags, normalized.
    #[must_use]
    pub fn options(&self) -> CarouselOptions {
        CarouselOptions {
            debounce_ms: self.debounce_ms,
            swipe_threshold_px: self.swipe_threshold,
        }
        .normalize()
    }

    /// Requested language, if any.
    pub fn locale(&self) -> Result<Option<Locale>, ConfigError> {
        self.lang
            .as_deref()
            .map(str::parse::<Locale>)
            .transpose()
            .map_err(ConfigError::from)
    }

    /// Parsed `--script` actions; empty when no script was given.
    pub fn script_actions(&self) -> Result<Vec<ScriptAction>, ConfigError> {
        self.script.as_deref().map_or(Ok(Vec::new()), parse_script)
    }
}

/// Invalid command-line configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown script action '{0}'")]
    UnknownAction(String),

    #[error("invalid value '{value}' for script action '{action}'")]
    InvalidValue { action: String, value: String },

    #[error(transparent)]
    Locale(#[from] UnknownLocale),
}

/// One step of a `--script`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptAction {
    Next,
    Prev,
    Click(usize),
    Dot(usize),
    Swipe(f32),
    Wait(Duration),
}

impl FromStr for ScriptAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };
        let invalid = || ConfigError::InvalidValue {
            action: name.to_string(),
            value: arg.unwrap_or_default().to_string(),
        };

        match (name, arg) {
            ("next", None) => Ok(Self::Next),
            ("prev", None) => Ok(Self::Prev),
            ("click", Some(v)) => v.parse().map(Self::Click).map_err(|_| invalid()),
            ("dot", Some(v)) => v.parse().map(Self::Dot).map_err(|_| invalid()),
            ("swipe", Some(v)) => match v.parse::<f32>() {
                Ok(dx) if dx.is_finite() => Ok(Self::Swipe(dx)),
                _ => Err(invalid()),
            },
            ("wait", Some(v)) => parse_duration(v).map(Self::Wait).ok_or_else(invalid),
            _ => Err(ConfigError::UnknownAction(s.to_string())),
        }
    }
}

/// Parse a comma-separated script. Blank entries are skipped.
pub fn parse_script(s: &str) -> Result<Vec<ScriptAction>, ConfigError> {
    s.split(',')
        .filter(|part| !part.trim().is_empty())
        .map(str::parse)
        .collect()
}

/// Parse a duration string like "700", "700ms", "2s". Bare numbers are ms.
///
/// Durations longer than [`MAX_SCRIPT_WAIT_MS`] are rejected.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let ms: u64 = if let Some(ms) = s.strip_suffix("ms") {
        ms.parse().ok()?
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.parse::<u64>().ok()?.checked_mul(1000)?
    } else {
        s.parse().ok()?
    };
    (ms <= MAX_SCRIPT_WAIT_MS).then(|| Duration::from_millis(ms))
}
