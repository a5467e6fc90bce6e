//! Application entry point and dispatch.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use vitrine_cli::output::{format_delay, format_dots, format_review};
use vitrine_cli::presenter::ConsoleSurface;
use vitrine_core::carousel::{Carousel, CarouselError, ReviewSet};
use vitrine_core::deferred::ManualClock;
use vitrine_core::locale::{LocaleController, StringTable};
use vitrine_core::offline::{strategy_for, CacheStrategy, Request};
use vitrine_core::position::AnimationDirection;
use vitrine_core::preferences::FileStore;
use vitrine_core::review::{default_reviews, load_reviews_from_path, Review};

use crate::config::{AppConfig, ScriptAction};
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    debug!(version = %version::full_version(), "Starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        vitrine_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if let Some(route) = &config.route {
        return run_route(route);
    }

    // Validate everything up front so a bad flag never half-runs.
    let requested = config.locale()?;
    let script = config.script_actions()?;

    let mut locale = locale_controller(config);
    if let Some(lang) = requested {
        locale
            .select(lang)
            .context("saving language preference")?;
    }

    let reviews = match &config.reviews {
        Some(path) => load_reviews_from_path(path)
            .with_context(|| format!("loading reviews from {}", path.display()))?,
        None => default_reviews(),
    };
    let reviews = match ReviewSet::new(reviews) {
        Ok(set) => set,
        Err(CarouselError::Empty) => {
            warn!("No reviews, carousel not initialised");
            if !config.quiet {
                println!("No reviews to show");
            }
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    if config.tui {
        let mut app = vitrine_tui::TuiApp::new(reviews, config.options(), locale);
        app.run()?;
        return Ok(());
    }

    run_script(config, reviews, &locale, &script)
}

fn locale_controller(config: &AppConfig) -> LocaleController {
    let store = match &config.prefs {
        Some(path) => FileStore::open(path),
        None => FileStore::open_default(),
    };
    debug!(path = %store.path().display(), "Preference store");
    LocaleController::new(StringTable::bundled(), Box::new(store))
}

fn run_route(route: &str) -> Result<()> {
    let request = Request::get(route);
    let strategy = match strategy_for(&request) {
        CacheStrategy::CacheFirst => "cache-first",
        CacheStrategy::NetworkFirst => "network-first",
    };
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}: {strategy}", request.path())?;
    Ok(())
}

/// Replay `script` against a console carousel.
///
/// Script time is virtual: `wait` advances a manual clock, so output does
/// not depend on how fast the machine runs.
fn run_script(
    config: &AppConfig,
    reviews: ReviewSet<Review>,
    locale: &LocaleController,
    script: &[ScriptAction],
) -> Result<()> {
    if !config.quiet {
        vitrine_cli::ui::print_header(locale.page_title());
    }

    let clock = ManualClock::new();
    let mut carousel = Carousel::with_clock(
        reviews,
        config.options(),
        ConsoleSurface::stdout(config.quiet),
        clock.clone(),
    );

    for (step, action) in script.iter().enumerate() {
        debug!(step, ?action, "Script action");
        match *action {
            ScriptAction::Next => {
                carousel.step(AnimationDirection::Next);
            }
            ScriptAction::Prev => {
                carousel.step(AnimationDirection::Prev);
            }
            ScriptAction::Click(index) => {
                carousel
                    .click_card(index)
                    .with_context(|| format!("script step {}: click:{index}", step + 1))?;
            }
            ScriptAction::Dot(index) => {
                carousel
                    .go_to_index(index)
                    .with_context(|| format!("script step {}: dot:{index}", step + 1))?;
            }
            ScriptAction::Swipe(dx) => {
                carousel.swipe(dx);
            }
            ScriptAction::Wait(duration) => {
                clock.advance(duration);
                carousel.tick();
            }
        }
    }

    if !config.quiet {
        let section = locale.text_or("reviews.title", "");
        let card = format_review(carousel.current());
        let dots = format_dots(carousel.len(), carousel.cursor());
        let elapsed = format!("elapsed: {}", format_delay(clock.elapsed()));
        let surface = carousel.surface_mut();
        surface.note(&elapsed);
        surface.note("");
        surface.note(section);
        surface.note(&card);
        surface.note(&dots);
    }
    Ok(())
}
