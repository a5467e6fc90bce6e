//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::{debug, warn};

use vitrine_core::carousel::{Carousel, ReviewSet};
use vitrine_core::constants::CELL_WIDTH_PX;
use vitrine_core::deferred::{Clock, SystemClock};
use vitrine_core::input::{InputEvent, InputRouter};
use vitrine_core::locale::{Locale, LocaleController};
use vitrine_core::options::CarouselOptions;
use vitrine_core::position::{AnimationDirection, Position};
use vitrine_core::review::Review;

use crate::bridge::TuiBridgeSurface;
use crate::cards::{card_at, render_cards};
use crate::dots::{dot_at, render_dots};
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, map_mouse, KeyAction, PointerAction};
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;

/// TUI application state (Elm Model).
///
/// The view fields are a projection of what the carousel pushed through its
/// bridge surface; they are never written from the carousel directly.
pub struct TuiApp<C: Clock = SystemClock> {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Card positions as last rendered.
    pub positions: Vec<Position>,
    /// Centered index as last rendered.
    pub cursor: usize,
    /// Track animation tag as last rendered.
    pub animation: Option<AnimationDirection>,
    /// Transient status line text.
    pub status: Option<String>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    carousel: Carousel<Review, TuiBridgeSurface, C>,
    router: InputRouter,
    locale: LocaleController,
    press: Option<(u16, u16)>,
    rx: Receiver<TuiMessage>,
    tx: Sender<TuiMessage>,
    theme: ColorTheme,
}

impl TuiApp<SystemClock> {
    /// Create a TUI app driven by the wall clock.
    #[must_use]
    pub fn new(reviews: ReviewSet<Review>, options: CarouselOptions, locale: LocaleController) -> Self {
        Self::with_clock(reviews, options, locale, SystemClock)
    }
}

impl<C: Clock> TuiApp<C> {
    /// Create a TUI app with an explicit clock.
    #[must_use]
    pub fn with_clock(
        reviews: ReviewSet<Review>,
        options: CarouselOptions,
        locale: LocaleController,
        clock: C,
    ) -> Self {
        let (tx, rx) = unbounded();
        let carousel =
            Carousel::with_clock(reviews, options, TuiBridgeSurface::new(tx.clone()), clock);
        let mut app = Self {
            should_quit: false,
            positions: Vec::new(),
            cursor: 0,
            animation: None,
            status: None,
            terminal_width: 80,
            terminal_height: 24,
            carousel,
            router: InputRouter::new(),
            locale,
            press: None,
            rx,
            tx,
            theme: ColorTheme::default(),
        };
        app.update();
        app
    }

    /// Sender for feeding messages into the update loop.
    #[must_use]
    pub fn sender(&self) -> Sender<TuiMessage> {
        self.tx.clone()
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel<Review, TuiBridgeSurface, C> {
        &self.carousel
    }

    #[must_use]
    pub fn locale(&self) -> &LocaleController {
        &self.locale
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Positions { positions, cursor } => {
                self.positions = positions;
                self.cursor = cursor;
            }
            TuiMessage::Animation(direction) => {
                self.animation = direction;
            }
            TuiMessage::Locale(locale) => {
                self.select_locale(locale);
            }
            TuiMessage::Status(text) => {
                self.status = Some(text);
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Pointer(action) => {
                self.handle_pointer(action);
            }
            TuiMessage::Tick => {
                if self.carousel.tick() {
                    self.update();
                }
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        debug!(?action, "Key action");
        match action {
            KeyAction::Prev => {
                self.router.dispatch(&mut self.carousel, InputEvent::Prev);
            }
            KeyAction::Next => {
                self.router.dispatch(&mut self.carousel, InputEvent::Next);
            }
            KeyAction::Dot(index) => {
                self.router
                    .dispatch(&mut self.carousel, InputEvent::DotClick(index));
            }
            KeyAction::ToggleLocale => {
                self.select_locale(self.locale.current().other());
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
        self.update();
    }

    /// Handle a mouse press or release.
    ///
    /// A release in the column where the press happened is a click on the
    /// card or dot under it. Any other release is a swipe whose length is the
    /// column distance times [`CELL_WIDTH_PX`].
    pub fn handle_pointer(&mut self, action: PointerAction) {
        match action {
            PointerAction::Press { column, row } => {
                self.press = Some((column, row));
            }
            PointerAction::Release { column, row } => {
                let Some((start_column, _)) = self.press.take() else {
                    return;
                };
                if start_column == column {
                    self.click_at(column, row);
                } else {
                    self.router.dispatch(
                        &mut self.carousel,
                        InputEvent::TouchStart(f32::from(start_column) * CELL_WIDTH_PX),
                    );
                    self.router.dispatch(
                        &mut self.carousel,
                        InputEvent::TouchEnd(f32::from(column) * CELL_WIDTH_PX),
                    );
                }
                self.update();
            }
        }
    }

    fn click_at(&mut self, column: u16, row: u16) {
        let (_, cards_area, dots_area, _) = Self::compute_layout(self.area());
        if let Some(index) = card_at(cards_area, &self.positions, column, row) {
            self.router
                .dispatch(&mut self.carousel, InputEvent::CardClick(index));
        } else if row == dots_area.y {
            if let Some(index) = dot_at(dots_area, self.positions.len(), column) {
                self.router
                    .dispatch(&mut self.carousel, InputEvent::DotClick(index));
            }
        }
    }

    fn select_locale(&mut self, locale: Locale) {
        match self.locale.select(locale) {
            Ok(true) => self.status = Some(self.locale.page_title().to_string()),
            Ok(false) => {}
            Err(err) => {
                warn!(%err, "Could not save language preference");
                self.status = Some(err.to_string());
            }
        }
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    /// Compute the layout.
    ///
    /// Returns (header, cards, dots, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Min(6),    // cards
                Constraint::Length(1), // dots
                Constraint::Length(2), // footer
            ])
            .split(area);
        (chunks[0], chunks[1], chunks[2], chunks[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, cards_area, dots_area, footer_area) = Self::compute_layout(frame.area());

        render_header(frame, header_area, &self.locale, &self.theme);
        render_cards(
            frame,
            cards_area,
            self.carousel.reviews().as_slice(),
            &self.positions,
            self.animation,
            self.locale.text_or("reviews.title", ""),
            &self.theme,
        );
        render_dots(frame, dots_area, self.positions.len(), self.cursor, &self.theme);
        let footer_text = self
            .status
            .as_deref()
            .or_else(|| self.locale.text("reviews.hint"));
        render_footer(frame, footer_area, footer_text, &self.theme);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        let tick_rate = Duration::from_millis(50);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_action(map_key(key_event));
                    }
                    Event::Mouse(mouse_event) => {
                        if let Some(action) = map_mouse(mouse_event) {
                            self.handle_pointer(action);
                        }
                    }
                    Event::Resize(w, h) => {
                        self.terminal_width = w;
                        self.terminal_height = h;
                    }
                    _ => {}
                }
            }

            self.handle_message(TuiMessage::Tick);
            self.update();
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}

impl<C: Clock> std::fmt::Debug for TuiApp<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TuiApp")
            .field("cursor", &self.cursor)
            .field("positions", &self.positions)
            .field("animation", &self.animation)
            .field("locale", &self.locale.current())
            .finish_non_exhaustive()
    }
}
