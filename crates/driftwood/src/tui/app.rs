//! Main TUI application
//!
//! Core application state and event loop.
//! Handler implementations are in the handlers/ module.

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, layout::Rect, style::Style, Frame, Terminal};

use driftwood_core::audio::{AudioDeck, DeckEvent};
use driftwood_core::content::{Catalog, GenreFilter};
use driftwood_core::mood::{todays_mood, Mood};
use driftwood_core::navigator::{SectionNavigator, TransitionHooks, TransitionId};
use driftwood_core::paths;
use driftwood_core::reveal::RevealSchedule;
use driftwood_core::storage::{Database, Preferences};

use crate::tui::audio::MpvBridge;
use crate::tui::components::{
    game_grid_lines, home_lines, music_grid_lines, photo_grid_lines, render_dots, render_game_grid,
    render_hint_bar, render_home, render_menu_bar, render_music_grid, render_photo_grid, Ornament,
    ParticleField, HOME_ITEMS,
};
use crate::tui::popups::Lightbox;
use crate::tui::state::{GestureTracker, LayoutState};
use crate::tui::themes::{Theme, THEME_REGISTRY};
use crate::tui::utils::fill_rect;

/// Section indices in nav order.
pub const SECTION_HOME: usize = 0;
pub const SECTION_MUSIC: usize = 1;
pub const SECTION_PHOTOS: usize = 2;
pub const SECTION_GAMES: usize = 3;

/// Transition hooks wired to the app's animation state: the ornament gets
/// its kick when a transition starts, and the reveal cascade restarts for
/// the entered section.
pub(crate) struct AppHooks<'a> {
    pub reveal: &'a mut RevealSchedule,
    pub ornament: &'a mut Ornament,
}

impl TransitionHooks for AppHooks<'_> {
    fn on_transition_start(&mut self, _from: usize, _to: usize) {
        self.ornament.pulse();
    }

    fn on_section_entered(&mut self, transition: TransitionId, _index: usize, item_count: usize) {
        self.reveal.begin(transition, item_count);
    }
}

/// Application state
pub struct App {
    pub theme: Arc<Theme>,
    pub theme_name: String,
    pub should_quit: bool,

    // Core state machines
    pub navigator: SectionNavigator,
    pub reveal: RevealSchedule,
    pub catalog: Catalog,
    pub filter: GenreFilter,
    pub deck: AudioDeck,
    pub mood: &'static Mood,

    // Decorative components
    pub particles: ParticleField,
    pub ornament: Ornament,
    pub lightbox: Lightbox,

    // Input state
    pub layout: LayoutState,
    pub gesture: GestureTracker,

    // Services
    pub preferences: Preferences,
    pub audio_backend: MpvBridge,

    // Animation clock
    pub(crate) anim_frame: usize,
    pub(crate) last_tick: Instant,
    needs_redraw: bool,
}

impl App {
    /// Create new app, optionally with CLI theme override (not persisted).
    pub fn new(cli_theme: Option<&str>) -> Result<Self> {
        let catalog = Catalog::load_or_default(&paths::catalog_path())
            .context("failed to load content catalog")?;

        let db = Database::new(&paths::preferences_db_path())
            .context("failed to open preferences storage")?;
        let preferences = Preferences::new(db);

        let theme_name = cli_theme
            .map(|t| t.to_string())
            .unwrap_or_else(|| preferences.get_theme());
        let theme = Arc::new(THEME_REGISTRY.get_or_default(&theme_name).clone());
        let theme_name = theme.name.clone();

        let item_counts = [
            HOME_ITEMS,
            catalog.tracks.len(),
            catalog.photos.len(),
            catalog.games.len(),
        ];
        let deck = AudioDeck::new(&catalog.durations());

        let audio_backend = MpvBridge::new();
        if audio_backend.is_available() {
            tracing::info!("mpv detected; cards with stream URLs will play audio");
        }

        Ok(Self {
            theme,
            theme_name,
            should_quit: false,
            navigator: SectionNavigator::new(&item_counts),
            reveal: RevealSchedule::new(),
            catalog,
            filter: GenreFilter::All,
            deck,
            mood: todays_mood(),
            particles: ParticleField::new(),
            ornament: Ornament::new(),
            lightbox: Lightbox::new(),
            layout: LayoutState::new(),
            gesture: GestureTracker::new(),
            preferences,
            audio_backend,
            anim_frame: 0,
            last_tick: Instant::now(),
            needs_redraw: true,
        })
    }

    /// Navigate directly to a section (dots, menu entries, digit keys).
    /// Direct jumps bypass boundary checks entirely.
    pub fn nav_to(&mut self, index: usize) {
        let mut hooks = AppHooks {
            reveal: &mut self.reveal,
            ornament: &mut self.ornament,
        };
        self.navigator.go_to(index, &mut hooks);
    }

    /// Forward deck events to the playback backend.
    pub(crate) fn apply_deck_events(&mut self, events: impl IntoIterator<Item = DeckEvent>) {
        for event in events {
            tracing::debug!(?event, "deck event");
            self.audio_backend.apply(&event, &self.catalog);
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        // Make sure a playing track doesn't outlive the UI
        self.audio_backend.stop();
        self.navigator.cancel_transition();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        // Async event stream so animations keep running between inputs
        let mut event_stream = EventStream::new();

        loop {
            if self.tick_animations() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over the animation tick

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Resize(_, _) => {
                                // Press coordinates are stale after a resize
                                self.gesture.cancel();
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    // Timeout - continue loop for animation updates
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Render one frame.
    fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let theme = self.theme.clone();

        self.layout.clear();
        self.particles.resize(area);

        let buf = f.buffer_mut();

        fill_rect(buf, area, Style::default().bg(theme.bg_color), area);
        self.particles.render(buf, area, &theme);

        // Top menu bar, bottom hint bar, body in between. The body leaves
        // the right edge to the indicator dots.
        let menu_area = Rect::new(area.x, area.y, area.width, 1);
        let hint_area = Rect::new(area.x, area.y + area.height.saturating_sub(1), area.width, 1);
        let body = Rect::new(
            area.x + 1,
            area.y + 2,
            area.width.saturating_sub(6),
            area.height.saturating_sub(4),
        );
        self.layout.section_body = Some(body);

        self.render_section(buf, body, &theme);

        render_menu_bar(buf, menu_area, self.navigator.current(), &theme, &mut self.layout);
        self.ornament.render(buf, menu_area, &theme);
        render_dots(buf, area, self.navigator.indicators(), &theme, &mut self.layout);
        render_hint_bar(buf, hint_area, self.mood, &self.theme_name, &theme);

        // Modal goes on top of everything
        self.lightbox.render(buf, area, &self.catalog.photos, &theme);
    }

    fn render_section(&mut self, buf: &mut ratatui::buffer::Buffer, body: Rect, theme: &Theme) {
        let current = self.navigator.current();

        let total_lines = match current {
            SECTION_HOME => home_lines(),
            SECTION_MUSIC => music_grid_lines(&self.catalog, self.filter, body.width),
            SECTION_PHOTOS => photo_grid_lines(self.catalog.photos.len(), body.width),
            SECTION_GAMES => game_grid_lines(self.catalog.games.len()),
            _ => 0,
        };
        let scroll = self.navigator.active_scroll_mut();
        scroll.update_max_scroll(total_lines, body.height);
        let offset = scroll.offset;

        match current {
            SECTION_HOME => render_home(buf, body, offset, self.mood, &self.reveal, theme),
            SECTION_MUSIC => render_music_grid(
                buf,
                body,
                offset,
                &self.catalog,
                self.filter,
                &self.deck,
                &self.reveal,
                self.anim_frame,
                theme,
                &mut self.layout,
            ),
            SECTION_PHOTOS => render_photo_grid(
                buf,
                body,
                offset,
                &self.catalog.photos,
                &self.reveal,
                theme,
                &mut self.layout,
            ),
            SECTION_GAMES => {
                render_game_grid(buf, body, offset, &self.catalog.games, &self.reveal, theme)
            }
            _ => {}
        }
    }
}
