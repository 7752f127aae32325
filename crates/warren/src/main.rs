use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use warren_config::Config;
use warren_core::Direction;
use warren_engine::{KeyframeRegistry, Scheduler};

mod cli;
mod logging;
mod scene;

use cli::Cli;
use scene::{Scene, SceneSpec};

/// Longest wait for input before redrawing. The background moves every
/// frame, so this bounds how stale its position can get.
const MAX_POLL: Duration = Duration::from_millis(50);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let log_path = if cli.print_config {
        None
    } else {
        Some(logging::init(cli.log.as_deref())?)
    };

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::load_from(&config_path).wrap_err("failed to load config")?;
    cli.apply(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    if let Some(path) = log_path {
        tracing::info!(log = %path.display(), config = %config_path.display(), "starting");
    }

    let spec = SceneSpec::from_config(&config)?;
    let app = App::new(&spec, config.direction, config.show_status)?;

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();
    tracing::info!("exiting");
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Wall-clock origin for the scheduler.
    started: Instant,
    scheduler: Scheduler,
    scene: Scene,
    /// Show the status line under the scene.
    show_status: bool,
}

impl App {
    /// Mount the scene described by `spec`.
    pub fn new(
        spec: &SceneSpec,
        direction: Direction,
        show_status: bool,
    ) -> color_eyre::Result<Self> {
        let mut scheduler = Scheduler::new();
        let scene = Scene::mount(&mut scheduler, KeyframeRegistry::global(), spec, direction)
            .wrap_err("failed to mount scene")?;
        Ok(Self {
            running: false,
            started: Instant::now(),
            scheduler,
            scene,
            show_status,
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            self.scheduler.advance_to(self.started.elapsed());
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let now = self.scheduler.now();

        if !self.show_status {
            self.scene.render(area, frame.buffer_mut(), now);
            return;
        }

        let [stage, status] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        self.scene.render(stage, frame.buffer_mut(), now);
        frame.render_widget(Line::from(self.scene.status_line()).dark_gray(), status);
    }

    /// How long to wait for input before the next tick is due.
    fn poll_timeout(&self) -> Duration {
        let now = self.started.elapsed();
        self.scheduler
            .next_due()
            .map_or(MAX_POLL, |due| due.saturating_sub(now))
            .min(MAX_POLL)
    }

    /// Reads the crossterm events and updates the state of [`App`].
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key)?,
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`]. Letter keys
    /// ignore case.
    fn on_key_event(&mut self, key: KeyEvent) -> color_eyre::Result<()> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c' | 'C')) => self.quit(),
            (_, KeyCode::Esc | KeyCode::Char('q' | 'Q')) => self.quit(),
            (_, KeyCode::Char('r' | 'R')) => self.scene.restart_scroll(self.scheduler.now()),
            (_, KeyCode::Left | KeyCode::Char('a' | 'A')) => self.face(Direction::Reverse)?,
            (_, KeyCode::Right | KeyCode::Char('d' | 'D')) => self.face(Direction::Forward)?,
            (_, KeyCode::Char('s' | 'S')) => self.show_status = !self.show_status,
            _ => {}
        }
        Ok(())
    }

    /// Point the bunny the other way; the forest scrolls to match.
    fn face(&mut self, direction: Direction) -> color_eyre::Result<()> {
        let changed = self
            .scene
            .face(direction, self.scheduler.now())
            .wrap_err("failed to turn scene")?;
        if changed {
            tracing::info!(%direction, "turned");
        }
        Ok(())
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use warren_core::SceneKind;

    fn app(kind: SceneKind) -> App {
        let config = Config {
            scene: kind,
            ..Default::default()
        };
        let spec = SceneSpec::from_config(&config).unwrap();
        App::new(&spec, config.direction, config.show_status).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.on_key_event(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app(SceneKind::Scroller);
            app.running = true;
            press(&mut app, code);
            assert!(!app.running);
        }

        let mut app = app(SceneKind::Scroller);
        app.running = true;
        app.on_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(!app.running);
    }

    #[test]
    fn test_toggle_status() {
        let mut app = app(SceneKind::Scroller);
        assert!(app.show_status);
        press(&mut app, KeyCode::Char('s'));
        assert!(!app.show_status);
        press(&mut app, KeyCode::Char('s'));
        assert!(app.show_status);
    }

    #[test]
    fn test_arrow_keys_turn_the_scene() {
        let mut app = app(SceneKind::Scroller);
        assert_eq!(app.scene.direction(), Direction::Forward);
        app.scheduler.advance_to(Duration::from_secs(4));
        let now = app.scheduler.now();
        let offset = app.scene.background().map(|bg| bg.offset_at(now));

        press(&mut app, KeyCode::Left);
        assert_eq!(app.scene.direction(), Direction::Reverse);
        assert_eq!(
            app.scene.foreground().current_set_info().0.as_deref(),
            Some("hop left")
        );
        assert_eq!(app.scene.background().map(|bg| bg.offset_at(now)), offset);

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.scene.direction(), Direction::Forward);
        assert_eq!(app.scene.background().map(|bg| bg.offset_at(now)), offset);
        assert_eq!(app.scheduler.live_tasks(), 2);
    }

    #[test]
    fn test_letter_keys_ignore_case() {
        let mut app = app(SceneKind::Scroller);
        press(&mut app, KeyCode::Char('A'));
        assert_eq!(app.scene.direction(), Direction::Reverse);
        press(&mut app, KeyCode::Char('D'));
        assert_eq!(app.scene.direction(), Direction::Forward);

        press(&mut app, KeyCode::Char('S'));
        assert!(!app.show_status);

        app.scheduler.advance_to(Duration::from_secs(3));
        press(&mut app, KeyCode::Char('R'));
        let now = app.scheduler.now();
        assert_eq!(app.scene.background().map(|bg| bg.phase_at(now)), Some(0.0));

        app.running = true;
        press(&mut app, KeyCode::Char('Q'));
        assert!(!app.running);
    }

    #[test]
    fn test_restart_key_resets_scroll() {
        let mut app = app(SceneKind::Scroller);
        app.scheduler.advance_to(Duration::from_secs(3));
        press(&mut app, KeyCode::Char('r'));

        let now = app.scheduler.now();
        let phase = app.scene.background().map(|bg| bg.phase_at(now));
        assert_eq!(phase, Some(0.0));
    }

    #[test]
    fn test_poll_timeout_is_capped() {
        let app = app(SceneKind::Zoom);
        assert!(app.poll_timeout() <= MAX_POLL);
    }
}
