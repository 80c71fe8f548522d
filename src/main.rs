mod app;
mod config;
mod drill;
mod lookup;
mod nav;
mod speech;
mod store;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::widgets::Block;

use app::{App, InputMode};
use config::{MIN_COLS, MIN_ROWS};
use ui::components::{PromptScreen, SelectScreen};

#[derive(Parser)]
#[command(name = "spelldr", version, about = "Terminal spelling trainer with score-weighted drills")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Data directory for wordbooks")]
    data_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (cols, rows) = crossterm::terminal::size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        bail!("terminal too small: need at least {MIN_COLS}x{MIN_ROWS}, got {cols}x{rows}");
    }

    let mut app = App::new(cli.data_dir)?;

    if let Some(theme_name) = cli.theme {
        if let Some(theme) = ui::theme::Theme::load(&theme_name) {
            app.set_theme(Box::leak(Box::new(theme)));
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let (_, rows) = crossterm::terminal::size()?;
        app.layout(rows);

        terminal.draw(|frame| render(frame, app))?;

        match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen.input_mode() {
        InputMode::Select => {
            if let Some(action) = app.config.keys.action_for(key.code) {
                app.handle_nav(action);
            }
        }
        InputMode::Prompt => app.handle_prompt_key(key),
    }
}

fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.colors.bg())),
        area,
    );

    let footer = app.footer();
    match app.screen.input_mode() {
        InputMode::Select => frame.render_widget(
            SelectScreen {
                state: &app.select,
                theme: app.theme,
                footer: &footer,
            },
            area,
        ),
        InputMode::Prompt => frame.render_widget(
            PromptScreen {
                state: &app.prompt,
                theme: app.theme,
                footer: &footer,
            },
            area,
        ),
    }
}
