use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::SetCursorStyle,
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Clear},
    Frame, Terminal,
};

use void_notes::atoms::storage::{config_dir, ensure_config_dir, init_logging, load_config, log_dir};
use void_notes::atoms::widgets::{EditorWidget, StatusBar};
use void_notes::coordinator::{App, EventDispatcher};

fn main() -> Result<()> {
    ensure_config_dir()?;
    let config = load_config()?;
    // Logging is best effort; the pad works without it.
    let _logger = match init_logging(&config.general.log_level, &log_dir(&config_dir())) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        SetCursorStyle::BlinkingBar
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.start_ticker();
    let result = run_app(&mut terminal, &mut app);
    app.shutdown();

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        SetCursorStyle::DefaultUserShape,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        log::error!("event=app_error error={:#}", e);
        eprintln!("Error: {:#}", e);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let poll_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(poll_rate)? {
            match event::read()? {
                Event::Key(key) => EventDispatcher::handle_key(app, key)?,
                Event::Paste(text) => EventDispatcher::handle_paste(app, &text),
                _ => {}
            }
        }

        app.poll_ticks();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let theme = app.theme();

    f.render_widget(Clear, f.area());
    f.render_widget(Block::default().style(Style::default().bg(theme.bg_color())), f.area());

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(f.area());

    let editor = EditorWidget::new(app.buffer.content(), app.draft.placeholder(), theme)
        .scroll_offset(app.scroll_offset(chunks[0]));
    f.render_widget(editor, chunks[0]);

    let char_count = app.char_count_label();
    let date = app.date_label();
    let export_key = app.export_key_label();
    let status_bar = StatusBar::new(app.draft_state(), theme)
        .message(&app.command_message)
        .char_count(&char_count)
        .date(&date)
        .export_key(&export_key);
    f.render_widget(status_bar, chunks[1]);

    if let Some(position) = app.cursor_screen_position(chunks[0]) {
        f.set_cursor_position(position);
    }
}
