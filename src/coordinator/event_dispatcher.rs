use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::App;

const TAB_AS_SPACES: &str = "    ";

pub struct EventDispatcher;

impl EventDispatcher {
    pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
        if key.kind == KeyEventKind::Release {
            return Ok(());
        }

        if app.keybindings.is_quit(&key) {
            app.quit();
            return Ok(());
        }
        if app.keybindings.is_export(&key) {
            app.export();
            return Ok(());
        }
        if app.keybindings.is_cycle_theme(&key) {
            app.cycle_theme();
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            Self::handle_control(app, key);
        } else {
            Self::handle_editing(app, key);
        }

        Ok(())
    }

    pub fn handle_paste(app: &mut App, text: &str) {
        app.paste(text);
    }

    fn handle_control(app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Char('z') => app.undo(),
            KeyCode::Char('y') => app.redo(),
            KeyCode::Home => app.navigate(|b| b.set_cursor(0, 0)),
            KeyCode::End => app.navigate(|b| b.move_to_end()),
            _ => {}
        }
    }

    fn handle_editing(app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                app.edit(|b| b.insert_char(c));
            }
            KeyCode::Enter => app.edit(|b| b.insert_newline()),
            KeyCode::Tab => app.edit(|b| b.insert_str(TAB_AS_SPACES)),
            KeyCode::Backspace => {
                if app.buffer.cursor_position() != (0, 0) {
                    app.edit(|b| b.backspace());
                }
            }
            KeyCode::Delete => app.edit(|b| b.delete_char()),
            KeyCode::Left => app.navigate(|b| b.move_left()),
            KeyCode::Right => app.navigate(|b| b.move_right()),
            KeyCode::Up => app.navigate(|b| b.move_up()),
            KeyCode::Down => app.navigate(|b| b.move_down()),
            KeyCode::Home => app.navigate(|b| b.move_to_line_start()),
            KeyCode::End => app.navigate(|b| b.move_to_line_end()),
            _ => {}
        }
    }
}
