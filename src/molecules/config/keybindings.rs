use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::KeyboardConfig;

/// One key chord parsed from a config string such as `"ctrl+e"` or `"f2"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyChord {
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim().to_lowercase();
        if spec.is_empty() {
            return None;
        }

        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = spec.split('+').collect();
        let key = parts.pop()?;
        for part in parts {
            match part {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "meta" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match key {
            "esc" | "escape" => KeyCode::Esc,
            "enter" | "return" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "space" => KeyCode::Char(' '),
            f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
            _ => {
                let mut chars = key.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyCode::Char(c)
            }
        };

        Some(Self { code, modifiers })
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        // Terminals disagree on whether SHIFT is reported with letters.
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        code == self.code && (key.modifiers & relevant) == (self.modifiers & relevant)
    }
}

pub struct Keybindings {
    pub export: Option<KeyChord>,
    pub quit: Option<KeyChord>,
    pub cycle_theme: Option<KeyChord>,
}

impl Keybindings {
    pub fn from_config(config: &KeyboardConfig) -> Self {
        let parse = |name: &str, spec: &str| {
            let chord = KeyChord::parse(spec);
            if chord.is_none() {
                log::warn!("event=keybinding_invalid action={} value={:?}", name, spec);
            }
            chord
        };
        Self {
            export: parse("export", &config.export),
            quit: parse("quit", &config.quit),
            cycle_theme: parse("cycle_theme", &config.cycle_theme),
        }
    }

    pub fn is_export(&self, key: &KeyEvent) -> bool {
        self.export.is_some_and(|c| c.matches(key))
    }

    pub fn is_quit(&self, key: &KeyEvent) -> bool {
        key.code == KeyCode::Esc || self.quit.is_some_and(|c| c.matches(key))
    }

    pub fn is_cycle_theme(&self, key: &KeyEvent) -> bool {
        self.cycle_theme.is_some_and(|c| c.matches(key))
    }
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::from_config(&KeyboardConfig::default())
    }
}
