use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub bg: String,
    pub fg: String,
    pub placeholder: String,
    pub muted: String,
    pub accent: String,
    pub panel: String,
}

impl Theme {
    pub fn bg_color(&self) -> Color {
        Self::parse_hex(&self.bg)
    }

    pub fn fg_color(&self) -> Color {
        Self::parse_hex(&self.fg)
    }

    pub fn placeholder_color(&self) -> Color {
        Self::parse_hex(&self.placeholder)
    }

    pub fn muted_color(&self) -> Color {
        Self::parse_hex(&self.muted)
    }

    pub fn accent_color(&self) -> Color {
        Self::parse_hex(&self.accent)
    }

    pub fn panel_color(&self) -> Color {
        Self::parse_hex(&self.panel)
    }

    /// Lookup key used in config files, e.g. "Void Light" -> "void_light".
    pub fn key(&self) -> String {
        self.name.to_lowercase().replace(' ', "_")
    }

    fn parse_hex(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        } else {
            Color::Reset
        }
    }

    // Tailwind gray-50 page, gray-800 text, slate-300 prompt, gray-400 footer.
    pub fn void_light() -> Self {
        Self {
            name: "Void Light".to_string(),
            bg: "#f9fafb".to_string(),
            fg: "#1f2937".to_string(),
            placeholder: "#cbd5e1".to_string(),
            muted: "#9ca3af".to_string(),
            accent: "#6b7280".to_string(),
            panel: "#f9fafb".to_string(),
        }
    }

    pub fn void_dark() -> Self {
        Self {
            name: "Void Dark".to_string(),
            bg: "#111827".to_string(),
            fg: "#e5e7eb".to_string(),
            placeholder: "#475569".to_string(),
            muted: "#6b7280".to_string(),
            accent: "#9ca3af".to_string(),
            panel: "#111827".to_string(),
        }
    }

    pub fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            bg: "default".to_string(),
            fg: "default".to_string(),
            placeholder: "#808080".to_string(),
            muted: "#808080".to_string(),
            accent: "#c0c0c0".to_string(),
            panel: "default".to_string(),
        }
    }

    pub fn all_themes() -> Vec<Theme> {
        vec![Self::void_light(), Self::void_dark(), Self::terminal()]
    }
}
