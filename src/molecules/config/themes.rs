use crate::types::Theme;

pub struct ThemeManager {
    themes: Vec<Theme>,
    current_index: usize,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            themes: Theme::all_themes(),
            current_index: 0,
        }
    }

    /// Unknown names fall back to the first theme.
    pub fn with_theme(theme_name: &str) -> Self {
        let mut manager = Self::new();
        manager.set_theme(theme_name);
        manager
    }

    pub fn current(&self) -> &Theme {
        &self.themes[self.current_index]
    }

    pub fn cycle_next(&mut self) -> &Theme {
        self.current_index = (self.current_index + 1) % self.themes.len();
        self.current()
    }

    pub fn set_theme(&mut self, name: &str) -> bool {
        let wanted = name.to_lowercase().replace(' ', "_");
        if let Some(idx) = self.themes.iter().position(|t| t.key() == wanted) {
            self.current_index = idx;
            true
        } else {
            false
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycling() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.current().name, "Void Light");
        manager.cycle_next();
        assert_eq!(manager.current().name, "Void Dark");
        manager.cycle_next();
        assert_eq!(manager.current().name, "Terminal");
        manager.cycle_next();
        assert_eq!(manager.current().name, "Void Light");
    }

    #[test]
    fn test_with_theme_accepts_display_name() {
        assert_eq!(ThemeManager::with_theme("Void Dark").current().name, "Void Dark");
        assert_eq!(ThemeManager::with_theme("void_dark").current().name, "Void Dark");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let mut manager = ThemeManager::with_theme("solarized");
        assert_eq!(manager.current().name, "Void Light");
        assert!(!manager.set_theme("solarized"));
    }
}
