pub const PLACEHOLDER_PROMPTS: [&str; 10] = [
    "Start typing your tasks...",
    "Turn ideas into action...",
    "Progress begins with the first step...",
    "Small actions, big results...",
    "Make it happen, one note at a time...",
    "Productivity starts here...",
    "Get things done, write them down...",
    "Your next breakthrough is one task away...",
    "Focus on what matters most...",
    "Done is better than perfect...",
];

/// Cursor into `PLACEHOLDER_PROMPTS` that wraps after the last prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderRotation {
    index: usize,
}

impl PlaceholderRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &'static str {
        PLACEHOLDER_PROMPTS[self.index]
    }

    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % PLACEHOLDER_PROMPTS.len();
        self.index
    }
}
