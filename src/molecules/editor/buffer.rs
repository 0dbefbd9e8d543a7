use unicode_segmentation::UnicodeSegmentation;

const MAX_UNDO_LEVELS: usize = 50;

#[derive(Debug, Clone)]
struct BufferSnapshot {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
}

#[derive(Debug, Clone, Default)]
struct UndoHistory {
    undo_stack: Vec<BufferSnapshot>,
    redo_stack: Vec<BufferSnapshot>,
}

/// Line-oriented text with a grapheme-indexed cursor.
///
/// `from_string` and `to_string` are exact inverses, trailing newlines included,
/// so the draft text survives a round trip through the buffer unchanged.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    history: UndoHistory,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            history: UndoHistory::default(),
        }
    }

    pub fn from_string(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
            cursor_row: 0,
            cursor_col: 0,
            history: UndoHistory::default(),
        }
    }

    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> String {
        self.lines.join("\n")
    }

    pub fn content(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn cursor_position(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = row.min(self.lines.len().saturating_sub(1));
        let line_len = self.current_line_len();
        self.cursor_col = col.min(line_len);
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn current_line_len(&self) -> usize {
        self.lines
            .get(self.cursor_row)
            .map(|l| l.graphemes(true).count())
            .unwrap_or(0)
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }

        let line = &self.lines[self.cursor_row];
        let graphemes: Vec<&str> = line.graphemes(true).collect();
        let insert_pos = self.cursor_col.min(graphemes.len());
        let before: String = graphemes[..insert_pos].concat();
        let after: String = graphemes[insert_pos..].concat();

        let mut new_line = before;
        new_line.push(c);
        let before_len = new_line.graphemes(true).count();
        new_line.push_str(&after);

        self.lines[self.cursor_row] = new_line;
        // A combining mark merges with the previous grapheme, so recount.
        self.cursor_col = before_len;
    }

    /// Insert text that may span several lines, leaving the cursor after it.
    pub fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        for c in normalized.chars() {
            self.insert_char(c);
        }
    }

    pub fn insert_newline(&mut self) {
        let line = &self.lines[self.cursor_row];
        let graphemes: Vec<&str> = line.graphemes(true).collect();
        let split_pos = self.cursor_col.min(graphemes.len());

        let before: String = graphemes[..split_pos].concat();
        let after: String = graphemes[split_pos..].concat();

        self.lines[self.cursor_row] = before;
        self.cursor_row += 1;
        self.lines.insert(self.cursor_row, after);
        self.cursor_col = 0;
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &self.lines[self.cursor_row];
            let graphemes: Vec<&str> = line.graphemes(true).collect();

            if self.cursor_col <= graphemes.len() {
                let new_line: String = graphemes[..self.cursor_col - 1]
                    .iter()
                    .chain(graphemes[self.cursor_col..].iter())
                    .copied()
                    .collect();
                self.lines[self.cursor_row] = new_line;
                self.cursor_col -= 1;
            }
        } else if self.cursor_row > 0 {
            let current_line = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.lines[self.cursor_row].graphemes(true).count();
            self.lines[self.cursor_row].push_str(&current_line);
        }
    }

    pub fn delete_char(&mut self) {
        let line_len = self.current_line_len();
        if self.cursor_col < line_len {
            let line = &self.lines[self.cursor_row];
            let graphemes: Vec<&str> = line.graphemes(true).collect();

            let new_line: String = graphemes[..self.cursor_col]
                .iter()
                .chain(graphemes[self.cursor_col + 1..].iter())
                .copied()
                .collect();
            self.lines[self.cursor_row] = new_line;
        } else if self.cursor_row < self.lines.len() - 1 {
            let next_line = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next_line);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.current_line_len();
        }
    }

    pub fn move_right(&mut self) {
        let line_len = self.current_line_len();
        if self.cursor_col < line_len {
            self.cursor_col += 1;
        } else if self.cursor_row < self.lines.len() - 1 {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            let line_len = self.current_line_len();
            self.cursor_col = self.cursor_col.min(line_len);
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row < self.lines.len() - 1 {
            self.cursor_row += 1;
            let line_len = self.current_line_len();
            self.cursor_col = self.cursor_col.min(line_len);
        }
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor_col = self.current_line_len();
    }

    /// Cursor after the last character of the text.
    pub fn move_to_end(&mut self) {
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = self.current_line_len();
    }

    pub fn save_undo_snapshot(&mut self) {
        let snapshot = BufferSnapshot {
            lines: self.lines.clone(),
            cursor_row: self.cursor_row,
            cursor_col: self.cursor_col,
        };
        self.history.undo_stack.push(snapshot);
        if self.history.undo_stack.len() > MAX_UNDO_LEVELS {
            self.history.undo_stack.remove(0);
        }
        self.history.redo_stack.clear();
    }

    pub fn undo(&mut self) -> bool {
        if let Some(snapshot) = self.history.undo_stack.pop() {
            let current = BufferSnapshot {
                lines: self.lines.clone(),
                cursor_row: self.cursor_row,
                cursor_col: self.cursor_col,
            };
            self.history.redo_stack.push(current);
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    pub fn redo(&mut self) -> bool {
        if let Some(snapshot) = self.history.redo_stack.pop() {
            let current = BufferSnapshot {
                lines: self.lines.clone(),
                cursor_row: self.cursor_row,
                cursor_col: self.cursor_col,
            };
            self.history.undo_stack.push(current);
            self.restore(snapshot);
            true
        } else {
            false
        }
    }

    fn restore(&mut self, snapshot: BufferSnapshot) {
        self.lines = snapshot.lines;
        self.cursor_row = snapshot.cursor_row;
        self.cursor_col = snapshot.cursor_col;
    }
}
