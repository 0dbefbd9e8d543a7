use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Where the cursor lands on screen once lines are soft-wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualPosition {
    /// Display rows taken by all logical lines before the cursor's line.
    pub rows_before: usize,
    /// Wrapped sub-row within the cursor's line (0-based).
    pub wrap_row: usize,
    /// Column on that display row, in display-width units.
    pub col: usize,
}

impl VisualPosition {
    pub fn display_row(&self) -> usize {
        self.rows_before.saturating_add(self.wrap_row)
    }
}

/// Split a line into display rows of at most `width` columns.
///
/// Character-level wrapping: a grapheme that would overflow starts a new row.
/// Zero-width graphemes stay with the row they follow.
pub fn wrap_line(line: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }
    let w = width as usize;
    let mut rows = vec![String::new()];
    let mut col = 0;

    for g in line.graphemes(true) {
        let gw = g.width();
        if gw > 0 && col + gw > w {
            rows.push(String::new());
            col = 0;
        }
        if let Some(row) = rows.last_mut() {
            row.push_str(g);
        }
        col += gw;
    }
    rows
}

pub fn display_rows_for_line(line: &str, width: u16) -> usize {
    wrap_line(line, width).len()
}

/// `cursor_col` is a grapheme index, not a display width.
pub fn visual_cursor_position(
    lines: &[String],
    cursor_row: usize,
    cursor_col: usize,
    width: u16,
) -> VisualPosition {
    let w = if width == 0 { 1 } else { width as usize };

    let rows_before: usize = lines
        .iter()
        .take(cursor_row)
        .map(|l| display_rows_for_line(l, width))
        .sum();

    let line = lines.get(cursor_row).map(|s| s.as_str()).unwrap_or("");
    let mut wrap_row: usize = 0;
    let mut col: usize = 0;

    for (grapheme_idx, g) in line.graphemes(true).enumerate() {
        if grapheme_idx >= cursor_col {
            break;
        }
        let gw = g.width();
        if gw > 0 && col + gw > w {
            wrap_row += 1;
            col = 0;
        }
        col += gw;
    }

    // A cursor sitting exactly on the right edge moves to the next row.
    if col >= w {
        wrap_row += 1;
        col = 0;
    }

    VisualPosition {
        rows_before,
        wrap_row,
        col,
    }
}

/// First display row to show so that `cursor_display_row` stays visible.
///
/// Rows are counted in `usize`: a long draft easily wraps past `u16::MAX`.
pub fn scroll_offset_for(cursor_display_row: usize, viewport_height: u16) -> usize {
    let height = usize::from(viewport_height);
    if height == 0 || cursor_display_row < height {
        0
    } else {
        cursor_display_row + 1 - height
    }
}
