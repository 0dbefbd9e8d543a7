use chrono::NaiveDate;
use urlencoding::encode;

pub const OBSIDIAN_NEW_NOTE_PREFIX: &str = "obsidian://new?content=";

/// "January 5, 2025"
pub fn format_export_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "Jan 5", shown next to the character count.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Draft text followed by a blank line, a `---` rule and the date.
pub fn build_payload(text: &str, date: NaiveDate) -> String {
    format!("{}\n\n---\n{}", text, format_export_date(date))
}

pub fn build_export_uri(payload: &str) -> String {
    format!("{}{}", OBSIDIAN_NEW_NOTE_PREFIX, encode(payload))
}

/// "0 characters", "1 character", "1,234 characters"
pub fn format_char_count(count: usize) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} character{}", grouped, suffix)
}
