use unicode_width::UnicodeWidthStr;

/// Kilometres with a space as thousands separator: `15 000`.
pub fn format_km(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }

    if value < 0 { format!("-{}", out) } else { out }
}

pub fn format_money(value: f64, currency: &str) -> String {
    format!("{:.2} {}", value, currency)
}

/// Pad by display width so accented notes keep columns aligned.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Text progress bar, `percent` in 0..=100.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}
