//! Utility functions and helpers

/// Group the integer digits of a number with commas.
///
/// Accepts any plain decimal rendering (`"1234567.89"`, `"-1000"`); the
/// sign and fractional part are left untouched.
pub fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(idx) => unsigned.split_at(idx),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    let mut count = 0;
    for c in int_part.chars().rev() {
        if count == 3 {
            grouped.push(',');
            count = 0;
        }
        grouped.push(c);
        count += 1;
    }
    let int_grouped: String = grouped.chars().rev().collect();
    format!("{}{}{}", sign, int_grouped, frac_part)
}

/// Escape text for safe inclusion in HTML element content and quoted attributes
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
