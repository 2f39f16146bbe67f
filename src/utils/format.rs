//! Number formatting for display text

/// Formats a star count with `,` thousands separators ("2384" -> "2,384")
pub fn format_stars(stars: u64) -> String {
    let digits = stars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
