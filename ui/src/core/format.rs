//! Formatting helpers for presenting menu and review data.

use api::MAX_RATING;

/// `1450` -> `"$14.50"`
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Rating as shown on a card, never above `MAX_RATING`.
pub fn display_rating(rating: u8) -> u8 {
    rating.min(MAX_RATING)
}

/// Filled and empty stars, e.g. `★★★★☆` for 4. Ratings above the maximum are clamped.
pub fn rating_stars(rating: u8) -> String {
    let filled = display_rating(rating) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Up to two uppercase initials for an avatar badge.
pub fn initials(author: &str) -> String {
    let letters: String = author
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .filter(|c| c.is_alphabetic())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Loose shape check for the newsletter form; the mail provider does the real validation.
pub fn is_plausible_email(raw: &str) -> bool {
    let raw = raw.trim();
    let Some((local, domain)) = raw.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !raw.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
