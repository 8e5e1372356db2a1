//! Text helpers used to turn property names into labels.

/// Split an identifier into words at case changes, `_`, `-` and spaces.
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in s.chars() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }
        let boundary = matches!(prev, Some(p) if c.is_uppercase() && (p.is_lowercase() || p.is_ascii_digit()));
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `"bookingStartDate"` → `"Booking Start Date"`.
pub fn humanize(s: &str) -> String {
    words(s)
        .iter()
        .map(|w| capitalize(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"Booking Start Date"` → `"booking-start-date"`.
pub fn to_kebab_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// `"booking-start-date"` → `"BookingStartDate"`.
pub fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// `"booking-start-date"` → `"bookingStartDate"`.
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncate to `max` characters, appending `...` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("bookingStartDate"), "Booking Start Date");
        assert_eq!(humanize("room_type"), "Room Type");
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("ID"), "ID");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_case_conversions() {
        assert_eq!(to_kebab_case("Booking Start Date"), "booking-start-date");
        assert_eq!(to_kebab_case("useMetadata"), "use-metadata");
        assert_eq!(to_pascal_case("booking-start-date"), "BookingStartDate");
        assert_eq!(to_camel_case("booking_start_date"), "bookingStartDate");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 10), "a longe...");
    }
}
