//! Custom assertions for rendered amounts

/// Assert that rendered text has exactly `expected` fractional digits
pub fn assert_fraction_digits(text: &str, expected: usize) {
    let digits = text
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.chars().take_while(char::is_ascii_digit).count());
    assert_eq!(
        digits, expected,
        "{text:?} has {digits} fractional digits, expected {expected}"
    );
}

/// Assert that every comma-separated group after the first has three digits
pub fn assert_thousands_grouped(text: &str) {
    let whole = text.split('.').next().unwrap_or_default();
    let digits = whole.trim_matches(|c: char| !c.is_ascii_digit());
    let mut groups = digits.split(',');
    let first = groups.next().unwrap_or_default();
    assert!(
        (1..=3).contains(&first.len()),
        "{text:?} has a leading group of {} digits",
        first.len()
    );
    for group in groups {
        assert_eq!(group.len(), 3, "{text:?} has a group {group:?} that is not three digits");
    }
}

/// Assert that rendered text starts with a threshold marker
pub fn assert_marked(text: &str, marker: &str) {
    assert!(
        text.starts_with(&format!("{marker} ")),
        "{text:?} is not marked with {marker:?}"
    );
}

/// Assert that rendered text carries no threshold marker
pub fn assert_unmarked(text: &str) {
    assert!(
        !text.starts_with('>') && !text.starts_with('<'),
        "{text:?} unexpectedly carries a threshold marker"
    );
}
