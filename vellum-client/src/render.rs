use chrono::Datelike;

use crate::api::Time;

/// Avatar initials: uppercase first letter of each whitespace-separated
/// token, truncated to two characters. `"?"` when there is nothing usable.
pub fn initials(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();
    match initials.is_empty() {
        true => String::from("?"),
        false => initials,
    }
}

const MINUTE: i64 = 60;
const HOUR: i64 = 3600;
const DAY: i64 = 86400;
const MONTH: i64 = 2592000; // 30 days

/// Human-relative timestamp, falling back to an absolute date beyond 30
/// days. Durations are floored, so 90 seconds renders as "1 minutes ago".
pub fn time_ago(timestamp: Time, now: Time) -> String {
    let secs = (now - timestamp).num_seconds();
    if secs < MINUTE {
        return String::from("Just now");
    }
    if secs < HOUR {
        return format!("{} minutes ago", secs / MINUTE);
    }
    if secs < DAY {
        return format!("{} hours ago", secs / HOUR);
    }
    if secs < MONTH {
        return format!("{} days ago", secs / DAY);
    }
    format!(
        "{}/{}/{}",
        timestamp.month(),
        timestamp.day(),
        timestamp.year()
    )
}

/// Message body split on literal newlines. The renderer inserts each line
/// as a text node with a break between lines, so user-supplied text is
/// never interpreted as markup.
pub fn message_lines(message: &str) -> Vec<&str> {
    message.split('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn initials_derivation() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("jane"), "J");
        assert_eq!(initials("Ada Augusta Lovelace"), "AA");
        assert_eq!(initials(""), "?");
        assert_eq!(initials("   "), "?");
    }

    #[test]
    fn relative_time_thresholds() {
        let now = Utc::now();
        assert_eq!(time_ago(now, now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(59), now), "Just now");
        assert_eq!(time_ago(now - Duration::seconds(90), now), "1 minutes ago");
        assert_eq!(time_ago(now - Duration::hours(2), now), "2 hours ago");
        assert_eq!(time_ago(now - Duration::days(3), now), "3 days ago");
    }

    #[test]
    fn old_timestamps_render_as_absolute_dates() {
        let now = Utc::now();
        let old = now - Duration::days(40);
        let rendered = time_ago(old, now);
        assert!(!rendered.ends_with("ago"), "got relative time: {rendered}");
        assert!(rendered.contains(&old.year().to_string()));
    }

    #[test]
    fn messages_split_on_newlines() {
        assert_eq!(message_lines("a\nb\n\nc"), vec!["a", "b", "", "c"]);
        assert_eq!(message_lines("plain"), vec!["plain"]);
    }
}
