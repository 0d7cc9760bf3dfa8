use crate::format::formatter::pluralize;

/// Human-readable duration: `readable_time(1, 3)` -> `"1 hour 3 minutes"`.
///
/// Minutes past 60 carry into hours; zero parts are left out.
pub fn readable_time(hours: u32, minutes: u32) -> String {
    let hours = hours + minutes / 60;
    let minutes = minutes % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{} {}", hours, pluralize(hours, "hour", "hours")));
    }
    if minutes > 0 {
        parts.push(format!(
            "{} {}",
            minutes,
            pluralize(minutes, "minute", "minutes")
        ));
    }
    parts.join(" ")
}

/// Same as `readable_time`, from a total number of minutes
pub fn readable_minutes(total_minutes: u32) -> String {
    readable_time(0, total_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_time() {
        assert_eq!(readable_time(1, 3), "1 hour 3 minutes");
        assert_eq!(readable_time(2, 0), "2 hours");
        assert_eq!(readable_time(0, 1), "1 minute");
        assert_eq!(readable_time(0, 0), "");
    }

    #[test]
    fn test_minutes_carry_into_hours() {
        assert_eq!(readable_time(1, 90), "2 hours 30 minutes");
        assert_eq!(readable_minutes(60), "1 hour");
    }
}
