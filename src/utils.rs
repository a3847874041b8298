use chrono::{DateTime, Local, Utc};

/// Format a timestamp as local wall-clock time.
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_local_wall_clock_time() {
        let timestamp = Local
            .with_ymd_and_hms(2026, 1, 2, 9, 5, 0)
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(format_time(timestamp), "09:05");
    }
}
