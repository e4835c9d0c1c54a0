//! Wall clock used for the "last updated" stamp.

use chrono::{Local, NaiveDateTime};

/// Format of the "last updated" stamp.
pub const LAST_UPDATED_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Source of the current local time.
pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;
}

/// The system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Format a local time as `dd/mm/yyyy HH:MM`.
pub fn format_last_updated(at: NaiveDateTime) -> String {
    at.format(LAST_UPDATED_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_pads_fields() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 59)
            .unwrap();
        assert_eq!(format_last_updated(at), "05/03/2025 09:07");
        assert_eq!(format_last_updated(FixedClock(at).now()), "05/03/2025 09:07");
    }
}
