//! Wall-clock snapshot for the top bar.
//!
//! Labels follow the zh-CN locale: the date reads `10月19日` (long month,
//! numeric day) and the time is 24-hour with two-digit fields.

/// Local wall-clock fields captured at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTime {
    /// Month of the year, 1-12.
    pub month: u8,
    /// Day of the month, 1-31.
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl ClockTime {
    pub const fn new(month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Current browser local time.
    pub fn now() -> Self {
        Self::from_date(&js_sys::Date::new_0())
    }

    /// Read local-time fields from a JS `Date`.
    pub fn from_date(date: &js_sys::Date) -> Self {
        Self {
            month: (date.get_month() + 1) as u8,
            day: date.get_date() as u8,
            hour: date.get_hours() as u8,
            minute: date.get_minutes() as u8,
            second: date.get_seconds() as u8,
        }
    }

    /// Long month and numeric day, e.g. `10月19日`.
    pub fn date_label(&self) -> String {
        format!("{}月{}日", self.month, self.day)
    }

    /// Two-digit 24-hour time, e.g. `09:05:03`.
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_label() {
        assert_eq!(ClockTime::new(10, 19, 0, 0, 0).date_label(), "10月19日");
        assert_eq!(ClockTime::new(1, 5, 0, 0, 0).date_label(), "1月5日");
    }

    #[test]
    fn test_time_label_pads_fields() {
        assert_eq!(ClockTime::new(1, 1, 9, 5, 3).time_label(), "09:05:03");
        assert_eq!(ClockTime::new(1, 1, 23, 59, 59).time_label(), "23:59:59");
        assert_eq!(ClockTime::new(1, 1, 0, 0, 0).time_label(), "00:00:00");
    }
}
