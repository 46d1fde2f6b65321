//! Weekly hours of operation
//!
//! Times are 12-hour clock strings such as `9:30 am` or `11:05 pm`.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Opening and closing time for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub open_time: String,
    pub close_time: String,
}

impl DaySchedule {
    /// Trim both times and check their format
    pub fn normalized(self, day: &'static str) -> Result<Self, DomainError> {
        let open_time = self.open_time.trim().to_string();
        let close_time = self.close_time.trim().to_string();

        for value in [&open_time, &close_time] {
            if !is_valid_clock_time(value) {
                return Err(DomainError::InvalidTime {
                    day,
                    value: value.clone(),
                });
            }
        }

        Ok(Self {
            open_time,
            close_time,
        })
    }
}

/// Seven optional day schedules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursOfOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thursday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturday: Option<DaySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunday: Option<DaySchedule>,
}

impl HoursOfOperation {
    /// Validate and trim every present day
    pub fn normalized(self) -> Result<Self, DomainError> {
        fn day(
            schedule: Option<DaySchedule>,
            name: &'static str,
        ) -> Result<Option<DaySchedule>, DomainError> {
            schedule.map(|s| s.normalized(name)).transpose()
        }

        Ok(Self {
            monday: day(self.monday, "monday")?,
            tuesday: day(self.tuesday, "tuesday")?,
            wednesday: day(self.wednesday, "wednesday")?,
            thursday: day(self.thursday, "thursday")?,
            friday: day(self.friday, "friday")?,
            saturday: day(self.saturday, "saturday")?,
            sunday: day(self.sunday, "sunday")?,
        })
    }
}

/// Check a `h:mm am|pm` clock string with hour in 1..=12
pub fn is_valid_clock_time(value: &str) -> bool {
    if value.len() > 8 {
        return false;
    }

    let Some((clock, meridiem)) = value.split_once(' ') else {
        return false;
    };
    if meridiem != "am" && meridiem != "pm" {
        return false;
    }

    let Some((hour, minute)) = clock.split_once(':') else {
        return false;
    };

    let hour_ok = match hour.as_bytes() {
        [h] => h.is_ascii_digit(),
        [h1, h2] => matches!(h1, b'0' | b'1') && h2.is_ascii_digit(),
        _ => false,
    };
    let minute_ok = matches!(minute.as_bytes(), [m1, m2] if (b'0'..=b'5').contains(m1) && m2.is_ascii_digit());

    if !hour_ok || !minute_ok {
        return false;
    }

    hour.parse::<u8>().is_ok_and(|h| (1..=12).contains(&h))
}
