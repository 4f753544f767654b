//! Civil date/time to Julian Day conversion.
//!
//! Provides `BirthMoment`, the canonical local-civil-time representation used
//! throughout the engine, and the standard Gregorian-calendar Julian Day
//! algorithm. The local time plus its UTC offset identifies a single instant;
//! all downstream longitude formulas are continuous functions of the
//! resulting JD, so no calendar validation happens here.

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Julian Day to Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Local civil date and time with a fractional UTC offset in hours.
///
/// The offset may be fractional (e.g. 5.5 for IST, 5.75 for Nepal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
    pub utc_offset_hours: f64,
}

impl BirthMoment {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        }
    }

    /// Convert to a Julian Day number (UT).
    pub fn to_julian_day(&self) -> f64 {
        julian_day(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.utc_offset_hours,
        )
    }
}

/// Gregorian calendar date/time to Julian Day (UT).
///
/// The local civil time is converted to UT by subtracting `utc_offset_hours`.
/// January and February are treated as months 13 and 14 of the previous year
/// so the leap-day correction lands in the right place, and the century term
/// `B = 2 - floor(Y/100) + floor(floor(Y/100)/4)` applies the Gregorian
/// calendar reform.
pub fn julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
    utc_offset_hours: f64,
) -> f64 {
    let ut_hour =
        hour as f64 - utc_offset_hours + minute as f64 / 60.0 + second / 3600.0;
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor()
        + (30.6001 * (m as f64 + 1.0)).floor()
        + day as f64
        + ut_hour / 24.0
        + b
        - 1524.5
}
