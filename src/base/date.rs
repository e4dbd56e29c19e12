/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Date(time::Date);

impl Date {
    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u8 {
        u8::from(self.0.month())
    }

    pub fn day(self) -> u8 {
        self.0.day()
    }

    pub fn from_ymd(year: i32, month: u8, day: u8) -> Option<Self> {
        if year < 0 {
            return None;
        }
        let month = time::Month::try_from(month).ok()?;
        time::Date::from_calendar_date(year, month, day).ok().map(Self)
    }

    /// Returns the local date. Falls back to UTC when the local offset is
    /// indeterminate.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self(time::macros::date!(2023 - 06 - 15))
    }

    /// Offsets the given date by the given number of days, returning `None`
    /// if the resultant date is out of bounds.
    pub fn shift_days(self, offset: i64) -> Option<Self> {
        let dt = self.0.checked_add(time::Duration::days(offset))?;
        if dt.year() < 0 {
            return None;
        }
        Some(Self(dt))
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error(transparent)]
    BadFormat(#[from] time::error::Parse),
    #[error("date is after 9999-12-31")]
    OutOfRange,
    #[error("first character is not a digit or 'd'")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be in one of the following formats:
    /// - `yyyy-mm-dd`
    /// - `dn` where `n` is an integer day offset from today, e.g. `d`, `d-1`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            let fmt = time::macros::format_description!("[year]-[month]-[day]");
            return time::Date::parse(s, fmt).map(Self).map_err(Self::Err::from);
        }

        let bytes = s.as_bytes();
        if ![b'd', b'D'].contains(&bytes[0]) {
            return Err(Self::Err::InvalidFirstChar);
        }
        let offset: i64 = if bytes.len() == 1 {
            0
        } else {
            std::str::from_utf8(&bytes[1..])
                .map_err(|_| Self::Err::InvalidFirstChar)?
                .parse::<i64>()?
        };
        Self::today().shift_days(offset).ok_or(Self::Err::OutOfRange)
    }
}
