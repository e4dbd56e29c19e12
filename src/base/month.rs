use crate::base::Date;

/// A calendar month grouping key. Ordering is chronological, by year and then
/// month, independent of the formatted label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    year: i32,
    month: u8,
}

impl Month {
    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }
}

impl From<Date> for Month {
    fn from(dt: Date) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }
}

impl std::fmt::Display for Month {
    /// Formats as a zero-padded `yyyy-mm` label.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
