use crate::base::util;

/// Integral representation of a headcount. Always non-negative.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Count(pub u64);

impl Count {
    /// Returns `count.to_string().len()` without actually building a string.
    pub const fn charlen(self) -> usize {
        let digits = util::count_digits(self.0);
        digits + (digits - 1) / 3 // commas
    }
}

impl std::fmt::Display for Count {
    /// Formats with comma thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut n = self.0;
        let mut bytes = Vec::<u8>::new();
        let mut i = 0;
        loop {
            bytes.push(b'0' + (n % 10) as u8);
            n /= 10;
            i += 1;
            if n == 0 {
                break;
            }
            if i % 3 == 0 {
                bytes.push(b',');
            }
        }
        bytes.reverse();
        let s = std::str::from_utf8(&bytes).expect("all chars should be ascii");
        f.write_str(s)
    }
}

impl std::str::FromStr for Count {
    type Err = std::num::ParseIntError;

    /// Parses a headcount from a human-readable string, which may contain
    /// comma thousands separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.replace(',', "").parse::<u64>().map(Self)
    }
}

impl TryFrom<&str> for Count {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
