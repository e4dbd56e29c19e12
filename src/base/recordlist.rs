use crate::base;

/// List of layoff events, kept in date order. Events without a date sort
/// before dated ones. Events sharing a date keep their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recordlist(Vec<base::Record>);

impl Recordlist {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_vec(mut inner: Vec<base::Record>) -> Self {
        inner.sort_by_key(base::Record::date);
        Self(inner)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Inserts the record after any others sharing its date and returns its
    /// position.
    pub fn insert(&mut self, r: base::Record) -> usize {
        let i = self.0.partition_point(|x| x.date() <= r.date());
        self.0.insert(i, r);
        i
    }

    pub fn get(&self, i: usize) -> Option<&base::Record> {
        self.0.get(i)
    }

    /// Removes and returns the record at the given position. If `i` is out of
    /// bounds, returns `None` and leaves the record list unmodified.
    pub fn remove(&mut self, i: usize) -> Option<base::Record> {
        if i >= self.0.len() {
            return None;
        }
        Some(self.0.remove(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.0.iter()
    }
}

impl IntoIterator for Recordlist {
    type Item = base::Record;
    type IntoIter = std::vec::IntoIter<base::Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = &'a base::Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Recordlist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid record at line {line}")]
pub struct ParseError {
    line: usize,
    source: serde_json::Error,
}

impl std::str::FromStr for Recordlist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, x)| !x.is_empty())
            .map(|(i, x)| {
                x.parse::<base::Record>().map_err(|e| ParseError {
                    line: i + 1,
                    source: e,
                })
            })
            .collect::<Result<Self, _>>()
    }
}

impl TryFrom<&str> for Recordlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
