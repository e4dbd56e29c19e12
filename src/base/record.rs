use crate::base::Company;
use crate::base::Count;
use crate::base::Date;

/// A single layoff event. `date` and `laid_off` may be absent: public layoff
/// data often lacks a confirmed date or a reported headcount.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    #[serde(rename = "d", skip_serializing_if = "Option::is_none", default)]
    date: Option<Date>,
    #[serde(rename = "c")]
    company: Company,
    #[serde(rename = "h", skip_serializing_if = "Option::is_none", default)]
    headquarters: Option<String>,
    #[serde(rename = "l", skip_serializing_if = "Option::is_none", default)]
    laid_off: Option<Count>,
}

impl Record {
    pub fn date(&self) -> Option<Date> {
        self.date
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    pub fn headquarters(&self) -> Option<&str> {
        self.headquarters.as_deref()
    }

    pub fn laid_off(&self) -> Option<Count> {
        self.laid_off
    }

    pub fn new(
        date: Option<Date>,
        company: Company,
        headquarters: Option<String>,
        laid_off: Option<Count>,
    ) -> Self {
        Self {
            date,
            company,
            headquarters,
            laid_off,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl std::str::FromStr for Record {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}
