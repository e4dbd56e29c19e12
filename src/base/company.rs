/// Company name. Guaranteed non-empty and non-blank.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String")]
pub struct Company(String);

impl Company {
    pub fn str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("company name is empty")]
pub struct ParseError;

impl std::str::FromStr for Company {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError);
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Company {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(ParseError);
        }
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Acme")]
    #[case("Waystar Royco")]
    #[case("23andMe")]
    #[case(" padded ")]
    fn test_from_str(#[case] s: &str) {
        assert_eq!(s.parse::<Company>().unwrap().str(), s)
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    fn test_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<Company>().is_err())
    }

    #[test]
    fn test_ord_is_by_name() {
        let mut v = ["Meta", "Alphabet", "Amazon"]
            .map(|s| s.parse::<Company>().unwrap())
            .to_vec();
        v.sort();
        assert_eq!(
            v.iter().map(Company::str).collect::<Vec<_>>(),
            vec!["Alphabet", "Amazon", "Meta"],
        )
    }
}
