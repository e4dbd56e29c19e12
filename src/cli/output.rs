use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Listing(base::listing::Config),
    Barchart(base::barchart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Listing(config) => {
                if config.rl.is_empty() {
                    writeln!(f, "No layoff events.")
                } else {
                    write!(f, "{}", config.to_listing())
                }
            }
            Output::Barchart(config) => {
                if config.rows.is_empty() {
                    writeln!(f, "No layoff events.")
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Output::Str("asdf".into()), "asdf\n")]
    #[case(Output::Str("asdf\n".into()), "asdf\n")]
    fn test_to_string(#[case] output: Output, #[case] want: impl Into<String>) {
        assert_eq!(output.to_string(), want.into())
    }

    #[test]
    fn test_empty_listing_message() {
        let output = Output::Listing(base::listing::Config {
            charset: Default::default(),
            start_index: 0,
            rl: base::Recordlist::new(),
            annotation: None,
        });
        assert_eq!(output.to_string(), "No layoff events.\n")
    }

    #[test]
    fn test_empty_barchart_message() {
        let output = Output::Barchart(base::barchart::Config {
            charset: Default::default(),
            term_width: 80,
            rows: Vec::new(),
        });
        assert_eq!(output.to_string(), "No layoff events.\n")
    }
}
