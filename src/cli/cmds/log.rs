use anyhow::Context;

use crate::base;
use crate::cli;

/// Log a layoff event
#[derive(clap::Parser)]
pub struct Log {
    /// Company name
    company: base::Company,

    /// Number of people laid off, or '?' if not reported
    count: CountArg,

    /// Event date
    #[arg(default_value = "d")]
    date: base::Date,

    /// Company headquarters location
    #[arg(long)]
    hq: Option<String>,
}

impl Log {
    pub fn run(
        &self,
        mut rl: base::Recordlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let r = base::Record::new(
            Some(self.date),
            self.company.clone(),
            self.hq.clone(),
            self.count.to_count(),
        );
        let i = rl.insert(r);
        fs.write(&rl).with_context(|| {
            format!(
                "failed to write '{}'",
                fs.path::<base::Recordlist>().display()
            )
        })?;

        let ls_config = base::listing::Config {
            charset: cli::util::charset_from_config(config),
            start_index: config.first_index + i,
            rl: rl.get(i).into_iter().collect(),
            annotation: None,
        };
        Ok(cli::Output::Listing(ls_config))
    }
}

#[derive(Clone, Copy)]
enum CountArg {
    Known(base::Count),
    Unknown,
}

impl CountArg {
    fn to_count(self) -> Option<base::Count> {
        match self {
            CountArg::Known(x) => Some(x),
            CountArg::Unknown => None,
        }
    }
}

impl std::str::FromStr for CountArg {
    type Err = <base::Count as std::str::FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "?" {
            return Ok(Self::Unknown);
        }
        base::Count::from_str(s).map(Self::Known)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("?", None)]
    #[case("0", Some(base::Count(0)))]
    #[case("12000", Some(base::Count(12000)))]
    #[case("12,000", Some(base::Count(12000)))]
    fn test_countarg_to_count(#[case] arg: CountArg, #[case] want: Option<base::Count>) {
        assert_eq!(arg.to_count(), want)
    }

    #[rstest]
    #[case("")]
    #[case("??")]
    #[case("-1")]
    #[case("1.5")]
    fn test_countarg_from_str_failing(#[case] s: &str) {
        assert!(s.parse::<CountArg>().is_err())
    }

    cli::testing::generate_testcases![
        (
            normal_execution,
            cli::testing::MutCase {
                invocations: &[
                    cli::testing::Invocation {
                        args: &[
                            "",
                            "log",
                            "Alphabet",
                            "12,000",
                            "2023-01-20",
                            "--hq",
                            "Mountain View",
                        ],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::Listing(
                            base::listing::Config {
                                charset: Default::default(),
                                start_index: 0,
                                rl: r#"{"d":"2023-01-20","c":"Alphabet","h":"Mountain View","l":12000}"#
                                    .parse()
                                    .unwrap(),
                                annotation: None,
                            }
                        )),
                    },
                    cli::testing::Invocation {
                        args: &["", "log", "Meta", "11000", "2022-11-09"],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::Listing(
                            base::listing::Config {
                                charset: Default::default(),
                                start_index: 0,
                                rl: r#"{"d":"2022-11-09","c":"Meta","l":11000}"#.parse().unwrap(),
                                annotation: None,
                            }
                        )),
                    },
                    cli::testing::Invocation {
                        args: &["", "log", "Acme", "?", "2023-01-20"],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::Listing(
                            base::listing::Config {
                                charset: Default::default(),
                                start_index: 2,
                                rl: r#"{"d":"2023-01-20","c":"Acme"}"#.parse().unwrap(),
                                annotation: None,
                            }
                        )),
                    },
                ],
                initial_state: cli::testing::StrState::new().with_config("{}"),
                final_state: cli::testing::State::new()
                    .with_config(base::Config::default())
                    .with_rl(
                        r#"
                            {"d":"2022-11-09","c":"Meta","l":11000}
                            {"d":"2023-01-20","c":"Alphabet","h":"Mountain View","l":12000}
                            {"d":"2023-01-20","c":"Acme"}
                        "#
                    ),
            }
        ),
        (
            default_date_is_today,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "log", "Acme", "120"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Listing(
                        base::listing::Config {
                            charset: Default::default(),
                            start_index: 0,
                            rl: format!(r#"{{"d":"{}","c":"Acme","l":120}}"#, base::Date::today())
                                .parse()
                                .unwrap(),
                            annotation: None,
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
                final_state: cli::testing::State::new()
                    .with_config(base::Config::default())
                    .with_rl(
                        format!(r#"{{"d":"{}","c":"Acme","l":120}}"#, base::Date::today()).as_str()
                    ),
            }
        ),
        (
            first_index_offsets_echo,
            cli::testing::MutCase {
                invocations: &[cli::testing::Invocation {
                    args: &["", "log", "Acme", "120", "2023-04-03"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Listing(
                        base::listing::Config {
                            charset: Default::default(),
                            start_index: 2,
                            rl: r#"{"d":"2023-04-03","c":"Acme","l":120}"#.parse().unwrap(),
                            annotation: None,
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"firstIndex":1}"#)
                    .with_rl(r#"{"d":"2022-11-09","c":"Meta","l":11000}"#),
                final_state: cli::testing::State::new()
                    .with_config(r#"{"firstIndex":1}"#)
                    .with_rl(
                        r#"
                            {"d":"2022-11-09","c":"Meta","l":11000}
                            {"d":"2023-04-03","c":"Acme","l":120}
                        "#
                    ),
            }
        ),
    ];
}
