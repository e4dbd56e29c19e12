use crate::base;
use crate::cli;

/// Chart total layoffs per calendar month
#[derive(clap::Parser)]
pub struct Monthly {}

impl Monthly {
    pub fn run(self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let rows = base::totals::by_month(&rl)
            .into_iter()
            .map(|t| base::barchart::Row {
                label: t.month.to_string(),
                value: t.laid_off,
            })
            .collect();
        let chart_config = base::barchart::Config {
            charset: cli::util::charset_from_config(config),
            term_width: cli::util::detected_term_width(),
            rows,
        };
        Ok(cli::Output::Barchart(chart_config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(entries: &[(&str, u64)]) -> Vec<base::barchart::Row> {
        entries
            .iter()
            .map(|&(label, value)| base::barchart::Row {
                label: label.to_string(),
                value: base::Count(value),
            })
            .collect()
    }

    cli::testing::generate_testcases![
        (
            groups_by_month_chronologically,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "monthly"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Barchart(
                        base::barchart::Config {
                            charset: Default::default(),
                            term_width: cli::util::detected_term_width(),
                            rows: rows(&[
                                ("2022-11", 11000),
                                ("2023-01", 20000),
                                ("2023-03", 9000),
                                ("2023-04", 0),
                            ]),
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}").with_rl(
                    r#"
                        {"d":"2023-01-20","c":"Alphabet","h":"Mountain View","l":12000}
                        {"d":"2023-01-18","c":"Amazon","l":8000}
                        {"d":"2023-03-20","c":"Amazon","l":9000}
                        {"d":"2022-11-09","c":"Meta","l":11000}
                        {"c":"Stealth Startup","l":50}
                        {"d":"2023-04-03","c":"Acme"}
                    "#
                ),
            }
        ),
        (
            empty_repo,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "monthly"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Barchart(
                        base::barchart::Config {
                            charset: Default::default(),
                            term_width: cli::util::detected_term_width(),
                            rows: Vec::new(),
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}"),
            }
        ),
    ];
}
