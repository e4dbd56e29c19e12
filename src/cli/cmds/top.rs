use crate::base;
use crate::cli;

/// Chart the companies with the most layoffs
#[derive(clap::Parser)]
pub struct Top {
    /// Maximum number of companies to chart
    #[arg(short = 'n', long, default_value_t = 10)]
    limit: usize,
}

impl Top {
    pub fn run(self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let rows = base::totals::top_companies(&rl, self.limit)
            .into_iter()
            .map(|t| base::barchart::Row {
                label: t.company.to_string(),
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
