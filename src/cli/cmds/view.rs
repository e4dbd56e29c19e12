use crate::base;
use crate::cli;

/// View layoff events
#[derive(clap::Parser)]
pub struct View {}

impl View {
    pub fn run(self, rl: base::Recordlist, config: &base::Config) -> anyhow::Result<cli::Output> {
        let ls_config = base::listing::Config {
            charset: cli::util::charset_from_config(config),
            start_index: config.first_index,
            rl,
            annotation: None,
        };
        Ok(cli::Output::Listing(ls_config))
    }
}
