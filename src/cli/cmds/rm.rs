use anyhow::Context;

use crate::base;
use crate::cli;

/// Remove a layoff event
#[derive(clap::Parser)]
pub struct Rm {
    /// Index of the event, as shown by 'view'
    index: usize,

    /// Execute the removal instead of displaying dry run changes
    #[arg(long)]
    confirm: bool,
}

impl Rm {
    pub fn run(
        self,
        mut rl: base::Recordlist,
        config: &base::Config,
        fs: &base::Fs,
    ) -> anyhow::Result<cli::Output> {
        let i0 = self.index.wrapping_sub(config.first_index);
        if rl.get(i0).is_none() {
            anyhow::bail!("nonexistent event");
        }

        let charset = cli::util::charset_from_config(config);
        let mut annotation = if self.confirm {
            " <- [REMOVED]"
        } else {
            " <- [WOULD BE REMOVED]"
        }
        .to_string();
        if charset.color {
            annotation = if self.confirm {
                colored::Colorize::red(annotation.as_str()).to_string()
            } else {
                colored::Colorize::yellow(annotation.as_str()).to_string()
            };
        }
        let ls_config = base::listing::Config {
            start_index: self.index,
            rl: rl.get(i0).into_iter().collect(),
            annotation: Some(annotation),
            charset,
        };

        if self.confirm {
            rl.remove(i0)
                .expect("record should have already been verified to exist");
            fs.write(&rl).with_context(|| {
                format!(
                    "failed to write '{}'",
                    fs.path::<base::Recordlist>().display()
                )
            })?;
        }

        Ok(cli::Output::Listing(ls_config))
    }
}
