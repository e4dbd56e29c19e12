use anyhow::Context;

use crate::base;
use crate::cli;

/// Layoff event tracker
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Log(cli::cmds::log::Log),
    Rm(cli::cmds::rm::Rm),
    View(cli::cmds::view::View),
    Top(cli::cmds::top::Top),
    Monthly(cli::cmds::monthly::Monthly),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        if !fs.is_repo() {
            anyhow::bail!("not a repository")
        }
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", fs.path::<base::Config>().display()))?;
        let rl = fs.read::<base::Recordlist>().with_context(|| {
            format!(
                "failed to read '{}'",
                fs.path::<base::Recordlist>().display()
            )
        })?;

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Log(cmd) => cmd.run(rl, &config, fs),
            Commands::Rm(cmd) => cmd.run(rl, &config, fs),
            Commands::View(cmd) => cmd.run(rl, &config),
            Commands::Top(cmd) => cmd.run(rl, &config),
            Commands::Monthly(cmd) => cmd.run(rl, &config),
        }
    }
}
