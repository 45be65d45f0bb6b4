use anyhow::Result;
use bbrev_api_cloud::CloudApiService;
use bbrev_config::Config;
use clap::Parser;

use crate::commands::{CommandContext, SubCommand};

/// Bitbucket default-reviewers reconciler
#[derive(Parser)]
#[clap(author, version, about, long_about = None, name = "bbrev")]
#[clap(propagate_version = true)]
pub(crate) struct Args {
    #[clap(subcommand)]
    cmd: SubCommand,
}

pub(crate) struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async {
            let api_service = CloudApiService::new(config);
            let ctx = CommandContext {
                api_service: Box::new(api_service),
                writer: std::io::stdout(),
            };

            Self::parse_args_async(args, ctx).await
        })
    }

    pub(crate) async fn parse_args_async<W: std::io::Write>(
        args: Args,
        ctx: CommandContext<W>,
    ) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
