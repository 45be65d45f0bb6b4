//! Commands.

use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use bbrev_api_interface::BitbucketService;
use clap::Subcommand;

use self::{
    apply::ApplyCommand, destroy::DestroyCommand, import::ImportCommand, show::ShowCommand,
};

mod apply;
mod destroy;
mod import;
mod show;

pub(crate) struct CommandContext<W: Write> {
    pub api_service: Box<dyn BitbucketService>,
    pub writer: W,
}

#[async_trait(?Send)]
pub(crate) trait Command {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Apply(ApplyCommand),
    Show(ShowCommand),
    Destroy(DestroyCommand),
    Import(ImportCommand),
}

impl SubCommand {
    pub async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        match self {
            Self::Apply(sub) => sub.execute(ctx).await,
            Self::Show(sub) => sub.execute(ctx).await,
            Self::Destroy(sub) => sub.execute(ctx).await,
            Self::Import(sub) => sub.execute(ctx).await,
        }
    }
}
