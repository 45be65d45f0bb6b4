use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use bbrev_core::use_cases::reviewers::DeleteDefaultReviewers;
use bbrev_models::{DefaultReviewers, RepositoryPath};
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// Remove the default reviewers of a repository
#[derive(Parser)]
pub(crate) struct DestroyCommand {
    /// Repository path (e.g. `myworkspace/my-project`)
    repository_path: RepositoryPath,
    /// Reviewer uuids known to be set
    #[clap(required = true)]
    reviewers: Vec<String>,
}

#[async_trait(?Send)]
impl Command for DestroyCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let resource = DefaultReviewers::new(self.repository_path, self.reviewers);
        DeleteDefaultReviewers::run(ctx.api_service.as_ref(), &resource).await?;

        writeln!(
            ctx.writer,
            "Default reviewers {} destroyed.",
            resource.resource_id()
        )?;

        Ok(())
    }
}
