use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use bbrev_core::use_cases::reviewers::CreateDefaultReviewers;
use bbrev_models::{DefaultReviewers, RepositoryPath};
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// Declare the default reviewers of a repository
#[derive(Parser)]
pub(crate) struct ApplyCommand {
    /// Repository path (e.g. `myworkspace/my-project`)
    repository_path: RepositoryPath,
    /// Reviewer uuids
    #[clap(required = true)]
    reviewers: Vec<String>,
}

#[async_trait(?Send)]
impl Command for ApplyCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let mut resource = DefaultReviewers::new(self.repository_path, self.reviewers);
        CreateDefaultReviewers::run(ctx.api_service.as_ref(), &mut resource).await?;

        writeln!(
            ctx.writer,
            "Default reviewers {} created.",
            resource.resource_id()
        )?;
        for uuid in &resource.reviewers {
            writeln!(ctx.writer, "- {uuid}")?;
        }

        Ok(())
    }
}
