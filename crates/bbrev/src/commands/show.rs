use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use bbrev_core::use_cases::reviewers::ReadDefaultReviewers;
use bbrev_models::{DefaultReviewers, RepositoryPath};
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// Show the default reviewers of a repository
#[derive(Parser)]
pub(crate) struct ShowCommand {
    /// Repository path (e.g. `myworkspace/my-project`)
    repository_path: RepositoryPath,
}

#[async_trait(?Send)]
impl Command for ShowCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let mut resource =
            DefaultReviewers::new(self.repository_path, std::iter::empty::<String>());
        ReadDefaultReviewers::run(ctx.api_service.as_ref(), &mut resource).await?;

        if resource.reviewers.is_empty() {
            writeln!(
                ctx.writer,
                "No default reviewers on {}.",
                resource.repository
            )?;
        } else {
            writeln!(ctx.writer, "Default reviewers on {}:", resource.repository)?;
            for uuid in &resource.reviewers {
                writeln!(ctx.writer, "- {uuid}")?;
            }
        }

        Ok(())
    }
}
