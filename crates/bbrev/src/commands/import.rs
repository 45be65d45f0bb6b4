use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;

use crate::commands::{Command, CommandContext};

/// Import an existing default-reviewers resource by id
#[derive(Parser)]
pub(crate) struct ImportCommand {
    /// Opaque resource id (e.g. `myworkspace/my-project/reviewers`)
    id: String,
}

#[async_trait(?Send)]
impl Command for ImportCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        // The id is passed through as-is, never decomposed.
        writeln!(ctx.writer, "Imported default reviewers with id {}.", self.id)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() {
        let ctx = CommandContextTest::new();

        let output = test_command(ctx, &["import", "me/test/reviewers"]).await;
        assert_eq!(output, "Imported default reviewers with id me/test/reviewers.\n");
    }
}
