use std::io::Write;

use bbrev_api_interface::MockBitbucketService;
use clap::Parser;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub api_service: MockBitbucketService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            api_service: MockBitbucketService::new(),
        }
    }

    pub fn into_context<W: Write>(self, writer: W) -> CommandContext<W> {
        CommandContext {
            api_service: Box::new(self.api_service),
            writer,
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let mut buf = Vec::new();

    {
        let command_args = {
            let mut tmp_args = vec!["bbrev"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(&mut buf))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    std::str::from_utf8(buf.as_slice()).unwrap().to_string()
}
