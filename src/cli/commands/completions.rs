//! `partcheck completions` command - Shell completion scripts
//!
//! ```bash
//! source <(partcheck completions bash)
//! partcheck completions fish > ~/.config/fish/completions/partcheck.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::Result;

use crate::cli::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, bin_name, &mut std::io::stdout().lock());
    Ok(())
}
