use clap::Parser;
use miette::Result;
use partcheck::cli::{Cli, Commands};
use partcheck::core::Config;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the tracing subscriber
///
/// `--verbose` forces debug logging for this crate; otherwise `RUST_LOG` wins,
/// then the configured `log_level`. Logs go to stderr.
fn init_tracing(verbose: bool, config: &Config) {
    let filter = if verbose {
        EnvFilter::new("partcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Terminate quietly on a closed pipe (e.g. `partcheck check cars/ | head`).
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    let config = Config::load();
    init_tracing(global.verbose, &config);

    match cli.command {
        Commands::Check(args) => partcheck::cli::commands::check::run(args, &global, &config),
        Commands::Catalog(args) => partcheck::cli::commands::catalog::run(args, &global, &config),
        Commands::Completions(args) => partcheck::cli::commands::completions::run(args),
    }
}
