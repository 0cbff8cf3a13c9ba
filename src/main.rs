use anyhow::Context;
use clap::Parser;
use student_mark::utils::{logger, validation::Validate};
use student_mark::{CliConfig, LineConsole, Runtime, StudentMarkError};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = cli
        .resolve()
        .with_context(|| match &cli.config {
            Some(path) => format!("failed to load configuration from {}", path.display()),
            None => "failed to resolve configuration".to_string(),
        })?;

    logger::init_cli_logger(settings.verbose, settings.log_format);
    tracing::info!("Starting student-mark");
    tracing::debug!("Resolved settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    let runtime = Runtime::new(settings);
    let mut console = LineConsole::stdio();

    match runtime.run(&mut console) {
        Ok(summary) => {
            tracing::info!(
                "Done: {} commands run, {} records replayed, {} files archived",
                summary.session.commands_executed,
                summary.replay.applied,
                summary.packed_files
            );
            Ok(())
        }
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: StudentMarkError) -> ! {
    tracing::error!("student-mark stopped: {} (severity {:?})", e, e.severity());
    eprintln!("{}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
