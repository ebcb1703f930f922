use anyhow::Context;
use clap::Parser;
use santa_draw::utils::{logger, validation::Validate};
use santa_draw::{CliConfig, DrawRunner, LocalSessionStore, RunReport};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting santa-draw");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let format = config.format;
    let dry_run = config.dry_run;
    let runner = DrawRunner::new(LocalSessionStore::new(), config)
        .with_format(format)
        .with_dry_run(dry_run);

    match runner.run() {
        Ok(RunReport::Drawn {
            rendered,
            written_to: None,
            ..
        }) => {
            std::io::stdout()
                .write_all(&rendered)
                .context("failed to write the draw to stdout")?;
        }
        Ok(RunReport::Drawn {
            draw_name,
            selection,
            written_to: Some(path),
            ..
        }) => {
            println!(
                "Drew {} assignments for {}, saved to {}",
                selection.len(),
                draw_name,
                path.display()
            );
        }
        Ok(RunReport::Checked {
            draw_name,
            givers,
            receivers,
        }) => {
            println!(
                "{} can be drawn: {} givers, {} receivers",
                draw_name, givers, receivers
            );
        }
        Err(e) => {
            tracing::error!("Draw failed: {}", e);
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
