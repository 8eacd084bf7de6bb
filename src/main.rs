use std::io::Write;

use anyhow::Context;
use clap::Parser;
use rankings::domain::ports::ConfigProvider;
use rankings::utils::{logger, validation, validation::Validate};
use rankings::{CliConfig, Command, FileStore, RankingsError, ResultsProcessor};

fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        let exit_code = match e.downcast_ref::<RankingsError>() {
            Some(error) => {
                tracing::debug!("Failure category: {:?}", error.category());
                error.exit_code()
            }
            None => 1,
        };

        eprintln!("{:#}", e);
        std::process::exit(exit_code);
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        return Ok(());
    };

    let config = cli.resolve()?;
    config.validate()?;

    tracing::debug!("Using contest results store {}", config.store_path());
    let store = FileStore::new(config.store_path());
    let processor = ResultsProcessor::new(store, config);
    let mut stdout = std::io::stdout().lock();

    match command {
        Command::AppendFile { file } => {
            validation::validate_file_exists("--file", file)?;
            let content = std::fs::read_to_string(file)
                .map_err(RankingsError::from)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let stored = processor.process(content.lines())?;
            writeln!(stdout, "Stored {} contest result(s).", stored)?;
            processor.display_ranking_table(&mut stdout)?;
        }
        Command::AppendResult { result } => {
            let stored = processor.process([result])?;
            writeln!(stdout, "Stored {} contest result(s).", stored)?;
            processor.display_ranking_table(&mut stdout)?;
        }
        Command::ClearContestResults => {
            processor.clear_contest_results()?;
            writeln!(stdout, "Contest results cleared.")?;
        }
        Command::ShowRankings => {
            processor.display_ranking_table(&mut stdout)?;
        }
    }

    Ok(())
}
