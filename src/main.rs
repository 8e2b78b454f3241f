use crate::commands::{Cli, Commands, ParseCommand, ValidateCommand};
use crate::error::{CuesheetError, CuesheetResult};
use anyhow::Result;
use clap::Parser;
use cuesheet::{CueParser, CueSheet};
use log::{error, info};
use std::io::Write;

mod commands;
mod error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse(cmd) => parse(cmd).await?,
        Commands::Validate(cmd) => validate(cmd).await?,
    }

    Ok(())
}

async fn parse(cmd: ParseCommand) -> CuesheetResult<()> {
    let sheet = CueParser::new(&cmd.input).parse().await?;

    let mut out = std::io::stdout().lock();
    if cmd.json {
        serde_json::to_writer_pretty(&mut out, &sheet)?;
        writeln!(out)?;
    } else {
        print_sheet(&mut out, &sheet)?;
    }
    Ok(())
}

async fn validate(cmd: ValidateCommand) -> CuesheetResult<()> {
    let total = cmd.inputs.len();
    let mut failed = 0;

    for input in &cmd.inputs {
        let parser = CueParser::new(input);
        match parser.parse().await {
            Ok(sheet) => info!("{}: ok ({} tracks)", parser.path().display(), sheet.tracks.len()),
            Err(err) => {
                failed += 1;
                error!("{}: {err}", parser.path().display());
            }
        }
    }

    if failed > 0 {
        return Err(CuesheetError::ValidationFailed { failed, total });
    }
    Ok(())
}

fn print_sheet(out: &mut impl Write, sheet: &CueSheet) -> std::io::Result<()> {
    writeln!(out, "File:      {} ({})", sheet.file_name, sheet.format)?;
    let optional = [
        ("Performer", &sheet.performer),
        ("Title", &sheet.title),
        ("Genre", &sheet.genre),
        ("Date", &sheet.date),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            writeln!(out, "{:<10} {value}", format!("{label}:"))?;
        }
    }

    for track in &sheet.tracks {
        let start = track
            .index
            .map(|index| index.to_string())
            .unwrap_or_else(|| "--:--:--".to_string());
        write!(out, "  {:02} {start} {}", track.number, track.track_type)?;
        if let Some(title) = &track.title {
            write!(out, " {title}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
