use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use form2csv::parser::fields::LabelMode;
use form2csv::settings::Settings;

#[derive(Parser)]
#[command(
    name = "form2csv",
    about = "Append fields from an issue-form submission to a CSV file"
)]
struct Cli {
    /// Issue JSON with a `body` string
    input: PathBuf,
    /// CSV to append to (created with a header if missing)
    output: PathBuf,
    /// Quote values containing commas, quotes or line breaks
    #[arg(long)]
    quote: bool,
    /// How labels are placed into the match pattern
    #[arg(long, value_enum)]
    label_mode: Option<LabelMode>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut settings = Settings::load().context("loading FORM2CSV_* settings")?;
    if cli.quote {
        settings.quote = true;
    }
    if let Some(mode) = cli.label_mode {
        settings.label_mode = mode;
    }
    tracing::debug!(?settings, "resolved settings");

    form2csv::run(&cli.input, &cli.output, &settings).with_context(|| {
        format!(
            "appending {} to {}",
            cli.input.display(),
            cli.output.display()
        )
    })?;
    Ok(())
}
