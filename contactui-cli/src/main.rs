use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use contactui::{ContactForm, DelayedSubmit, UiOptions};

#[derive(Debug, Parser)]
#[command(
    name = "contactui",
    version,
    about = "Interactive contact form demo in the terminal"
)]
struct Cli {
    /// Simulated submit delay in milliseconds
    #[arg(long = "delay", value_name = "MS", default_value_t = 1200)]
    delay_ms: u64,

    /// Make the simulated submit fail with this reason
    #[arg(long = "fail", value_name = "REASON")]
    fail: Option<String>,

    /// Write the accepted record as JSON to this path instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Title shown at the top of the form
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Keep entered values after a successful send
    #[arg(long = "keep-on-success")]
    keep_on_success: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let delay = Duration::from_millis(cli.delay_ms);
    let action = match cli.fail {
        Some(reason) => DelayedSubmit::failing(delay, reason),
        None => DelayedSubmit::new(delay),
    };
    let options = UiOptions::default().with_clear_on_success(!cli.keep_on_success);

    let mut form = ContactForm::new(action).with_options(options);
    if let Some(title) = cli.title {
        form = form.with_title(title);
    }

    let accepted = form.run().map_err(|e| color_eyre::eyre::eyre!(e))?;
    let Some(record) = accepted else {
        eprintln!("no message was sent");
        return Ok(());
    };

    let json = serde_json::to_string_pretty(&record).wrap_err("failed to encode record")?;
    match cli.output {
        Some(path) => {
            fs::write(&path, json.as_bytes())
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            eprintln!("record written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
