use std::time::Duration;

use contactui::{ContactForm, DelayedSubmit};

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() -> AppResult<()> {
    let accepted = ContactForm::new(DelayedSubmit::new(Duration::from_millis(1200)))
        .with_title("Contact us")
        .run()?;

    match accepted {
        Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        None => eprintln!("no message was sent"),
    }
    Ok(())
}
