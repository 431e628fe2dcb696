use anyhow::Result;

use crate::app::App;
use crate::render::terminal::render_cards;
use crate::{GenerateArgs, OutputFormat};

pub fn run(app: &mut App, args: &GenerateArgs, format: &OutputFormat, use_color: bool) -> Result<()> {
    let cards = app.generate(args)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        OutputFormat::Plain => {
            println!("{}", render_cards(&cards, use_color));
            eprintln!("\n{} cards stored in deck '{}'", cards.len(), args.deck.trim());
        }
    }

    Ok(())
}
