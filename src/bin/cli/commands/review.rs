use std::io::{self, BufRead, Write};

use anyhow::{bail, Result};

use flashdeck_lib::deck::StudySession;

use crate::app::App;
use crate::render::terminal::{render_prompt, render_review_card};
use crate::GenerateArgs;

#[derive(Debug, PartialEq, Eq)]
enum Step {
    Continue,
    Quit,
    Unknown,
}

fn apply_key(session: &mut StudySession, input: &str) -> Step {
    match input.trim().to_lowercase().as_str() {
        "f" | "flip" | "" => session.flip(),
        "n" | "next" => session.next(),
        "p" | "prev" => session.prev(),
        "q" | "quit" => return Step::Quit,
        _ => return Step::Unknown,
    }
    Step::Continue
}

pub fn run(app: &mut App, args: &GenerateArgs, use_color: bool) -> Result<()> {
    if args.files.iter().any(|f| f == "-") {
        bail!("Review reads keys from stdin; pass document files instead of '-'");
    }

    let cards = app.generate(args)?;
    println!("{} cards ready in deck '{}'\n", cards.len(), args.deck.trim());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        let session = &app.session;
        let (Some(card), Some(position)) = (session.current_card(), session.position()) else {
            break;
        };
        let deck = session.current_deck().unwrap_or_default();
        println!(
            "{}",
            render_review_card(deck, card, position, session.is_showing_answer(), use_color)
        );
        print!("{}", render_prompt(use_color));
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        match apply_key(&mut app.session, &line?) {
            Step::Quit => break,
            Step::Unknown => println!("Unknown key; use f, n, p or q"),
            Step::Continue => {}
        }
        println!();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashdeck_lib::flashcards::Flashcard;

    fn session() -> StudySession {
        let mut session = StudySession::new();
        session.select_deck("Default").unwrap();
        session
            .store_generated(vec![Flashcard::new("Q1", "A1"), Flashcard::new("Q2", "A2")])
            .unwrap();
        session
    }

    #[test]
    fn test_keys_drive_session() {
        let mut session = session();
        assert_eq!(apply_key(&mut session, "f\n"), Step::Continue);
        assert_eq!(session.visible_text(), Some("A1"));

        apply_key(&mut session, "N");
        assert_eq!(session.visible_text(), Some("Q2"));

        apply_key(&mut session, "p");
        assert_eq!(session.position(), Some((1, 2)));
    }

    #[test]
    fn test_quit_and_unknown_keys() {
        let mut session = session();
        assert_eq!(apply_key(&mut session, "q"), Step::Quit);
        assert_eq!(apply_key(&mut session, "x"), Step::Unknown);
        assert_eq!(session.position(), Some((1, 2)));
    }
}
