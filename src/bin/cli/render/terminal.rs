use flashdeck_lib::flashcards::Flashcard;

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Numbered question/answer listing
pub fn render_cards(cards: &[Flashcard], use_color: bool) -> String {
    let width = cards.len().to_string().len();
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| {
            let number = format!("{:>width$}.", i + 1, width = width);
            let pad = " ".repeat(width + 2);
            format!(
                "{} {} {}\n{}{} {}",
                paint(&number, Color::GRAY, use_color),
                paint("Q:", Color::BOLD, use_color),
                card.question(),
                pad,
                paint("A:", Color::GREEN, use_color),
                card.answer()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A single card as shown during review
pub fn render_review_card(
    deck: &str,
    card: &Flashcard,
    position: (usize, usize),
    show_answer: bool,
    use_color: bool,
) -> String {
    let header = format!("{} · card {}/{}", deck, position.0, position.1);
    let (label, text, color) = if show_answer {
        ("Answer", card.answer(), Color::GREEN)
    } else {
        ("Question", card.question(), Color::CYAN)
    };

    format!(
        "{}\n{}\n{}",
        paint(&header, Color::DIM, use_color),
        paint(label, color, use_color),
        text
    )
}

pub fn render_prompt(use_color: bool) -> String {
    paint("[f]lip  [n]ext  [p]rev  [q]uit > ", Color::YELLOW, use_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_cards_plain() {
        let cards = vec![
            Flashcard::new("What is ATP?", "Energy currency."),
            Flashcard::new("Where is DNA?", "In the nucleus."),
        ];
        assert_eq!(
            render_cards(&cards, false),
            "1. Q: What is ATP?\n   A: Energy currency.\n\n2. Q: Where is DNA?\n   A: In the nucleus."
        );
    }

    #[test]
    fn test_render_cards_aligns_wide_numbers() {
        let cards: Vec<_> = (0..10).map(|i| Flashcard::new(format!("Q{}", i), "A")).collect();
        let out = render_cards(&cards, false);
        assert!(out.starts_with(" 1. Q: Q0\n    A: A"));
        assert!(out.ends_with("10. Q: Q9\n    A: A"));
    }

    #[test]
    fn test_render_review_card_faces() {
        let card = Flashcard::new("Q", "A");
        let front = render_review_card("Biology", &card, (2, 5), false, false);
        assert_eq!(front, "Biology · card 2/5\nQuestion\nQ");
        let back = render_review_card("Biology", &card, (2, 5), true, false);
        assert!(back.ends_with("Answer\nA"));
    }

    #[test]
    fn test_color_wraps_with_reset() {
        let out = render_prompt(true);
        assert!(out.starts_with(Color::YELLOW));
        assert!(out.ends_with(Color::RESET));
    }
}
