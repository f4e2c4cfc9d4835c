//! Interactive play
//!
//! Asks the player yes/no questions until one character is left.

use crate::core::{Entity, ResponsePolicy};
use crate::interactive::Console;
use crate::output::formatters::{entropy_bar, format_candidates};
use crate::solver::{Round, Session, SessionState, StrategyType};
use colored::Colorize;
use std::io;

/// Settings for one game
#[derive(Debug, Clone, Copy, Default)]
pub struct GameConfig {
    pub strategy: StrategyType,
    pub policy: ResponsePolicy,
}

/// How a game ended
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    /// Name of the guessed character, `None` if unable to guess
    pub guess: Option<String>,
    pub rounds: Vec<Round>,
}

/// Run one interactive game over `entities`
///
/// Each round shows the chosen question, reads one line and narrows the
/// candidates. Input that the response policy does not accept as "yes" counts
/// as "no".
///
/// # Errors
///
/// Returns an error if the console cannot be written to or read from.
pub fn run_play<C: Console>(
    console: &mut C,
    entities: &[Entity],
    config: &GameConfig,
) -> io::Result<GameOutcome> {
    console.prompt(&format!(
        "\n{}\n",
        "Welcome to the Akinator-style game!".bright_cyan().bold()
    ))?;
    console.prompt("\nThink of a character from the following options:\n")?;
    for entity in entities {
        console.prompt(&format!("- {}\n", entity.name()))?;
    }

    let mut session = Session::new(config.strategy, entities);

    while let Some(question) = session.next_question() {
        console.prompt(&format!(
            "\nAsk about trait: {}\n   Entropy: [{}] {:.3} bits ({} of {} characters)\n",
            question.attribute.bright_yellow().bold(),
            entropy_bar(question.entropy, 20),
            question.entropy,
            question.count,
            question.total
        ))?;
        console.prompt("\nPlease respond with 'yes' or 'no': ")?;

        let response = console.read_line()?;
        let answer = config.policy.parse(&response);
        session.apply_answer(&question.attribute, answer);

        console.prompt(&format!(
            "\nYou answered '{answer}'. Narrowing down the characters...\n"
        ))?;
        console.prompt(&format!(
            "Remaining characters: {}\n",
            format_candidates(session.candidates())
        ))?;
    }

    let guess = match session.state() {
        SessionState::Guessed(entity) => {
            console.prompt(&format!(
                "\nCharacter guessed: {}\n",
                entity.name().bright_green().bold()
            ))?;
            Some(entity.name().to_string())
        }
        SessionState::Running | SessionState::Exhausted => {
            console.prompt(&format!(
                "\n{}\n",
                "Unable to guess the character. Try again!".red()
            ))?;
            None
        }
    };

    Ok(GameOutcome {
        guess,
        rounds: session.rounds().to_vec(),
    })
}
