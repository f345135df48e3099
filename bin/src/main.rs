use clap::Parser;
use rs_mastermind::*;
use std::io;
use std::io::Write;

/// Simple program to play a Mastermind-style code-breaking game in the
/// terminal. The program picks a secret code; you guess it by entering one
/// letter per slot.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Number of slots in the secret code.
    #[clap(short = 's', long, default_value_t = 4)]
    slots: usize,

    /// Number of colors in play, out of the six supported.
    #[clap(short = 'p', long, default_value_t = 4)]
    palette: usize,

    /// Maximum number of guesses before the game is lost.
    #[clap(short = 't', long, default_value_t = 12)]
    turns: usize,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if args.slots == 0 || args.turns == 0 || args.palette == 0 || args.palette > Color::COUNT {
        eprintln!(
            "Error: slots and turns must be at least 1, and the palette must have between 1 and {} colors.",
            Color::COUNT
        );
        std::process::exit(1);
    }

    let config = GameConfig {
        code_length: args.slots,
        palette_size: args.palette,
        max_turns: args.turns,
    };
    let mut session = GameSession::new(config);

    println!("I've picked a secret code of {} colors. The palette is:", config.code_length);
    for color in &Color::ALL[..config.palette_size] {
        println!("  '{}' = {}", color.letter(), color);
    }
    let example: String = Color::ALL[..config.palette_size]
        .iter()
        .cycle()
        .take(config.code_length)
        .map(|color| color.letter())
        .collect();
    println!(
        "Enter one letter per slot (e.g. \"{}\"). You have {} guesses.\n",
        example, config.max_turns
    );

    loop {
        play_one_game(&mut session)?;

        print!("Play again? (y/n): ");
        io::stdout().flush()?;
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
        if !buffer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        session.start();
        println!();
    }
}

fn play_one_game(session: &mut GameSession) -> io::Result<()> {
    let config = *session.config();
    while session.status() == GameStatus::InProgress {
        print!(
            "Guess {}/{}: ",
            session.history().len() + 1,
            config.max_turns
        );
        io::stdout().flush()?;
        let guess = read_guess(&config)?;

        match session.submit(guess) {
            Ok((feedback, status)) => {
                println!(
                    "  {} in the right slot, {} more with the right color.",
                    feedback.exact, feedback.color_only
                );
                match status {
                    GameStatus::Won => {
                        println!(
                            "You cracked it in {} guesses!",
                            session.history().len()
                        );
                    }
                    GameStatus::Lost => {
                        println!(
                            "Out of guesses! The code was: {}.",
                            describe(session.reveal_secret())
                        );
                    }
                    GameStatus::InProgress => {}
                }
            }
            Err(err) => println!("{}. Try again.", err),
        }
    }
    Ok(())
}

/// Reads guesses from stdin until one parses and fits the game, re-prompting
/// on anything else.
fn read_guess(config: &GameConfig) -> io::Result<Code> {
    loop {
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
        let input = buffer.trim();

        match input.parse::<Code>() {
            Ok(code) => {
                if code.len() != config.code_length {
                    println!(
                        "Enter exactly {} colors, one letter each. Try again.",
                        config.code_length
                    );
                    continue;
                }
                if let Some(color) = code
                    .colors()
                    .iter()
                    .find(|color| color.index() >= config.palette_size)
                {
                    println!("{} is not in play in this game. Try again.", color);
                    continue;
                }
                return Ok(code);
            }
            Err(err) => println!("{}. Try again.", err),
        }
    }
}

/// Formats a code by its logical color names for the end-of-game reveal.
fn describe(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|color| color.name())
        .collect::<Vec<_>>()
        .join(", ")
}
