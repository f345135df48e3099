use crate::code::Code;
use std::error::Error;
use std::fmt;

/// The result of scoring a single guess against the secret.
///
/// `exact` counts slots that match the secret in both color and position.
/// `color_only` counts additional colors that are present in both codes but
/// misplaced, bounded by the per-color count remaining on each side after
/// exact matches are removed. Every secret slot and every guess slot
/// contributes to at most one of the two counts, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feedback {
    pub exact: usize,
    pub color_only: usize,
}

/// One submitted guess along with its feedback.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuessRecord {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Whether the game is still going, or how it ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Guesses are still being accepted.
    InProgress,
    /// The last guess matched the secret exactly.
    Won,
    /// The turn budget ran out without a winning guess.
    Lost,
}

impl GameStatus {
    /// Returns `true` for `Won` and `Lost`.
    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// Indicates that an error occurred while trying to play a guess.
///
/// Every variant is a recoverable caller condition: the session state is
/// left untouched, and the caller should reject the offending input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MastermindError {
    /// Indicates that the guess did not have exactly the configured number of
    /// slots.
    InvalidGuessLength { expected: usize, actual: usize },
    /// Indicates that `submit` was called after the game reached `Won` or
    /// `Lost`.
    GameAlreadyOver,
    /// Indicates that a color identifier is not in the supported set.
    UnsupportedColor(char),
}

impl fmt::Display for MastermindError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MastermindError::InvalidGuessLength { expected, actual } => write!(
                f,
                "Guess must have exactly {} colors, but had {}",
                expected, actual
            ),
            MastermindError::GameAlreadyOver => write!(f, "The game is already over"),
            MastermindError::UnsupportedColor(letter) => {
                write!(f, "'{}' is not a supported color", letter)
            }
        }
    }
}

impl Error for MastermindError {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn error_messages_name_the_problem() {
        let err = MastermindError::InvalidGuessLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Guess must have exactly 4 colors, but had 3"
        );
        assert_eq!(
            MastermindError::UnsupportedColor('x').to_string(),
            "'x' is not a supported color"
        );
    }
}
