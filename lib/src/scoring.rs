use crate::code::{Code, Color};
use crate::results::Feedback;

/// Determines the [`Feedback`] for the given `guess` when applied to the
/// given `secret`.
///
/// Scoring is done in two passes. The first pass counts exact matches and
/// removes both slots from further consideration. The second pass counts the
/// remaining slots per color on each side and sums the per-color minimum, so
/// a repeated color is never credited more often than it remains available
/// on both sides. No slot is ever overwritten with a marker value; consumed
/// slots simply never enter the per-color counts.
///
/// The result is deterministic and the function has no side effects.
///
/// Panics if `secret` and `guess` have different lengths. That is a caller
/// bug, not a game condition.
pub fn evaluate(secret: &Code, guess: &Code) -> Feedback {
    if secret.len() != guess.len() {
        panic!(
            "Secret ({}) must have the same length as the guess ({})",
            secret, guess
        );
    }
    let mut exact = 0;
    let mut secret_remaining = [0usize; Color::COUNT];
    let mut guess_remaining = [0usize; Color::COUNT];
    for (s, g) in secret.colors().iter().zip(guess.colors()) {
        if s == g {
            exact += 1;
        } else {
            secret_remaining[s.index()] += 1;
            guess_remaining[g.index()] += 1;
        }
    }
    let color_only = secret_remaining
        .iter()
        .zip(guess_remaining.iter())
        .map(|(&s, &g)| s.min(g))
        .sum();
    Feedback { exact, color_only }
}
