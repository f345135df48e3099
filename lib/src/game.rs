use crate::code::{Code, Color};
use crate::results::{Feedback, GameStatus, GuessRecord, MastermindError};
use crate::scoring::evaluate;
use rand::Rng;

/// Configuration constants for a game session.
///
/// The defaults reproduce the classic setup: a four-slot code over a
/// four-color palette, with twelve guesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// The number of slots in the secret and in every guess.
    pub code_length: usize,
    /// How many colors from [`Color::ALL`] are in play.
    pub palette_size: usize,
    /// The maximum number of guesses before the game is lost.
    pub max_turns: usize,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            code_length: 4,
            palette_size: 4,
            max_turns: 12,
        }
    }
}

impl GameConfig {
    fn validate(&self) {
        if self.code_length == 0
            || self.max_turns == 0
            || self.palette_size == 0
            || self.palette_size > Color::COUNT
        {
            panic!(
                "Game configuration ({:?}) must have at least one slot, turn, and color, and at most {} colors",
                self,
                Color::COUNT
            );
        }
    }
}

/// A single game of code-breaking.
///
/// The session owns the secret, the ordered history of guesses, and the turn
/// budget, and is exclusively owned by whichever front end drives the game.
/// All mutation goes through [`start`](GameSession::start) and
/// [`submit`](GameSession::submit); the status is always derived from the
/// recorded history, so it can never disagree with it.
pub struct GameSession {
    config: GameConfig,
    secret: Code,
    history: Vec<GuessRecord>,
}

impl GameSession {
    /// Creates a session with a freshly drawn secret.
    ///
    /// Panics if the configuration is invalid (zero slots, turns or colors,
    /// or more colors than the palette supports).
    pub fn new(config: GameConfig) -> GameSession {
        GameSession::with_rng(config, &mut rand::thread_rng())
    }

    /// Creates a session drawing the secret from the given source of
    /// randomness.
    pub fn with_rng<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> GameSession {
        config.validate();
        GameSession {
            config,
            secret: Code::random(rng, config.code_length, config.palette_size),
            history: Vec::new(),
        }
    }

    /// Creates a session with a fixed secret, for tests and front ends that
    /// want a deterministic puzzle.
    ///
    /// Panics if the secret does not match the configured length or uses a
    /// color outside the configured palette.
    pub fn with_secret(config: GameConfig, secret: Code) -> GameSession {
        config.validate();
        if secret.len() != config.code_length
            || secret
                .colors()
                .iter()
                .any(|color| color.index() >= config.palette_size)
        {
            panic!(
                "Secret ({}) does not fit the game configuration ({:?})",
                secret, config
            );
        }
        GameSession {
            config,
            secret,
            history: Vec::new(),
        }
    }

    /// Starts a new game: draws a fresh secret, clears the guess history, and
    /// returns the session to [`GameStatus::InProgress`].
    ///
    /// The new secret is drawn uniformly, with replacement, from the
    /// configured palette; it is never revealed by this operation.
    pub fn start(&mut self) {
        self.start_with_rng(&mut rand::thread_rng());
    }

    /// Same as [`start`](GameSession::start), drawing the secret from the
    /// given source of randomness.
    pub fn start_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.secret = Code::random(rng, self.config.code_length, self.config.palette_size);
        self.history.clear();
    }

    /// The configuration this session was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All guesses submitted in this game so far, oldest first.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// The current state of the game, derived from the recorded history.
    pub fn status(&self) -> GameStatus {
        match self.history.last() {
            Some(record) if record.feedback.exact == self.config.code_length => GameStatus::Won,
            Some(_) if self.history.len() >= self.config.max_turns => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// The secret code.
    ///
    /// This is a read accessor with no side effects, intended for showing the
    /// answer once the game is over. Front ends should not display it while
    /// the game is still in progress.
    pub fn reveal_secret(&self) -> &Code {
        &self.secret
    }

    /// Scores `guess` against the secret, appends it to the history, and
    /// returns its feedback along with the status it produced.
    ///
    /// Fails with [`MastermindError::InvalidGuessLength`] if the guess does
    /// not have exactly the configured number of slots, and with
    /// [`MastermindError::GameAlreadyOver`] once the session has left
    /// `InProgress`; submitting after the game is over fails rather than
    /// no-ops so that misuse is visible. Either failure leaves the history
    /// and status untouched.
    pub fn submit(&mut self, guess: Code) -> Result<(Feedback, GameStatus), MastermindError> {
        if guess.len() != self.config.code_length {
            return Err(MastermindError::InvalidGuessLength {
                expected: self.config.code_length,
                actual: guess.len(),
            });
        }
        if self.status().is_over() {
            return Err(MastermindError::GameAlreadyOver);
        }
        let feedback = evaluate(&self.secret, &guess);
        self.history.push(GuessRecord { guess, feedback });
        Ok((feedback, self.status()))
    }
}
