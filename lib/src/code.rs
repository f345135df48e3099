use crate::results::MastermindError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// One color from the code palette.
///
/// The full enumeration holds six colors; a game restricts itself to the first
/// [`palette_size`](crate::GameConfig::palette_size) colors in [`Color::ALL`]
/// order. The default palette of four is red, green, blue and yellow.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    /// The number of supported colors.
    pub const COUNT: usize = 6;

    /// Every supported color, in palette order.
    pub const ALL: [Color; Color::COUNT] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
    ];

    /// This color's position in [`Color::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the next color within the first `palette_size` colors, wrapping
    /// around at the end of the palette.
    ///
    /// Front ends use this to cycle a slot through the available colors on
    /// each tap or key press.
    pub fn cycle(&self, palette_size: usize) -> Color {
        Color::ALL[(self.index() + 1) % palette_size.min(Color::COUNT)]
    }

    /// The one-letter identifier used when parsing guesses.
    pub fn letter(&self) -> char {
        match self {
            Color::Red => 'r',
            Color::Green => 'g',
            Color::Blue => 'b',
            Color::Yellow => 'y',
            Color::Orange => 'o',
            Color::Purple => 'p',
        }
    }

    /// The color's logical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Purple => "purple",
        }
    }

    /// Parses a color from its one-letter identifier, ignoring case.
    pub fn from_letter(letter: char) -> Result<Color, MastermindError> {
        let lower = letter.to_ascii_lowercase();
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.letter() == lower)
            .ok_or(MastermindError::UnsupportedColor(letter))
    }

    /// Draws one color uniformly from the first `palette_size` colors.
    pub fn sample_from<R: Rng + ?Sized>(rng: &mut R, palette_size: usize) -> Color {
        Color::ALL[rng.gen_range(0..palette_size)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered sequence of colors, representing either the secret or a guess.
///
/// A `Code` is immutable once created; front ends build a fresh one for each
/// submitted guess.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Code(Vec<Color>);

impl Code {
    /// Constructs a code from the given colors.
    pub fn new(colors: Vec<Color>) -> Code {
        Code(colors)
    }

    /// Generates a code of `length` colors drawn uniformly, with replacement,
    /// from the first `palette_size` colors. Repeated colors are allowed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize, palette_size: usize) -> Code {
        Code(
            (0..length)
                .map(|_| Color::sample_from(rng, palette_size))
                .collect(),
        )
    }

    /// The number of slots in this code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The colors in slot order.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl From<Vec<Color>> for Code {
    fn from(colors: Vec<Color>) -> Code {
        Code(colors)
    }
}

impl FromStr for Code {
    type Err = MastermindError;

    /// Parses a code from one letter per slot, e.g. `"rgby"`.
    fn from_str(input: &str) -> Result<Code, MastermindError> {
        input
            .chars()
            .map(Color::from_letter)
            .collect::<Result<Vec<Color>, MastermindError>>()
            .map(Code)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cycle_wraps_within_palette() {
        assert_eq!(Color::Red.cycle(4), Color::Green);
        assert_eq!(Color::Yellow.cycle(4), Color::Red);
        assert_eq!(Color::Yellow.cycle(6), Color::Orange);
        assert_eq!(Color::Purple.cycle(6), Color::Red);
    }

    #[test]
    fn from_letter_ignores_case() {
        assert_eq!(Color::from_letter('r'), Ok(Color::Red));
        assert_eq!(Color::from_letter('Y'), Ok(Color::Yellow));
    }

    #[test]
    fn from_letter_rejects_unknown() {
        assert_eq!(
            Color::from_letter('x'),
            Err(MastermindError::UnsupportedColor('x'))
        );
    }

    #[test]
    fn code_parses_and_displays_letters() {
        let code: Code = "rgby".parse().unwrap();
        assert_eq!(
            code.colors(),
            [Color::Red, Color::Green, Color::Blue, Color::Yellow]
        );
        assert_eq!(code.to_string(), "rgby");
    }

    #[test]
    fn code_parse_surfaces_bad_letter() {
        assert_eq!(
            "rgbq".parse::<Code>(),
            Err(MastermindError::UnsupportedColor('q'))
        );
    }
}
