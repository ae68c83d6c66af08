use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed set of form options with a canonical, user-facing label.
pub trait OptionSet: Sized + Copy + 'static {
    /// The name of the form field, used in error messages.
    const KIND: &'static str;
    /// Every option, in the order the form offers them.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// The option a blank form field falls back to.
    fn first() -> Self {
        Self::ALL[0]
    }
}

/// Lowercases and drops separators so `News-based`, `news_based` and
/// `NEWSBASED` all compare equal.
fn fold(input: &str) -> String {
    input
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_option<T: OptionSet>(input: &str) -> Result<T, CoreError> {
    let wanted = fold(input.trim());
    T::ALL
        .iter()
        .copied()
        .find(|option| fold(option.label()) == wanted)
        .ok_or_else(|| CoreError::UnknownOption {
            kind: T::KIND,
            value: input.trim().to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Long,
    Short,
}

impl OptionSet for Direction {
    const KIND: &'static str = "direction";
    const ALL: &'static [Self] = &[Direction::Long, Direction::Short];

    fn label(&self) -> &'static str {
        match self {
            Direction::Long => "Long",
            Direction::Short => "Short",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Breakout,
    Pullback,
    #[serde(rename = "News-based")]
    NewsBased,
    Other,
}

impl OptionSet for Strategy {
    const KIND: &'static str = "strategy";
    const ALL: &'static [Self] = &[
        Strategy::Breakout,
        Strategy::Pullback,
        Strategy::NewsBased,
        Strategy::Other,
    ];

    fn label(&self) -> &'static str {
        match self {
            Strategy::Breakout => "Breakout",
            Strategy::Pullback => "Pullback",
            Strategy::NewsBased => "News-based",
            Strategy::Other => "Other",
        }
    }
}

/// Self-reported result of a trade. Never derived from the prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Profit,
    Loss,
    #[serde(rename = "Break-even")]
    BreakEven,
}

impl OptionSet for Outcome {
    const KIND: &'static str = "outcome";
    const ALL: &'static [Self] = &[Outcome::Profit, Outcome::Loss, Outcome::BreakEven];

    fn label(&self) -> &'static str {
        match self {
            Outcome::Profit => "Profit",
            Outcome::Loss => "Loss",
            Outcome::BreakEven => "Break-even",
        }
    }
}

/// The emotional state felt during a trade, ordered from calm to greedy the way
/// the journal's slider presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Calm,
    Neutral,
    Anxious,
    Overconfident,
    Fearful,
    Greedy,
}

impl Emotion {
    /// Position on the slider, starting at 0 for `Calm`.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

impl OptionSet for Emotion {
    const KIND: &'static str = "emotion";
    const ALL: &'static [Self] = &[
        Emotion::Calm,
        Emotion::Neutral,
        Emotion::Anxious,
        Emotion::Overconfident,
        Emotion::Fearful,
        Emotion::Greedy,
    ];

    fn label(&self) -> &'static str {
        match self {
            Emotion::Calm => "Calm",
            Emotion::Neutral => "Neutral",
            Emotion::Anxious => "Anxious",
            Emotion::Overconfident => "Overconfident",
            Emotion::Fearful => "Fearful",
            Emotion::Greedy => "Greedy",
        }
    }
}

macro_rules! impl_display_and_parse {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = CoreError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_option(s)
                }
            }
        )+
    };
}

impl_display_and_parse!(Direction, Strategy, Outcome, Emotion);
