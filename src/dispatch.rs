//! Turns the argument words into one of the tool's modes, and a mode into an answer.

use std::fmt;

use owo_colors::{OwoColorize, Style};

use crate::decision;

/// Words starting with this are flags, never options.
const FLAG_PREFIX: &str = "--";

const COIN_FLAG: &str = "--coin";
const YES_NO_FLAG: &str = "--yes-no";
const EIGHT_BALL_FLAG: &str = "--8ball";

pub const USAGE_TITLE: &str = "IDK - Decision Making Helper";
pub const USAGE_BODY: &str = "\
Usage:
  idk <option1> <option2> ... - Choose from options
  idk --coin - Flip a coin
  idk --yes-no - Yes or No decision
  idk --8ball - Magic 8-ball response";

const NO_VALID_OPTIONS: &str = "IDK... no valid options provided!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Usage,
    CoinFlip,
    YesOrNo,
    EightBall,
    Choose(Vec<String>),
    /// Only flags were given, and none of them is known.
    NoValidOptions,
}

impl Mode {
    /// Flags win over options, checked in the order coin, yes/no, 8-ball.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        if words.is_empty() {
            return Self::Usage;
        }

        let has_flag = |flag: &str| words.iter().any(|word| word.as_ref() == flag);

        if has_flag(COIN_FLAG) {
            Self::CoinFlip
        } else if has_flag(YES_NO_FLAG) {
            Self::YesOrNo
        } else if has_flag(EIGHT_BALL_FLAG) {
            Self::EightBall
        } else {
            let options: Vec<String> = words
                .iter()
                .map(|word| word.as_ref())
                .filter(|word| !word.starts_with(FLAG_PREFIX))
                .map(String::from)
                .collect();

            if options.is_empty() {
                Self::NoValidOptions
            } else {
                Self::Choose(options)
            }
        }
    }

    pub fn answer(self) -> Answer {
        match self {
            Self::Usage => Answer::Usage,
            Self::CoinFlip => Answer::verdict("Coin flip result:", decision::flip_coin()),
            Self::YesOrNo => Answer::verdict("Decision:", decision::yes_or_no()),
            Self::EightBall => Answer::verdict("Magic 8-ball says:", decision::eight_ball()),
            Self::Choose(options) => {
                Answer::verdict("IDK, but I choose:", decision::choose(options.as_slice()))
            }
            Self::NoValidOptions => Answer::NoValidOptions,
        }
    }
}

/// What gets printed. `Display` gives the plain text, [`Answer::colored`] the same text styled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Usage,
    Verdict { label: &'static str, value: String },
    NoValidOptions,
}

impl Answer {
    fn verdict(label: &'static str, value: &str) -> Self {
        Self::Verdict {
            label,
            value: value.to_owned(),
        }
    }

    pub fn colored(&self) -> Colored<'_> {
        Colored(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, with_color: bool) -> fmt::Result {
        let paint = |style: Style| with_color.then_some(style);

        match self {
            Self::Usage => {
                write_styled(f, USAGE_TITLE, paint(Style::new().bold()))?;
                write!(f, "\n{USAGE_BODY}")
            }
            Self::Verdict { label, value } => {
                write_styled(f, label, paint(Style::new().bold()))?;
                f.write_str(" ")?;
                write_styled(f, value, paint(Style::new().green()))
            }
            Self::NoValidOptions => write_styled(f, NO_VALID_OPTIONS, paint(Style::new().yellow())),
        }
    }
}

fn write_styled(f: &mut fmt::Formatter<'_>, text: &str, style: Option<Style>) -> fmt::Result {
    match style {
        Some(style) => write!(f, "{}", text.style(style)),
        None => f.write_str(text),
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, false)
    }
}

pub struct Colored<'a>(&'a Answer);

impl fmt::Display for Colored<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f, true)
    }
}
