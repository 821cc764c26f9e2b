use rand::Rng;
use rand::seq::SliceRandom;
use shotlist_utils::dedup_preserving_order;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::debug;

pub const MIN_AGE: u8 = 21;
pub const MAX_AGE: u8 = 30;
pub const FALLBACK_AGE: u8 = 25;
pub const NONE_OPTION: &str = "none";
/// Chance that an empty multi-choice answer resolves to `"none"` when allowed.
pub const NONE_PROBABILITY: f64 = 0.25;

const MENU_HINT: &str = "Choose a number (ENTER = random/default): ";
const MULTI_MENU_HINT: &str = "Choose numbers (e.g., 1,3). ENTER = random: ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,
    #[error("failed to read or write prompt: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a free-text age was replaced by [`FALLBACK_AGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeWarning {
    NotANumber,
    TooYoung,
    TooOld,
}

impl AgeWarning {
    pub fn message(self) -> &'static str {
        match self {
            AgeWarning::NotANumber => "Age invalid. Using 25.",
            AgeWarning::TooYoung => "Age under 21 is not allowed. Using 25.",
            AgeWarning::TooOld => "Age over 30 not allowed for this pack. Using 25.",
        }
    }
}

/// Parses a 1-based menu answer into a 0-based index.
pub fn parse_menu_index(raw: &str, len: usize) -> Option<usize> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    let number: usize = raw.parse().ok()?;
    (1..=len).contains(&number).then(|| number - 1)
}

/// Parses a comma-separated multi-choice answer into de-duplicated 0-based indices.
///
/// Blank parts are ignored. Any invalid part rejects the whole answer, as does an
/// answer with no parts at all.
pub fn parse_multi_selection(raw: &str, len: usize) -> Option<Vec<usize>> {
    let parts: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        return None;
    }

    let indices = parts
        .into_iter()
        .map(|part| parse_menu_index(part, len))
        .collect::<Option<Vec<_>>>()?;

    Some(dedup_preserving_order(indices))
}

pub fn parse_yes_no(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Clamps a free-text age to the allowed band, substituting [`FALLBACK_AGE`].
pub fn enforce_adult_age(raw: &str) -> (u8, Option<AgeWarning>) {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return (FALLBACK_AGE, Some(AgeWarning::NotANumber));
    }

    // Digits only, so a parse failure means the value overflowed.
    let age = match raw.parse::<u32>() {
        Ok(age) => age,
        Err(_) => return (FALLBACK_AGE, Some(AgeWarning::TooOld)),
    };

    if age < u32::from(MIN_AGE) {
        (FALLBACK_AGE, Some(AgeWarning::TooYoung))
    } else if age > u32::from(MAX_AGE) {
        (FALLBACK_AGE, Some(AgeWarning::TooOld))
    } else {
        (age as u8, None)
    }
}

/// Line-oriented prompter over arbitrary streams and a caller-supplied RNG.
pub struct Prompter<R, W, G> {
    input: R,
    output: W,
    rng: G,
}

impl<R, W, G> Prompter<R, W, G>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    pub fn new(input: R, output: W, rng: G) -> Self {
        Self { input, output, rng }
    }

    pub fn into_parts(self) -> (R, W, G) {
        (self.input, self.output, self.rng)
    }

    /// Writes a line to the output stream.
    pub fn say(&mut self, message: &str) -> Result<(), InputError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one trimmed line.
    pub fn ask(&mut self, prompt: &str) -> Result<String, InputError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim().to_string())
    }

    pub fn text_or(&mut self, prompt: &str, default: &str) -> Result<String, InputError> {
        let value = self.ask(prompt)?;
        if value.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(value)
        }
    }

    /// Uniform-random element of a non-empty slice.
    pub fn pick<S: AsRef<str>>(&mut self, options: &[S]) -> String {
        debug_assert!(!options.is_empty());
        options
            .choose(&mut self.rng)
            .map(|option| option.as_ref().to_string())
            .unwrap_or_default()
    }

    pub fn choose<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
        default_index: Option<usize>,
    ) -> Result<String, InputError> {
        self.print_menu(prompt, options)?;

        loop {
            let raw = self.ask(MENU_HINT)?;
            if raw.is_empty() {
                let choice = match default_index.filter(|index| *index < options.len()) {
                    Some(index) => options[index].as_ref().to_string(),
                    None => self.pick(options),
                };
                debug!(%prompt, %choice, "menu resolved by default");
                return Ok(choice);
            }

            if let Some(index) = parse_menu_index(&raw, options.len()) {
                return Ok(options[index].as_ref().to_string());
            }
            self.say("Invalid choice. Please enter a valid number.")?;
        }
    }

    pub fn choose_many<S: AsRef<str>>(
        &mut self,
        prompt: &str,
        options: &[S],
        allow_none: bool,
    ) -> Result<Vec<String>, InputError> {
        self.print_menu(prompt, options)?;

        loop {
            let raw = self.ask(MULTI_MENU_HINT)?;
            if raw.is_empty() {
                let choices = self.random_selection(options, allow_none);
                debug!(%prompt, ?choices, "multi menu resolved randomly");
                return Ok(choices);
            }

            if raw.split(',').all(|part| part.trim().is_empty()) {
                self.say("Invalid input. Try again.")?;
                continue;
            }

            match parse_multi_selection(&raw, options.len()) {
                Some(indices) => {
                    return Ok(indices
                        .into_iter()
                        .map(|index| options[index].as_ref().to_string())
                        .collect());
                }
                None => self.say("Invalid selection. Please choose valid numbers.")?,
            }
        }
    }

    pub fn confirm(&mut self, prompt: &str, default_random: bool) -> Result<bool, InputError> {
        loop {
            let raw = self.ask(prompt)?;
            if raw.is_empty() {
                return Ok(if default_random {
                    self.rng.gen_bool(0.5)
                } else {
                    true
                });
            }

            if let Some(answer) = parse_yes_no(&raw) {
                return Ok(answer);
            }
            self.say("Please enter y or n (or ENTER for default).")?;
        }
    }

    /// Reads an age, using a random in-band age on empty input.
    pub fn age(&mut self, prompt: &str) -> Result<u8, InputError> {
        let random_age = self.rng.gen_range(MIN_AGE..=MAX_AGE).to_string();
        let raw = self.text_or(prompt, &random_age)?;

        let (age, warning) = enforce_adult_age(&raw);
        if let Some(warning) = warning {
            self.say(warning.message())?;
        }
        Ok(age)
    }

    fn print_menu<S: AsRef<str>>(&mut self, prompt: &str, options: &[S]) -> Result<(), InputError> {
        writeln!(self.output, "{prompt}")?;
        for (number, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", number + 1, option.as_ref())?;
        }
        Ok(())
    }

    fn random_selection<S: AsRef<str>>(&mut self, options: &[S], allow_none: bool) -> Vec<String> {
        let has_none = options.iter().any(|option| option.as_ref() == NONE_OPTION);
        if allow_none && has_none && self.rng.gen_bool(NONE_PROBABILITY) {
            return vec![NONE_OPTION.to_string()];
        }

        let count = if options.len() == 1 {
            1
        } else {
            self.rng.gen_range(1..=2)
        };

        options
            .choose_multiple(&mut self.rng, count.min(options.len()))
            .map(|option| option.as_ref().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests;
