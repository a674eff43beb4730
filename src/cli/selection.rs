//! Parsing of menu answers: numbers, names and the `back` keyword.

use strsim::levenshtein;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Zero-based index into the offered options.
    Index(usize),
    Back,
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantityInput {
    Amount(u64),
    Back,
    Invalid(String),
}

fn is_back(input: &str) -> bool {
    input == "0" || input.eq_ignore_ascii_case("back")
}

/// Resolves an answer against numbered `options`.
///
/// Numbers win over names, and `0`/`back` win over both when `allow_back` is set.
pub fn parse_selection(input: &str, options: &[String], allow_back: bool) -> Selection {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Selection::Invalid("Please choose an option.".to_string());
    }
    if allow_back && is_back(trimmed) {
        return Selection::Back;
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        return if (1..=options.len()).contains(&number) {
            Selection::Index(number - 1)
        } else if options.is_empty() {
            Selection::Invalid("There is nothing to choose here.".to_string())
        } else {
            Selection::Invalid(format!(
                "Choose a number between 1 and {}.",
                options.len()
            ))
        };
    }

    if let Some(index) = options
        .iter()
        .position(|option| option.eq_ignore_ascii_case(trimmed))
    {
        return Selection::Index(index);
    }

    match suggest(trimmed, options) {
        Some(candidate) => Selection::Invalid(format!(
            "Unknown option `{trimmed}`. Did you mean `{candidate}`?"
        )),
        None => Selection::Invalid(format!("Unknown option `{trimmed}`.")),
    }
}

/// Parses a quantity to remove. `0` and `back` leave the prompt.
pub fn parse_quantity(input: &str) -> QuantityInput {
    let trimmed = input.trim();
    if is_back(trimmed) {
        return QuantityInput::Back;
    }
    match trimmed.parse::<u64>() {
        Ok(amount) => QuantityInput::Amount(amount),
        Err(_) if trimmed.starts_with('-') && trimmed[1..].parse::<u64>().is_ok() => {
            QuantityInput::Invalid("Quantity must be positive.".to_string())
        }
        Err(_) => QuantityInput::Invalid(format!(
            "`{trimmed}` is not a whole number of units."
        )),
    }
}

fn suggest<'a>(input: &str, options: &'a [String]) -> Option<&'a str> {
    let needle = input.to_lowercase();
    let limit = (needle.chars().count() / 3).max(2);
    options
        .iter()
        .map(|option| (levenshtein(&needle, &option.to_lowercase()), option))
        .filter(|(distance, _)| *distance <= limit)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, option)| option.as_str())
}
