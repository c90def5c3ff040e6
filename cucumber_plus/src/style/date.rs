//! Translation of `DateTimeFormatter`-style patterns into `chrono` items.
//!
//! Configuration files written for the plugin use the pattern letters of the
//! JVM date formatter (`dd/MM/yyyy`, `EEEE d MMMM`, ...). Only the letters
//! that make sense for a local date and time are accepted; zone and era
//! letters are rejected rather than silently printed. Optional sections
//! (`[...]`) always print, since a local date-time has every field.

use std::iter::Peekable;
use std::str::Chars;

use chrono::NaiveDateTime;
use chrono::format::{Fixed, Item, Numeric, Pad, StrftimeItems};

use crate::{ConfigError, ConfigResult};

/// A parsed date pattern ready to format timestamps.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use cucumber_plus::DatePattern;
///
/// # fn main() -> Result<(), std::sync::Arc<cucumber_plus::ConfigError>> {
/// let pattern = DatePattern::parse("dd/MM/yyyy 'at' HH:mm")?;
/// let now = NaiveDate::from_ymd_opt(2024, 3, 7)
///     .and_then(|date| date.and_hms_opt(9, 5, 0))
///     .unwrap_or_default();
/// assert_eq!(pattern.format(&now), "07/03/2024 at 09:05");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DatePattern {
    items: Vec<Item<'static>>,
}

impl DatePattern {
    /// Parses `pattern`.
    ///
    /// Letters are grouped into runs; the run length selects the field width
    /// or text style. Text between single quotes is copied verbatim, and `''`
    /// produces one quote. Brackets open and close optional sections. Every
    /// other non-letter character is a literal.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DateFormat`] for unsupported pattern letters,
    /// unterminated quoted literals and a `]` without a matching `[`.
    pub fn parse(pattern: &str) -> ConfigResult<Self> {
        let mut items = Vec::new();
        let mut chars = pattern.chars().peekable();
        let mut optional_depth = 0_usize;
        while let Some(c) = chars.next() {
            if c == '\'' {
                items.push(Item::OwnedLiteral(quoted(pattern, &mut chars)?.into()));
            } else if c == '[' {
                optional_depth += 1;
            } else if c == ']' {
                optional_depth = optional_depth.checked_sub(1).ok_or_else(|| {
                    ConfigError::date_format(pattern, "']' without a matching '['")
                })?;
            } else if c.is_ascii_alphabetic() {
                let run = 1 + count_run(&mut chars, c);
                items.push(field(c, run).ok_or_else(|| {
                    ConfigError::date_format(pattern, format!("unsupported pattern letter '{c}'"))
                })?);
            } else {
                items.push(Item::OwnedLiteral(c.to_string().into()));
            }
        }
        Ok(Self { items })
    }

    /// Formats `now` with the parsed pattern.
    #[must_use]
    pub fn format(&self, now: &NaiveDateTime) -> String {
        now.format_with_items(self.items.iter()).to_string()
    }
}

fn count_run(chars: &mut Peekable<Chars<'_>>, letter: char) -> usize {
    let mut run = 0;
    while chars.next_if_eq(&letter).is_some() {
        run += 1;
    }
    run
}

fn quoted(pattern: &str, chars: &mut Peekable<Chars<'_>>) -> ConfigResult<String> {
    let mut literal = String::new();
    if chars.next_if_eq(&'\'').is_some() {
        literal.push('\'');
        return Ok(literal);
    }
    loop {
        match chars.next() {
            Some('\'') if chars.next_if_eq(&'\'').is_some() => literal.push('\''),
            Some('\'') => return Ok(literal),
            Some(c) => literal.push(c),
            None => {
                return Err(
                    ConfigError::date_format(pattern, "unterminated quoted literal").into(),
                );
            }
        }
    }
}

const fn numeric(field: Numeric, run: usize) -> Item<'static> {
    Item::Numeric(field, if run >= 2 { Pad::Zero } else { Pad::None })
}

fn field(letter: char, run: usize) -> Option<Item<'static>> {
    let item = match (letter, run) {
        ('y' | 'u', 2) => Item::Numeric(Numeric::YearMod100, Pad::Zero),
        ('y' | 'u', _) => numeric(Numeric::Year, run),
        ('M' | 'L', 3) => Item::Fixed(Fixed::ShortMonthName),
        ('M' | 'L', 4..) => Item::Fixed(Fixed::LongMonthName),
        ('M' | 'L', _) => numeric(Numeric::Month, run),
        ('d', _) => numeric(Numeric::Day, run),
        ('D', _) => numeric(Numeric::Ordinal, run),
        ('E', 4..) => Item::Fixed(Fixed::LongWeekdayName),
        ('E', _) => Item::Fixed(Fixed::ShortWeekdayName),
        ('a', _) => Item::Fixed(Fixed::UpperAmPm),
        ('H', _) => numeric(Numeric::Hour, run),
        ('h', _) => numeric(Numeric::Hour12, run),
        ('m', _) => numeric(Numeric::Minute, run),
        ('s', _) => numeric(Numeric::Second, run),
        ('S', 3 | 6 | 9) => return fraction(run),
        _ => return None,
    };
    Some(item)
}

/// Fraction of the second truncated to `digits`, without a leading dot.
fn fraction(digits: usize) -> Option<Item<'static>> {
    let strftime = match digits {
        3 => "%3f",
        6 => "%6f",
        _ => "%9f",
    };
    StrftimeItems::new(strftime).next()
}
