// Input validation helpers. The parsers are pure; the `read_*` functions
// wrap them in a reprompt loop over any `Console`.

use anyhow::Result;
use tracing::debug;

use crate::console::Console;
use crate::error::InputError;
use crate::money::Money;

pub const INVALID_INTEGER: &str = "⚠️ Invalid input. Please enter the correct value.";
pub const INVALID_DECIMAL: &str = "⚠️ Invalid input. Please enter a valid number.";
pub const INVALID_CHOICE_INPUT: &str =
    "⚠️ Invalid input. Please enter an integer value for your choice.";

/// Parses a strictly positive integer that fits a stock count.
pub fn parse_positive_integer(text: &str) -> Result<u32, InputError> {
    let text = text.trim();
    let value: i64 = text.parse().map_err(|_| InputError::NotANumber {
        input: text.to_string(),
    })?;
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(InputError::OutOfRange {
            input: text.to_string(),
        }),
    }
}

pub fn parse_non_negative_decimal(text: &str) -> Result<Money, InputError> {
    Money::parse_non_negative(text)
}

/// Any integer is a well-formed menu choice; whether it names an entry is
/// the menu's business.
pub fn parse_menu_choice(text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    text.parse().map_err(|_| InputError::NotANumber {
        input: text.to_string(),
    })
}

/// Asks until `parse` accepts a line. `None` means input ended.
fn read_until<C, T, F>(console: &mut C, prompt: &str, warning: &str, parse: F) -> Result<Option<T>>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T, InputError>,
{
    loop {
        let Some(line) = console.line(prompt)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                debug!(prompt, error = %err, "input rejected");
                console.warn(warning)?;
            }
        }
    }
}

pub fn read_positive_integer<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<Option<u32>> {
    read_until(console, prompt, INVALID_INTEGER, parse_positive_integer)
}

pub fn read_non_negative_decimal<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<Option<Money>> {
    read_until(console, prompt, INVALID_DECIMAL, parse_non_negative_decimal)
}

/// Reads a free-text line. Empty names are allowed.
pub fn read_text<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<Option<String>> {
    console.line(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::LineConsole;
    use std::io::Cursor;

    fn console(input: &str) -> LineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        LineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(parse_positive_integer("5"), Ok(5));
        assert_eq!(parse_positive_integer("  42 "), Ok(42));
        assert!(matches!(parse_positive_integer("0"), Err(InputError::OutOfRange { .. })));
        assert!(matches!(parse_positive_integer("-3"), Err(InputError::OutOfRange { .. })));
        assert!(matches!(
            parse_positive_integer("99999999999"),
            Err(InputError::OutOfRange { .. })
        ));
        assert!(matches!(parse_positive_integer("3.5"), Err(InputError::NotANumber { .. })));
        assert!(matches!(parse_positive_integer("5 apples"), Err(InputError::NotANumber { .. })));
        assert!(matches!(parse_positive_integer(""), Err(InputError::NotANumber { .. })));
    }

    #[test]
    fn test_parse_menu_choice_accepts_any_integer() {
        assert_eq!(parse_menu_choice("3"), Ok(3));
        assert_eq!(parse_menu_choice("-7"), Ok(-7));
        assert!(parse_menu_choice("three").is_err());
    }

    #[test]
    fn test_read_positive_integer_reprompts() {
        let mut c = console("abc\n0\n-2\n7\n");
        assert_eq!(read_positive_integer(&mut c, "Enter Quantity").unwrap(), Some(7));
        let out = c.into_output();
        assert_eq!(out.matches(INVALID_INTEGER).count(), 3);
        assert_eq!(out.matches("Enter Quantity: ").count(), 4);
    }

    #[test]
    fn test_read_non_negative_decimal_reprompts() {
        let mut c = console("-1\nfree\n12.5\n");
        assert_eq!(
            read_non_negative_decimal(&mut c, "Enter Price").unwrap(),
            Some(Money::from_minor(1250))
        );
        assert_eq!(c.into_output().matches(INVALID_DECIMAL).count(), 2);
    }

    #[test]
    fn test_read_returns_none_at_end_of_input() {
        let mut c = console("nope\n");
        assert_eq!(read_positive_integer(&mut c, "Enter Pages").unwrap(), None);
    }

    #[test]
    fn test_read_text_keeps_whitespace() {
        let mut c = console("  The  Hobbit \n\n");
        assert_eq!(
            read_text(&mut c, "Enter Book Name").unwrap().as_deref(),
            Some("  The  Hobbit ")
        );
        assert_eq!(read_text(&mut c, "Enter Book Name").unwrap().as_deref(), Some(""));
    }
}
