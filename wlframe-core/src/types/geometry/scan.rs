//! Token scanner for the textual geometry forms.
//!
//! [`Scanner`] walks a string slice left to right. Every token-consuming
//! method skips leading whitespace first, so grammars built on top of it
//! accept optional whitespace around every token without spelling it out.
//!
//! ```
//! use wlframe_core::types::Scanner;
//!
//! let mut scanner = Scanner::new(" [1, 2.5 ] ");
//! let [a, b] = scanner.delimited::<f64, 2>('[', ']').unwrap();
//! assert_eq!((a, b), (1.0, 2.5));
//! assert!(scanner.finish().is_ok());
//! ```

use super::Scalar;
use crate::error::GeometryParseError;

/// Characters that may appear in a numeric token.
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

/// A cursor over a string being parsed.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Advances past any whitespace.
    pub fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Returns the next non-whitespace character without consuming it.
    pub fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.rest().chars().next()
    }

    /// Consumes `token` if it is the next non-whitespace character.
    pub fn eat(&mut self, token: char) -> bool {
        if self.peek() == Some(token) {
            self.pos += token.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `token` or fails, naming `expected` in the error.
    pub fn expect(&mut self, token: char, expected: &'static str) -> Result<(), GeometryParseError> {
        match self.peek() {
            Some(c) if c == token => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(found) => Err(GeometryParseError::UnexpectedChar {
                expected,
                found,
                position: self.pos,
            }),
            None => Err(GeometryParseError::UnexpectedEnd {
                expected,
                position: self.pos,
            }),
        }
    }

    /// Consumes a numeric token and converts it with `T::from_str`.
    ///
    /// A token that only converts to an infinity (such as `1e400`) is rejected
    /// like any other malformed number.
    pub fn number<T: Scalar>(&mut self) -> Result<T, GeometryParseError> {
        let start = match self.peek() {
            Some(c) if is_number_char(c) => self.pos,
            Some(found) => {
                return Err(GeometryParseError::UnexpectedChar {
                    expected: "a number",
                    found,
                    position: self.pos,
                })
            }
            None => {
                return Err(GeometryParseError::UnexpectedEnd {
                    expected: "a number",
                    position: self.pos,
                })
            }
        };

        let len = self
            .rest()
            .find(|c: char| !is_number_char(c))
            .unwrap_or_else(|| self.rest().len());
        let text = &self.input[start..start + len];
        let value = text
            .parse::<T>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| GeometryParseError::InvalidNumber {
                text: text.to_string(),
                position: start,
            })?;
        self.pos = start + len;
        Ok(value)
    }

    /// Parses `open n1 , n2 , ... , nN close` into an array of `N` numbers.
    pub fn delimited<T, const N: usize>(
        &mut self,
        open: char,
        close: char,
    ) -> Result<[T; N], GeometryParseError>
    where
        T: Scalar,
    {
        self.expect(open, delimiter_name(open))?;
        let mut values = [T::default(); N];
        for (i, slot) in values.iter_mut().enumerate() {
            if i > 0 {
                self.expect(',', "','")?;
            }
            *slot = self.number()?;
        }
        self.expect(close, delimiter_name(close))?;
        Ok(values)
    }

    /// Succeeds if only whitespace remains.
    pub fn finish(mut self) -> Result<(), GeometryParseError> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(GeometryParseError::TrailingInput { position: self.pos })
        }
    }
}

fn delimiter_name(c: char) -> &'static str {
    match c {
        '(' => "'('",
        ')' => "')'",
        '[' => "'['",
        ']' => "']'",
        '{' => "'{'",
        '}' => "'}'",
        _ => "a delimiter",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scanner_skips_whitespace_between_tokens() {
        let mut scanner = Scanner::new("  ( 1 ,\t-2 )  ");
        assert_eq!(scanner.delimited::<i32, 2>('(', ')'), Ok([1, -2]));
        assert_eq!(scanner.finish(), Ok(()));
    }

    #[test]
    fn test_scanner_number_kinds() {
        let mut scanner = Scanner::new("1.25e2 -0.5 +7");
        assert_eq!(scanner.number::<f64>(), Ok(125.0));
        assert_eq!(scanner.number::<f64>(), Ok(-0.5));
        assert_eq!(scanner.number::<i32>(), Ok(7));
    }

    #[test]
    fn test_scanner_rejects_float_as_integer() {
        let mut scanner = Scanner::new("1.5");
        assert_eq!(
            scanner.number::<i32>(),
            Err(GeometryParseError::InvalidNumber { text: "1.5".to_string(), position: 0 })
        );
        // Nothing consumed on failure.
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_scanner_rejects_overflowing_float() {
        let mut scanner = Scanner::new("[1e400, 0]");
        assert_eq!(
            scanner.delimited::<f64, 2>('[', ']'),
            Err(GeometryParseError::InvalidNumber { text: "1e400".to_string(), position: 1 })
        );
        let mut scanner = Scanner::new("-1e309");
        assert!(scanner.number::<f64>().is_err());
        let mut scanner = Scanner::new("1e308");
        assert_eq!(scanner.number::<f64>(), Ok(1e308));
    }

    #[test]
    fn test_scanner_rejects_non_finite_words() {
        for input in ["inf", "-inf", "NaN", "infinity"] {
            let mut scanner = Scanner::new(input);
            assert!(scanner.number::<f64>().is_err(), "{input} accepted");
        }
    }

    #[test]
    fn test_scanner_missing_component() {
        let mut scanner = Scanner::new("[0,0,100]");
        let err = scanner.delimited::<f64, 4>('[', ']').unwrap_err();
        assert_eq!(
            err,
            GeometryParseError::UnexpectedChar { expected: "','", found: ']', position: 8 }
        );
    }

    #[test]
    fn test_scanner_unexpected_end() {
        let mut scanner = Scanner::new("(1, ");
        let err = scanner.delimited::<i32, 2>('(', ')').unwrap_err();
        assert_eq!(err, GeometryParseError::UnexpectedEnd { expected: "a number", position: 4 });
    }

    #[test]
    fn test_scanner_trailing_input() {
        let mut scanner = Scanner::new("(1, 2) x");
        assert!(scanner.delimited::<i32, 2>('(', ')').is_ok());
        assert_eq!(scanner.finish(), Err(GeometryParseError::TrailingInput { position: 7 }));
    }

    #[test]
    fn test_scanner_eat() {
        let mut scanner = Scanner::new(" , }");
        assert!(scanner.eat(','));
        assert!(!scanner.eat(','));
        assert!(scanner.eat('}'));
        assert_eq!(scanner.peek(), None);
    }
}
