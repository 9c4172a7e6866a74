//! Digit code representation
//!
//! A `Code` is an ordered sequence of distinct decimal digits. Secrets and
//! guesses are both codes; the difficulty fixes how many digits they hold.

use super::Difficulty;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of symbols a code may draw from ("0" through "9")
pub const SYMBOL_COUNT: usize = 10;

/// Separator between digits in player input and display
pub const SEPARATOR: char = ',';

/// An ordered sequence of distinct digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    digits: Vec<u8>,
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    /// Wrong number of comma-separated tokens
    InvalidLength { expected: usize, got: usize },
    /// A token that is not a single digit "0".."9"
    InvalidSymbol(String),
    /// The same digit appears more than once
    DuplicateDigit(u8),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Expected {expected} digits, got {got}")
            }
            Self::InvalidSymbol(token) => {
                write!(f, "'{token}' is not a single digit between 0 and 9")
            }
            Self::DuplicateDigit(digit) => write!(f, "Digit {digit} appears more than once"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Build a code from raw digit values
    ///
    /// # Errors
    /// Returns `CodeError` if any value is above 9 or repeats.
    pub fn from_digits(digits: &[u8]) -> Result<Self, CodeError> {
        let mut mask = 0u16;
        for &digit in digits {
            if usize::from(digit) >= SYMBOL_COUNT {
                return Err(CodeError::InvalidSymbol(digit.to_string()));
            }
            let bit = 1u16 << digit;
            if mask & bit != 0 {
                return Err(CodeError::DuplicateDigit(digit));
            }
            mask |= bit;
        }

        Ok(Self {
            digits: digits.to_vec(),
        })
    }

    /// Parse player input of exactly `length` comma-separated digits
    ///
    /// Tokens are taken verbatim: `"0, 1, 2"` is rejected because `" 1"` is
    /// not a digit symbol. Checks run in order: token count, symbols, duplicates.
    ///
    /// # Errors
    /// Returns `CodeError` describing the first rule the input breaks.
    ///
    /// # Examples
    /// ```
    /// use hit_and_blow::core::{Code, CodeError};
    ///
    /// let code = Code::parse("1,0,2", 3).unwrap();
    /// assert_eq!(code.digits(), &[1, 0, 2]);
    ///
    /// assert!(matches!(Code::parse("0,1", 3), Err(CodeError::InvalidLength { .. })));
    /// assert!(matches!(Code::parse("0,0,1", 3), Err(CodeError::DuplicateDigit(0))));
    /// ```
    pub fn parse(raw: &str, length: usize) -> Result<Self, CodeError> {
        let tokens: Vec<&str> = raw.split(SEPARATOR).collect();

        if tokens.len() != length {
            return Err(CodeError::InvalidLength {
                expected: length,
                got: tokens.len(),
            });
        }

        let digits = tokens
            .iter()
            .map(|&token| parse_symbol(token))
            .collect::<Result<Vec<u8>, CodeError>>()?;

        Self::from_digits(&digits)
    }

    /// Draw a random secret for `difficulty`
    ///
    /// Samples a uniformly random digit and keeps it only if it is not already
    /// present, until the code reaches the difficulty's length.
    pub fn random<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Self {
        let length = difficulty.code_length();
        let mut digits = Vec::with_capacity(length);
        let mut mask = 0u16;

        while digits.len() < length {
            let digit: u8 = rng.random_range(0..SYMBOL_COUNT as u8);
            let bit = 1u16 << digit;
            if mask & bit == 0 {
                mask |= bit;
                digits.push(digit);
            }
        }

        Self { digits }
    }

    /// Every valid code of `length` digits, in lexicographic order
    ///
    /// There are 10!/(10-length)! of them: 720 for three digits, 5040 for four.
    #[must_use]
    pub fn enumerate(length: usize) -> Vec<Self> {
        let mut out = Vec::new();
        let mut prefix = Vec::with_capacity(length);
        extend_permutations(length, &mut prefix, 0, &mut out);
        out
    }

    /// The digits in order
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True for the zero-length code
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

fn parse_symbol(token: &str) -> Result<u8, CodeError> {
    match token.as_bytes() {
        [b @ b'0'..=b'9'] => Ok(b - b'0'),
        _ => Err(CodeError::InvalidSymbol(token.to_string())),
    }
}

fn extend_permutations(length: usize, prefix: &mut Vec<u8>, mask: u16, out: &mut Vec<Code>) {
    if prefix.len() == length {
        out.push(Code {
            digits: prefix.clone(),
        });
        return;
    }

    for digit in 0..SYMBOL_COUNT as u8 {
        let bit = 1u16 << digit;
        if mask & bit == 0 {
            prefix.push(digit);
            extend_permutations(length, prefix, mask | bit, out);
            prefix.pop();
        }
    }
}

impl FromStr for Code {
    type Err = CodeError;

    /// Parse a code of any length from comma-separated digits
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.split(SEPARATOR).count();
        if length > SYMBOL_COUNT {
            return Err(CodeError::InvalidLength {
                expected: SYMBOL_COUNT,
                got: length,
            });
        }
        Self::parse(s, length)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
