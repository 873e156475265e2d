//! Text serialization for Region
//!
//! # Format
//!
//! ```text
//! <width>,<height>,<word0>,<word1>,...,<wordN>
//! ```
//!
//! Words are written as unsigned decimals in storage order
//! (column-major). When reading, negative decimals are accepted as the
//! two's-complement form of the same word. Parsing is all or nothing.

use super::Region;
use crate::bits::sections_for;
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

impl Region {
    /// Encode as `"<width>,<height>,<word0>,..."`.
    pub fn serialize_to_string(&self) -> String {
        let mut out = String::with_capacity(16 + self.words.len() * 12);
        out.push_str(&self.width.to_string());
        out.push(',');
        out.push_str(&self.height.to_string());
        for word in &self.words {
            out.push(',');
            out.push_str(&word.to_string());
        }
        out
    }

    /// Decode the form produced by [`Region::serialize_to_string`].
    ///
    /// # Errors
    ///
    /// - [`Error::MissingField`] if width or height is absent
    /// - [`Error::Parse`] if any field is not a number
    /// - [`Error::Dimensions`] if the word count for the dimensions
    ///   overflows `usize`
    /// - [`Error::WordCount`] if the number of words does not match
    ///   `width * ceil(height / 64)`
    pub fn deserialize_from_string(text: &str) -> Result<Self> {
        let result = Self::parse_fields(text.trim());
        if let Err(e) = &result {
            tracing::debug!(error = %e, "failed to deserialize region");
        }
        result
    }

    fn parse_fields(text: &str) -> Result<Self> {
        let mut fields = text.split(',');
        let width = parse_dimension(fields.next(), "width")?;
        let height = parse_dimension(fields.next(), "height")?;
        let words = fields.map(parse_word).collect::<Result<Vec<u64>>>()?;

        let expected = width
            .checked_mul(sections_for(height))
            .ok_or(Error::Dimensions { width, height })?;
        if words.len() != expected {
            return Err(Error::WordCount {
                expected,
                actual: words.len(),
            });
        }
        let mut region = Region::new(width, height);
        region.words = words;
        region.apply_tail_mask();
        Ok(region)
    }
}

fn parse_dimension(field: Option<&str>, name: &'static str) -> Result<usize> {
    let field = field
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .ok_or(Error::MissingField(name))?;
    field.parse::<usize>().map_err(|_| Error::Parse {
        field: name,
        value: field.to_string(),
    })
}

fn parse_word(field: &str) -> Result<u64> {
    let field = field.trim();
    let parsed = if field.starts_with('-') {
        field.parse::<i64>().map(|v| v as u64).ok()
    } else {
        field.parse::<u64>().ok()
    };
    parsed.ok_or_else(|| Error::Parse {
        field: "word",
        value: field.to_string(),
    })
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize_to_string())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Region::deserialize_from_string(s)
    }
}
