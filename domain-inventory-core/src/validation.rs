//! Strict hostname syntax validation
//!
//! ASCII letters, digits and hyphens only, dot-separated labels of at most 63
//! bytes, at most 255 bytes overall, and a top-level label that does not start
//! with a digit. No IDN handling: `münchen.de` is rejected, its punycode form
//! is accepted.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Maximum length of a whole domain name, in bytes.
pub const MAX_NAME_LENGTH: usize = 255;

/// Maximum length of a single label, in bytes.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Why a candidate domain name was rejected.
///
/// Offsets are byte offsets into the input. Only the first violation is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum SyntaxError {
    #[error("Domain name is empty")]
    EmptyName,

    #[error("Domain name length is {length}, can't exceed {MAX_NAME_LENGTH}")]
    TooLong { length: usize },

    #[error("Domain has invalid character '.' at offset {offset}, label can't begin with a period")]
    EmptyLabel { offset: usize },

    #[error("Domain byte length of label '{label}' is {length}, can't exceed {MAX_LABEL_LENGTH}")]
    LabelTooLong { label: String, length: usize },

    #[error("Domain label '{label}' at offset {offset} begins with a hyphen")]
    LabelLeadingHyphen { label: String, offset: usize },

    #[error("Domain label '{label}' at offset {offset} ends with a hyphen")]
    LabelTrailingHyphen { label: String, offset: usize },

    #[error("Domain has invalid character '{character}' at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    #[error("Domain has invalid rune at offset {offset}")]
    InvalidRune { offset: usize },

    #[error("Domain has missing top level domain, domain can't end with a period")]
    MissingTld,

    #[error("Domain's top level domain '{label}' at offset {offset} begins with a digit")]
    TldStartsWithDigit { label: String, offset: usize },
}

/// Validate a domain name.
pub fn validate(name: &str) -> Result<(), SyntaxError> {
    validate_bytes(name.as_bytes())
}

/// Validate raw input bytes, which need not be UTF-8.
///
/// Interactive input is read as bytes so that undecodable sequences surface
/// as [`SyntaxError::InvalidRune`] instead of failing the read.
pub fn validate_bytes(name: &[u8]) -> Result<(), SyntaxError> {
    if name.is_empty() {
        return Err(SyntaxError::EmptyName);
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(SyntaxError::TooLong { length: name.len() });
    }

    let mut start = 0;
    for (i, &b) in name.iter().enumerate() {
        if b == b'.' {
            if i == start {
                return Err(SyntaxError::EmptyLabel { offset: i });
            }
            check_label(name, start, i)?;
            start = i + 1;
            continue;
        }
        if !(b.is_ascii_alphanumeric() || b == b'-') {
            return Err(match decode_char_at(name, i) {
                Some(character) => SyntaxError::InvalidCharacter {
                    character,
                    offset: i,
                },
                None => SyntaxError::InvalidRune { offset: i },
            });
        }
    }

    // 顶级域
    if start == name.len() {
        return Err(SyntaxError::MissingTld);
    }
    check_label(name, start, name.len())?;
    if name[start].is_ascii_digit() {
        return Err(SyntaxError::TldStartsWithDigit {
            label: label_text(&name[start..]),
            offset: start,
        });
    }

    Ok(())
}

/// Length and hyphen rules shared by inner labels and the TLD.
fn check_label(name: &[u8], start: usize, end: usize) -> Result<(), SyntaxError> {
    let label = &name[start..end];
    if label.len() > MAX_LABEL_LENGTH {
        return Err(SyntaxError::LabelTooLong {
            label: label_text(label),
            length: label.len(),
        });
    }
    if label.first() == Some(&b'-') {
        return Err(SyntaxError::LabelLeadingHyphen {
            label: label_text(label),
            offset: start,
        });
    }
    if label.last() == Some(&b'-') {
        return Err(SyntaxError::LabelTrailingHyphen {
            label: label_text(label),
            offset: start,
        });
    }
    Ok(())
}

/// Labels reaching the checks above are ASCII.
fn label_text(label: &[u8]) -> String {
    String::from_utf8_lossy(label).into_owned()
}

/// Decode the code point starting at byte `offset`.
///
/// `None` for an undecodable sequence and for a literal U+FFFD, which is
/// indistinguishable from a decoding failure.
fn decode_char_at(bytes: &[u8], offset: usize) -> Option<char> {
    let tail = &bytes[offset..bytes.len().min(offset + 4)];
    let valid = match std::str::from_utf8(tail) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&tail[..e.valid_up_to()]).ok()?,
    };
    valid
        .chars()
        .next()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
}

/// A domain name that passed [`validate`].
///
/// The only way to obtain one is through [`ValidatedDomainName::parse`] or
/// [`ValidatedDomainName::parse_bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ValidatedDomainName(String);

impl ValidatedDomainName {
    pub fn parse(name: &str) -> Result<Self, SyntaxError> {
        validate(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn parse_bytes(name: &[u8]) -> Result<Self, SyntaxError> {
        validate_bytes(name)?;
        // validated input is pure ASCII
        Ok(Self(name.iter().map(|&b| char::from(b)).collect()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ValidatedDomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidatedDomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
