//! Record model and field validation
//!
//! A record is one `name,email,id` line. Parsing only splits and counts
//! fields; [`validate_record`] then checks the email shape and parses the
//! identifier into a [`UserId`].

use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field separator within a record line
pub const FIELD_DELIMITER: char = ',';

/// Number of fields in a well-formed record
pub const FIELD_COUNT: usize = 3;

/// How lines with more than three fields are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraFieldsPolicy {
    /// Report `Too many parameters` and skip the line
    #[default]
    Reject,
    /// Keep the first three fields and ignore the rest
    Truncate,
}

/// A record split into its positional fields, not yet validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub id: &'a str,
}

/// Split a trimmed line into a [`Record`]
///
/// Fields are taken verbatim; surrounding whitespace inside a field is kept.
pub fn parse_record(line: &str, policy: ExtraFieldsPolicy) -> Result<Record<'_>, RecordError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if fields.len() < FIELD_COUNT {
        return Err(RecordError::MissingParameters {
            line: line.to_string(),
        });
    }
    if fields.len() > FIELD_COUNT && policy == ExtraFieldsPolicy::Reject {
        return Err(RecordError::TooManyParameters {
            line: line.to_string(),
        });
    }

    Ok(Record {
        name: fields[0],
        email: fields[1],
        id: fields[2],
    })
}

/// Check the minimal structural shape of an email address
///
/// Exactly one `@`, and a domain part with at least two `.`-separated
/// segments. Segments may be empty.
pub fn validate_email(email: &str) -> Result<(), RecordError> {
    let invalid = || RecordError::InvalidEmail {
        email: email.to_string(),
    };

    let mut parts = email.split('@');
    let (Some(_local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    if domain.split('.').count() < 2 {
        return Err(invalid());
    }

    Ok(())
}

/// Parity of a user identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// A decimal integer of any size
///
/// Stored as a sign and a digit string without leading zeros, so parity and
/// display never overflow. Zero is never negative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId {
    negative: bool,
    digits: String,
}

impl UserId {
    pub fn parity(&self) -> Parity {
        // digits is never empty and holds ASCII digits only
        match self.digits.as_bytes()[self.digits.len() - 1] % 2 {
            0 => Parity::Even,
            _ => Parity::Odd,
        }
    }

    /// The value as an `i64`, when it fits
    pub fn as_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }
}

impl FromStr for UserId {
    type Err = RecordError;

    /// Accepts surrounding whitespace, an optional sign, and ASCII digits
    /// with single underscores between them (`1_000`). Non-ASCII decimal
    /// digits such as `٣` are rejected.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || RecordError::InvalidUserId { id: raw.to_string() };

        let text = raw.trim();
        let (negative, body) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };

        if body.is_empty() || body.starts_with('_') || body.ends_with('_') || body.contains("__") {
            return Err(invalid());
        }
        if !body.bytes().all(|b| b.is_ascii_digit() || b == b'_') {
            return Err(invalid());
        }

        let digits: String = body.chars().filter(|c| *c != '_').collect();
        let digits = match digits.trim_start_matches('0') {
            "" => "0".to_string(),
            trimmed => trimmed.to_string(),
        };
        let negative = negative && digits != "0";

        Ok(UserId { negative, digits })
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.digits)
    }
}

/// A record whose email and identifier passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub name: String,
    pub email: String,
    pub id: UserId,
    pub parity: Parity,
}

impl fmt::Display for ValidatedRecord {
    /// The success line, trailing space included
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The ID: {} of Email: {} is {} ",
            self.id, self.email, self.parity
        )
    }
}

/// Run the email and identifier checks, in that order
pub fn validate_record(record: Record<'_>) -> Result<ValidatedRecord, RecordError> {
    validate_email(record.email)?;
    let id: UserId = record.id.parse()?;
    let parity = id.parity();

    Ok(ValidatedRecord {
        name: record.name.to_string(),
        email: record.email.to_string(),
        id,
        parity,
    })
}

/// Mask the local part of an email for log output (`a***@example.com`)
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_positional_fields() {
        let record = parse_record("Alice,alice@example.com,10", ExtraFieldsPolicy::Reject).unwrap();
        assert_eq!(record.name, "Alice");
        assert_eq!(record.email, "alice@example.com");
        assert_eq!(record.id, "10");
    }

    #[test]
    fn test_parse_record_missing_fields() {
        let err = parse_record("Alice,alice@example.com", ExtraFieldsPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            RecordError::MissingParameters {
                line: "Alice,alice@example.com".to_string()
            }
        );

        assert!(matches!(
            parse_record("just-a-name", ExtraFieldsPolicy::Truncate),
            Err(RecordError::MissingParameters { .. })
        ));
    }

    #[test]
    fn test_parse_record_extra_fields() {
        let line = "Alice,alice@example.com,10,admin";
        assert_eq!(
            parse_record(line, ExtraFieldsPolicy::Reject).unwrap_err(),
            RecordError::TooManyParameters {
                line: line.to_string()
            }
        );

        let record = parse_record(line, ExtraFieldsPolicy::Truncate).unwrap();
        assert_eq!(record.id, "10");
    }

    #[test]
    fn test_parse_record_keeps_inner_whitespace() {
        let record =
            parse_record("Alice, alice@example.com, 10", ExtraFieldsPolicy::Reject).unwrap();
        assert_eq!(record.email, " alice@example.com");
        assert_eq!(record.id, " 10");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("bob@sub.example").is_ok());
        assert!(validate_email("x@a.b.c").is_ok());
        assert!(validate_email("@.").is_ok());

        assert!(validate_email("carlexample.com").is_err());
        assert!(validate_email("dee@example").is_err());
        assert!(validate_email("a@b@c.com").is_err());
        assert!(validate_email("").is_err());
    }

    #[test]
    fn test_user_id_parsing() {
        assert_eq!("10".parse::<UserId>().unwrap().to_string(), "10");
        assert_eq!(" 7 ".parse::<UserId>().unwrap().to_string(), "7");
        assert_eq!("+5".parse::<UserId>().unwrap().to_string(), "5");
        assert_eq!("-12".parse::<UserId>().unwrap().to_string(), "-12");
        assert_eq!("007".parse::<UserId>().unwrap().to_string(), "7");
        assert_eq!("-0".parse::<UserId>().unwrap().to_string(), "0");
        assert_eq!("1_000".parse::<UserId>().unwrap().to_string(), "1000");

        for bad in ["", "x", "1.5", "1e3", "_1", "1_", "1__0", "--1", "+", "0x1f", "1 2"] {
            assert_eq!(
                bad.parse::<UserId>().unwrap_err(),
                RecordError::InvalidUserId { id: bad.to_string() },
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_user_id_rejects_non_ascii_digits() {
        for bad in ["\u{0663}", "1\u{0663}", "\u{FF11}\u{FF10}", "\u{0967}"] {
            assert_eq!(
                bad.parse::<UserId>().unwrap_err(),
                RecordError::InvalidUserId { id: bad.to_string() }
            );
        }
    }

    #[test]
    fn test_user_id_parity() {
        assert_eq!("10".parse::<UserId>().unwrap().parity(), Parity::Even);
        assert_eq!("7".parse::<UserId>().unwrap().parity(), Parity::Odd);
        assert_eq!("-3".parse::<UserId>().unwrap().parity(), Parity::Odd);
        assert_eq!("0".parse::<UserId>().unwrap().parity(), Parity::Even);

        let huge: UserId = "123456789012345678901234567890123".parse().unwrap();
        assert_eq!(huge.parity(), Parity::Odd);
        assert_eq!(huge.as_i64(), None);
        assert_eq!("-42".parse::<UserId>().unwrap().as_i64(), Some(-42));
    }

    #[test]
    fn test_validate_record_success_line() {
        let record = parse_record("Alice,alice@example.com,10", ExtraFieldsPolicy::Reject).unwrap();
        let validated = validate_record(record).unwrap();
        assert_eq!(validated.parity, Parity::Even);
        assert_eq!(
            validated.to_string(),
            "The ID: 10 of Email: alice@example.com is even "
        );
    }

    #[test]
    fn test_validate_record_checks_email_before_id() {
        let record = parse_record("Carl,carlexample.com,x", ExtraFieldsPolicy::Reject).unwrap();
        assert!(matches!(
            validate_record(record),
            Err(RecordError::InvalidEmail { .. })
        ));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("@example.com"), "***@example.com");
        assert_eq!(mask_email("nobody"), "***");
    }
}
