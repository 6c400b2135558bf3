//! Built-in info type catalogue

use super::{InfoTypePattern, Validator};
use once_cell::sync::Lazy;
use regex::Regex;

pub(super) const US_SOCIAL_SECURITY_NUMBER: &str = "US_SOCIAL_SECURITY_NUMBER";
pub(super) const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
pub(super) const PHONE_NUMBER: &str = "PHONE_NUMBER";
pub(super) const CREDIT_CARD_NUMBER: &str = "CREDIT_CARD_NUMBER";
pub(super) const IP_ADDRESS: &str = "IP_ADDRESS";

// SSN: 123-45-6789 or 123456789
static SSN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{3}-?\d{2}-?\d{4}\b").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

// (123) 456-7890, 123-456-7890, 123.456.7890, +1 123 456 7890
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?(\(?\d{3}\)?[-.\s]?)?\d{3}[-.\s]?\d{4}\b").unwrap()
});

// 13-19 digits in groups of four with optional spaces/dashes
static CREDIT_CARD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:\d{4}[-\s]?){3}\d{4,7}\b").unwrap());

// IPv4 dotted quad or full-form IPv6
static IP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b|\b(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}\b",
    )
    .unwrap()
});

struct Builtin {
    name: &'static str,
    regex: &'static Lazy<Regex>,
    validator: Option<Validator>,
}

static CATALOGUE: [Builtin; 5] = [
    Builtin {
        name: US_SOCIAL_SECURITY_NUMBER,
        regex: &SSN_REGEX,
        validator: Some(validate_ssn),
    },
    Builtin {
        name: EMAIL_ADDRESS,
        regex: &EMAIL_REGEX,
        validator: None,
    },
    Builtin {
        name: PHONE_NUMBER,
        regex: &PHONE_REGEX,
        validator: Some(validate_phone),
    },
    Builtin {
        name: CREDIT_CARD_NUMBER,
        regex: &CREDIT_CARD_REGEX,
        validator: Some(validate_credit_card),
    },
    Builtin {
        name: IP_ADDRESS,
        regex: &IP_REGEX,
        validator: None,
    },
];

/// Names of every built-in info type, in catalogue order
pub fn builtin_info_types() -> impl Iterator<Item = &'static str> {
    CATALOGUE.iter().map(|builtin| builtin.name)
}

pub(super) fn lookup(name: &str) -> Option<InfoTypePattern> {
    CATALOGUE
        .iter()
        .find(|builtin| builtin.name.eq_ignore_ascii_case(name))
        .map(|builtin| {
            let pattern = InfoTypePattern::new(builtin.name, Regex::clone(builtin.regex));
            match builtin.validator {
                Some(validator) => pattern.with_validator(validator),
                None => pattern,
            }
        })
}

/// Reject area 000/666/9xx, group 00 and serial 0000
pub(super) fn validate_ssn(ssn: &str) -> bool {
    let digits: String = ssn.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() != 9 {
        return false;
    }

    if digits.starts_with("000") || digits[3..5] == *"00" || digits[5..9] == *"0000" {
        return false;
    }

    // 666 was never issued, 9xx is reserved for ITINs
    !(digits.starts_with("666") || digits.starts_with('9'))
}

/// Luhn checksum over 13-19 digits
pub(super) fn validate_credit_card(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();

    if !(13..=19).contains(&digits.len()) {
        return false;
    }

    let checksum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| match (i % 2 == 1, d * 2) {
            (true, doubled) if doubled > 9 => doubled - 9,
            (true, doubled) => doubled,
            (false, _) => d,
        })
        .sum();

    checksum.is_multiple_of(10)
}

/// 10-15 digits; an 11-digit number must carry the `1` country code
pub(super) fn validate_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    if !(10..=15).contains(&digits.len()) {
        return false;
    }

    digits.len() != 11 || digits.starts_with('1')
}
