//! Character masking policy

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How matched characters are masked
///
/// Every field has a default, so a partial configuration section deserializes.
/// The defaults mask the whole match with `x`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingPolicy {
    /// Replacement symbol; must be exactly one code point
    pub masking_character: String,

    /// Maximum number of code points to mask per match; 0 masks the whole match
    pub number_to_mask: i32,

    /// Mask from the end of the match instead of the start
    pub reverse_order: bool,

    /// Code points that are left untouched and not counted toward `number_to_mask`
    pub characters_to_ignore: String,
}

impl Default for MaskingPolicy {
    fn default() -> Self {
        Self {
            masking_character: "x".to_string(),
            number_to_mask: 0,
            reverse_order: false,
            characters_to_ignore: String::new(),
        }
    }
}

impl MaskingPolicy {
    pub fn new(masking_character: char, number_to_mask: i32) -> Self {
        Self {
            masking_character: masking_character.to_string(),
            number_to_mask,
            ..Self::default()
        }
    }

    pub fn with_reverse_order(mut self, reverse_order: bool) -> Self {
        self.reverse_order = reverse_order;
        self
    }

    pub fn with_characters_to_ignore(mut self, characters: impl Into<String>) -> Self {
        self.characters_to_ignore = characters.into();
        self
    }

    /// Check the policy and resolve it into its masking parameters
    ///
    /// # Errors
    /// - `Error::InvalidPolicy` if the masking character is not a single code point
    ///   or `number_to_mask` is negative
    pub fn validate(&self) -> Result<ResolvedPolicy<'_>> {
        let mut chars = self.masking_character.chars();
        let mask_char = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(Error::InvalidPolicy(format!(
                    "masking character must be exactly one character, got {:?}",
                    self.masking_character
                )));
            }
        };

        let number_to_mask = usize::try_from(self.number_to_mask).map_err(|_| {
            Error::InvalidPolicy(format!(
                "number to mask must not be negative, got {}",
                self.number_to_mask
            ))
        })?;

        Ok(ResolvedPolicy {
            mask_char,
            number_to_mask,
            reverse_order: self.reverse_order,
            ignored: &self.characters_to_ignore,
        })
    }
}

/// A validated [`MaskingPolicy`]
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPolicy<'a> {
    pub(crate) mask_char: char,
    pub(crate) number_to_mask: usize,
    pub(crate) reverse_order: bool,
    ignored: &'a str,
}

impl ResolvedPolicy<'_> {
    /// Number of code points to mask in a span with `maskable` maskable code points
    pub fn mask_len(&self, maskable: usize) -> usize {
        if self.number_to_mask == 0 {
            maskable
        } else {
            self.number_to_mask.min(maskable)
        }
    }

    pub(crate) fn is_ignored(&self, c: char) -> bool {
        self.ignored.contains(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = MaskingPolicy::default();

        assert_eq!(policy.masking_character, "x");
        assert_eq!(policy.number_to_mask, 0);
        assert!(!policy.reverse_order);
        assert!(policy.characters_to_ignore.is_empty());
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_mask_len() {
        let all = MaskingPolicy::new('*', 0);
        assert_eq!(all.validate().unwrap().mask_len(11), 11);

        let five = MaskingPolicy::new('*', 5);
        assert_eq!(five.validate().unwrap().mask_len(11), 5);
        assert_eq!(five.validate().unwrap().mask_len(3), 3);
    }

    #[test]
    fn test_multi_byte_masking_character() {
        let policy = MaskingPolicy::new('█', 0);
        let resolved = policy.validate().unwrap();
        assert_eq!(resolved.mask_char, '█');
    }

    #[test]
    fn test_empty_masking_character() {
        let policy = MaskingPolicy {
            masking_character: String::new(),
            ..MaskingPolicy::default()
        };

        assert!(matches!(policy.validate(), Err(Error::InvalidPolicy(_))));
    }

    #[test]
    fn test_multi_character_masking_character() {
        let policy = MaskingPolicy {
            masking_character: "**".to_string(),
            ..MaskingPolicy::default()
        };

        assert!(matches!(policy.validate(), Err(Error::InvalidPolicy(_))));
    }

    #[test]
    fn test_negative_number_to_mask() {
        let policy = MaskingPolicy::new('x', -1);
        let err = policy.validate().unwrap_err();
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_ignored_characters() {
        let policy = MaskingPolicy::new('x', 0).with_characters_to_ignore("-.");
        let resolved = policy.validate().unwrap();

        assert!(resolved.is_ignored('-'));
        assert!(resolved.is_ignored('.'));
        assert!(!resolved.is_ignored('1'));
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        let policy: MaskingPolicy = serde_json::from_str(r#"{"number_to_mask": 5}"#).unwrap();

        assert_eq!(policy.masking_character, "x");
        assert_eq!(policy.number_to_mask, 5);
        assert!(!policy.reverse_order);
    }
}
