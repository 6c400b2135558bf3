//! dlpmask deidentification engine
//!
//! This crate finds sensitive substrings in text and masks them in place:
//! - Built-in info types (SSN, email, phone, credit card, IP address)
//! - Custom regex info types
//! - Character masking with partial, reversed and ignore-list policies
//!
//! All offsets exposed by this crate are code-point offsets, not byte offsets.
//!
//! # Example
//! ```
//! use dlpmask_engine::{deidentify, InfoTypePattern, MaskingPolicy};
//!
//! let ssn = InfoTypePattern::builtin("US_SOCIAL_SECURITY_NUMBER")?;
//! let policy = MaskingPolicy::new('x', 5);
//! let result = deidentify("My SSN is 123-45-6789", &[ssn], &policy)?;
//! assert_eq!(result.masked_text, "My SSN is xxxxx5-6789");
//! # Ok::<(), dlpmask_engine::Error>(())
//! ```

pub mod engine;
pub mod error;
pub mod info_type;
pub mod masker;
pub mod matcher;
pub mod policy;

pub use engine::{DeidentifyEngine, DeidentifyResult, deidentify, resolve_overlaps};
pub use error::{Error, Result};
pub use info_type::{CustomInfoType, InfoTypePattern, builtin_info_types};
pub use masker::apply;
pub use matcher::{Match, find};
pub use policy::MaskingPolicy;
