//! Tests for span masking

use super::*;
use crate::error::Error;

fn span(start: usize, end: usize) -> Match {
    Match {
        start,
        end,
        info_type: "US_SOCIAL_SECURITY_NUMBER".to_string(),
    }
}

const SSN_TEXT: &str = "My SSN is 123-45-6789";

#[test]
fn test_mask_partial() {
    let policy = MaskingPolicy::new('x', 5);
    let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();
    assert_eq!(masked, "My SSN is xxxxx5-6789");
}

#[test]
fn test_partial_mask_keeps_span_length() {
    for number_to_mask in [1, 5, 10] {
        let policy = MaskingPolicy::new('x', number_to_mask);
        let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();

        assert_eq!(masked.chars().count(), SSN_TEXT.chars().count());
        let visible_from = 10 + number_to_mask as usize;
        assert_eq!(&masked[10..visible_from], "x".repeat(number_to_mask as usize));
        assert_eq!(&masked[visible_from..], &SSN_TEXT[visible_from..]);
    }
}

#[test]
fn test_mask_all() {
    let policy = MaskingPolicy::new('x', 0);
    let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();
    assert_eq!(masked, "My SSN is xxxxxxxxxxx");
}

#[test]
fn test_number_to_mask_larger_than_span() {
    let policy = MaskingPolicy::new('#', 50);
    let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();
    assert_eq!(masked, "My SSN is ###########");
}

#[test]
fn test_no_matches_is_identity() {
    let policy = MaskingPolicy::default();
    let masked = apply(SSN_TEXT, &[], &policy).unwrap();
    assert_eq!(masked, SSN_TEXT);
}

#[test]
fn test_multiple_spans() {
    let text = "a 111-22-3333 b 444-55-6666 c";
    let policy = MaskingPolicy::new('*', 3);
    let masked = apply(text, &[span(2, 13), span(16, 27)], &policy).unwrap();
    assert_eq!(masked, "a ***-22-3333 b ***-55-6666 c");
}

#[test]
fn test_adjacent_spans() {
    let policy = MaskingPolicy::new('*', 1);
    let masked = apply("abcdef", &[span(0, 3), span(3, 6)], &policy).unwrap();
    assert_eq!(masked, "*bc*ef");
}

#[test]
fn test_span_at_end_of_text() {
    let policy = MaskingPolicy::new('*', 0);
    let masked = apply("key=secret", &[span(4, 10)], &policy).unwrap();
    assert_eq!(masked, "key=******");
}

#[test]
fn test_multi_byte_text() {
    // Offsets are code points: "名前: " is four code points but eight bytes
    let text = "名前: 123-45-6789 ✓";
    let policy = MaskingPolicy::new('x', 0);
    let masked = apply(text, &[span(4, 15)], &policy).unwrap();
    assert_eq!(masked, "名前: xxxxxxxxxxx ✓");
}

#[test]
fn test_multi_byte_masking_character() {
    let policy = MaskingPolicy::new('█', 3);
    let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();
    assert_eq!(masked, "My SSN is ███-45-6789");
}

#[test]
fn test_masking_multi_byte_span() {
    let policy = MaskingPolicy::new('*', 2);
    let masked = apply("über", &[span(0, 4)], &policy).unwrap();
    assert_eq!(masked, "**er");
}

#[test]
fn test_reverse_order() {
    let policy = MaskingPolicy::new('x', 4).with_reverse_order(true);
    let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();
    assert_eq!(masked, "My SSN is 123-45-xxxx");
}

#[test]
fn test_characters_to_ignore() {
    let policy = MaskingPolicy::new('x', 0).with_characters_to_ignore("-");
    let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();
    assert_eq!(masked, "My SSN is xxx-xx-xxxx");
}

#[test]
fn test_ignored_characters_are_not_counted() {
    let policy = MaskingPolicy::new('x', 5).with_characters_to_ignore("-");
    let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();
    assert_eq!(masked, "My SSN is xxx-xx-6789");
}

#[test]
fn test_reverse_order_with_ignored_characters() {
    let policy = MaskingPolicy::new('x', 6)
        .with_reverse_order(true)
        .with_characters_to_ignore("-");
    let masked = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap();
    assert_eq!(masked, "My SSN is 123-xx-xxxx");
}

#[test]
fn test_invalid_policy_produces_no_output() {
    let policy = MaskingPolicy {
        masking_character: "xy".to_string(),
        ..MaskingPolicy::default()
    };

    let err = apply(SSN_TEXT, &[span(10, 21)], &policy).unwrap_err();
    assert!(matches!(err, Error::InvalidPolicy(_)));
}

#[test]
fn test_negative_number_to_mask_rejected() {
    let policy = MaskingPolicy::new('x', -3);
    assert!(matches!(
        apply(SSN_TEXT, &[span(10, 21)], &policy),
        Err(Error::InvalidPolicy(_))
    ));
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "matches must be sorted and disjoint")]
fn test_unsorted_matches_panic_in_debug() {
    let policy = MaskingPolicy::new('x', 0);
    let _ = apply("abcdefgh", &[span(4, 6), span(0, 2)], &policy);
}
