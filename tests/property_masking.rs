//! Property-based tests for key masking.

use keycheck::mask_key;
use proptest::prelude::*;

proptest! {
    /// Short values short-circuit to the unmasked form.
    #[test]
    fn mask_is_identity_up_to_twelve_chars(key in "\\PC{0,12}") {
        prop_assert_eq!(mask_key(&key), key);
    }

    /// Long values reveal only the first 8 and last 4 characters.
    #[test]
    fn mask_reveals_only_head_and_tail(key in "\\PC{13,64}") {
        let masked = mask_key(&key);
        let chars: Vec<char> = key.chars().collect();
        let head: String = chars[..8].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();

        prop_assert_eq!(masked.chars().count(), 15);
        prop_assert!(masked.starts_with(&head));
        prop_assert!(masked.ends_with(&tail));
        prop_assert!(masked.contains("..."));
    }

    /// Masking a masked value changes nothing.
    #[test]
    fn mask_is_idempotent(key in "\\PC{0,64}") {
        let once = mask_key(&key);
        prop_assert_eq!(mask_key(&once), once);
    }
}
