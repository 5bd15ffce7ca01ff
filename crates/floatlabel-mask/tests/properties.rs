use floatlabel_mask::{
    apply_mask, format_currency, strip_separators, unmask, Divider, MaskTemplate, Rejected, Slot,
};
use proptest::prelude::*;

fn template() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop::sample::select(vec!['_', '_', '_', 'A', '9', '-', '(', ')', '/', ' ', '.', '+']),
        1..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn divider() -> impl Strategy<Value = Option<Divider>> {
    prop::sample::select(vec![None, Some(Divider::Comma), Some(Divider::Dot)])
}

proptest! {
    #[test]
    fn masking_preserves_alphanumerics_in_order(raw in "[a-zA-Z0-9 ()/.-]{0,30}", t in template()) {
        let out = apply_mask(&raw, &t);
        prop_assert_eq!(unmask(&out), unmask(&raw));
    }

    #[test]
    fn masking_empty_input_is_empty(t in template()) {
        prop_assert_eq!(apply_mask("", &t), "");
    }

    #[test]
    fn masking_is_idempotent_through_strip(raw in "[a-zA-Z0-9 -]{0,30}", t in template()) {
        let once = apply_mask(&raw, &t);
        prop_assert_eq!(apply_mask(&unmask(&once), &t), once);
    }

    #[test]
    fn literals_land_on_their_template_index(raw in "[0-9]{0,30}", t in template()) {
        let template = MaskTemplate::new(t.as_str());
        let out: Vec<char> = template.apply(&raw).chars().collect();
        for (i, slot) in template.slots().iter().enumerate().take(out.len()) {
            if let Slot::Literal(lit) = slot {
                prop_assert_eq!(out[i], *lit);
            }
        }
    }

    #[test]
    fn whole_amounts_keep_every_digit(digits in "[0-9]{1,15}", d in divider()) {
        let formatted = format_currency("", &digits, d, None).unwrap();
        prop_assert_eq!(strip_separators(&formatted), digits.clone());
        // No group other than the first may be shorter than three digits.
        let divider = d.unwrap_or_default().as_char();
        for group in formatted.split(divider).skip(1) {
            prop_assert_eq!(group.len(), 3);
        }
    }

    #[test]
    fn fractions_are_truncated_to_the_limit(
        integer in "[0-9]{0,9}",
        fraction in "[0-9]{0,6}",
        places in 0usize..4,
    ) {
        let raw = format!("{integer}.{fraction}");
        let formatted = format_currency("", &raw, Some(Divider::Comma), Some(places)).unwrap();
        let (int_out, frac_out) = formatted.split_once('.').unwrap();
        prop_assert_eq!(strip_separators(int_out), integer);
        let expected: String = fraction.chars().take(places).collect();
        prop_assert_eq!(frac_out, expected.as_str());
    }

    #[test]
    fn reformatting_a_value_with_itself_is_rejected(digits in "[0-9]{1,12}", d in divider()) {
        let formatted = format_currency("", &digits, d, None).unwrap();
        prop_assert_eq!(
            format_currency(&formatted, &formatted, d, None),
            Err(Rejected::NotLonger)
        );
    }
}
