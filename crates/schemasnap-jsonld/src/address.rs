//! `PostalAddress` construction from flat address fields.

use crate::input::{truthy, BusinessInput};
use crate::sanitize::sanitize_text;
use crate::types::PostalAddress;

/// Build a `PostalAddress` from the input's address fields.
///
/// Street, city and state are sanitized; postal code and country pass
/// through as given. Always returns an address, possibly carrying only
/// `@type`; the assembler decides whether to attach it.
#[must_use]
pub fn build_address(input: &BusinessInput) -> PostalAddress {
    PostalAddress {
        street_address: truthy(input.street_address.as_ref()).map(sanitize_text),
        address_locality: truthy(input.city.as_ref()).map(sanitize_text),
        address_region: truthy(input.state.as_ref()).map(sanitize_text),
        postal_code: truthy(input.postal_code.as_ref()).map(str::to_string),
        address_country: truthy(input.country.as_ref()).map(str::to_string),
        ..PostalAddress::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_complete_address() {
        let input = BusinessInput {
            street_address: Some("123 Main Street".into()),
            city: Some("San Francisco".into()),
            state: Some("California".into()),
            postal_code: Some("94102".into()),
            country: Some("US".into()),
            ..BusinessInput::default()
        };
        let address = build_address(&input);
        assert_eq!(address.address_type, "PostalAddress");
        assert_eq!(address.street_address.as_deref(), Some("123 Main Street"));
        assert_eq!(address.address_locality.as_deref(), Some("San Francisco"));
        assert_eq!(address.address_region.as_deref(), Some("California"));
        assert_eq!(address.postal_code.as_deref(), Some("94102"));
        assert_eq!(address.address_country.as_deref(), Some("US"));
        assert_eq!(address.field_count(), 6);
    }

    #[test]
    fn builds_partial_address() {
        let input = BusinessInput {
            city: Some("San Francisco".into()),
            state: Some("CA".into()),
            ..BusinessInput::default()
        };
        let address = build_address(&input);
        assert_eq!(address.address_locality.as_deref(), Some("San Francisco"));
        assert_eq!(address.address_region.as_deref(), Some("CA"));
        assert!(address.street_address.is_none());
        assert_eq!(address.field_count(), 3);
    }

    #[test]
    fn empty_fields_leave_only_type() {
        let input = BusinessInput {
            street_address: Some(String::new()),
            postal_code: Some(String::new()),
            ..BusinessInput::default()
        };
        assert_eq!(build_address(&input).field_count(), 1);
    }

    #[test]
    fn sanitizes_street_but_not_postal_code() {
        let input = BusinessInput {
            street_address: Some("  1  Elm\u{7} St ".into()),
            postal_code: Some(" 02134 ".into()),
            ..BusinessInput::default()
        };
        let address = build_address(&input);
        assert_eq!(address.street_address.as_deref(), Some("1 Elm St"));
        assert_eq!(address.postal_code.as_deref(), Some(" 02134 "));
    }
}
