//! Quantifier and length notation through the public API

use cypher_pattern::pattern::{CanonicalQuantifier, Length, Quantifier};
use cypher_pattern::PatternError;
use test_case::test_case;

#[test_case(Quantifier::Exact(3), "{3}", "{3,3}" ; "exact")]
#[test_case(Quantifier::ZeroOrMore, "*", "{0,}" ; "zero or more")]
#[test_case(Quantifier::OneOrMore, "+", "{1,}" ; "one or more")]
#[test_case(Quantifier::between(1, 3), "{1,3}", "{1,3}" ; "closed range")]
#[test_case(Quantifier::at_least(2), "{2,}", "{2,}" ; "open range")]
#[test_case(Quantifier::at_most(5), "{,5}", "{0,5}" ; "max only")]
fn test_notation_and_canonical_form(quantifier: Quantifier, rendered: &str, canonical: &str) {
    assert_eq!(quantifier.to_string(), rendered);
    assert_eq!(quantifier.canonicalize().unwrap().to_string(), canonical);
}

#[test]
fn test_canonical_bounds() {
    assert_eq!(
        Quantifier::at_most(5).canonicalize(),
        Ok(CanonicalQuantifier {
            min: 0,
            max: Some(5)
        })
    );
    assert_eq!(Quantifier::OneOrMore.min(), Ok(1));
}

#[test]
fn test_shapeless_range_is_an_error() {
    assert_eq!(
        Quantifier::range(None, None).canonicalize(),
        Err(PatternError::InvalidQuantifier)
    );
}

#[test]
fn test_length_notation() {
    assert_eq!(Length::Exact(4).to_string(), "*4");
    assert_eq!(Length::Unbounded.to_string(), "*");
    assert_eq!(Length::between(2, 5).to_string(), "*2..5");
    assert_eq!(Length::range(None, None).to_string(), "*..");
}
