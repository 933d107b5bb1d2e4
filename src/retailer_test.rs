use super::*;

#[test]
fn attribute_value_becomes_link() {
    let link = OutboundLink::from_attribute(Some("https://shop.example/brush")).expect("link");
    assert_eq!(link.url(), "https://shop.example/brush");
    assert_eq!(link.target(), "_blank");
    assert_eq!(link.features(), "noopener,noreferrer");
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let link = OutboundLink::from_attribute(Some("  https://shop.example  ")).expect("link");
    assert_eq!(link.url(), "https://shop.example");
}

#[test]
fn blank_or_missing_attribute_opens_nothing() {
    assert_eq!(OutboundLink::from_attribute(None), None);
    assert_eq!(OutboundLink::from_attribute(Some("")), None);
    assert_eq!(OutboundLink::from_attribute(Some("   ")), None);
}
