use super::*;

#[test]
fn success_passes_through() {
    let floats: Vec<u32> = or_disabled("motion", Ok(vec![1, 2]));
    assert_eq!(floats, vec![1, 2]);
}

#[test]
fn bad_selector_disables_only_that_feature() {
    let floats: Vec<u32> = or_disabled("motion", Err(SiteError::Js("SyntaxError: '.float[' is not a valid selector".to_owned())));
    assert!(floats.is_empty());
}

#[test]
fn missing_markup_falls_back_to_empty() {
    let floats: Vec<u32> = or_disabled("motion", Err(SiteError::MissingElement(".float-element".to_owned())));
    assert!(floats.is_empty());
    or_disabled::<()>("menu", Err(SiteError::MissingElement("#side-menu".to_owned())));
}

#[test]
fn json_error_converts_to_config() {
    let err = serde_json::from_str::<u32>("{").map(|_| ()).map_err(SiteError::from);
    assert!(matches!(err, Err(SiteError::Config(_))));
}
