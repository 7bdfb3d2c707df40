use super::*;

#[test]
fn strict_parse_round_trips_every_token() {
    for &t in ButtonShadow::TOKENS {
        assert_eq!(ButtonShadow::from_token(t).unwrap().as_str(), t);
    }
    for &t in ButtonAlignment::TOKENS {
        assert_eq!(ButtonAlignment::from_token(t).unwrap().as_str(), t);
    }
    for &t in GalleryAlignment::TOKENS {
        assert_eq!(GalleryAlignment::from_token(t).unwrap().as_str(), t);
    }
    for &t in LayoutVariant::TOKENS {
        assert_eq!(LayoutVariant::from_token(t).unwrap().as_str(), t);
    }
    for &t in Viewport::TOKENS {
        assert_eq!(Viewport::from_token(t).unwrap().as_str(), t);
    }
}

#[test]
fn strict_parse_is_case_sensitive() {
    assert_eq!(ButtonAlignment::from_token("Left"), None);
    assert_eq!(LayoutVariant::from_token("layouta"), None);
}

#[test]
fn resolve_fallbacks_match_editor_behaviour() {
    assert_eq!(ButtonAlignment::resolve(""), ButtonAlignment::Right);
    assert_eq!(ButtonAlignment::resolve("middle"), ButtonAlignment::Right);
    assert_eq!(ButtonShadow::resolve("huge"), ButtonShadow::Large);
    assert_eq!(GalleryAlignment::resolve(""), GalleryAlignment::GridLeft);
    assert_eq!(LayoutVariant::resolve("layoutC"), LayoutVariant::LayoutB);
    assert_eq!(Viewport::resolve("tablet"), Viewport::Desktop);
}

#[test]
fn tokens_serialize_with_wire_spelling() {
    assert_eq!(
        serde_json::to_string(&LayoutVariant::LayoutA).unwrap(),
        "\"layoutA\""
    );
    assert_eq!(serde_json::to_string(&Viewport::Mobile).unwrap(), "\"mobile\"");
}

#[test]
fn strict_parse_goes_through_serde_names() {
    assert_eq!(
        GalleryAlignment::from_token("grid-center"),
        Some(GalleryAlignment::GridCenter)
    );
    assert_eq!(GalleryAlignment::from_token("gridCenter"), None);
    assert_eq!(ButtonShadow::from_token(""), None);
    assert_eq!(LayoutVariant::from_token("LayoutA"), None);
    let parsed: GalleryAlignment = serde_json::from_str("\"grid-right\"").unwrap();
    assert_eq!(parsed.as_str(), "grid-right");
}
