use super::*;

#[test]
fn every_leaf_resolves_from_its_own_path() {
    for field in ConfigField::ALL {
        assert_eq!(ConfigField::from_path(field.path()).unwrap(), field);
        assert_eq!(ConfigField::parse(&field.to_string()).unwrap(), field);
    }
}

#[test]
fn group_and_key_split_nested_paths() {
    assert_eq!(ConfigField::ButtonBorderRadius.group(), Some("button"));
    assert_eq!(ConfigField::ButtonBorderRadius.key(), "borderRadius");
    assert_eq!(ConfigField::FontSize.group(), None);
    assert_eq!(ConfigField::FontSize.key(), "fontSize");
}

#[test]
fn unknown_or_partial_paths_are_invalid() {
    for bad in ["button", "button.nope", "fontSize.value", "", "gallery.columns.x"] {
        let err = ConfigField::parse(bad).unwrap_err();
        assert!(
            matches!(err, VitrineError::InvalidPath(_)),
            "{bad}: {err}"
        );
    }
}

#[test]
fn defaults_satisfy_their_own_constraints() {
    for field in ConfigField::ALL {
        let v = field.default_value();
        assert_eq!(field.check(v.clone()).unwrap(), v, "{field}");
    }
}

#[test]
fn integers_are_coerced_from_text_and_integral_floats() {
    assert_eq!(
        ConfigField::FontSize.check(json!("12")).unwrap(),
        json!(12)
    );
    assert_eq!(ConfigField::FontSize.check(json!(14.0)).unwrap(), json!(14));
    assert!(ConfigField::FontSize.check(json!(14.5)).is_err());
    assert!(ConfigField::FontSize.check(json!(true)).is_err());
}

#[test]
fn ranges_and_choices_reject_out_of_bounds_values() {
    assert!(ConfigField::FontSize.check(json!(9)).is_err());
    assert!(ConfigField::FontSize.check(json!(31)).is_err());
    assert!(ConfigField::GallerySwatchSize.check(json!(16)).is_ok());
    assert!(ConfigField::GalleryColumns.check(json!(0)).is_err());
    assert!(ConfigField::GalleryColumns.check(json!(12)).is_ok());
    assert!(ConfigField::ButtonPaddingX.check(json!(-1)).is_err());
    assert!(ConfigField::FontWeight.check(json!(450)).is_err());
    assert!(ConfigField::FontWeight.check(json!("700")).is_ok());
}

#[test]
fn tokens_and_colors_require_strings() {
    assert!(ConfigField::ButtonShadow.check(json!("huge")).is_err());
    assert!(ConfigField::Layout.check(json!("layoutB")).is_ok());
    assert!(ConfigField::FontFamily.check(json!("Comic Sans")).is_err());
    assert!(ConfigField::SectionBg.check(json!("rebeccapurple")).is_ok());
    assert!(ConfigField::SectionBg.check(json!(255)).is_err());
}

#[test]
fn top_level_keys_follow_export_order() {
    assert_eq!(
        top_level_keys(),
        vec![
            "fontFamily",
            "fontWeight",
            "fontSize",
            "button",
            "gallery",
            "cardRadius",
            "containerPadding",
            "sectionBg",
            "strokeColor",
            "strokeWeight",
            "layout",
            "viewport",
        ]
    );
    assert_eq!(group_fields("gallery").count(), 5);
}

#[test]
fn group_check_keeps_only_present_sub_keys() {
    let checked = check_top_level("button", json!({"borderRadius": "5", "bogus": 1}))
        .unwrap()
        .unwrap();
    assert_eq!(checked, json!({"borderRadius": 5}));
}

#[test]
fn group_check_rejects_scalars_and_bad_leaves() {
    assert!(check_top_level("button", json!(5)).is_err());
    assert!(check_top_level("gallery", json!({"spacing": 99})).is_err());
}

#[test]
fn unknown_top_level_keys_are_dropped() {
    assert_eq!(check_top_level("theme", json!("dark")).unwrap(), None);
}
