use super::*;

fn sample() -> RenderTree {
    let swatch = RenderNode::swatch(
        "swatch-0",
        "#A56B58",
        StyleBundle::default().size(Dimension::Px(28), Dimension::Px(28)),
    );
    let grid = RenderNode::container(
        "swatch-grid",
        Arrangement::Grid {
            columns: 4,
            track: 28,
            gap: 10,
            justify: Justify::Start,
        },
        StyleBundle::default(),
        vec![swatch],
    );
    RenderTree {
        layout: LayoutVariant::LayoutA,
        viewport: Viewport::Desktop,
        container: ContainerSizing::Fluid { max_width: 1024.0 },
        stylesheets: vec![],
        root: RenderNode::container(
            "page",
            Arrangement::Stack { gap: 0 },
            StyleBundle::default().padding(Edges::uniform(24)),
            vec![grid],
        ),
    }
}

#[test]
fn find_walks_depth_first() {
    let tree = sample();
    assert_eq!(tree.find("page").map(|n| n.children().len()), Some(1));
    let swatch = tree.find("swatch-0").unwrap();
    assert!(matches!(&swatch.kind, NodeKind::Swatch { color } if color == "#A56B58"));
    assert!(swatch.children().is_empty());
    assert!(swatch.arrangement().is_none());
    assert!(tree.find("nope").is_none());
    let names: Vec<&str> = tree.root.walk().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["page", "swatch-grid", "swatch-0"]);
}

#[test]
fn serialized_form_is_tagged_and_sparse() {
    let tree = sample();
    let v: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
    assert_eq!(v["layout"], "layoutA");
    assert_eq!(v["container"]["mode"], "fluid");
    assert_eq!(v["root"]["kind"]["type"], "container");
    assert_eq!(v["root"]["kind"]["arrangement"]["mode"], "stack");
    let grid = &v["root"]["kind"]["children"][0];
    assert!(grid.get("style").is_none());
    assert_eq!(grid["kind"]["arrangement"]["columns"], 4);
    let swatch_style = &grid["kind"]["children"][0]["style"];
    assert_eq!(swatch_style["width"], serde_json::json!({"unit": "px", "value": 28}));
    assert!(swatch_style.get("shadow").is_none());
}

#[test]
fn fingerprint_tracks_visible_changes_only() {
    let a = sample();
    let b = sample();
    assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());

    let mut c = sample();
    c.container = ContainerSizing::Fixed {
        size: Size::new(340.0, 700.0),
    };
    assert_ne!(a.fingerprint().unwrap(), c.fingerprint().unwrap());
}

#[test]
fn margin_top_lands_in_style() {
    let n = RenderNode::text("t", "hi", StyleBundle::default()).with_margin_top(12);
    assert_eq!(n.style.margin_top, Some(12));
    assert!(!n.style.is_empty());
}
