//! End-to-end normalization behavior.

use nice_styles::{
    color_to_string, is_css_able, normalize, normalize_with, render_css, CssEntry, CssTree,
    CssValue, Normalizer, Renderable, Rules, StyleError, StyleTree, StyleValue,
};
use serde_json::json;

// ============================================================================
// Helpers
// ============================================================================

fn tree(value: serde_json::Value) -> StyleTree {
    serde_json::from_value(value).expect("style tree")
}

fn to_json(css: &CssTree) -> serde_json::Value {
    serde_json::to_value(css).expect("serializable output")
}

/// Converter that tags whatever it receives, so tests can see exactly what
/// was delegated.
fn tagging_converter(value: &StyleValue) -> Option<CssValue> {
    Some(CssValue::Text(format!("color:{}", value.to_json())))
}

#[derive(Debug)]
struct Token(&'static str);

impl Renderable for Token {
    fn render(&self) -> CssValue {
        CssValue::from(self.0)
    }
}

#[derive(Debug)]
struct Weight(i64);

impl Renderable for Weight {
    fn render(&self) -> CssValue {
        CssValue::from(self.0)
    }
}

// ============================================================================
// Documented examples
// ============================================================================

#[test]
fn transform_descriptor() {
    let css = normalize(&tree(json!({ "transform": { "x": 10, "scale": 1.5 } }))).unwrap();
    assert_eq!(
        to_json(&css),
        json!({ "transform": "translateX(10px) scale(1.5)" })
    );
}

#[test]
fn border_default_style() {
    let css = normalize(&tree(json!({ "border": ["1px", "red"] }))).unwrap();
    assert_eq!(to_json(&css), json!({ "border": "1px red solid" }));
}

#[test]
fn hover_block_keeps_nesting_key() {
    let red = json!({ "r": 255, "g": 0, "b": 0 });
    let input = tree(json!({ "&:hover": { "color": red.clone() } }));

    let css = Normalizer::new()
        .with_color_converter(tagging_converter)
        .normalize(&input)
        .unwrap();

    assert_eq!(
        to_json(&css),
        json!({ "&:hover": { "color": format!("color:{}", red) } })
    );

    let css = normalize(&input).unwrap();
    assert_eq!(to_json(&css), json!({ "&:hover": { "color": "#ff0000" } }));
}

#[test]
fn top_level_numbers_have_no_unit() {
    let css = normalize(&tree(json!({ "width": 10 }))).unwrap();
    assert_eq!(to_json(&css), json!({ "width": 10 }));
}

#[test]
fn margin_array() {
    let css = normalize(&tree(json!({ "margin": [10, 20] }))).unwrap();
    assert_eq!(to_json(&css), json!({ "margin": "10px 20px" }));
}

#[test]
fn unsupported_leaf() {
    let err = normalize(&tree(json!({ "foo": true }))).unwrap_err();
    assert!(matches!(err, StyleError::InvalidValue { ref key, .. } if key == "foo"));
}

// ============================================================================
// Routing
// ============================================================================

#[test]
fn full_tree() {
    let input = tree(json!({
        "display": "flex",
        "zIndex": 3,
        "opacity": 0.8,
        "padding": [4, "auto"],
        "borderLeft": [2, "#333"],
        "backgroundColor": "rgb(10, 20, 30)",
        "borderColor": [255, 255, 255, 0.5],
        "transform": { "x": 5, "y": -5, "rotate": "3deg" },
        "filter": { "blur": 2, "brightness": 1, "dropShadow": [0, 1, 2, [0, 0, 0]] },
        "@media (min-width: 800px)": {
            "padding": [8, 16],
            "hidden": null,
            "&:focus": { "outline": ["1px", "dotted", "blue"] }
        },
        "gap": null
    }));

    let css = normalize(&input).unwrap();

    assert_eq!(
        to_json(&css),
        json!({
            "display": "flex",
            "zIndex": 3,
            "opacity": 0.8,
            "padding": "4px auto",
            "borderLeft": "2px #333 solid",
            "backgroundColor": "rgb(10, 20, 30)",
            "borderColor": "rgba(255, 255, 255, 0.5)",
            "transform": "translateX(5px) translateY(-5px) rotate(3deg)",
            "filter": "blur(2px) brightness(1) drop-shadow(0px 1px 2px #000000)",
            "@media (min-width: 800px)": {
                "padding": "8px 16px",
                "&:focus": { "outline": "1px dotted blue" }
            }
        })
    );
}

#[test]
fn renderables_anywhere() {
    let mut hover = StyleTree::new();
    hover.insert("fontWeight".into(), StyleValue::css(Weight(700)));

    let mut input = StyleTree::new();
    input.insert("fontFamily".into(), StyleValue::css(Token("serif")));
    input.insert("color".into(), StyleValue::Color("navy".parse().unwrap()));
    input.insert(
        "margin".into(),
        StyleValue::Arr(vec![StyleValue::css(Token("1em")), StyleValue::from(0)]),
    );
    input.insert("&:hover".into(), StyleValue::Nested(hover));

    let css = normalize(&input).unwrap();
    assert_eq!(
        to_json(&css),
        json!({
            "fontFamily": "serif",
            "color": "#000080",
            "margin": "1em 0px",
            "&:hover": { "fontWeight": 700 }
        })
    );
}

#[test]
fn include_empty_keeps_nulls() {
    let input = tree(json!({ "width": null, "height": 2 }));

    let css = normalize_with(&input, true, "").unwrap();
    assert_eq!(css["width"], CssEntry::Empty);
    assert_eq!(to_json(&css), json!({ "width": null, "height": 2 }));

    let css = normalize_with(&input, false, "").unwrap();
    assert_eq!(to_json(&css), json!({ "height": 2 }));
}

#[test]
fn error_label_in_message() {
    let err = normalize_with(&tree(json!({ "foo": { "a": 1 } })), false, "Header").unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"Header: Invalid style value for foo: {"a":1}"#
    );

    // array elements report the element, not the whole array
    let err = normalize_with(&tree(json!({ "foo": [1, true] })), false, "Header").unwrap_err();
    assert_eq!(err.to_string(), "Header: Invalid style value for foo: true");
}

#[test]
fn first_error_aborts() {
    let err = normalize(&tree(json!({ "a": 1, "b": false, "c": true }))).unwrap_err();
    assert_eq!(err.key(), "b");
}

#[test]
fn normalize_is_pure() {
    let input = tree(json!({ "border": [1, "red"], "transform": { "x": 1 } }));
    let first = normalize(&input).unwrap();
    let second = normalize(&input).unwrap();
    assert_eq!(first, second);
    assert_eq!(input["border"].to_json(), json!([1, "red"]));
}

#[test]
fn already_normalized_tree_is_unchanged() {
    let input = tree(json!({ "margin": [1, 2], "transform": { "x": 3 }, "width": 4 }));
    let once = normalize(&input).unwrap();

    let again: StyleTree = once
        .clone()
        .into_iter()
        .map(|(key, entry)| (key, StyleValue::from(entry)))
        .collect();
    assert_eq!(normalize(&again).unwrap(), once);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn rules_from_yaml() {
    let rules = Rules::from_yaml(
        r#"
color_keys: [background, fill]
transform_aliases:
  x: translateX
  r: rotate
length_unit: rem
"#,
    )
    .unwrap();

    let normalizer = Normalizer::new().with_rules(rules);
    let css = normalizer
        .normalize(&tree(json!({
            "fill": [0, 0, 255],
            "margin": [1, 2],
            "transform": { "x": 1, "r": "90deg", "y": 2 }
        })))
        .unwrap();

    assert_eq!(
        to_json(&css),
        json!({
            "fill": "#0000ff",
            "margin": "1rem 2rem",
            "transform": "translateX(1rem) rotate(90deg) y(2rem)"
        })
    );
}

#[test]
fn styles_from_yaml() {
    let input: StyleTree = serde_yaml::from_str(
        r#"
padding: [2, 4]
transform:
  scale: 2
  x: 1
"&:active":
  opacity: 0.5
"#,
    )
    .unwrap();

    let css = normalize(&input).unwrap();
    assert_eq!(
        to_json(&css),
        json!({
            "padding": "2px 4px",
            "transform": "scale(2) translateX(1px)",
            "&:active": { "opacity": 0.5 }
        })
    );
}

// ============================================================================
// Standalone helpers
// ============================================================================

#[test]
fn helpers() {
    let token = StyleValue::css(Token("bold"));
    assert!(is_css_able(&token));
    assert_eq!(render_css(&token), Some(CssValue::from("bold")));
    assert!(!is_css_able(&StyleValue::from("bold")));
    assert_eq!(render_css(&StyleValue::from("bold")), None);
    assert_eq!(
        color_to_string(&StyleValue::from("teal")),
        Some(CssValue::from("teal"))
    );
}

#[test]
fn normalizer_is_shareable_across_threads() {
    let normalizer = std::sync::Arc::new(Normalizer::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let normalizer = normalizer.clone();
            std::thread::spawn(move || {
                let input = tree(json!({ "margin": [i, i] }));
                normalizer.normalize(&input).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let css = handle.join().unwrap();
        assert_eq!(css["margin"], CssEntry::from(format!("{}px {}px", i, i)));
    }
}
