use serde_json::{Value, json};

/// The three-section page used throughout: Home@0, About@800, Contact@1600.
pub fn three_section_layout() -> Value {
    json!({
        "sections": [
            { "id": "home", "top": 0 },
            { "id": "about", "top": 800 },
            { "id": "contact", "top": 1600 }
        ],
        "links": ["#home", "#about", "#contact"],
        "backToTop": true
    })
}

/// A page whose first section starts below a tall hero banner.
pub fn hero_layout(first_top: f64) -> Value {
    json!({
        "sections": [
            { "id": "features", "top": first_top },
            { "id": "pricing", "top": first_top + 900.0 }
        ],
        "links": ["#features", "#pricing"],
        "backToTop": false
    })
}

/// Adds or replaces a top-level key in a layout.
pub fn with(mut layout: Value, key: &str, value: Value) -> Value {
    layout[key] = value;
    layout
}
