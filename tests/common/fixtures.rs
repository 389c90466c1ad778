use pytt_help::Viewport;
use serde_json::{json, Value};

pub const HELP_URL: &str = "https://help.example/help.html";

/// A typical desktop window: 80px navigation bar, 40px footer.
pub fn desktop() -> Viewport {
    Viewport::new(900, 80, 40)
}

/// Configuration of a help tree published in English and French only, with
/// locale narrowing and fixed frame offsets.
pub fn french_tree_config() -> Value {
    json!({
        "fallbackLanguage": "en",
        "languages": [
            { "code": "en", "icon": "gb.png" },
            { "code": "fr", "icon": "fr.png" }
        ],
        "iconDirectory": "flags/",
        "sizing": { "useDynamicHeaderFooterMeasurement": false, "fixedOffsetPx": 100 },
        "restrictToMenuLanguages": true
    })
}
