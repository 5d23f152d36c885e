//! Icon store: maps `IconRef` keys to terminal glyphs.
//!
//! Menu entries only carry opaque references. This is the one place that
//! knows what a reference looks like on screen.

use std::collections::HashMap;

use crate::core::menu::IconRef;

const FALLBACK_GLYPH: &str = "•";

pub struct IconSet {
    glyphs: HashMap<&'static str, &'static str>,
}

impl IconSet {
    pub fn new() -> Self {
        let glyphs = HashMap::from([
            ("home", "△"),
            ("home-fill", "▲"),
            ("apps", "□"),
            ("apps-fill", "■"),
            ("person", "○"),
            ("person-fill", "●"),
            ("splash", "☆"),
            ("splash-fill", "★"),
        ]);
        Self { glyphs }
    }

    /// Glyph for `icon`. Unknown keys render their first character.
    pub fn glyph(&self, icon: &IconRef) -> String {
        let key = icon.as_str();
        if let Some(glyph) = self.glyphs.get(key) {
            return (*glyph).to_string();
        }
        key.chars()
            .next()
            .map(String::from)
            .unwrap_or_else(|| FALLBACK_GLYPH.to_string())
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new()
    }
}
