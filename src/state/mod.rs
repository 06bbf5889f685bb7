//! Persisted editor state.
//!
//! State is stored as JSON under [`STORAGE_KEY`]. Stored data is never
//! trusted: [`parse_state`] re-checks syntax, shape, and every value range,
//! and callers treat anything invalid as absent.

mod store;

pub use store::{FileStore, MemoryStore, StateStore};

use crate::error::Result;
use crate::event::{LogLevel, emit_event, emit_log};
use crate::options::Options;
use crate::palette::Palette;
use serde::{Deserialize, Serialize};

/// Fixed key the editor state lives under.
pub const STORAGE_KEY: &str = "TextToEmojiEditor";

/// Everything the editor needs to restore a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorState {
    pub input_text: String,
    pub styles: Palette,
    pub options: Options,
    /// Last rendered output. Recomputed on load, never trusted.
    pub output_text: String,
}

/// Outcome of validating stored state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validation {
    Valid(EditorState),
    Invalid(String),
}

impl Validation {
    /// Convert into an `Option`, dropping the reason.
    #[must_use]
    pub fn ok(self) -> Option<EditorState> {
        match self {
            Self::Valid(state) => Some(state),
            Self::Invalid(_) => None,
        }
    }
}

/// Serialize state to JSON.
pub fn serialize_state(state: &EditorState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Parse and validate stored JSON.
///
/// Never panics: malformed JSON, a wrong shape, empty glyphs, an empty
/// palette, or out-of-range options all produce [`Validation::Invalid`].
#[must_use]
pub fn parse_state(json: &str) -> Validation {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => return Validation::Invalid(format!("malformed JSON: {e}")),
    };
    let state: EditorState = match serde_json::from_value(value) {
        Ok(state) => state,
        Err(e) => return Validation::Invalid(format!("unexpected shape: {e}")),
    };
    if let Err(e) = state.options.validate() {
        return Validation::Invalid(e.to_string());
    }
    Validation::Valid(state)
}

/// Load state from `store`, treating every failure as absent state.
pub fn load_state(store: &dyn StateStore) -> Option<EditorState> {
    let raw = match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            emit_log(LogLevel::Warn, &format!("cannot read stored state: {e}"));
            return None;
        }
    };
    match parse_state(&raw) {
        Validation::Valid(state) => Some(state),
        Validation::Invalid(reason) => {
            emit_log(LogLevel::Warn, &format!("ignoring stored state: {reason}"));
            None
        }
    }
}

/// Write state to `store`.
pub fn save_state(store: &mut dyn StateStore, state: &EditorState) -> Result<()> {
    let json = serialize_state(state)?;
    store.set(STORAGE_KEY, &json)?;
    emit_event("state_saved", STORAGE_KEY);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn state() -> EditorState {
        EditorState {
            input_text: "hi".to_string(),
            styles: Palette::single(Style::from_strs("🌻", "🌿").unwrap()),
            options: Options::default(),
            output_text: String::new(),
        }
    }

    #[test]
    fn test_roundtrip() {
        let json = serialize_state(&state()).unwrap();
        assert_eq!(parse_state(&json), Validation::Valid(state()));
    }

    #[test]
    fn test_json_keys() {
        let json: serde_json::Value =
            serde_json::from_str(&serialize_state(&state()).unwrap()).unwrap();
        assert_eq!(json["inputText"], "hi");
        assert_eq!(json["styles"][0]["foreground"], "🌻");
        assert_eq!(json["options"]["spaceSize"], 2);
    }

    #[test]
    fn test_malformed_json_is_invalid() {
        assert!(matches!(parse_state("{not json"), Validation::Invalid(_)));
        assert!(matches!(parse_state(""), Validation::Invalid(_)));
    }

    #[test]
    fn test_missing_field_is_invalid() {
        let json = r#"{"inputText":"a","styles":[{"foreground":"X","background":"O"}]}"#;
        assert!(matches!(parse_state(json), Validation::Invalid(_)));
    }

    #[test]
    fn test_empty_styles_is_invalid() {
        let mut value: serde_json::Value =
            serde_json::from_str(&serialize_state(&state()).unwrap()).unwrap();
        value["styles"] = serde_json::json!([]);
        assert!(matches!(parse_state(&value.to_string()), Validation::Invalid(_)));
    }

    #[test]
    fn test_out_of_range_option_is_invalid() {
        let mut value: serde_json::Value =
            serde_json::from_str(&serialize_state(&state()).unwrap()).unwrap();
        value["options"]["spaceSize"] = serde_json::json!(0);
        let Validation::Invalid(reason) = parse_state(&value.to_string()) else {
            panic!("expected invalid state");
        };
        assert!(reason.contains("spaceSize"));
    }

    #[test]
    fn test_legacy_letter_key_is_accepted() {
        let json = r#"{
            "inputText": "a",
            "styles": [{"letter": "🌻", "background": "🌿"}],
            "options": {
                "direction": "horizontal",
                "horizontalPadding": 0,
                "verticalPadding": 0,
                "spaceSize": 1,
                "fillSpacesWith": "nothing",
                "applyStylesOn": "word"
            },
            "outputText": ""
        }"#;
        let state = parse_state(json).ok().unwrap();
        assert_eq!(state.styles.cycle(0).foreground.as_str(), "🌻");
    }

    #[test]
    fn test_load_state_ignores_garbage() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "[1, 2, 3]").unwrap();
        assert_eq!(load_state(&store), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        save_state(&mut store, &state()).unwrap();
        assert_eq!(load_state(&store), Some(state()));
    }
}
