//! Scene record types.
//!
//! These structs are the `.oxie16` wire contract: field names, nesting, and
//! the fixed-length paddings (16 encoders per page, 12 pages per scene,
//! 32-byte icon) are exactly what the hardware expects. Do not rename fields
//! or drop the padding.

use serde::{Deserialize, Serialize};

/// Number of encoders on the device, and therefore per page.
pub const ENCODERS_PER_PAGE: usize = 16;

/// Number of pages in a scene file.
pub const PAGES_PER_SCENE: usize = 12;

/// Icon bitmap size in bytes.
pub const ICON_BYTES: usize = 32;

/// Icon used when the scene definition does not supply one.
pub const DEFAULT_ICON: [u8; ICON_BYTES] = [
    56, 28, 84, 34, 146, 69, 146, 73, 130, 65, 68, 34, 56, 28, 0, 0, 0, 0, 56, 28, 68, 34, 162,
    65, 146, 73, 130, 69, 68, 34, 56, 28,
];

/// A single encoder action (turn or push) in device format.
///
/// `kind` is the device's numeric message-type code; the meaning of
/// `nr1`/`nr2` depends on it (CC number, NRPN LSB/MSB, note number, ...).
/// Turn actions carry `defaultValue`; push actions omit the field entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub instrument: u8,
    pub parameter: u8,
    #[serde(rename = "type")]
    pub kind: u8,
    pub display: u8,
    pub mode: u8,
    pub channel: u8,
    pub lower: u16,
    pub upper: u16,
    pub nr1: u8,
    pub nr2: u8,
    pub output: u8,
    #[serde(
        rename = "defaultValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub default_value: Option<u16>,
}

impl Action {
    /// The canonical disabled turn action.
    pub fn disabled_turn() -> Self {
        Self {
            instrument: 127,
            parameter: 0,
            kind: 0,
            display: 10,
            mode: 3,
            channel: 0,
            lower: 0,
            upper: 127,
            nr1: 0,
            nr2: 0,
            output: 12,
            default_value: Some(0),
        }
    }

    /// The canonical disabled push action.
    pub fn disabled_push() -> Self {
        Self {
            instrument: 127,
            parameter: 0,
            kind: 0,
            display: 0,
            mode: 0,
            channel: 0,
            lower: 0,
            upper: 127,
            nr1: 0,
            nr2: 0,
            output: 12,
            default_value: None,
        }
    }

    /// Push action that resets the encoder's parameter to its default value.
    pub fn reset_push() -> Self {
        Self {
            kind: 4,
            ..Self::disabled_push()
        }
    }
}

/// One of the 16 encoders on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoder {
    pub name: String,
    pub abbr: String,
    pub color: u8,
    pub push_action: Action,
    /// Primary and secondary (alternate) rotation bindings.
    pub turn_actions: [Action; 2],
    pub bipolar: bool,
}

impl Encoder {
    /// The canonical empty encoder used for padding.
    pub fn empty() -> Self {
        Self {
            name: String::new(),
            abbr: String::new(),
            color: 0,
            push_action: Action::disabled_push(),
            turn_actions: [Action::disabled_turn(), Action::disabled_turn()],
            bipolar: false,
        }
    }
}

/// A page of 16 encoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub output: u8,
    pub channel: u8,
    /// Always exactly [`ENCODERS_PER_PAGE`] entries.
    pub encoders: Vec<Encoder>,
}

impl Page {
    /// The canonical empty page used for padding.
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            output: 0,
            channel: 1,
            encoders: (0..ENCODERS_PER_PAGE).map(|_| Encoder::empty()).collect(),
        }
    }
}

/// Scene code block. The device stores the code string one level down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub code: String,
}

/// A complete scene record, ready for serialization to a `.oxie16` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub title: String,
    pub icon: [u8; ICON_BYTES],
    #[serde(rename = "selectedPreset")]
    pub selected_preset: u16,
    pub code: CodeBlock,
    /// Always exactly [`PAGES_PER_SCENE`] entries.
    pub pages: Vec<Page>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn disabled_turn_sentinel_fields() {
        let a = Action::disabled_turn();
        assert_eq!(a.kind, 0);
        assert_eq!(a.display, 10);
        assert_eq!(a.mode, 3);
        assert_eq!(a.upper, 127);
        assert_eq!(a.output, 12);
        assert_eq!(a.default_value, Some(0));
    }

    #[test]
    fn push_actions_omit_default_value() {
        let json = serde_json::to_value(Action::disabled_push()).unwrap();
        assert!(json.get("defaultValue").is_none());
        assert_eq!(json["type"], 0);

        let json = serde_json::to_value(Action::disabled_turn()).unwrap();
        assert_eq!(json["defaultValue"], 0);
    }

    #[test]
    fn reset_push_is_type_4() {
        let a = Action::reset_push();
        assert_eq!(a.kind, 4);
        assert_eq!(a.display, 0);
        assert_eq!(a.mode, 0);
    }

    #[test]
    fn empty_page_has_16_disabled_encoders() {
        let page = Page::empty();
        assert_eq!(page.encoders.len(), ENCODERS_PER_PAGE);
        assert_eq!(page.channel, 1);
        assert!(page.encoders.iter().all(|e| *e == Encoder::empty()));
    }

    #[test]
    fn code_block_serializes_nested() {
        let block = CodeBlock {
            code: "x".to_string(),
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json, serde_json::json!({ "code": "x" }));
    }
}
