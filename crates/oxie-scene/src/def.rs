//! Scene definition (input) types.
//!
//! These are the human-authored shapes the compiler accepts. Everything is
//! optional where the format documents a default; the builders fill in the
//! rest. Encoders may be written three ways, from most to least concise:
//! a compact positional array, a flat CC/NRPN mapping, or a verbose object
//! with nested turn/push action definitions. The shapes are discriminated
//! once, at deserialization, by the [`EncoderDef`] untagged enum.

use serde::Deserialize;

/// Turn action message kinds accepted in definitions.
///
/// Unrecognized strings deserialize to `Unknown`, which the action builder
/// degrades to the disabled sentinel with a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnKind {
    Off,
    Nrpn,
    Cc,
    Cc14,
    CcRel1,
    CcRel2,
    Pc,
    Pb,
    At,
    Note,
    #[serde(other)]
    Unknown,
}

/// Push action message kinds accepted in definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PushKind {
    Off,
    Note,
    Cc,
    Pc,
    /// Reset the encoder's parameter to its default value.
    Default,
    At,
    Page,
    #[serde(other)]
    Unknown,
}

/// A turn (rotation) action definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TurnDef {
    #[serde(rename = "type")]
    pub kind: Option<TurnKind>,
    pub cc: Option<u8>,
    pub msb: Option<u8>,
    pub lsb: Option<u8>,
    pub note: Option<u8>,
    pub display: Option<u8>,
    pub mode: Option<u8>,
    pub channel: Option<u8>,
    pub lower: Option<u16>,
    pub upper: Option<u16>,
    #[serde(rename = "defaultValue")]
    pub default_value: Option<u16>,
    pub output: Option<u8>,
}

/// A push (press) action definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PushDef {
    #[serde(rename = "type")]
    pub kind: Option<PushKind>,
    pub note: Option<u8>,
    pub velocity: Option<u8>,
    pub cc: Option<u8>,
    pub value: Option<u8>,
    pub program: Option<u8>,
    pub page: Option<u8>,
    pub display: Option<u8>,
    pub mode: Option<u8>,
    pub channel: Option<u8>,
    pub lower: Option<u16>,
    pub upper: Option<u16>,
    pub output: Option<u8>,
}

/// One positional element of a compact encoder entry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CompactField {
    Text(String),
    Number(i64),
}

/// Verbose encoder shape: explicit nested action definitions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerboseEncoderDef {
    pub name: Option<String>,
    pub abbr: Option<String>,
    pub color: Option<u8>,
    pub bipolar: Option<bool>,
    pub push: Option<PushDef>,
    /// Primary turn action; `turn` and `primary` are synonyms, `turn` wins.
    pub turn: Option<TurnDef>,
    pub primary: Option<TurnDef>,
    pub secondary: Option<TurnDef>,
}

/// Flat encoder shape: a single CC or NRPN mapping with optional range,
/// reset value, and channel. Push is wired to reset-to-default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatEncoderDef {
    pub abbr: Option<String>,
    pub name: Option<String>,
    pub cc: Option<u8>,
    pub msb: Option<u8>,
    pub lsb: Option<u8>,
    pub channel: Option<u8>,
    /// Reset value for the push-to-default action.
    pub default: Option<u16>,
    pub lower: Option<u16>,
    pub upper: Option<u16>,
    pub color: Option<u8>,
    pub bipolar: Option<bool>,
}

/// An encoder definition in any of the accepted shapes.
///
/// Untagged; variants are tried in declaration order. `Verbose` is tried
/// before `Flat` so that an object with neither `cc` nor `msb` resolves to
/// the verbose shape (its actions simply default to disabled). An object
/// mixing flat and nested fields matches neither and is a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EncoderDef {
    /// `[abbr, name?, msb, lsb, channel?]` positional form.
    Compact(Vec<CompactField>),
    Verbose(VerboseEncoderDef),
    Flat(FlatEncoderDef),
}

/// Default action type for a page's encoders.
///
/// Unrecognized strings deserialize to `Unknown`; encoders that rely on the
/// page default then compile with a disabled turn action, with a diagnostic
/// on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageActionType {
    Cc,
    #[default]
    Nrpn,
    #[serde(other)]
    Unknown,
}

/// A page definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageDef {
    pub title: Option<String>,
    pub output: Option<u8>,
    pub channel: Option<u8>,
    /// Default action type applied to encoders that don't pick their own.
    #[serde(rename = "type", default)]
    pub kind: PageActionType,
    #[serde(default)]
    pub encoders: Vec<EncoderDef>,
}

/// A scene definition: the top-level compiler input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SceneDef {
    pub title: Option<String>,
    /// Reference to an instrument definition, resolved by the caller.
    pub instrument: Option<String>,
    /// Raw icon bytes; validated during compilation.
    pub icon: Option<Vec<serde_json::Number>>,
    #[serde(rename = "selectedPreset")]
    pub selected_preset: Option<u16>,
    pub code: Option<String>,
    #[serde(default)]
    pub pages: Vec<PageDef>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_shape_parses_from_array() {
        let def: EncoderDef = serde_json::from_str(r#"["CUT", 1, 20]"#).unwrap();
        assert_eq!(
            def,
            EncoderDef::Compact(vec![
                CompactField::Text("CUT".into()),
                CompactField::Number(1),
                CompactField::Number(20),
            ])
        );
    }

    #[test]
    fn flat_shape_parses_when_cc_present() {
        let def: EncoderDef =
            serde_json::from_str(r#"{"abbr": "FREQ", "name": "Flt Freq", "cc": 16}"#).unwrap();
        let EncoderDef::Flat(flat) = def else {
            panic!("expected flat shape, got {:?}", def);
        };
        assert_eq!(flat.cc, Some(16));
        assert_eq!(flat.abbr.as_deref(), Some("FREQ"));
    }

    #[test]
    fn nested_actions_parse_as_verbose() {
        let def: EncoderDef = serde_json::from_str(
            r#"{"abbr": "ARP", "turn": {"type": "cc", "cc": 3}, "push": {"type": "note", "note": 36}}"#,
        )
        .unwrap();
        let EncoderDef::Verbose(v) = def else {
            panic!("expected verbose shape, got {:?}", def);
        };
        assert_eq!(v.turn.as_ref().unwrap().kind, Some(TurnKind::Cc));
        assert_eq!(v.push.as_ref().unwrap().kind, Some(PushKind::Note));
    }

    #[test]
    fn bare_object_without_mapping_is_verbose() {
        let def: EncoderDef = serde_json::from_str(r#"{"abbr": "X", "name": "Unmapped"}"#).unwrap();
        assert!(matches!(def, EncoderDef::Verbose(_)));
    }

    #[test]
    fn mixed_flat_and_nested_fields_are_rejected() {
        let result: Result<EncoderDef, _> =
            serde_json::from_str(r#"{"abbr": "X", "cc": 7, "push": {"type": "at"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_action_kinds_deserialize_softly() {
        let turn: TurnDef = serde_json::from_str(r#"{"type": "hyperdrive"}"#).unwrap();
        assert_eq!(turn.kind, Some(TurnKind::Unknown));

        let push: PushDef = serde_json::from_str(r#"{"type": "warp"}"#).unwrap();
        assert_eq!(push.kind, Some(PushKind::Unknown));
    }

    #[test]
    fn page_type_defaults_to_nrpn() {
        let page: PageDef = serde_json::from_str(r#"{"title": "Mix"}"#).unwrap();
        assert_eq!(page.kind, PageActionType::Nrpn);

        let page: PageDef = serde_json::from_str(r#"{"type": "cc"}"#).unwrap();
        assert_eq!(page.kind, PageActionType::Cc);
    }

    #[test]
    fn unrecognized_page_type_parses_softly() {
        let page: PageDef = serde_json::from_str(r#"{"type": "sysex"}"#).unwrap();
        assert_eq!(page.kind, PageActionType::Unknown);
    }
}
