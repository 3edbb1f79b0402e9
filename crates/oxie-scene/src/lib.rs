//! OXI E16 Scene Compiler
//!
//! This crate compiles a human-authored, simplified scene definition into
//! the exact nested record structure the OXI ONE's E16 expansion expects in
//! its `.oxie16` scene files: partial, shorthand, and multi-format encoder
//! definitions are resolved into a complete scene record with all defaults
//! filled, ranges normalized, and colors assigned.
//!
//! # Overview
//!
//! A scene holds 12 pages of 16 encoders; each encoder has a push action
//! and two turn actions. Authors supply as little as `{"abbr": "FREQ",
//! "cc": 16}` per encoder; the compiler pads everything else with the
//! device's canonical disabled sentinels.
//!
//! ```
//! use oxie_scene::{compile_scene, SceneDef};
//!
//! let def: SceneDef = serde_json::from_str(r#"{
//!     "title": "My Synth",
//!     "pages": [
//!         {"title": "Filter", "type": "cc", "encoders": [
//!             {"abbr": "FREQ", "name": "Flt Freq", "cc": 16},
//!             {"abbr": "RESO", "name": "Flt Res", "cc": 17}
//!         ]}
//!     ]
//! }"#).unwrap();
//!
//! let compiled = compile_scene(&def, None).unwrap();
//! assert_eq!(compiled.scene.pages.len(), 12);
//! assert_eq!(compiled.scene.pages[0].encoders.len(), 16);
//! ```
//!
//! File I/O, instrument definition search paths, and argument parsing live
//! in the `oxie` CLI; this crate starts from parsed definitions and ends at
//! a serializable [`Scene`].
//!
//! # Modules
//!
//! - [`def`]: Scene definition (input) types
//! - [`scene`]: Scene record (output) types and canonical sentinels
//! - [`build`]: The compiler itself
//! - [`color`]: Heuristic encoder color assignment
//! - [`icon`]: Icon validation
//! - [`instrument`]: Instrument definition metadata lookup
//! - [`error`]: Errors and compile warnings

pub mod build;
pub mod color;
pub mod def;
pub mod error;
pub mod icon;
pub mod instrument;
pub mod scene;

// Re-export commonly used types at the crate root
pub use build::{compile_scene, CompiledScene};
pub use color::{color_for_param, NEUTRAL_COLOR};
pub use def::{
    CompactField, EncoderDef, FlatEncoderDef, PageActionType, PageDef, PushDef, PushKind,
    SceneDef, TurnDef, TurnKind, VerboseEncoderDef,
};
pub use error::{CompileWarning, IconError, SceneError, WarningCode};
pub use icon::validate_icon;
pub use instrument::{InstrumentDef, InstrumentIndex, ParamDef, ParamKind};
pub use scene::{
    Action, CodeBlock, Encoder, Page, Scene, DEFAULT_ICON, ENCODERS_PER_PAGE, ICON_BYTES,
    PAGES_PER_SCENE,
};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// The worked end-to-end example: one cc-typed page with one encoder.
    #[test]
    fn filter_page_compiles_end_to_end() {
        let json = r#"{
            "pages": [
                {"title": "Filter", "channel": 10, "type": "cc", "encoders": [
                    {"abbr": "FREQ", "name": "Flt Freq", "cc": 16}
                ]}
            ]
        }"#;

        let def: SceneDef = serde_json::from_str(json).unwrap();
        let compiled = compile_scene(&def, None).unwrap();
        let scene = &compiled.scene;

        assert_eq!(scene.pages.len(), PAGES_PER_SCENE);
        assert_eq!(scene.title, "New Scene");

        let page = &scene.pages[0];
        assert_eq!(page.title, "Filter");
        assert_eq!(page.channel, 10);

        let encoder = &page.encoders[0];
        assert_eq!(encoder.abbr, "FREQ");
        assert_eq!(encoder.name, "Flt Freq");
        assert_eq!(encoder.color, 84, "filter cutoff family");
        assert_eq!(encoder.push_action, Action::reset_push());

        let turn = &encoder.turn_actions[0];
        assert_eq!(turn.kind, 3);
        assert_eq!(turn.nr1, 16);
        assert_eq!(turn.channel, 0, "action channel is not inherited from the page");
        assert_eq!(encoder.turn_actions[1], Action::disabled_turn());

        // Everything not supplied is padding.
        assert!(page.encoders[1..]
            .iter()
            .all(|e| *e == Encoder::empty()));
        assert!(scene.pages[1..].iter().all(|p| *p == Page::empty()));
        assert!(compiled.warnings.is_empty());
    }

    /// The serialized scene is the device's wire format.
    #[test]
    fn serialized_scene_matches_wire_contract() {
        let def: SceneDef = serde_json::from_str(
            r#"{"title": "T", "code": "main:", "pages": [
                {"type": "cc", "encoders": [{"abbr": "VOL", "cc": 7}]}
            ]}"#,
        )
        .unwrap();
        let scene = compile_scene(&def, None).unwrap().scene;
        let value = serde_json::to_value(&scene).unwrap();

        assert_eq!(value["code"], serde_json::json!({ "code": "main:" }));
        assert_eq!(value["selectedPreset"], 0);
        assert_eq!(value["icon"].as_array().unwrap().len(), 32);
        assert_eq!(value["pages"].as_array().unwrap().len(), 12);

        let encoder = &value["pages"][0]["encoders"][0];
        assert_eq!(encoder["turn_actions"].as_array().unwrap().len(), 2);
        assert_eq!(encoder["turn_actions"][0]["type"], 3);
        assert_eq!(encoder["turn_actions"][0]["defaultValue"], 0);
        assert_eq!(encoder["push_action"]["type"], 4);
        assert!(
            encoder["push_action"].get("defaultValue").is_none(),
            "push actions must not carry defaultValue"
        );
        assert_eq!(encoder["bipolar"], false);
    }

    /// A compiled scene survives a serialization round trip.
    #[test]
    fn scene_round_trips_through_json() {
        let def: SceneDef = serde_json::from_str(
            r#"{"pages": [{"encoders": [["CUT", 1, 20], {"abbr": "PAN", "cc": 89}]}]}"#,
        )
        .unwrap();
        let scene = compile_scene(&def, None).unwrap().scene;

        let json = serde_json::to_string(&scene).unwrap();
        let parsed: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, parsed);
    }

    /// Instrument metadata seeds default values through the whole pipeline.
    #[test]
    fn instrument_defaults_flow_into_actions() {
        let instrument: InstrumentDef = serde_json::from_str(
            r#"{"name": "Digitone", "parameters": [
                {"type": "cc", "nr1": 16, "default_value": 100}
            ]}"#,
        )
        .unwrap();
        let index = InstrumentIndex::from_def(&instrument);

        let def: SceneDef = serde_json::from_str(
            r#"{"instrument": "Digitone.oxiindef", "pages": [
                {"type": "cc", "encoders": [{"abbr": "FREQ", "cc": 16}]}
            ]}"#,
        )
        .unwrap();

        let compiled = compile_scene(&def, Some(&index)).unwrap();
        assert_eq!(
            compiled.scene.pages[0].encoders[0].turn_actions[0].default_value,
            Some(100)
        );
        assert!(compiled.warnings.is_empty());
    }
}
