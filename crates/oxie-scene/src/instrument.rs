//! Instrument definition metadata.
//!
//! An `.oxiindef` instrument definition carries a parameter list keyed by
//! CC number or NRPN MSB/LSB pair. The compiler consumes it through
//! [`InstrumentIndex`], and only for one thing: seeding a turn action's
//! `defaultValue` when the author did not give one. The definition's
//! min/max metadata is deliberately ignored; instrument definitions reuse
//! CC numbers across unrelated synth engines, so 0-127 is the only range
//! that can be trusted.
//!
//! Locating and reading the definition file is the caller's concern; this
//! module starts from an already-parsed [`InstrumentDef`].

use std::collections::HashMap;

use serde::Deserialize;

/// Parameter kind within an instrument definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Cc,
    Nrpn,
    #[serde(other)]
    Unknown,
}

/// One parameter entry from an instrument definition.
///
/// For CC parameters `nr1` is the CC number; for NRPN parameters `nr1` is
/// the LSB and `nr2` the MSB.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ParamDef {
    #[serde(rename = "type")]
    pub kind: Option<ParamKind>,
    pub name: Option<String>,
    pub nr1: Option<u16>,
    pub nr2: Option<u16>,
    pub default_value: Option<u16>,
}

/// A parsed instrument definition.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstrumentDef {
    pub name: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParamDef>,
}

/// Lookup index over an instrument definition's parameters, keyed by CC
/// number and by `"MSB:LSB"`.
#[derive(Debug, Clone, Default)]
pub struct InstrumentIndex {
    by_cc: HashMap<u16, ParamDef>,
    by_nrpn: HashMap<String, ParamDef>,
}

impl InstrumentIndex {
    /// Builds the index from a parsed definition. Parameters without a
    /// recognized kind or key are skipped.
    pub fn from_def(def: &InstrumentDef) -> Self {
        let mut by_cc = HashMap::new();
        let mut by_nrpn = HashMap::new();

        for param in &def.parameters {
            match param.kind {
                Some(ParamKind::Cc) => {
                    if let Some(cc) = param.nr1 {
                        by_cc.insert(cc, param.clone());
                    }
                }
                Some(ParamKind::Nrpn) => {
                    if let (Some(lsb), Some(msb)) = (param.nr1, param.nr2) {
                        by_nrpn.insert(format!("{}:{}", msb, lsb), param.clone());
                    }
                }
                _ => {}
            }
        }

        Self { by_cc, by_nrpn }
    }

    /// Number of indexed parameters.
    pub fn len(&self) -> usize {
        self.by_cc.len() + self.by_nrpn.len()
    }

    /// Returns true if no parameters were indexed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Default value for a CC parameter, if the definition has one.
    pub fn cc_default(&self, cc: u8) -> Option<u16> {
        self.by_cc
            .get(&u16::from(cc))
            .and_then(|p| p.default_value)
    }

    /// Default value for an NRPN parameter, if the definition has one.
    pub fn nrpn_default(&self, msb: u8, lsb: u8) -> Option<u16> {
        self.by_nrpn
            .get(&format!("{}:{}", msb, lsb))
            .and_then(|p| p.default_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixture() -> InstrumentDef {
        serde_json::from_str(
            r#"{
                "name": "Test Synth",
                "parameters": [
                    {"type": "cc", "name": "Cutoff", "nr1": 74, "default_value": 64},
                    {"type": "cc", "name": "Resonance", "nr1": 71},
                    {"type": "nrpn", "name": "Tune", "nr1": 5, "nr2": 1, "default_value": 32},
                    {"type": "something_new", "name": "Future", "nr1": 9}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn builds_cc_and_nrpn_maps() {
        let index = InstrumentIndex::from_def(&fixture());
        assert_eq!(index.len(), 3);
        assert_eq!(index.cc_default(74), Some(64));
        assert_eq!(index.nrpn_default(1, 5), Some(32));
    }

    #[test]
    fn missing_keys_return_none() {
        let index = InstrumentIndex::from_def(&fixture());
        assert_eq!(index.cc_default(99), None);
        assert_eq!(index.nrpn_default(5, 1), None, "MSB:LSB order matters");
    }

    #[test]
    fn parameter_without_default_yields_none() {
        let index = InstrumentIndex::from_def(&fixture());
        assert_eq!(index.cc_default(71), None);
    }

    #[test]
    fn unknown_parameter_kinds_are_skipped() {
        let index = InstrumentIndex::from_def(&fixture());
        assert_eq!(index.cc_default(9), None);
    }
}
