//! Turn and push action builders.

use crate::def::{PushDef, PushKind, TurnDef, TurnKind};
use crate::error::{CompileWarning, WarningCode};
use crate::instrument::InstrumentIndex;
use crate::scene::Action;

/// Builds a turn action from a definition.
///
/// Absent, `off`, and untyped definitions produce the disabled sentinel.
/// Instrument metadata, when available, supplies only the default value and
/// only when the author omitted one; metadata min/max is never consulted
/// (instrument definitions reuse CC numbers across synth engines, so their
/// ranges cannot be trusted).
pub(crate) fn build_turn(
    def: Option<&TurnDef>,
    instrument: Option<&InstrumentIndex>,
    path: &str,
    warnings: &mut Vec<CompileWarning>,
) -> Action {
    let Some(def) = def else {
        return Action::disabled_turn();
    };
    let kind = match def.kind {
        None | Some(TurnKind::Off) => return Action::disabled_turn(),
        Some(TurnKind::Unknown) => {
            warnings.push(CompileWarning::with_path(
                WarningCode::UnknownTurnType,
                "unrecognized turn action type, encoder turn disabled",
                path,
            ));
            return Action::disabled_turn();
        }
        Some(kind) => kind,
    };

    let metadata_default = instrument.and_then(|index| match kind {
        TurnKind::Cc | TurnKind::Cc14 | TurnKind::CcRel1 | TurnKind::CcRel2 => {
            def.cc.and_then(|cc| index.cc_default(cc))
        }
        TurnKind::Nrpn => match (def.msb, def.lsb) {
            (Some(msb), Some(lsb)) => index.nrpn_default(msb, lsb),
            _ => None,
        },
        _ => None,
    });

    let base = Action {
        instrument: 127,
        parameter: 0,
        kind: 0,
        display: def.display.unwrap_or(10),
        mode: def.mode.unwrap_or(3),
        channel: def.channel.unwrap_or(0),
        lower: def.lower.unwrap_or(0),
        upper: def.upper.unwrap_or(127),
        nr1: 0,
        nr2: 0,
        output: def.output.unwrap_or(12),
        default_value: Some(def.default_value.or(metadata_default).unwrap_or(0)),
    };

    match kind {
        TurnKind::Nrpn => Action {
            kind: 9,
            nr1: def.lsb.unwrap_or(0),
            nr2: def.msb.unwrap_or(0),
            ..base
        },
        TurnKind::Cc => Action {
            kind: 3,
            nr1: def.cc.unwrap_or(0),
            ..base
        },
        TurnKind::Cc14 => Action {
            kind: 4,
            nr1: def.cc.unwrap_or(0),
            upper: def.upper.unwrap_or(16383),
            ..base
        },
        TurnKind::CcRel1 => Action {
            kind: 1,
            nr1: def.cc.unwrap_or(0),
            ..base
        },
        TurnKind::CcRel2 => Action {
            kind: 2,
            nr1: def.cc.unwrap_or(0),
            ..base
        },
        TurnKind::Pc => Action { kind: 5, ..base },
        TurnKind::Pb => Action {
            kind: 6,
            upper: 16383,
            ..base
        },
        TurnKind::At => Action { kind: 7, ..base },
        TurnKind::Note => Action {
            kind: 8,
            nr1: def.note.unwrap_or(60),
            ..base
        },
        TurnKind::Off | TurnKind::Unknown => unreachable!("handled above"),
    }
}

/// Builds a push action from a definition. No instrument metadata is
/// involved; push actions have no default value.
pub(crate) fn build_push(
    def: Option<&PushDef>,
    path: &str,
    warnings: &mut Vec<CompileWarning>,
) -> Action {
    let Some(def) = def else {
        return Action::disabled_push();
    };
    let kind = match def.kind {
        None | Some(PushKind::Off) => return Action::disabled_push(),
        Some(PushKind::Unknown) => {
            warnings.push(CompileWarning::with_path(
                WarningCode::UnknownPushType,
                "unrecognized push action type, encoder push disabled",
                path,
            ));
            return Action::disabled_push();
        }
        Some(kind) => kind,
    };

    let base = Action {
        instrument: 127,
        parameter: 0,
        kind: 0,
        display: def.display.unwrap_or(0),
        mode: def.mode.unwrap_or(0),
        channel: def.channel.unwrap_or(0),
        lower: def.lower.unwrap_or(0),
        upper: def.upper.unwrap_or(127),
        nr1: 0,
        nr2: 0,
        output: def.output.unwrap_or(12),
        default_value: None,
    };

    match kind {
        PushKind::Note => Action {
            kind: 1,
            nr1: def.note.unwrap_or(60),
            nr2: def.velocity.unwrap_or(127),
            ..base
        },
        PushKind::Cc => Action {
            kind: 2,
            nr1: def.cc.unwrap_or(0),
            nr2: def.value.unwrap_or(127),
            ..base
        },
        PushKind::Pc => Action {
            kind: 3,
            nr1: def.program.unwrap_or(0),
            ..base
        },
        PushKind::Default => Action { kind: 4, ..base },
        PushKind::At => Action { kind: 5, ..base },
        PushKind::Page => Action {
            kind: 6,
            nr1: def.page.unwrap_or(0),
            ..base
        },
        PushKind::Off | PushKind::Unknown => unreachable!("handled above"),
    }
}
