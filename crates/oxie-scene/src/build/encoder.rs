//! Encoder normalization.
//!
//! Accepts any of the three authoring shapes and produces the canonical
//! [`Encoder`] record.

use crate::build::action::{build_push, build_turn};
use crate::color::color_for_param;
use crate::def::{CompactField, EncoderDef, FlatEncoderDef, PageActionType, TurnDef, TurnKind};
use crate::error::{CompileWarning, WarningCode};
use crate::instrument::InstrumentIndex;
use crate::scene::{Action, Encoder};

/// Builds an encoder from an optional definition. A missing definition
/// yields the canonical empty encoder.
pub(crate) fn build_encoder(
    def: Option<&EncoderDef>,
    page_type: PageActionType,
    instrument: Option<&InstrumentIndex>,
    path: &str,
    warnings: &mut Vec<CompileWarning>,
) -> Encoder {
    match def {
        None => Encoder::empty(),
        Some(EncoderDef::Compact(fields)) => {
            build_compact(fields, page_type, instrument, path, warnings)
        }
        Some(EncoderDef::Flat(flat)) => build_flat(flat, page_type, instrument, path, warnings),
        Some(EncoderDef::Verbose(v)) => {
            let abbr = v.abbr.clone().unwrap_or_default();
            let name = v.name.clone().unwrap_or_default();
            let color = v.color.unwrap_or_else(|| color_for_param(&abbr, &name));
            Encoder {
                name,
                abbr,
                color,
                push_action: build_push(v.push.as_ref(), &format!("{path}.push"), warnings),
                turn_actions: [
                    build_turn(
                        v.turn.as_ref().or(v.primary.as_ref()),
                        instrument,
                        &format!("{path}.turn"),
                        warnings,
                    ),
                    build_turn(
                        v.secondary.as_ref(),
                        instrument,
                        &format!("{path}.secondary"),
                        warnings,
                    ),
                ],
                bipolar: v.bipolar.unwrap_or(false),
            }
        }
    }
}

/// The action type an encoder falls back to when it does not pick its own.
fn page_default_kind(page_type: PageActionType) -> TurnKind {
    match page_type {
        PageActionType::Cc => TurnKind::Cc,
        PageActionType::Nrpn => TurnKind::Nrpn,
        // The page itself already carried a diagnostic; dependent encoders
        // are quietly disabled.
        PageActionType::Unknown => TurnKind::Off,
    }
}

/// Flat shape: one CC or NRPN mapping, push wired to reset-to-default,
/// color auto-classified unless overridden.
fn build_flat(
    flat: &FlatEncoderDef,
    page_type: PageActionType,
    instrument: Option<&InstrumentIndex>,
    path: &str,
    warnings: &mut Vec<CompileWarning>,
) -> Encoder {
    let kind = match (flat.cc, flat.msb) {
        (Some(_), None) => TurnKind::Cc,
        (None, Some(_)) => TurnKind::Nrpn,
        _ => page_default_kind(page_type),
    };

    let turn_def = TurnDef {
        kind: Some(kind),
        cc: flat.cc,
        msb: flat.msb,
        lsb: flat.lsb,
        channel: flat.channel,
        default_value: flat.default,
        lower: flat.lower,
        upper: flat.upper,
        ..TurnDef::default()
    };

    let color = flat.color.unwrap_or_else(|| {
        color_for_param(
            flat.abbr.as_deref().unwrap_or(""),
            flat.name.as_deref().unwrap_or(""),
        )
    });

    Encoder {
        name: flat
            .name
            .clone()
            .or_else(|| flat.abbr.clone())
            .unwrap_or_default(),
        abbr: flat.abbr.clone().unwrap_or_default(),
        color,
        push_action: Action::reset_push(),
        turn_actions: [
            build_turn(Some(&turn_def), instrument, path, warnings),
            Action::disabled_turn(),
        ],
        bipolar: flat.bipolar.unwrap_or(false),
    }
}

/// Parsed compact entry: `[abbr, name?, n1, n2, channel?]`.
struct CompactEntry {
    abbr: String,
    name: String,
    n1: u8,
    n2: u8,
    channel: Option<u8>,
}

/// Compact shape: positional fields, no color classification, disabled
/// push. Whether a display name was supplied is decided by checking if the
/// second element is textual.
fn build_compact(
    fields: &[CompactField],
    page_type: PageActionType,
    instrument: Option<&InstrumentIndex>,
    path: &str,
    warnings: &mut Vec<CompileWarning>,
) -> Encoder {
    let Some(entry) = parse_compact(fields) else {
        warnings.push(CompileWarning::with_path(
            WarningCode::MalformedCompactEncoder,
            "expected [abbr, name?, msb, lsb, channel?], encoder left empty",
            path,
        ));
        return Encoder::empty();
    };

    let kind = page_default_kind(page_type);
    let turn_def = match kind {
        TurnKind::Nrpn => TurnDef {
            kind: Some(kind),
            msb: Some(entry.n1),
            lsb: Some(entry.n2),
            channel: entry.channel,
            ..TurnDef::default()
        },
        // Under a cc-typed page the first numeric is the CC number.
        _ => TurnDef {
            kind: Some(kind),
            cc: Some(entry.n1),
            channel: entry.channel,
            ..TurnDef::default()
        },
    };

    Encoder {
        name: entry.name,
        abbr: entry.abbr,
        color: 0,
        push_action: Action::disabled_push(),
        turn_actions: [
            build_turn(Some(&turn_def), instrument, path, warnings),
            Action::disabled_turn(),
        ],
        bipolar: false,
    }
}

fn parse_compact(fields: &[CompactField]) -> Option<CompactEntry> {
    let (first, rest) = fields.split_first()?;
    let CompactField::Text(abbr) = first else {
        return None;
    };

    let (name, numeric) = match rest.split_first() {
        Some((CompactField::Text(name), tail)) => (Some(name.clone()), tail),
        _ => (None, rest),
    };

    let mut numbers = Vec::with_capacity(3);
    for field in numeric {
        let CompactField::Number(n) = field else {
            return None;
        };
        numbers.push(*n);
    }
    if !(2..=3).contains(&numbers.len()) {
        return None;
    }

    Some(CompactEntry {
        abbr: abbr.clone(),
        name: name.unwrap_or_else(|| abbr.clone()),
        n1: u8::try_from(numbers[0]).ok()?,
        n2: u8::try_from(numbers[1]).ok()?,
        channel: match numbers.get(2) {
            Some(&c) => Some(u8::try_from(c).ok()?),
            None => None,
        },
    })
}
