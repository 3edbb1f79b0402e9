//! Scene assembly.
//!
//! Top-down: scene -> pages -> encoders -> actions. Every builder is a pure
//! function over the definition; warnings accumulate in a single list
//! threaded through the fold. Input sizes are bounded (12 pages of 16
//! encoders of 3 actions), so the whole compile is one finite pass.

mod action;
mod encoder;


use self::encoder::build_encoder;
use crate::def::{PageActionType, PageDef, SceneDef};
use crate::error::{CompileWarning, SceneError, WarningCode};
use crate::icon::validate_icon;
use crate::instrument::InstrumentIndex;
use crate::scene::{
    CodeBlock, Encoder, Page, Scene, DEFAULT_ICON, ENCODERS_PER_PAGE, PAGES_PER_SCENE,
};

/// A compiled scene plus any soft-degradation diagnostics.
#[derive(Debug, Clone)]
pub struct CompiledScene {
    pub scene: Scene,
    pub warnings: Vec<CompileWarning>,
}

/// Compiles a scene definition into a complete scene record.
///
/// The instrument index, when the definition names one, must be resolved
/// and loaded by the caller; passing `None` for a named instrument degrades
/// gracefully (actions lose their metadata-seeded defaults) with a
/// diagnostic. The only fatal failure is icon validation.
pub fn compile_scene(
    def: &SceneDef,
    instrument: Option<&InstrumentIndex>,
) -> Result<CompiledScene, SceneError> {
    let mut warnings = Vec::new();

    if let Some(reference) = def.instrument.as_deref() {
        if instrument.is_none() {
            warnings.push(CompileWarning::with_path(
                WarningCode::UnresolvedInstrument,
                format!("instrument definition \"{reference}\" not resolved, compiling without metadata"),
                "instrument",
            ));
        }
    }

    let icon = match &def.icon {
        Some(raw) => validate_icon(raw)?,
        None => DEFAULT_ICON,
    };

    let mut page_defs: &[PageDef] = &def.pages;
    if page_defs.len() > PAGES_PER_SCENE {
        warnings.push(CompileWarning::with_path(
            WarningCode::ExcessPages,
            format!(
                "scene has {} pages, keeping the first {}",
                page_defs.len(),
                PAGES_PER_SCENE
            ),
            "pages",
        ));
        page_defs = &page_defs[..PAGES_PER_SCENE];
    }

    let mut pages: Vec<Page> = page_defs
        .iter()
        .enumerate()
        .map(|(i, page)| build_page(page, instrument, i, &mut warnings))
        .collect();
    while pages.len() < PAGES_PER_SCENE {
        pages.push(Page::empty());
    }

    let scene = Scene {
        title: def.title.clone().unwrap_or_else(|| "New Scene".to_string()),
        icon,
        selected_preset: def.selected_preset.unwrap_or(0),
        code: CodeBlock {
            code: def.code.clone().unwrap_or_default(),
        },
        pages,
    };

    Ok(CompiledScene { scene, warnings })
}

/// Builds one page: maps the supplied encoder definitions and pads to 16
/// with empty encoders.
fn build_page(
    def: &PageDef,
    instrument: Option<&InstrumentIndex>,
    page_index: usize,
    warnings: &mut Vec<CompileWarning>,
) -> Page {
    if def.kind == PageActionType::Unknown {
        warnings.push(CompileWarning::with_path(
            WarningCode::UnknownPageType,
            "page has an unrecognized default action type, dependent encoders disabled",
            format!("pages[{page_index}].type"),
        ));
    }

    let mut encoder_defs = &def.encoders[..];
    if encoder_defs.len() > ENCODERS_PER_PAGE {
        warnings.push(CompileWarning::with_path(
            WarningCode::ExcessEncoders,
            format!(
                "page has {} encoders, keeping the first {}",
                encoder_defs.len(),
                ENCODERS_PER_PAGE
            ),
            format!("pages[{page_index}].encoders"),
        ));
        encoder_defs = &encoder_defs[..ENCODERS_PER_PAGE];
    }

    let mut encoders: Vec<_> = encoder_defs
        .iter()
        .enumerate()
        .map(|(i, encoder)| {
            build_encoder(
                Some(encoder),
                def.kind,
                instrument,
                &format!("pages[{page_index}].encoders[{i}]"),
                warnings,
            )
        })
        .collect();
    while encoders.len() < ENCODERS_PER_PAGE {
        encoders.push(Encoder::empty());
    }

    Page {
        title: def.title.clone().unwrap_or_default(),
        output: def.output.unwrap_or(0),
        channel: def.channel.unwrap_or(1),
        encoders,
    }
}
