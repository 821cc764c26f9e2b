use rand::Rng;
use shotlist_compose::{ComposedPrompt, Preset, PromptComposer, Selections, forced_bottom};
use shotlist_config::{Catalog, NO_PRESET};
use shotlist_input::{InputError, Prompter};
use std::io::{BufRead, Write};
use tracing::debug;

/// Raw answers from one pass through the questions, before the preset is applied.
#[derive(Debug, Clone)]
pub struct Interview {
    pub selections: Selections,
    pub preset: Option<Preset>,
}

impl Interview {
    /// Applies the chosen preset over the individual answers.
    pub fn finalize(self) -> Selections {
        let mut selections = self.selections;
        if let Some(preset) = &self.preset {
            selections.apply_preset(preset);
        }
        selections
    }
}

#[derive(Debug, Clone)]
pub struct BuiltPrompt {
    pub selections: Selections,
    pub prompt: ComposedPrompt,
}

/// Runs the interview, applies the preset and composes both prompts.
pub fn build_prompt<R, W, G>(
    prompter: &mut Prompter<R, W, G>,
    catalog: &Catalog,
    composer: &PromptComposer,
) -> Result<BuiltPrompt, InputError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    let selections = interview(prompter, catalog)?.finalize();
    let prompt = composer.compose(&selections);
    Ok(BuiltPrompt { selections, prompt })
}

pub fn interview<R, W, G>(
    prompter: &mut Prompter<R, W, G>,
    catalog: &Catalog,
) -> Result<Interview, InputError>
where
    R: BufRead,
    W: Write,
    G: Rng,
{
    prompter.say("\n=== Ultra Realistic Prompt Builder ===\n")?;

    let example_subject = prompter.pick(&catalog.example_subjects);
    let subject = prompter.text_or(
        "Subject (free text) (ENTER = random example): ",
        &example_subject,
    )?;

    let mut preset_names = catalog.preset_names();
    let no_preset_index = preset_names.len();
    preset_names.push(NO_PRESET);
    let preset_choice = prompter.choose(
        "Choose a preset (optional):",
        &preset_names,
        Some(no_preset_index),
    )?;
    let preset = if preset_choice == NO_PRESET {
        None
    } else {
        catalog.preset(&preset_choice).cloned()
    };

    let age = prompter.age("Age (21-30, ENTER = random): ")?;
    let body_type = prompter.choose("Body type:", &catalog.body_types, None)?;
    let skin_tone = prompter.choose("Skin tone:", &catalog.skin_tones, None)?;
    let face_details =
        prompter.choose_many("Face details (multiple allowed):", &catalog.face_details, false)?;

    let eye_color = prompter.choose("Eye color:", &catalog.eye_colors, None)?;
    let brow_style = prompter.choose("Eyebrow style:", &catalog.eyebrow_styles, None)?;

    let hair_color = prompter.choose("Hair color:", &catalog.hair_colors, None)?;
    let hair_style = prompter.choose("Hair style:", &catalog.hair_styles, None)?;
    let hair_length = prompter.choose("Hair length:", &catalog.hair_lengths, None)?;
    let hair_parting = prompter.choose("Hair parting:", &catalog.hair_partings, None)?;
    let hair_visible =
        prompter.confirm("Hair clearly visible? (ENTER = random, y/n): ", true)?;

    let makeup = prompter.choose("Makeup:", &catalog.makeup, None)?;
    let accessories =
        prompter.choose_many("Accessories (multiple allowed):", &catalog.accessories, true)?;

    let top = prompter.choose("Clothing top:", &catalog.tops, None)?;
    let bottom = match forced_bottom(&top) {
        Some(forced) => {
            prompter.say(&format!("Clothing bottom: {forced} (set by {top})"))?;
            forced.to_string()
        }
        None => prompter.choose("Clothing bottom:", &catalog.bottoms, None)?,
    };
    let footwear = prompter.choose("Footwear:", &catalog.footwear, None)?;

    let pose = prompter.choose("Pose:", &catalog.poses, None)?;
    let head_gaze = prompter.choose("Head + gaze:", &catalog.head_gaze, None)?;
    let camera_angle = prompter.choose("Camera angle:", &catalog.camera_angles, None)?;
    let shot_type = prompter.choose("Shot type:", &catalog.shot_types, None)?;

    let camera = prompter.choose("Camera device:", &catalog.cameras, None)?;
    let lens = prompter.choose("Lens:", &catalog.lenses, None)?;
    let aperture = prompter.choose("Aperture:", &catalog.apertures, None)?;
    let lighting = prompter.choose("Lighting:", &catalog.lighting, None)?;
    let background = prompter.choose("Background:", &catalog.backgrounds, None)?;
    let quality = prompter.choose("Quality style:", &catalog.quality_styles, None)?;
    let composition = prompter.choose("Composition:", &catalog.compositions, None)?;

    let force_text = prompter.confirm(
        "Try to force brand text on label? (ENTER=random, y=yes, n=no): ",
        true,
    )?;

    debug!(preset = ?preset.as_ref().map(|preset| &preset.name), "interview complete");

    Ok(Interview {
        selections: Selections {
            subject,
            age,
            body_type,
            skin_tone,
            face_details,
            eye_color,
            brow_style,
            hair_color,
            hair_style,
            hair_length,
            hair_parting,
            hair_visible,
            makeup,
            accessories,
            top,
            bottom,
            footwear,
            pose,
            head_gaze,
            camera_angle,
            shot_type,
            camera,
            lens,
            aperture,
            lighting,
            background,
            quality,
            composition,
            force_text,
        },
        preset,
    })
}
