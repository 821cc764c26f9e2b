use serde::{Deserialize, Serialize};
use shotlist_utils::join_fragments;
use tracing::debug;

pub const DEFAULT_BRAND_TEXT: &str = "NoctAmor";
pub const CURLY_RINGLETS: &str = "extremely curly tight ringlets";
pub const STRAIGHT_HAIR_STYLE: &str = "straight";
pub const DRESS_TOP: &str = "simple dress";
pub const DRESS_BOTTOM: &str = "n/a (dress)";

const LABEL_ADDED_LATER: &str = "label text added later in design software";
const LABEL_TEXT_NEGATIVE: &str = "misspelled brand name, garbled label text, broken typography";

/// Everything chosen during one run of the interview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    pub subject: String,
    pub age: u8,
    pub body_type: String,
    pub skin_tone: String,
    pub face_details: Vec<String>,
    pub eye_color: String,
    pub brow_style: String,
    pub hair_color: String,
    pub hair_style: String,
    pub hair_length: String,
    pub hair_parting: String,
    pub hair_visible: bool,
    pub makeup: String,
    pub accessories: Vec<String>,
    pub top: String,
    pub bottom: String,
    pub footwear: String,
    pub pose: String,
    pub head_gaze: String,
    pub camera_angle: String,
    pub shot_type: String,
    pub camera: String,
    pub lens: String,
    pub aperture: String,
    pub lighting: String,
    pub background: String,
    pub quality: String,
    pub composition: String,
    pub force_text: bool,
}

impl Selections {
    /// Overwrites every field the preset names.
    pub fn apply_preset(&mut self, preset: &Preset) {
        let overrides = [
            (&preset.pose, &mut self.pose),
            (&preset.shot_type, &mut self.shot_type),
            (&preset.camera, &mut self.camera),
            (&preset.lens, &mut self.lens),
            (&preset.lighting, &mut self.lighting),
            (&preset.background, &mut self.background),
            (&preset.quality, &mut self.quality),
        ];

        for (value, field) in overrides {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }

        debug!(preset = %preset.name, "applied preset");
    }
}

/// A named partial override of the camera and styling fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lens: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

impl Preset {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The bottom garment a top forces, bypassing the bottom menu.
pub fn forced_bottom(top: &str) -> Option<&'static str> {
    (top == DRESS_TOP).then_some(DRESS_BOTTOM)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt {
    pub positive: String,
    pub negative: String,
}

#[derive(Debug, Clone)]
pub struct PromptComposer {
    negative_baseline: Vec<String>,
    brand_text: String,
}

impl PromptComposer {
    pub fn new<I, S>(negative_baseline: I, brand_text: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            negative_baseline: negative_baseline.into_iter().map(Into::into).collect(),
            brand_text: brand_text.into(),
        }
    }

    pub fn brand_text(&self) -> &str {
        &self.brand_text
    }

    pub fn compose(&self, selections: &Selections) -> ComposedPrompt {
        ComposedPrompt {
            positive: join_fragments(self.positive_fragments(selections)),
            negative: join_fragments(self.negative_fragments(selections)),
        }
    }

    pub fn positive_fragments(&self, s: &Selections) -> Vec<String> {
        let mut parts = vec![
            s.subject.clone(),
            format!("adult female influencer, age {}", s.age),
            s.body_type.clone(),
            s.skin_tone.clone(),
            join_fragments(&s.face_details),
            format!("{} eyes", s.eye_color),
            format!("{} eyebrows", s.brow_style),
            format!("{} hair", s.hair_color),
            s.hair_style.clone(),
            s.hair_length.clone(),
            s.hair_parting.clone(),
        ];

        if s.hair_visible {
            parts.push("hair clearly visible".to_string());
        }

        parts.extend([
            s.makeup.clone(),
            join_fragments(&s.accessories),
            format!("wearing {}", s.top),
            format!("bottom: {}", s.bottom),
            format!("footwear: {}", s.footwear),
            s.pose.clone(),
            s.head_gaze.clone(),
            s.camera_angle.clone(),
            s.shot_type.clone(),
            s.camera.clone(),
            s.lens.clone(),
            s.aperture.clone(),
            s.lighting.clone(),
            s.background.clone(),
            s.quality.clone(),
            s.composition.clone(),
        ]);

        if s.force_text {
            parts.push(format!("the label clearly says \"{}\"", self.brand_text));
        } else {
            parts.push(LABEL_ADDED_LATER.to_string());
        }

        parts
    }

    pub fn negative_fragments(&self, s: &Selections) -> Vec<String> {
        let mut parts = self.negative_baseline.clone();

        let hair_opposite = match s.hair_style.as_str() {
            CURLY_RINGLETS => Some("straight hair"),
            STRAIGHT_HAIR_STYLE => Some("curly hair"),
            _ => None,
        };
        if let Some(term) = hair_opposite {
            debug!(hair_style = %s.hair_style, term, "negating opposite hair style");
            parts.push(term.to_string());
        }

        if s.hair_visible {
            parts.push("hair covering face".to_string());
        }
        if s.top == DRESS_TOP {
            parts.push("separate top and bottom".to_string());
        }
        if s.force_text {
            parts.push(LABEL_TEXT_NEGATIVE.to_string());
        }

        parts
    }
}
