use serde::{Deserialize, Serialize};
use shotlist_compose::Preset;

use crate::ConfigError;

/// Menu entry that skips presets. No preset may use this name.
pub const NO_PRESET: &str = "none";

/// Every option list the interview offers, plus the presets and fixed blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub example_subjects: Vec<String>,
    pub body_types: Vec<String>,
    pub skin_tones: Vec<String>,
    pub face_details: Vec<String>,
    pub eye_colors: Vec<String>,
    pub eyebrow_styles: Vec<String>,
    pub hair_colors: Vec<String>,
    pub hair_styles: Vec<String>,
    pub hair_lengths: Vec<String>,
    pub hair_partings: Vec<String>,
    pub makeup: Vec<String>,
    pub accessories: Vec<String>,
    pub tops: Vec<String>,
    pub bottoms: Vec<String>,
    pub footwear: Vec<String>,
    pub poses: Vec<String>,
    pub head_gaze: Vec<String>,
    pub camera_angles: Vec<String>,
    pub shot_types: Vec<String>,
    pub cameras: Vec<String>,
    pub lenses: Vec<String>,
    pub apertures: Vec<String>,
    pub lighting: Vec<String>,
    pub backgrounds: Vec<String>,
    pub quality_styles: Vec<String>,
    pub compositions: Vec<String>,
    pub negative_baseline: Vec<String>,
    pub settings: SettingsSuggestion,
    pub presets: Vec<Preset>,
}

impl Catalog {
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    pub fn preset_names(&self) -> Vec<&str> {
        self.presets
            .iter()
            .map(|preset| preset.name.as_str())
            .collect()
    }

    /// Rejects empty option lists and a preset shadowing [`NO_PRESET`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lists = [
            ("example_subjects", &self.example_subjects),
            ("body_types", &self.body_types),
            ("skin_tones", &self.skin_tones),
            ("face_details", &self.face_details),
            ("eye_colors", &self.eye_colors),
            ("eyebrow_styles", &self.eyebrow_styles),
            ("hair_colors", &self.hair_colors),
            ("hair_styles", &self.hair_styles),
            ("hair_lengths", &self.hair_lengths),
            ("hair_partings", &self.hair_partings),
            ("makeup", &self.makeup),
            ("accessories", &self.accessories),
            ("tops", &self.tops),
            ("bottoms", &self.bottoms),
            ("footwear", &self.footwear),
            ("poses", &self.poses),
            ("head_gaze", &self.head_gaze),
            ("camera_angles", &self.camera_angles),
            ("shot_types", &self.shot_types),
            ("cameras", &self.cameras),
            ("lenses", &self.lenses),
            ("apertures", &self.apertures),
            ("lighting", &self.lighting),
            ("backgrounds", &self.backgrounds),
            ("quality_styles", &self.quality_styles),
            ("compositions", &self.compositions),
        ];

        if let Some((name, _)) = lists.iter().find(|(_, options)| options.is_empty()) {
            return Err(ConfigError::EmptyOptionList(*name));
        }

        match self.preset(NO_PRESET) {
            Some(preset) => Err(ConfigError::ReservedPresetName(preset.name.clone())),
            None => Ok(()),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            example_subjects: strings(&[
                "beauty influencer holding a skincare bottle",
                "female model showcasing a luxury perfume",
                "fashion blogger holding a branded tote bag",
                "lifestyle influencer holding a coffee cup",
                "athletic influencer holding a sports drink",
                "tech reviewer holding a sleek smartphone",
            ]),
            body_types: strings(&[
                "slim athletic",
                "sporty fit",
                "curvy",
                "average",
                "runway model (tall slim)",
                "gym physique (toned)",
            ]),
            skin_tones: strings(&[
                "porcelain pale white",
                "fair",
                "light tan",
                "olive",
                "brown",
                "dark",
            ]),
            face_details: strings(&[
                "beauty mark above upper lip",
                "freckles (subtle)",
                "dimples",
                "sharp jawline",
                "soft jawline",
                "high cheekbones",
            ]),
            eye_colors: strings(&["green", "brown", "blue", "hazel", "gray"]),
            eyebrow_styles: strings(&["thick natural", "thin", "arched", "straight"]),
            hair_colors: strings(&["black", "dark brown", "brown", "blonde", "red"]),
            hair_styles: strings(&["extremely curly tight ringlets", "curly", "wavy", "straight"]),
            hair_lengths: strings(&["short bob", "shoulder length", "long", "very long"]),
            hair_partings: strings(&["middle part", "side part"]),
            makeup: strings(&[
                "natural makeup",
                "soft glam",
                "bold lipstick",
                "smoky eyes",
                "no makeup look",
            ]),
            accessories: strings(&[
                "none",
                "small hoop earrings",
                "pearl earrings",
                "minimal necklace",
                "rings",
                "sunglasses",
                "watch",
            ]),
            tops: strings(&[
                "black turtleneck",
                "white blouse",
                "elegant blazer",
                "simple dress",
                "hoodie (street)",
                "crop jacket",
            ]),
            bottoms: strings(&[
                "jeans",
                "black trousers",
                "skirt",
                "shorts",
                "dress",
                "leggings (sporty)",
            ]),
            footwear: strings(&["sneakers", "heels", "boots", "none (not visible)"]),
            poses: strings(&[
                "standing, confident",
                "sitting, relaxed",
                "walking candid",
                "over-the-shoulder look",
                "holding product with one hand",
                "holding product with both hands",
                "selfie pose (mirror)",
                "arms crossed (editorial)",
            ]),
            head_gaze: strings(&[
                "neutral expression",
                "soft smile",
                "serious editorial",
                "laughing candid",
                "head tilted down, eyes downward (clear)",
                "head tilted up, looking upward (clear)",
                "looking left",
                "looking right",
            ]),
            camera_angles: strings(&[
                "eye level",
                "low angle (shot from below)",
                "high angle (shot from above)",
                "three-quarter angle (45 degrees right)",
                "three-quarter angle (45 degrees left)",
                "side profile right (90 degrees)",
                "side profile left (90 degrees)",
            ]),
            shot_types: strings(&[
                "close-up face portrait",
                "headshot",
                "half body",
                "full body",
                "product close-up (hands + object)",
            ]),
            cameras: strings(&[
                IPHONE_17_PRO_MAX,
                "iPhone 15/16 Pro (smart HDR, natural)",
                "Canon EOS R5",
                "Sony A7 IV",
                "Nikon Z6 II",
                "Fujifilm X-T5 (film-like colors)",
                "cheap phone camera (amateur noise, imperfect)",
            ]),
            lenses: strings(&["24mm", "35mm", "50mm", "85mm", "105mm macro"]),
            apertures: strings(&[
                "f/1.4 strong bokeh",
                "f/2.8 balanced",
                "f/5.6 sharper background",
            ]),
            lighting: strings(&[
                STUDIO_SOFTBOX,
                "cinematic low key lighting",
                "natural window daylight",
                "overcast outdoor daylight",
                "golden hour sunlight",
                "neon night city",
                "harsh flash",
                "office fluorescent",
                "warm indoor bulb light",
            ]),
            backgrounds: strings(&[
                "plain white wall",
                "plain gray wall",
                "plain black backdrop (luxury)",
                "studio seamless paper",
                "minimal modern apartment",
                "city street bokeh",
                "cafe interior",
                "bedroom realistic",
                "product table setup",
            ]),
            quality_styles: strings(&[
                "ultra realistic commercial advertisement",
                "natural realistic (visible skin texture)",
                "amateur candid (slight blur/noise)",
                "fashion editorial magazine look",
                "cinematic still frame",
                "product advertisement (sharp product focus)",
            ]),
            compositions: strings(&[
                "centered composition",
                "rule of thirds",
                "shallow depth of field",
                "sharp focus on eyes",
                "sharp focus on product",
                "subtle film grain",
            ]),
            negative_baseline: strings(&[
                "blurry",
                "low quality",
                "jpeg artifacts",
                "watermark",
                "text",
                "logo",
                "misspelled words",
                "random letters",
                "bad anatomy",
                "deformed",
                "extra fingers",
                "missing fingers",
                "bad hands",
                "distorted face",
                "cross-eye",
                "poorly drawn",
                "oversaturated",
            ]),
            settings: SettingsSuggestion::default(),
            presets: default_presets(),
        }
    }
}

const STUDIO_SOFTBOX: &str = "professional studio beauty lighting (softbox)";
const IPHONE_17_PRO_MAX: &str =
    "iPhone 17 Pro Max (smartphone photo, computational photography, crisp detail)";

fn set(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn default_presets() -> Vec<Preset> {
    vec![
        Preset {
            lighting: set(STUDIO_SOFTBOX),
            lens: set("85mm"),
            background: set("plain black backdrop (luxury)"),
            quality: set("ultra realistic commercial advertisement"),
            shot_type: set("product close-up (hands + object)"),
            ..Preset::named("Luxury Product Ad")
        },
        Preset {
            camera: set(IPHONE_17_PRO_MAX),
            lighting: set("natural window daylight"),
            background: set("minimal modern apartment"),
            quality: set("natural realistic (visible skin texture)"),
            shot_type: set("half body"),
            ..Preset::named("Social Media iPhone")
        },
        Preset {
            camera: set("Sony A7 IV"),
            lens: set("35mm"),
            lighting: set("overcast outdoor daylight"),
            background: set("city street bokeh"),
            quality: set("amateur candid (slight blur/noise)"),
            pose: set("walking candid"),
            ..Preset::named("Street Candid")
        },
        Preset {
            lighting: set(STUDIO_SOFTBOX),
            background: set("plain gray wall"),
            quality: set("fashion editorial magazine look"),
            shot_type: set("headshot"),
            ..Preset::named("Studio Headshot")
        },
    ]
}

/// Sampler settings printed after the prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSuggestion {
    pub sampler: String,
    pub steps: u32,
    pub cfg: String,
    pub resolution: String,
    pub notes: String,
}

impl Default for SettingsSuggestion {
    fn default() -> Self {
        Self {
            sampler: "DPM++ 2M Karras".to_string(),
            steps: 25,
            cfg: "6.5-7".to_string(),
            resolution: "512x768 portrait".to_string(),
            notes: "Text can be misspelled; consider adding text in post.".to_string(),
        }
    }
}

impl SettingsSuggestion {
    pub fn render(&self) -> String {
        format!(
            "SETTINGS SUGGESTION\nSampler: {}\nSteps: {}\nCFG: {}\nResolution: {}\nNotes: {}",
            self.sampler, self.steps, self.cfg, self.resolution, self.notes
        )
    }
}
