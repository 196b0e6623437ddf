use blockwright_core::color::{ColorTag, Rgb};
use blockwright_core::constants::*;
use blockwright_core::error::ColorError;
use blockwright_render::RenderStyle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shipped defaults, also what a missing settings file means.
pub const DEFAULT_SETTINGS_RON: &str = include_str!("../../../data/settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to parse settings RON: {0}")]
    Parse(String),
    #[error("footprint {0} is out of range (1..={max})", max = MAX_FOOTPRINT)]
    FootprintOutOfRange(u32),
    #[error("grid_height {0} is out of range (1..={max})", max = MAX_GRID_HEIGHT)]
    HeightOutOfRange(u32),
    #[error("zoom_step {0} must be greater than 1")]
    ZoomStepTooSmall(f32),
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("palette is empty")]
    EmptyPalette,
    #[error("{field}: {source}")]
    BadColor {
        field: String,
        #[source]
        source: ColorError,
    },
}

/// Line colors and widths, as hex tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub background: String,
    pub outline: String,
    pub outline_width: f32,
    pub floor: String,
    pub highlight: String,
    pub highlight_width: f32,
}

impl Default for StyleSettings {
    fn default() -> Self {
        let style = RenderStyle::default();
        Self {
            background: style.background.to_hex(),
            outline: style.outline.to_hex(),
            outline_width: style.outline_width,
            floor: style.floor.to_hex(),
            highlight: style.highlight.to_hex(),
            highlight_width: style.highlight_width,
        }
    }
}

/// Editor configuration loaded from RON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub footprint: u32,
    pub grid_height: u32,
    pub palette: Vec<String>,
    pub start_color: String,
    pub rotate_deg_per_pixel: f32,
    pub key_rotate_step_deg: f32,
    pub zoom_step: f32,
    pub show_floor: bool,
    pub style: StyleSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            footprint: DEFAULT_FOOTPRINT,
            grid_height: DEFAULT_GRID_HEIGHT,
            palette: vec![DEFAULT_COLOR.to_string()],
            start_color: DEFAULT_COLOR.to_string(),
            rotate_deg_per_pixel: ROTATE_DEG_PER_PIXEL,
            key_rotate_step_deg: KEY_ROTATE_STEP_DEG,
            zoom_step: ZOOM_STEP,
            show_floor: true,
            style: StyleSettings::default(),
        }
    }
}

impl EditorSettings {
    /// Parse and validate. Only the first validation problem is returned;
    /// use [`validate_settings`] to see all of them.
    pub fn from_ron(ron_str: &str) -> Result<Self, SettingsError> {
        let settings = parse_settings(ron_str)?;
        validate_settings(&settings).map_err(|mut errors| errors.remove(0))?;
        Ok(settings)
    }

    /// The shipped defaults.
    pub fn shipped() -> Self {
        Self::from_ron(DEFAULT_SETTINGS_RON).unwrap_or_else(|e| {
            log::error!("settings: shipped defaults rejected: {e}");
            Self::default()
        })
    }

    pub fn start_color(&self) -> ColorTag {
        ColorTag::parse(&self.start_color).unwrap_or_else(|_| fallback_color())
    }

    pub fn palette(&self) -> Vec<ColorTag> {
        self.palette
            .iter()
            .filter_map(|c| ColorTag::parse(c).ok())
            .collect()
    }

    pub fn render_style(&self) -> RenderStyle {
        let fallback = RenderStyle::default();
        let color = |s: &str, default: Rgb| Rgb::from_hex(s).unwrap_or(default);
        RenderStyle {
            background: color(&self.style.background, fallback.background),
            outline: color(&self.style.outline, fallback.outline),
            outline_width: self.style.outline_width,
            floor: color(&self.style.floor, fallback.floor),
            highlight: color(&self.style.highlight, fallback.highlight),
            highlight_width: self.style.highlight_width,
        }
    }
}

fn fallback_color() -> ColorTag {
    ColorTag::from(Rgb::from_packed(0xff6b6b))
}

/// Parse settings without validating them.
pub fn parse_settings(ron_str: &str) -> Result<EditorSettings, SettingsError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| SettingsError::Parse(e.to_string()))
}

/// Check every field. Returns all problems found.
pub fn validate_settings(settings: &EditorSettings) -> Result<(), Vec<SettingsError>> {
    let mut errors = Vec::new();

    if !(1..=MAX_FOOTPRINT).contains(&settings.footprint) {
        errors.push(SettingsError::FootprintOutOfRange(settings.footprint));
    }
    if !(1..=MAX_GRID_HEIGHT).contains(&settings.grid_height) {
        errors.push(SettingsError::HeightOutOfRange(settings.grid_height));
    }
    if !(settings.zoom_step > 1.0) {
        errors.push(SettingsError::ZoomStepTooSmall(settings.zoom_step));
    }
    for (field, value) in [
        ("rotate_deg_per_pixel", settings.rotate_deg_per_pixel),
        ("key_rotate_step_deg", settings.key_rotate_step_deg),
        ("style.outline_width", settings.style.outline_width),
        ("style.highlight_width", settings.style.highlight_width),
    ] {
        if !(value > 0.0) {
            errors.push(SettingsError::NotPositive { field, value });
        }
    }

    if settings.palette.is_empty() {
        errors.push(SettingsError::EmptyPalette);
    }
    let colors = settings
        .palette
        .iter()
        .enumerate()
        .map(|(i, c)| (format!("palette[{i}]"), c))
        .chain([
            ("start_color".to_string(), &settings.start_color),
            ("style.background".to_string(), &settings.style.background),
            ("style.outline".to_string(), &settings.style.outline),
            ("style.floor".to_string(), &settings.style.floor),
            ("style.highlight".to_string(), &settings.style.highlight),
        ]);
    for (field, value) in colors {
        if let Err(source) = Rgb::from_hex(value) {
            errors.push(SettingsError::BadColor { field, source });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
