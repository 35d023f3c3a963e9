use gf_config::{RadiusSelectMode, TrackerConfig};
use gf_core::RadiusSelector;
use std::io::{self, BufRead, Write};

/// Picks a preset by configured index, the inline-list flavor of
/// radius selection. An out-of-range index falls back to the first
/// preset.
pub struct InlinePresetSelector {
    index: usize,
}

impl InlinePresetSelector {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl RadiusSelector for InlinePresetSelector {
    fn select_radius_m(&self, presets_m: &[f64]) -> Option<f64> {
        presets_m
            .get(self.index)
            .or_else(|| presets_m.first())
            .copied()
    }
}

/// Prompts on the terminal, the dialog flavor of radius selection.
/// Accepts a 1-based preset number; anything else selects nothing.
pub struct PromptRadiusSelector;

impl RadiusSelector for PromptRadiusSelector {
    fn select_radius_m(&self, presets_m: &[f64]) -> Option<f64> {
        if presets_m.is_empty() {
            return None;
        }
        let mut stderr = io::stderr();
        let _ = writeln!(stderr, "Set a geofence radius:");
        for (position, radius_m) in presets_m.iter().enumerate() {
            let _ = writeln!(stderr, "  {}) {}m", position + 1, radius_m);
        }
        let _ = write!(stderr, "> ");
        let _ = stderr.flush();

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let choice: usize = line.trim().parse().ok()?;
        if choice == 0 {
            return None;
        }
        presets_m.get(choice - 1).copied()
    }
}

pub fn from_config(config: &TrackerConfig) -> Box<dyn RadiusSelector> {
    match config.radius_select_mode {
        RadiusSelectMode::Inline => Box::new(InlinePresetSelector::new(config.radius_preset_index)),
        RadiusSelectMode::Prompt => Box::new(PromptRadiusSelector),
    }
}
