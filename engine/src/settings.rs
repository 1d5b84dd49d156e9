use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::layout::LayoutKind;
use super::types::{FLOWER_GROUP_SIZE, SEASON_GROUP_SIZE, Symbol};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    Preschool,
    Junior,
    Senior,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DifficultySettings {
    pub tile_count: usize,
    pub symbol_count: usize,
    pub hint_limit: u32,
    pub undo_limit: u32,
    pub layout: LayoutKind,
    #[serde(default)]
    pub wildcard_tiles: bool,
}

impl DifficultySettings {
    pub fn for_age_group(group: AgeGroup) -> Self {
        match group {
            AgeGroup::Preschool => Self {
                tile_count: 12,
                symbol_count: 6,
                hint_limit: 3,
                undo_limit: 3,
                layout: LayoutKind::Flat3x4,
                wildcard_tiles: false,
            },
            AgeGroup::Junior => Self {
                tile_count: 32,
                symbol_count: 10,
                hint_limit: 2,
                undo_limit: 2,
                layout: LayoutKind::TwoLayerSquare,
                wildcard_tiles: true,
            },
            AgeGroup::Senior => Self {
                tile_count: 44,
                symbol_count: 14,
                hint_limit: 1,
                undo_limit: 1,
                layout: LayoutKind::Pyramid,
                wildcard_tiles: true,
            },
        }
    }

    /// The distinct symbols the generator cycles through when it builds
    /// pairs. Wildcard groups contribute their individual members.
    pub fn symbol_alphabet(&self) -> Vec<Symbol> {
        let mut alphabet: Vec<Symbol> = (0..self.symbol_count)
            .map(|i| Symbol::Standard(i as u8))
            .collect();
        if self.wildcard_tiles {
            alphabet.extend((0..SEASON_GROUP_SIZE).map(Symbol::Season));
            alphabet.extend((0..FLOWER_GROUP_SIZE).map(Symbol::Flower));
        }
        alphabet
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.tile_count < 4 {
            return Err(format!(
                "Tile count must be at least 4, got {}",
                self.tile_count
            ));
        }
        if self.tile_count % 2 != 0 {
            return Err(format!("Tile count must be even, got {}", self.tile_count));
        }
        if self.tile_count > self.layout.capacity() {
            return Err(format!(
                "Tile count {} exceeds layout capacity {}",
                self.tile_count,
                self.layout.capacity()
            ));
        }
        if self.symbol_count < 1 || self.symbol_count > 26 {
            return Err(format!(
                "Symbol count must be between 1 and 26, got {}",
                self.symbol_count
            ));
        }
        Ok(())
    }
}

pub fn load_presets(content: &str) -> Result<HashMap<String, DifficultySettings>, String> {
    let presets: HashMap<String, DifficultySettings> = serde_yaml_ng::from_str(content)
        .map_err(|e| format!("Failed to parse preset table: {}", e))?;

    for (name, settings) in &presets {
        settings
            .validate()
            .map_err(|e| format!("Preset '{}': {}", name, e))?;
    }

    Ok(presets)
}
