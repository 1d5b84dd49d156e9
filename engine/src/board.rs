use std::collections::HashMap;

use super::types::{POINTS_PER_TILE, Tile, TileId};

/// Tile arena plus a position index for O(1) neighbor lookups. Removed
/// tiles stay in the arena so history snapshots and the position index
/// never need rebuilding.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
    index: HashMap<(i32, i32, u8), usize>,
    max_z: u8,
}

impl Board {
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        let index = tiles
            .iter()
            .enumerate()
            .map(|(i, t)| ((t.x, t.y, t.z), i))
            .collect();
        let max_z = tiles.iter().map(|t| t.z).max().unwrap_or(0);
        Self {
            tiles,
            index,
            max_z,
        }
    }

    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    pub fn tile_at(&self, x: i32, y: i32, z: u8) -> Option<&Tile> {
        self.index
            .get(&(x, y, z))
            .map(|&i| &self.tiles[i])
            .filter(|t| t.is_active())
    }

    fn active_at(&self, x: i32, y: i32, z: u8) -> bool {
        self.tile_at(x, y, z).is_some()
    }

    /// A tile is exposed when nothing active sits directly above it and
    /// it is not walled in on both lateral sides at its own layer.
    pub fn is_playable(&self, id: TileId) -> bool {
        let Some(tile) = self.get(id) else {
            return false;
        };
        if !tile.is_active() {
            return false;
        }
        if ((tile.z + 1)..=self.max_z).any(|z| self.active_at(tile.x, tile.y, z)) {
            return false;
        }

        let left = self.active_at(tile.x - 1, tile.y, tile.z);
        let right = self.active_at(tile.x + 1, tile.y, tile.z);
        !(left && right)
    }

    /// Symbol compatibility only; callers gate on `is_playable`.
    pub fn can_match(&self, a: TileId, b: TileId) -> bool {
        if a == b {
            return false;
        }
        let (Some(first), Some(second)) = (self.get(a), self.get(b)) else {
            return false;
        };
        first.is_active() && second.is_active() && first.symbol.matches(second.symbol)
    }

    /// Marks both tiles removed and returns the points awarded. Tiles
    /// that are already gone award nothing.
    pub fn remove_pair(&mut self, a: TileId, b: TileId) -> u32 {
        let mut points = 0;
        for id in [a, b] {
            if let Some(tile) = self.tiles.iter_mut().find(|t| t.id == id)
                && tile.is_active()
            {
                tile.removed = true;
                points += POINTS_PER_TILE;
            }
        }
        points
    }

    pub fn playable_tiles(&self) -> Vec<TileId> {
        self.tiles
            .iter()
            .filter(|t| t.is_active())
            .map(|t| t.id)
            .filter(|&id| self.is_playable(id))
            .collect()
    }

    pub fn find_any_match(&self) -> Option<(TileId, TileId)> {
        let playable = self.playable_tiles();
        for i in 0..playable.len() {
            for j in (i + 1)..playable.len() {
                if self.can_match(playable[i], playable[j]) {
                    return Some((playable[i], playable[j]));
                }
            }
        }
        None
    }

    pub fn has_moves(&self) -> bool {
        self.find_any_match().is_some()
    }

    pub fn active_tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_active()).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.active_tile_count() == 0
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
