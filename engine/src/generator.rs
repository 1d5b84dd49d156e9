use super::board::Board;
use super::session_rng::SessionRng;
use super::settings::DifficultySettings;
use super::types::{Tile, TileId};

/// Builds a fresh board: half as many symbol pairs as tiles, cycling
/// through the alphabet so every symbol instance has a partner, then a
/// uniform shuffle before the symbols land on the layout slots.
pub fn generate_board(
    settings: &DifficultySettings,
    rng: &mut SessionRng,
) -> Result<Board, String> {
    settings.validate()?;

    let alphabet = settings.symbol_alphabet();
    let pair_count = settings.tile_count / 2;

    let mut symbols = Vec::with_capacity(settings.tile_count);
    for i in 0..pair_count {
        let symbol = alphabet[i % alphabet.len()];
        symbols.push(symbol);
        symbols.push(symbol);
    }

    rng.shuffle(&mut symbols);

    let tiles = symbols
        .into_iter()
        .zip(settings.layout.slots())
        .enumerate()
        .map(|(i, (symbol, (x, y, z)))| Tile::new(TileId(i as u32), x, y, z, symbol))
        .collect();

    Ok(Board::from_tiles(tiles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AgeGroup;

    #[test]
    fn test_generated_board_matches_tile_count() {
        let settings = DifficultySettings::for_age_group(AgeGroup::Junior);
        let mut rng = SessionRng::new(1);
        let board = generate_board(&settings, &mut rng).unwrap();

        assert_eq!(board.tiles().len(), settings.tile_count);
        assert_eq!(board.active_tile_count(), settings.tile_count);
    }

    #[test]
    fn test_same_seed_produces_same_board() {
        let settings = DifficultySettings::for_age_group(AgeGroup::Senior);
        let board1 = generate_board(&settings, &mut SessionRng::new(99)).unwrap();
        let board2 = generate_board(&settings, &mut SessionRng::new(99)).unwrap();

        for (a, b) in board1.tiles().iter().zip(board2.tiles()) {
            assert_eq!(a.symbol, b.symbol);
            assert_eq!((a.x, a.y, a.z), (b.x, b.y, b.z));
        }
    }

    #[test]
    fn test_generation_rejects_invalid_settings() {
        let mut settings = DifficultySettings::for_age_group(AgeGroup::Preschool);
        settings.tile_count = 11;
        let mut rng = SessionRng::new(1);

        assert!(generate_board(&settings, &mut rng).is_err());
    }

    #[test]
    fn test_fuzz_no_symbol_is_a_singleton() {
        for group in [AgeGroup::Preschool, AgeGroup::Junior, AgeGroup::Senior] {
            let settings = DifficultySettings::for_age_group(group);
            for seed in 0..200u64 {
                let mut rng = SessionRng::new(seed);
                let board = generate_board(&settings, &mut rng).unwrap();

                for tile in board.tiles() {
                    let partners = board
                        .tiles()
                        .iter()
                        .filter(|other| other.id != tile.id && other.symbol.matches(tile.symbol))
                        .count();
                    assert!(
                        partners > 0,
                        "Seed {}: {:?} has no match partner on a {:?} board",
                        seed,
                        tile.symbol,
                        group
                    );
                }
            }
        }
    }

    #[test]
    fn test_flat_preset_starts_fully_exposed() {
        let settings = DifficultySettings::for_age_group(AgeGroup::Preschool);
        let mut rng = SessionRng::new(5);
        let board = generate_board(&settings, &mut rng).unwrap();

        for tile in board.tiles() {
            assert!(board.is_playable(tile.id));
        }
    }
}
