pub mod logger;

mod board;
mod game_state;
mod generator;
mod layout;
mod session;
mod session_rng;
mod settings;
mod types;

pub use board::Board;
pub use game_state::TileMatchGameState;
pub use generator::generate_board;
pub use layout::LayoutKind;
pub use session::TileMatchSession;
pub use session_rng::SessionRng;
pub use settings::{AgeGroup, DifficultySettings, load_presets};
pub use types::{GameEvent, GameStatus, POINTS_PER_TILE, Symbol, Tile, TileId};
