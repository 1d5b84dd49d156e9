use std::fmt;

pub const POINTS_PER_TILE: u32 = 10;
pub const DEADLOCK_SCORE_DIVISOR: u32 = 2;
pub const SEASON_GROUP_SIZE: u8 = 4;
pub const FLOWER_GROUP_SIZE: u8 = 4;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Seasons and flowers are group-matched: any member of the group pairs
/// with any other member. Standard symbols must be identical.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Symbol {
    Standard(u8),
    Season(u8),
    Flower(u8),
}

impl Symbol {
    pub fn matches(self, other: Symbol) -> bool {
        match (self, other) {
            (Symbol::Standard(a), Symbol::Standard(b)) => a == b,
            (Symbol::Season(_), Symbol::Season(_)) => true,
            (Symbol::Flower(_), Symbol::Flower(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Standard(i) => write!(f, "{}", (b'A' + i) as char),
            Symbol::Season(i) => write!(f, "s{}", i),
            Symbol::Flower(i) => write!(f, "f{}", i),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Tile {
    pub id: TileId,
    pub x: i32,
    pub y: i32,
    pub z: u8,
    pub symbol: Symbol,
    pub removed: bool,
}

impl Tile {
    pub fn new(id: TileId, x: i32, y: i32, z: u8, symbol: Symbol) -> Self {
        Self {
            id,
            x,
            y,
            z,
            symbol,
            removed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.removed
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
    Deadlocked,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameEvent {
    TileSelected {
        tile: TileId,
    },
    TileDeselected {
        tile: TileId,
    },
    PairRemoved {
        first: TileId,
        second: TileId,
        points: u32,
    },
    Mismatch {
        first: TileId,
        second: TileId,
    },
    HintShown {
        first: TileId,
        second: TileId,
    },
    UndoApplied,
    GameOver {
        status: GameStatus,
        final_score: u32,
    },
}
