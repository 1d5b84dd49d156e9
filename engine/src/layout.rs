use serde::{Deserialize, Serialize};

/// Named board shapes, ordered lists of (x, y, z) slots. The flat layout
/// spreads tiles two columns apart so none of them ever block each other
/// sideways; the layered layouts pack tiles edge to edge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    Flat3x4,
    TwoLayerSquare,
    Pyramid,
}

impl LayoutKind {
    pub fn slots(self) -> Vec<(i32, i32, u8)> {
        match self {
            LayoutKind::Flat3x4 => {
                let mut slots = Vec::with_capacity(12);
                for y in 0..3 {
                    for col in 0..4 {
                        slots.push((col * 2, y, 0));
                    }
                }
                slots
            }
            LayoutKind::TwoLayerSquare => {
                let mut slots = grid(0, 6, 0, 4, 0);
                slots.extend(grid(1, 4, 1, 2, 1));
                slots
            }
            LayoutKind::Pyramid => {
                let mut slots = grid(0, 6, 0, 5, 0);
                slots.extend(grid(1, 4, 1, 3, 1));
                slots.extend(grid(2, 2, 2, 1, 2));
                slots
            }
        }
    }

    pub fn capacity(self) -> usize {
        self.slots().len()
    }
}

fn grid(x0: i32, width: i32, y0: i32, height: i32, z: u8) -> Vec<(i32, i32, u8)> {
    let mut slots = Vec::with_capacity((width * height) as usize);
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            slots.push((x, y, z));
        }
    }
    slots
}
