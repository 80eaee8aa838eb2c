/// A block shape: a 0/1 mask relative to its top-left origin, plus the
/// display color and palette hotkey. All seven live in `CATALOGUE`.
#[derive(Debug, PartialEq, Eq)]
pub struct Shape {
    pub mask: &'static [&'static [u8]],
    pub color: (u8, u8, u8),
    pub hotkey: Option<char>,
}

impl Shape {
    /// Occupied mask offsets as (row, col) pairs.
    pub fn cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (r, row) in self.mask.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 1 {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    pub fn rows(&self) -> usize {
        self.mask.len()
    }

    pub fn cols(&self) -> usize {
        self.mask.first().map(|row| row.len()).unwrap_or(0)
    }
}

pub static CATALOGUE: [Shape; 7] = [
    // Straight line.
    Shape {
        mask: &[&[1, 1, 1, 1]],
        color: (0xFF, 0xBF, 0x00),
        hotkey: Some('Q'),
    },
    // Square.
    Shape {
        mask: &[&[1, 1], &[1, 1]],
        color: (0x00, 0xBF, 0xFF),
        hotkey: Some('W'),
    },
    // L.
    Shape {
        mask: &[&[1, 1, 0], &[0, 1, 1]],
        color: (0x32, 0xCD, 0x32),
        hotkey: Some('E'),
    },
    // Mirrored L.
    Shape {
        mask: &[&[0, 1, 1], &[1, 1, 0]],
        color: (0xFF, 0x14, 0x93),
        hotkey: Some('R'),
    },
    // T.
    Shape {
        mask: &[&[1, 1, 1], &[0, 1, 0]],
        color: (0xFF, 0x45, 0x00),
        hotkey: Some('A'),
    },
    // Lightning.
    Shape {
        mask: &[&[1, 1], &[0, 1], &[0, 1]],
        color: (0x94, 0x00, 0xD3),
        hotkey: Some('S'),
    },
    // Mirrored lightning.
    Shape {
        mask: &[&[0, 1], &[1, 1], &[1, 0]],
        color: (0xFF, 0xD7, 0x00),
        hotkey: Some('D'),
    },
];

pub fn catalogue() -> &'static [Shape] {
    &CATALOGUE
}

/// Case-insensitive hotkey lookup. Hotkeys are unique by construction.
pub fn by_hotkey(key: char) -> Option<&'static Shape> {
    CATALOGUE
        .iter()
        .find(|shape| matches!(shape.hotkey, Some(h) if h.eq_ignore_ascii_case(&key)))
}
