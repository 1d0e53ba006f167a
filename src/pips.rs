//! Pip layout for drawing a die face.
//!
//! Maps a face index to the cells of a 3x3 grid that carry a pip.
//! Rendering-agnostic: the TUI turns the grid into styled text.

use crate::die::FACES;

/// Grid side length.
pub const GRID: usize = 3;

/// (row, col) of each pip, per face.
const LAYOUT: [&[(usize, usize)]; FACES] = [
    &[(1, 1)],
    &[(0, 0), (2, 2)],
    &[(0, 0), (1, 1), (2, 2)],
    &[(0, 0), (0, 2), (2, 0), (2, 2)],
    &[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)],
    &[(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2)],
];

/// Pip positions for `face` (1-based). Out-of-range faces have no pips.
pub fn positions(face: u8) -> &'static [(usize, usize)] {
    match usize::from(face) {
        f @ 1..=FACES => LAYOUT[f - 1],
        _ => &[],
    }
}

/// The face as a 3x3 occupancy grid, `grid[row][col]`.
pub fn grid(face: u8) -> [[bool; GRID]; GRID] {
    let mut cells = [[false; GRID]; GRID];
    for &(row, col) in positions(face) {
        cells[row][col] = true;
    }
    cells
}

/// The face as three text rows, one glyph per cell separated by spaces.
pub fn rows(face: u8, pip: char, blank: char) -> [String; GRID] {
    grid(face).map(|row| {
        row.iter()
            .map(|&on| if on { pip } else { blank })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    })
}
