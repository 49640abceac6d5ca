//! Geometry module - static orientation tables for the seven piece kinds
//!
//! Each kind has a square bounding box and an ordered list of rotation states.
//! A state is a boolean matrix indexed `[row][column]` with local row 0 at the
//! bottom of the box, so it lines up with board coordinates once offset by a
//! piece's anchor.
//!
//! Rotation order is clockwise: spawn, right, flipped, left. The tables are
//! written as ASCII art (top line first) and converted at compile time.

use crate::types::PieceKind;

/// Largest bounding box side length of any piece kind
pub const MAX_BOX: usize = 4;

/// One rotation state of a piece kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    size: usize,
    cells: [[bool; MAX_BOX]; MAX_BOX],
}

impl Orientation {
    /// Build from ASCII art, `#` marks a filled cell and the first line is the top row
    const fn from_art<const N: usize>(art: [&str; N]) -> Self {
        let mut cells = [[false; MAX_BOX]; MAX_BOX];
        let mut line = 0;
        while line < N {
            let bytes = art[line].as_bytes();
            let mut column = 0;
            while column < N {
                if bytes[column] == b'#' {
                    cells[N - 1 - line][column] = true;
                }
                column += 1;
            }
            line += 1;
        }
        Self { size: N, cells }
    }

    /// Side length of the square matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the local cell is filled; out-of-box cells are empty
    pub fn get(&self, row: usize, column: usize) -> bool {
        row < self.size && column < self.size && self.cells[row][column]
    }

    /// Iterate filled cells as `(row, column)`, bottom row first
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |row| {
            (0..self.size)
                .filter(move |&column| self.cells[row][column])
                .map(move |column| (row, column))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.filled().count()
    }
}

/// Geometry entry for one piece kind
#[derive(Debug, PartialEq, Eq)]
pub struct Geometry {
    pub kind: PieceKind,
    pub bounding_box: usize,
    pub orientations: &'static [Orientation],
}

impl Geometry {
    pub fn orientation_count(&self) -> usize {
        self.orientations.len()
    }

    /// Map a signed rotation index to a slot in `orientations`
    ///
    /// The sign is dropped before reducing, so `-1` selects the same state as `1`.
    pub fn effective_index(&self, rotation: i32) -> usize {
        rotation.unsigned_abs() as usize % self.orientation_count()
    }

    pub fn orientation(&self, rotation: i32) -> &'static Orientation {
        &self.orientations[self.effective_index(rotation)]
    }
}

const O_STATES: [Orientation; 1] = [Orientation::from_art(["##", "##"])];

const I_STATES: [Orientation; 4] = [
    Orientation::from_art(["....", "####", "....", "...."]),
    Orientation::from_art(["..#.", "..#.", "..#.", "..#."]),
    Orientation::from_art(["....", "....", "####", "...."]),
    Orientation::from_art([".#..", ".#..", ".#..", ".#.."]),
];

const J_STATES: [Orientation; 4] = [
    Orientation::from_art(["#..", "###", "..."]),
    Orientation::from_art([".##", ".#.", ".#."]),
    Orientation::from_art(["...", "###", "..#"]),
    Orientation::from_art([".#.", ".#.", "##."]),
];

const L_STATES: [Orientation; 4] = [
    Orientation::from_art(["..#", "###", "..."]),
    Orientation::from_art([".#.", ".#.", ".##"]),
    Orientation::from_art(["...", "###", "#.."]),
    Orientation::from_art(["##.", ".#.", ".#."]),
];

const S_STATES: [Orientation; 4] = [
    Orientation::from_art([".##", "##.", "..."]),
    Orientation::from_art([".#.", ".##", "..#"]),
    Orientation::from_art(["...", ".##", "##."]),
    Orientation::from_art(["#..", "##.", ".#."]),
];

const Z_STATES: [Orientation; 4] = [
    Orientation::from_art(["##.", ".##", "..."]),
    Orientation::from_art(["..#", ".##", ".#."]),
    Orientation::from_art(["...", "##.", ".##"]),
    Orientation::from_art([".#.", "##.", "#.."]),
];

const T_STATES: [Orientation; 4] = [
    Orientation::from_art([".#.", "###", "..."]),
    Orientation::from_art([".#.", ".##", ".#."]),
    Orientation::from_art(["...", "###", ".#."]),
    Orientation::from_art([".#.", "##.", ".#."]),
];

static O_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::O,
    bounding_box: 2,
    orientations: &O_STATES,
};

static I_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::I,
    bounding_box: 4,
    orientations: &I_STATES,
};

static J_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::J,
    bounding_box: 3,
    orientations: &J_STATES,
};

static L_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::L,
    bounding_box: 3,
    orientations: &L_STATES,
};

static S_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::S,
    bounding_box: 3,
    orientations: &S_STATES,
};

static Z_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::Z,
    bounding_box: 3,
    orientations: &Z_STATES,
};

static T_GEOMETRY: Geometry = Geometry {
    kind: PieceKind::T,
    bounding_box: 3,
    orientations: &T_STATES,
};

/// Look up the geometry entry for a piece kind
pub fn geometry(kind: PieceKind) -> &'static Geometry {
    match kind {
        PieceKind::O => &O_GEOMETRY,
        PieceKind::I => &I_GEOMETRY,
        PieceKind::J => &J_GEOMETRY,
        PieceKind::L => &L_GEOMETRY,
        PieceKind::S => &S_GEOMETRY,
        PieceKind::Z => &Z_GEOMETRY,
        PieceKind::T => &T_GEOMETRY,
    }
}

/// Orientation matrix selected by `abs(rotation) mod orientation_count`
pub fn orientation(kind: PieceKind, rotation: i32) -> &'static Orientation {
    geometry(kind).orientation(rotation)
}

pub fn bounding_box_size(kind: PieceKind) -> usize {
    geometry(kind).bounding_box
}

pub fn orientation_count(kind: PieceKind) -> usize {
    geometry(kind).orientation_count()
}
