//! The compass used to navigate the hex field. See the parent module docs
//! for a description of the coordinate system this sits on top of.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Is column `u` a "high" column? High columns are shifted up (north) by half
/// a tile height. Parity alternates along the u axis, with `u = 0` always
/// low, so this is symmetric in sign: column `-3` is high just like column
/// `3`.
///
/// This single fact is what makes every adjacency rule in this crate
/// asymmetric between even and odd columns.
pub fn column_is_high(u: i16) -> bool {
    u % 2 != 0
}

/// One of the 8 compass directions used to index adjacency and geometry
/// lookups. A flat-top hexagon has sides facing N, NE, SE, S, SW and NW, and
/// corners pointing E, NE, NW, W, SW and SE. That means not every direction
/// is valid for every query:
///
/// - The 6 side directions identify adjacent tiles and shared edges
/// - The 6 corner directions identify single vertices
/// - E and W identify *two* candidate adjacent tiles each (the tiles to the
///   east/west are reached via NE/SE or NW/SW, depending on column parity),
///   so tile lookups in those directions return two results
///
/// There is deliberately no `Nil` variant; "no direction" is spelled
/// `Option<HexDirection>` and "all directions" is spelled `None` where a
/// query accepts it.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl HexDirection {
    /// The 6 directions in which a tile has a neighboring tile, in the
    /// canonical adjacency order. Every multi-tile query that doesn't
    /// specify its own ordering returns results in this order.
    pub const SIDES: [Self; 6] =
        [Self::N, Self::NE, Self::SE, Self::S, Self::SW, Self::NW];

    /// The 6 directions in which a tile has a corner, ordered by vertex
    /// index: index `k` of this array is the direction of corner `k`.
    pub const VERTICES: [Self; 6] =
        [Self::SW, Self::SE, Self::E, Self::NE, Self::NW, Self::W];

    /// Get the direction directly opposite this one on the compass
    pub fn opposite(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::E => Self::W,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::W => Self::E,
            Self::NW => Self::SE,
        }
    }

    /// Get the index of the corner lying in this direction from a tile's
    /// center. Corners are indexed counter-clockwise starting at the
    /// south-west corner. Returns `None` for N and S, which point at the
    /// middle of a side rather than at a single corner.
    pub fn vertex_index(self) -> Option<u8> {
        match self {
            Self::SW => Some(0),
            Self::SE => Some(1),
            Self::E => Some(2),
            Self::NE => Some(3),
            Self::NW => Some(4),
            Self::W => Some(5),
            Self::N | Self::S => None,
        }
    }

    /// Get the direction of corner `k` relative to its tile's center.
    /// Returns `None` if `k` is not in `[0, 5]`.
    pub fn from_vertex_index(k: u8) -> Option<Self> {
        Self::VERTICES.get(k as usize).copied()
    }

    /// Get the pair of corner indices bounding the side that faces this
    /// direction. The pair is always in `(k, (k + 1) % 6)` form. Returns
    /// `None` for E and W, which point at a corner rather than a side.
    pub fn edge_indices(self) -> Option<(u8, u8)> {
        match self {
            Self::S => Some((0, 1)),
            Self::SE => Some((1, 2)),
            Self::NE => Some((2, 3)),
            Self::N => Some((3, 4)),
            Self::NW => Some((4, 5)),
            Self::SW => Some((5, 0)),
            Self::E | Self::W => None,
        }
    }

    /// Get the direction of the side bounded by corners `k` and `ell`. The
    /// pair may be given in either order. Returns `None` if the two indices
    /// are not cyclically adjacent (no such side exists).
    pub fn from_edge_indices(k: u8, ell: u8) -> Option<Self> {
        let (k, ell) = if k > ell { (ell, k) } else { (k, ell) };
        match (k, ell) {
            (0, 1) => Some(Self::S),
            (1, 2) => Some(Self::SE),
            (2, 3) => Some(Self::NE),
            (3, 4) => Some(Self::N),
            (4, 5) => Some(Self::NW),
            (0, 5) => Some(Self::SW),
            _ => None,
        }
    }

    /// Get the `(du, dv)` offset of the adjacent tile in this direction,
    /// given the column parity of the starting tile. Returns `None` for E
    /// and W since those directions have two candidate tiles; callers that
    /// want the two-tile expansion should go through
    /// [TileCoord::adjacents](crate::hex::TileCoord::adjacents).
    pub(crate) fn side_offset(self, column_high: bool) -> Option<(i16, i16)> {
        let offset = match (self, column_high) {
            (Self::N, _) => (0, 1),
            (Self::S, _) => (0, -1),
            (Self::NE, true) => (1, 1),
            (Self::NE, false) => (1, 0),
            (Self::SE, true) => (1, 0),
            (Self::SE, false) => (1, -1),
            (Self::SW, true) => (-1, 0),
            (Self::SW, false) => (-1, -1),
            (Self::NW, true) => (-1, 1),
            (Self::NW, false) => (-1, 0),
            (Self::E | Self::W, _) => return None,
        };
        Some(offset)
    }
}

/// Get the index of the corner one step clockwise of corner `k`. Corners are
/// indexed counter-clockwise, so a clockwise step decrements the index.
pub fn clockwise_of(k: u8) -> u8 {
    (k + 5) % 6
}

/// Get the index of the corner one step counter-clockwise of corner `k`
pub fn counter_clockwise_of(k: u8) -> u8 {
    (k + 1) % 6
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_column_parity() {
        assert!(!column_is_high(0));
        assert!(column_is_high(1));
        assert!(column_is_high(-1));
        // Period 2 in both directions
        for u in -20..20 {
            assert_eq!(column_is_high(u), column_is_high(u + 2));
            assert_eq!(column_is_high(u), column_is_high(-u));
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(HexDirection::N.opposite(), HexDirection::S);
        assert_eq!(HexDirection::NE.opposite(), HexDirection::SW);
        assert_eq!(HexDirection::E.opposite(), HexDirection::W);
        assert_eq!(HexDirection::SE.opposite(), HexDirection::NW);
        // Opposite is an involution
        for dir in HexDirection::iter() {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_vertex_index_round_trip() {
        for (k, &dir) in HexDirection::VERTICES.iter().enumerate() {
            assert_eq!(dir.vertex_index(), Some(k as u8));
            assert_eq!(HexDirection::from_vertex_index(k as u8), Some(dir));
        }
        assert_eq!(HexDirection::N.vertex_index(), None);
        assert_eq!(HexDirection::S.vertex_index(), None);
        assert_eq!(HexDirection::from_vertex_index(6), None);
    }

    #[test]
    fn test_edge_indices_round_trip() {
        for dir in HexDirection::SIDES {
            let (k, ell) = dir.edge_indices().unwrap();
            assert_eq!(HexDirection::from_edge_indices(k, ell), Some(dir));
            // Order of the input pair doesn't matter
            assert_eq!(HexDirection::from_edge_indices(ell, k), Some(dir));
        }
        assert_eq!(HexDirection::E.edge_indices(), None);
        assert_eq!(HexDirection::W.edge_indices(), None);
        assert_eq!(HexDirection::from_edge_indices(0, 2), None);
        assert_eq!(HexDirection::from_edge_indices(3, 3), None);
    }

    #[test]
    fn test_side_offsets_are_antisymmetric() {
        // Stepping in a direction and then stepping back in the opposite
        // direction must return to the start, for both column parities.
        // Parity flips whenever du is odd.
        for dir in HexDirection::SIDES {
            for high in [false, true] {
                let (du, dv) = dir.side_offset(high).unwrap();
                let high_after =
                    if du % 2 != 0 { !high } else { high };
                let (bu, bv) =
                    dir.opposite().side_offset(high_after).unwrap();
                assert_eq!((du + bu, dv + bv), (0, 0), "{dir:?} high={high}");
            }
        }
    }

    #[test]
    fn test_corner_step_helpers() {
        assert_eq!(clockwise_of(0), 5);
        assert_eq!(clockwise_of(3), 2);
        assert_eq!(counter_clockwise_of(5), 0);
        for k in 0..6 {
            assert_eq!(clockwise_of(counter_clockwise_of(k)), k);
        }
    }
}
