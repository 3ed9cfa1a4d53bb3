//! Coordinates for the three kinds of objects in a hex field: tiles,
//! vertices (tile corners) and edges (tile sides). Vertex and edge
//! coordinates are tile-relative, so one physical vertex or edge has several
//! equally valid coordinates; the *identity* operations in this module
//! ([VertexCoord::identical_vertices], [EdgeCoord::twin]) enumerate those
//! aliases, and everything else (adjacency, incidence) is built on top of
//! them.

use crate::hex::direction::{
    clockwise_of, column_is_high, counter_clockwise_of, HexDirection,
};
use anyhow::{ensure, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// The axial position of one tile. `u` counts columns eastward and `v` counts
/// rows northward; see the [module docs](crate::hex) for the full picture.
/// Tile coordinates are unbounded, the grid is what imposes bounds.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", u, v)]
pub struct TileCoord {
    pub u: i16,
    pub v: i16,
}

impl TileCoord {
    pub const fn new(u: i16, v: i16) -> Self {
        Self { u, v }
    }

    /// Is this tile in a high (odd, shifted-up) column?
    pub fn is_high(self) -> bool {
        column_is_high(self.u)
    }

    fn offset(self, (du, dv): (i16, i16)) -> Self {
        Self::new(self.u + du, self.v + dv)
    }

    /// If `other` shares an edge with this tile, get the direction it lies
    /// in. Antisymmetric: `a.adjacency(b) == Some(d)` iff
    /// `b.adjacency(a) == Some(d.opposite())`.
    pub fn adjacency(self, other: Self) -> Option<HexDirection> {
        let high = self.is_high();
        HexDirection::SIDES.into_iter().find(|dir| {
            // side_offset is Some for all 6 side directions
            self.offset(dir.side_offset(high).unwrap()) == other
        })
    }

    /// Do these two tiles share an edge?
    pub fn is_adjacent(self, other: Self) -> bool {
        self.adjacency(other).is_some()
    }

    /// Get the tiles bordering this one in the given direction. The 6 side
    /// directions yield exactly 1 tile. E and W yield 2 candidates (the
    /// north-east/south-east pair and north-west/south-west pair
    /// respectively), since no single tile sits due east or west of a flat-top
    /// hexagon. `None` yields all 6 neighbors, in
    /// [HexDirection::SIDES] order.
    pub fn adjacents(self, direction: Option<HexDirection>) -> Vec<Self> {
        let high = self.is_high();
        let dirs: &[HexDirection] = match direction {
            None => &HexDirection::SIDES,
            Some(HexDirection::E) => &[HexDirection::NE, HexDirection::SE],
            Some(HexDirection::W) => &[HexDirection::NW, HexDirection::SW],
            Some(ref dir) => std::slice::from_ref(dir),
        };
        dirs.iter()
            .map(|dir| self.offset(dir.side_offset(high).unwrap()))
            .collect()
    }

    /// For two adjacent tiles, get the corner-index pair of this tile's side
    /// that touches `other`. `None` if the tiles aren't adjacent.
    pub fn shared_edge_indices(self, other: Self) -> Option<(u8, u8)> {
        self.adjacency(other)?.edge_indices()
    }

    /// Get this tile's 6 corners, in corner-index order (counter-clockwise
    /// from the south-west corner)
    pub fn vertices(self) -> [VertexCoord; 6] {
        [0, 1, 2, 3, 4, 5].map(|k| VertexCoord::raw(self.u, self.v, k))
    }

    /// Get this tile's 6 sides, in corner-index order: side `k` runs from
    /// corner `k` to corner `k + 1`
    pub fn edges(self) -> [EdgeCoord; 6] {
        [0, 1, 2, 3, 4, 5].map(|k| {
            EdgeCoord::raw(self.u, self.v, k, counter_clockwise_of(k))
        })
    }
}

/// Identity aliases for each corner of a tile in a high column: entry `k`
/// holds the `(du, dv, k')` of the two *other* tiles that share corner `k`.
const VERTEX_IDENT_OFFSETS_HIGH: [[(i16, i16, u8); 2]; 6] = [
    [(-1, 0, 2), (0, -1, 4)],
    [(0, -1, 3), (1, 0, 5)],
    [(1, 0, 4), (1, 1, 0)],
    [(1, 1, 5), (0, 1, 1)],
    [(0, 1, 0), (-1, 1, 2)],
    [(-1, 1, 1), (-1, 0, 3)],
];

/// Same as [VERTEX_IDENT_OFFSETS_HIGH], for tiles in low columns
const VERTEX_IDENT_OFFSETS_LOW: [[(i16, i16, u8); 2]; 6] = [
    [(-1, -1, 2), (0, -1, 4)],
    [(0, -1, 3), (1, -1, 5)],
    [(1, -1, 4), (1, 0, 0)],
    [(1, 0, 5), (0, 1, 1)],
    [(0, 1, 0), (-1, 0, 2)],
    [(-1, 0, 1), (-1, -1, 3)],
];

/// One corner of one tile. `k ∈ [0, 5]` indexes the corners
/// counter-clockwise starting at the south-west corner: 0=SW, 1=SE, 2=E,
/// 3=NE, 4=NW, 5=W.
///
/// Every physical vertex is a corner of exactly 3 tiles, so it has exactly 3
/// of these coordinates. Comparison via `==` is *representational*; use
/// [Self::is_identical] to compare physical vertices.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", u, v, k)]
pub struct VertexCoord {
    u: i16,
    v: i16,
    k: u8,
}

impl VertexCoord {
    /// Construct a vertex coordinate. Errors iff the corner index is out of
    /// `[0, 5]`.
    pub fn new(u: i16, v: i16, k: u8) -> Result<Self> {
        ensure!(k < 6, "corner index out of range: {}", k);
        Ok(Self { u, v, k })
    }

    /// Internal constructor for corner indices already known to be valid
    pub(crate) const fn raw(u: i16, v: i16, k: u8) -> Self {
        Self { u, v, k }
    }

    pub fn u(self) -> i16 {
        self.u
    }

    pub fn v(self) -> i16 {
        self.v
    }

    pub fn k(self) -> u8 {
        self.k
    }

    /// The tile this coordinate is relative to
    pub fn tile(self) -> TileCoord {
        TileCoord::new(self.u, self.v)
    }

    /// The compass direction of this corner from its tile's center
    pub fn direction(self) -> HexDirection {
        // k < 6 is a construction invariant
        HexDirection::from_vertex_index(self.k).unwrap()
    }

    /// Get all 3 coordinates of the physical vertex this coordinate names,
    /// starting with this one. The other two are corners of two neighboring
    /// tiles; which neighbors depends on column parity and the corner index.
    pub fn identical_vertices(self) -> [Self; 3] {
        let table = if column_is_high(self.u) {
            &VERTEX_IDENT_OFFSETS_HIGH
        } else {
            &VERTEX_IDENT_OFFSETS_LOW
        };
        let [(du1, dv1, k1), (du2, dv2, k2)] = table[self.k as usize];
        [
            self,
            Self::raw(self.u + du1, self.v + dv1, k1),
            Self::raw(self.u + du2, self.v + dv2, k2),
        ]
    }

    /// Do these two coordinates name the same physical vertex?
    pub fn is_identical(self, other: Self) -> bool {
        self.identical_vertices().contains(&other)
    }

    /// The next corner clockwise on the same tile
    pub fn clockwise(self) -> Self {
        Self::raw(self.u, self.v, clockwise_of(self.k))
    }

    /// The next corner counter-clockwise on the same tile
    pub fn counter_clockwise(self) -> Self {
        Self::raw(self.u, self.v, counter_clockwise_of(self.k))
    }

    /// Get the 3 tiles that meet at this vertex
    pub fn incident_tiles(self) -> [TileCoord; 3] {
        self.identical_vertices().map(Self::tile)
    }

    /// Get the tiles incident to both this vertex and `other`: all 3 when
    /// the vertices are identical, 2 when they're adjacent, at most 1
    /// otherwise.
    pub fn shared_tiles(self, other: Self) -> Vec<TileCoord> {
        let other_tiles = other.incident_tiles();
        self.incident_tiles()
            .into_iter()
            .filter(|tile| other_tiles.contains(tile))
            .collect()
    }

    /// Get the edge joining this vertex to `other`, if there is one. `None`
    /// when the vertices are identical or not adjacent. The returned edge is
    /// relative to whichever shared tile is found first, so compare results
    /// with [EdgeCoord::is_identical] rather than `==`.
    pub fn shared_edge(self, other: Self) -> Option<EdgeCoord> {
        if self.is_identical(other) {
            return None;
        }
        // Two corners of the same tile are joined by an edge iff their
        // indices are cyclically adjacent. Identity classes list self first,
        // so a same-tile pair is found without expanding aliases.
        for a in self.identical_vertices() {
            for b in other.identical_vertices() {
                if a.tile() == b.tile()
                    && HexDirection::from_edge_indices(a.k, b.k).is_some()
                {
                    return Some(EdgeCoord::raw(a.u, a.v, a.k, b.k));
                }
            }
        }
        None
    }

    /// Get the 3 vertices one edge away from this one. Each incident tile
    /// contributes its clockwise-neighboring corner; the counter-clockwise
    /// neighbors are the same 3 physical vertices under other names.
    pub fn adjacent_vertices(self) -> [Self; 3] {
        self.identical_vertices().map(Self::clockwise)
    }

    /// Are these two vertices joined by an edge?
    pub fn is_adjacent(self, other: Self) -> bool {
        self.shared_edge(other).is_some()
    }

    /// Get the 3 edges that end at this vertex
    pub fn incident_edges(self) -> [EdgeCoord; 3] {
        self.identical_vertices().map(|alias| {
            EdgeCoord::raw(alias.u, alias.v, clockwise_of(alias.k), alias.k)
        })
    }

    /// If `edge` ends at this vertex, get its other endpoint. `None` if this
    /// vertex isn't an endpoint of the edge.
    pub fn adjacent_by_edge(self, edge: EdgeCoord) -> Option<Self> {
        let (a, b) = edge.ends();
        if self.is_identical(a) {
            Some(b)
        } else if self.is_identical(b) {
            Some(a)
        } else {
            None
        }
    }
}

/// One side of one tile, identified by the pair of corner indices it runs
/// between. Stored in normalized form: `l == (k + 1) % 6`, i.e. the edge runs
/// counter-clockwise from corner `k`.
///
/// Every interior edge borders 2 tiles and so has 2 of these coordinates
/// (see [Self::twin]). As with [VertexCoord], `==` compares representations;
/// [Self::is_identical] compares physical edges.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {}, {})", u, v, k, l)]
pub struct EdgeCoord {
    u: i16,
    v: i16,
    k: u8,
    l: u8,
}

impl EdgeCoord {
    /// Construct an edge coordinate. The index pair may be given in either
    /// order and is normalized; errors iff the indices aren't cyclically
    /// adjacent (out-of-range, equal, or non-neighboring corners).
    pub fn new(u: i16, v: i16, k: u8, l: u8) -> Result<Self> {
        ensure!(
            HexDirection::from_edge_indices(k, l).is_some(),
            "no edge between corner indices {} and {}",
            k,
            l
        );
        Ok(Self::raw(u, v, k, l))
    }

    /// Internal constructor for index pairs already known to be cyclically
    /// adjacent. Normalizes the pair.
    pub(crate) fn raw(u: i16, v: i16, k: u8, l: u8) -> Self {
        debug_assert!(
            HexDirection::from_edge_indices(k, l).is_some(),
            "invalid edge indices ({}, {})",
            k,
            l
        );
        let (k, l) = if l == counter_clockwise_of(k) {
            (k, l)
        } else {
            (l, k)
        };
        Self { u, v, k, l }
    }

    pub fn u(self) -> i16 {
        self.u
    }

    pub fn v(self) -> i16 {
        self.v
    }

    pub fn k(self) -> u8 {
        self.k
    }

    pub fn l(self) -> u8 {
        self.l
    }

    /// The tile this coordinate is relative to
    pub fn tile(self) -> TileCoord {
        TileCoord::new(self.u, self.v)
    }

    /// Is this edge's tile in a high column?
    pub fn is_high(self) -> bool {
        column_is_high(self.u)
    }

    /// The compass direction of this side from its tile's center
    pub fn direction(self) -> HexDirection {
        // Cyclic adjacency of (k, l) is a construction invariant
        HexDirection::from_edge_indices(self.k, self.l).unwrap()
    }

    /// Get the two endpoints of this edge, in `(k, l)` order
    pub fn ends(self) -> (VertexCoord, VertexCoord) {
        (
            VertexCoord::raw(self.u, self.v, self.k),
            VertexCoord::raw(self.u, self.v, self.l),
        )
    }

    /// Get this edge's coordinate relative to the tile on its other side.
    /// An involution: `e.twin().twin() == e`, and `e.twin() != e` always.
    pub fn twin(self) -> Self {
        let dir = self.direction();
        // A side direction always has a single offset and an index pair
        let (du, dv) = dir.side_offset(self.is_high()).unwrap();
        let (k, l) = dir.opposite().edge_indices().unwrap();
        Self::raw(self.u + du, self.v + dv, k, l)
    }

    /// Do these two coordinates name the same physical edge?
    pub fn is_identical(self, other: Self) -> bool {
        self == other || self.twin() == other
    }

    /// Get the 2 tiles this edge runs between
    pub fn incident_tiles(self) -> [TileCoord; 2] {
        [self.tile(), self.twin().tile()]
    }

    /// Get the 4 edges that share an endpoint with this one, 2 per endpoint.
    /// Results are physically distinct but representationally arbitrary, so
    /// compare them with [Self::is_identical].
    pub fn adjacent_edges(self) -> Vec<Self> {
        let (a, b) = self.ends();
        [a, b]
            .into_iter()
            .flat_map(|end| end.incident_edges())
            .filter(|edge| !edge.is_identical(self))
            .collect()
    }
}
