//! Types for navigating a field of hexagonal tiles.
//!
//! # The coordinate system
//!
//! Tiles are flat-top hexagons laid out in offset axial coordinates
//! `(u, v)`: `u` counts columns, increasing eastward, and `v` counts rows,
//! increasing northward. Columns with odd `u` ("high" columns) are shifted
//! north by half a tile height, which is what lets hexagons tessellate on a
//! rectangular lattice. All adjacency math branches on that column parity
//! and on nothing else.
//!
//! Beyond tiles, the field contains two derived kinds of objects:
//!
//! - **Vertices**, the corners where 3 tiles meet. A vertex is addressed
//!   relative to a tile as `(u, v, k)`, where `k ∈ [0, 5]` counts corners
//!   counter-clockwise from the south-west corner (0=SW, 1=SE, 2=E, 3=NE,
//!   4=NW, 5=W). Since 3 tiles meet at each vertex, each physical vertex has
//!   3 such addresses.
//! - **Edges**, the sides separating 2 tiles. An edge is addressed as
//!   `(u, v, k, l)` by the corner pair it runs between, and each physical
//!   edge has 2 addresses, one per flanking tile.
//!
//! [VertexCoord] and [EdgeCoord] know how to enumerate their own aliases,
//! and all the incidence operations (which tiles meet here, which edges end
//! here, and so on) are derived from that. The types in this module are pure
//! coordinate algebra with no notion of bounds; see
//! [HexGrid](crate::HexGrid) for a bounded field with data attached.

mod coords;
mod direction;
mod hexagon;
mod maps;

pub use self::{coords::*, direction::*, hexagon::*, maps::*};
