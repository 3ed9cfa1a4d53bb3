//! Geometry and combinatorics for fields of hexagonal tiles. Given discrete
//! tile coordinates, this crate derives the tiles' corner (vertex) and side
//! (edge) structure, the adjacency and incidence relationships between all
//! three kinds of objects, and their positions in 2D screen space. On top of
//! that sits [HexGrid], a bounded rectangular field of hexagons with a value
//! slot attached to every tile, vertex and edge.
//!
//! ```
//! use hexgrid::{GridConfig, HexGrid, TileCoord};
//!
//! let config = GridConfig::default();
//! let mut grid: HexGrid<u32> = HexGrid::build(config).unwrap();
//! *grid.tile_mut(TileCoord::new(0, 0)).unwrap().value_mut() = 3;
//! println!("{} tiles", grid.num_tiles());
//! // From here, address vertices and edges relative to any tile you like
//! ```
//!
//! See the [hex] module docs for a description of the coordinate system.

mod grid;
pub mod hex;
mod point;
mod util;

pub use crate::{
    grid::{Edge, GridConfig, HexGrid, Tile, Vertex},
    hex::{EdgeCoord, HexDirection, Hexagon, TileCoord, VertexCoord},
    point::Point2,
    util::HasCoord,
};
