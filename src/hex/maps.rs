//! Collection aliases for coordinate-keyed data. Coordinates are tiny and
//! hash constantly during grid assembly, so everything here uses FNV instead
//! of the default SipHash.

use crate::hex::{EdgeCoord, TileCoord, VertexCoord};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A set of tile coordinates
pub type TileCoordSet = HashSet<TileCoord, FnvBuildHasher>;
/// An ORDERED map of tile coordinates to some `T`. The grid uses the ordered
/// variant for its pools so iteration order is deterministic.
pub type TileCoordIndexMap<T> = IndexMap<TileCoord, T, FnvBuildHasher>;
/// An ORDERED map of canonical vertex coordinates to some `T`
pub type VertexCoordIndexMap<T> = IndexMap<VertexCoord, T, FnvBuildHasher>;
/// An ORDERED map of canonical edge coordinates to some `T`
pub type EdgeCoordIndexMap<T> = IndexMap<EdgeCoord, T, FnvBuildHasher>;
