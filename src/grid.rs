//! A bounded rectangular field of hexagons with data attached to every tile,
//! vertex and edge. This is the "assembled" counterpart to the pure
//! coordinate algebra in [crate::hex]: the grid materializes one slot per
//! *physical* object, deduplicating the aliased vertex/edge coordinates
//! through the identity operations.

use crate::{
    hex::{
        EdgeCoord, EdgeCoordIndexMap, Hexagon, TileCoord, TileCoordIndexMap,
        VertexCoord, VertexCoordIndexMap, TRIANGLE_ANGLE,
    },
    timed,
    util::HasCoord,
    Point2,
};
use anyhow::{ensure, Context};
use fnv::FnvBuildHasher;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration that defines a grid. Building a grid is deterministic, so
/// two grids built from the same config always have identical structure.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Number of columns of tiles. Must be odd, so that the grid is
    /// symmetric around the center column `u = 0`. Capped so that column
    /// coordinates stay within `i16`.
    #[validate(range(min = 1, max = 32767))]
    pub cols: u16,

    /// Number of rows of tiles. Must be odd, like `cols`.
    #[validate(range(min = 1, max = 32767))]
    pub rows: u16,

    /// The inradius (center-to-side distance) of each tile, in screen units
    #[validate(range(min = 0.0))]
    pub radius: f64,
}

impl GridConfig {
    /// The westernmost column of the grid
    pub fn col_min(&self) -> i16 {
        -(self.cols as i16 / 2)
    }

    /// The easternmost column of the grid
    pub fn col_max(&self) -> i16 {
        self.cols as i16 / 2
    }

    /// The southernmost row of the grid
    pub fn row_min(&self) -> i16 {
        -(self.rows as i16 / 2)
    }

    /// The northernmost row of the grid
    pub fn row_max(&self) -> i16 {
        self.rows as i16 / 2
    }

    /// Is the given tile within the grid's bounds?
    pub fn contains(&self, coord: TileCoord) -> bool {
        (self.col_min()..=self.col_max()).contains(&coord.u)
            && (self.row_min()..=self.row_max()).contains(&coord.v)
    }

    /// Convert a centered tile coordinate to a zero-based `(col, row)` index
    /// pair. `None` for coordinates outside the grid.
    pub fn coord_to_index(&self, coord: TileCoord) -> Option<(u16, u16)> {
        if self.contains(coord) {
            Some((
                (coord.u - self.col_min()) as u16,
                (coord.v - self.row_min()) as u16,
            ))
        } else {
            None
        }
    }

    /// Convert a zero-based `(col, row)` index pair to a centered tile
    /// coordinate. `None` for indexes outside the grid. Inverse of
    /// [Self::coord_to_index].
    pub fn index_to_coord(&self, col: u16, row: u16) -> Option<TileCoord> {
        if col < self.cols && row < self.rows {
            Some(TileCoord::new(
                self.col_min() + col as i16,
                self.row_min() + row as i16,
            ))
        } else {
            None
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 23,
            rows: 33,
            radius: 80.0,
        }
    }
}

/// One tile slot in a grid: its coordinate, its precomputed center point and
/// the caller's per-tile value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tile<T> {
    coord: TileCoord,
    center: Point2,
    value: T,
}

impl<T> Tile<T> {
    /// The center of this tile in screen space
    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T> HasCoord for Tile<T> {
    type Coord = TileCoord;

    fn coord(&self) -> TileCoord {
        self.coord
    }
}

/// One vertex slot in a grid. The coordinate is the *canonical* alias of the
/// physical vertex (see [HexGrid::canonical_vertex]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex<V> {
    coord: VertexCoord,
    point: Point2,
    value: V,
}

impl<V> Vertex<V> {
    /// The position of this vertex in screen space
    pub fn point(&self) -> Point2 {
        self.point
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }
}

impl<V> HasCoord for Vertex<V> {
    type Coord = VertexCoord;

    fn coord(&self) -> VertexCoord {
        self.coord
    }
}

/// One edge slot in a grid. The coordinate is the *canonical* alias of the
/// physical edge (see [HexGrid::canonical_edge]).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<E> {
    coord: EdgeCoord,
    value: E,
}

impl<E> Edge<E> {
    pub fn value(&self) -> &E {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut E {
        &mut self.value
    }
}

impl<E> HasCoord for Edge<E> {
    type Coord = EdgeCoord;

    fn coord(&self) -> EdgeCoord {
        self.coord
    }
}

/// A bounded rectangular field of hexagonal tiles, with a value slot of type
/// `T` on every tile, `V` on every vertex and `E` on every edge. Value types
/// default to `()` for purely structural grids.
///
/// The grid owns exactly one slot per physical object. Aliased coordinates
/// (the 3 names of a vertex, the 2 names of an edge) all resolve to the same
/// slot, so callers can address vertices and edges relative to whichever
/// tile is convenient.
///
/// A grid with `n` columns and `m` rows always has `n·m` tiles,
/// `2(nm + n + m)` vertices and `3nm + 2n + 2m - 1` edges.
///
/// ## Serialization
/// Grids serialize with serde when the value types do. The pools are
/// serialized as arrays rather than maps, since coordinates don't make
/// usable keys in formats like JSON; every element carries its own
/// coordinate, which is how the maps are rebuilt on deserialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
// The value types only appear inside serde(with) fields, which serde infers
// no bounds from, so the bounds have to be spelled out
#[serde(bound(
    serialize = "T: Serialize, V: Serialize, E: Serialize",
    deserialize = "T: serde::de::DeserializeOwned, \
                   V: serde::de::DeserializeOwned, \
                   E: serde::de::DeserializeOwned"
))]
pub struct HexGrid<T = (), V = (), E = ()> {
    /// The config this grid was built from. Immutable after construction.
    config: GridConfig,

    /// One slot per tile, keyed by coordinate
    #[serde(with = "crate::util::coord_map_to_vec_serde")]
    tiles: TileCoordIndexMap<Tile<T>>,

    /// One slot per physical vertex, keyed by canonical coordinate
    #[serde(with = "crate::util::coord_map_to_vec_serde")]
    vertices: VertexCoordIndexMap<Vertex<V>>,

    /// One slot per physical edge, keyed by canonical coordinate
    #[serde(with = "crate::util::coord_map_to_vec_serde")]
    edges: EdgeCoordIndexMap<Edge<E>>,
}

impl<T, V, E> HexGrid<T, V, E>
where
    T: Default,
    V: Default,
    E: Default,
{
    /// Build the grid described by the given config, with every value slot
    /// initialized to its type's default. Returns an error if the config is
    /// invalid. Panics only in the case of internal bugs in the assembly
    /// logic.
    pub fn build(config: GridConfig) -> anyhow::Result<Self> {
        info!("Building hex grid with config {:?}", config);
        config.validate().context("invalid grid config")?;
        ensure!(
            config.cols % 2 == 1,
            "cols must be odd, got {}",
            config.cols
        );
        ensure!(
            config.rows % 2 == 1,
            "rows must be odd, got {}",
            config.rows
        );

        let grid = timed!(
            "Grid assembly",
            log::Level::Info,
            Self::assemble(config)
        );
        debug!(
            "Assembled {} tiles, {} vertices, {} edges",
            grid.num_tiles(),
            grid.num_vertices(),
            grid.num_edges()
        );
        Ok(grid)
    }

    /// Materialize all three pools. Every vertex/edge is reachable from some
    /// in-bounds tile, so walking the tiles and canonicalizing their corners
    /// and sides covers everything exactly once.
    fn assemble(config: GridConfig) -> Self {
        let (num_tiles, num_vertices, num_edges) = expected_counts(&config);
        let mut tiles = TileCoordIndexMap::with_capacity_and_hasher(
            num_tiles,
            FnvBuildHasher::default(),
        );
        let mut vertices = VertexCoordIndexMap::with_capacity_and_hasher(
            num_vertices,
            FnvBuildHasher::default(),
        );
        let mut edges = EdgeCoordIndexMap::with_capacity_and_hasher(
            num_edges,
            FnvBuildHasher::default(),
        );

        for u in config.col_min()..=config.col_max() {
            for v in config.row_min()..=config.row_max() {
                let coord = TileCoord::new(u, v);
                tiles.insert(
                    coord,
                    Tile {
                        coord,
                        center: tile_center(&config, coord),
                        value: T::default(),
                    },
                );

                for vertex in coord.vertices() {
                    // The current tile is in bounds, so a canonical alias
                    // always exists
                    let canonical =
                        canonical_vertex(&config, vertex).unwrap();
                    vertices.entry(canonical).or_insert_with(|| Vertex {
                        coord: canonical,
                        point: vertex_point(&config, canonical),
                        value: V::default(),
                    });
                }

                for edge in coord.edges() {
                    let canonical = canonical_edge(&config, edge).unwrap();
                    edges.entry(canonical).or_insert_with(|| Edge {
                        coord: canonical,
                        value: E::default(),
                    });
                }
            }
        }

        Self {
            config,
            tiles,
            vertices,
            edges,
        }
    }
}

impl<T, V, E> HexGrid<T, V, E> {
    /// Get the config this grid was built from
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// The grid's dimensions as `(cols, rows)`
    pub fn size(&self) -> (u16, u16) {
        (self.config.cols, self.config.rows)
    }

    /// Is the given tile within the grid's bounds?
    pub fn contains(&self, coord: TileCoord) -> bool {
        self.config.contains(coord)
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.len()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Get the tile at the given coordinate, if it's in bounds
    pub fn tile(&self, coord: TileCoord) -> Option<&Tile<T>> {
        self.tiles.get(&coord)
    }

    pub fn tile_mut(&mut self, coord: TileCoord) -> Option<&mut Tile<T>> {
        self.tiles.get_mut(&coord)
    }

    /// Get the vertex slot for the given coordinate, under any of its
    /// aliases. `None` if the vertex isn't part of this grid.
    pub fn vertex(&self, coord: VertexCoord) -> Option<&Vertex<V>> {
        self.vertices.get(&self.canonical_vertex(coord)?)
    }

    pub fn vertex_mut(
        &mut self,
        coord: VertexCoord,
    ) -> Option<&mut Vertex<V>> {
        let canonical = self.canonical_vertex(coord)?;
        self.vertices.get_mut(&canonical)
    }

    /// Get the edge slot for the given coordinate, under either of its
    /// aliases. `None` if the edge isn't part of this grid.
    pub fn edge(&self, coord: EdgeCoord) -> Option<&Edge<E>> {
        self.edges.get(&self.canonical_edge(coord)?)
    }

    pub fn edge_mut(&mut self, coord: EdgeCoord) -> Option<&mut Edge<E>> {
        let canonical = self.canonical_edge(coord)?;
        self.edges.get_mut(&canonical)
    }

    /// Iterate over all tiles, in assembly order (column-major, west to
    /// east)
    pub fn tiles(&self) -> impl Iterator<Item = &Tile<T>> {
        self.tiles.values()
    }

    /// Iterate over all vertex slots
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> {
        self.vertices.values()
    }

    /// Iterate over all edge slots
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> {
        self.edges.values()
    }

    /// Get the 6 vertex slots at the corners of the given tile, in
    /// corner-index order. `None` if the tile isn't in the grid.
    pub fn tile_vertices(&self, coord: TileCoord) -> Option<Vec<&Vertex<V>>> {
        if !self.contains(coord) {
            return None;
        }
        // Every corner of an in-bounds tile is in the pool
        Some(
            coord
                .vertices()
                .iter()
                .map(|vertex| self.vertex(*vertex).unwrap())
                .collect(),
        )
    }

    /// Get the 6 edge slots on the sides of the given tile, in corner-index
    /// order. `None` if the tile isn't in the grid.
    pub fn tile_edges(&self, coord: TileCoord) -> Option<Vec<&Edge<E>>> {
        if !self.contains(coord) {
            return None;
        }
        Some(
            coord
                .edges()
                .iter()
                .map(|edge| self.edge(*edge).unwrap())
                .collect(),
        )
    }

    /// Get the canonical alias of the given vertex within this grid: the
    /// representative with the minimum `(v, u)` among those whose tile is in
    /// bounds. `None` if no alias's tile is in bounds, i.e. the vertex isn't
    /// part of this grid.
    pub fn canonical_vertex(
        &self,
        coord: VertexCoord,
    ) -> Option<VertexCoord> {
        canonical_vertex(&self.config, coord)
    }

    /// Get the canonical alias of the given edge within this grid, by the
    /// same rule as [Self::canonical_vertex]. `None` if the edge isn't part
    /// of this grid.
    pub fn canonical_edge(&self, coord: EdgeCoord) -> Option<EdgeCoord> {
        canonical_edge(&self.config, coord)
    }

    /// Compute the center of the given tile in screen space. Pure geometry;
    /// works for out-of-bounds coordinates too.
    pub fn tile_center(&self, coord: TileCoord) -> Point2 {
        tile_center(&self.config, coord)
    }

    /// Get the corner geometry of the given tile. `None` if the tile isn't
    /// in the grid.
    pub fn hexagon(&self, coord: TileCoord) -> Option<Hexagon> {
        if self.contains(coord) {
            Some(Hexagon::new(
                self.tile_center(coord),
                self.config.radius,
            ))
        } else {
            None
        }
    }

    /// Get the position of the given vertex in screen space. `None` if the
    /// vertex isn't part of this grid.
    pub fn vertex_point(&self, coord: VertexCoord) -> Option<Point2> {
        Some(self.vertex(coord)?.point())
    }
}

#[cfg(feature = "json")]
impl<T, V, E> HexGrid<T, V, E>
where
    T: Serialize,
    V: Serialize,
    E: Serialize,
{
    /// Serialize this grid into JSON. This is a recoverable format, which
    /// can be loaded back with [HexGrid::from_json].
    pub fn to_json(&self) -> String {
        // Panic here indicates an internal bug in the data format
        serde_json::to_string(self).expect("error serializing grid")
    }
}

#[cfg(feature = "json")]
impl<T, V, E> HexGrid<T, V, E>
where
    T: serde::de::DeserializeOwned,
    V: serde::de::DeserializeOwned,
    E: serde::de::DeserializeOwned,
{
    /// Deserialize a grid from JSON produced by [HexGrid::to_json]. Fails if
    /// the input is malformed.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("error deserializing grid")
    }
}

/// The number of tiles, vertices and edges in a grid of the given size. Each
/// non-edge column/row of tiles shares corners and sides with the previous
/// one, which is where the cross terms come from.
fn expected_counts(config: &GridConfig) -> (usize, usize, usize) {
    let n = config.cols as usize;
    let m = config.rows as usize;
    (n * m, 2 * (n * m + n + m), 3 * n * m + 2 * n + 2 * m - 1)
}

fn tile_center(config: &GridConfig, coord: TileCoord) -> Point2 {
    let x = f64::from(coord.u) * 2.0 * config.radius * TRIANGLE_ANGLE.cos();
    let mut y = f64::from(coord.v) * 2.0 * config.radius;
    if coord.is_high() {
        // High columns sit half a tile height above their low neighbors
        y += 2.0 * config.radius * TRIANGLE_ANGLE.sin();
    }
    Point2::new(x, y)
}

fn vertex_point(config: &GridConfig, coord: VertexCoord) -> Point2 {
    let hexagon =
        Hexagon::new(tile_center(config, coord.tile()), config.radius);
    // k < 6 is a VertexCoord invariant
    hexagon.point(coord.k()).unwrap()
}

fn canonical_vertex(
    config: &GridConfig,
    coord: VertexCoord,
) -> Option<VertexCoord> {
    coord
        .identical_vertices()
        .into_iter()
        .filter(|alias| config.contains(alias.tile()))
        // Aliases have pairwise distinct tiles, so (v, u) never ties
        .min_by_key(|alias| (alias.v(), alias.u()))
}

fn canonical_edge(config: &GridConfig, coord: EdgeCoord) -> Option<EdgeCoord> {
    [coord, coord.twin()]
        .into_iter()
        .filter(|alias| config.contains(alias.tile()))
        .min_by_key(|alias| (alias.v(), alias.u()))
}
