//! Map data structure
//!
//! The immutable 2D tile grid the viewer stands in.

use super::tile::Tile;
use crate::error::MapError;

/// Rows of the built-in demo level, top to bottom
pub const DEMO_ROWS: [&str; 16] = [
    "0000222222220000",
    "1              0",
    "1      11111   0",
    "1     0        0",
    "0     0  1110000",
    "0     3        0",
    "0   10000      0",
    "0   0   11100  0",
    "0   0   0      0",
    "0   0   1  00000",
    "0       1      0",
    "2       1      0",
    "0       0      0",
    "0 0000000      0",
    "0              0",
    "0002222222200000",
];

/// A rectangular tile grid addressed as (row, col) = (y, x)
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl GridMap {
    /// Build a map from text rows, one character per tile
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let width = rows.first().map_or(0, |r| r.as_ref().chars().count());
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, text) in rows.iter().enumerate() {
            let before = tiles.len();
            tiles.extend(text.as_ref().chars().map(Tile::from_code));
            let found = tiles.len() - before;
            if found != width {
                return Err(MapError::Ragged { row, expected: width, found });
            }
        }

        Ok(Self {
            width,
            height: rows.len(),
            tiles,
        })
    }

    /// The 16x16 demo level
    pub fn demo() -> Result<Self, MapError> {
        Self::from_rows(&DEMO_ROWS)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if a tile index is within bounds
    #[inline]
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Check if a map-space point lies on some tile
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x.is_finite()
            && y.is_finite()
            && x >= 0.0
            && y >= 0.0
            && x < self.width as f32
            && y < self.height as f32
    }

    /// Get the tile at (row, col), failing on any out-of-range index
    pub fn tile_at(&self, row: i64, col: i64) -> Result<Tile, MapError> {
        if !self.in_bounds(row, col) {
            return Err(MapError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.tiles[row as usize * self.width + col as usize])
    }

    /// Get the tile under a map-space point (x, y)
    ///
    /// Coordinates are truncated to tile indices. Points left of or above
    /// the grid are rejected instead of truncating towards zero.
    pub fn tile_at_point(&self, x: f32, y: f32) -> Result<Tile, MapError> {
        if !self.contains_point(x, y) {
            return Err(MapError::OutOfBounds {
                row: y.floor() as i64,
                col: x.floor() as i64,
                height: self.height,
                width: self.width,
            });
        }
        self.tile_at(y as i64, x as i64)
    }

    /// Iterate over every wall as (row, col, tile)
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_wall())
            .map(|(idx, tile)| (idx / self.width, idx % self.width, *tile))
    }

    /// Text rows of the map, the inverse of `from_rows`
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.width)
            .map(|row| row.iter().map(Tile::code).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dimensions() {
        let map = GridMap::demo().unwrap();
        assert_eq!(map.width(), 16);
        assert_eq!(map.height(), 16);
        assert_eq!(map.tile_at(0, 0), Ok(Tile::Wall('0')));
        assert_eq!(map.tile_at(0, 4), Ok(Tile::Wall('2')));
        assert_eq!(map.tile_at(5, 6), Ok(Tile::Wall('3')));
        assert_eq!(map.tile_at(1, 1), Ok(Tile::Empty));
    }

    #[test]
    fn test_demo_is_built_like_any_other_map() {
        assert_eq!(GridMap::demo(), GridMap::from_rows(&DEMO_ROWS));
        assert!(GridMap::demo().is_ok());
    }

    #[test]
    fn test_rows_round_trip() {
        let map = GridMap::demo().unwrap();
        assert_eq!(map.to_rows(), DEMO_ROWS.iter().map(|r| r.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_row_col_order() {
        let map = GridMap::from_rows(&["  #", "   "]).unwrap();
        assert_eq!(map.width(), 3);
        assert_eq!(map.height(), 2);
        assert!(map.tile_at(0, 2).unwrap().is_wall());
        assert!(map.tile_at(1, 2).unwrap().is_empty());
        assert!(map.tile_at_point(2.5, 0.5).unwrap().is_wall());
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let map = GridMap::demo().unwrap();
        assert_eq!(
            map.tile_at(16, 0),
            Err(MapError::OutOfBounds { row: 16, col: 0, height: 16, width: 16 })
        );
        assert!(map.tile_at(0, -1).is_err());
        assert!(map.tile_at_point(-0.25, 3.0).is_err());
        assert!(map.tile_at_point(3.0, 16.0).is_err());
        assert!(map.tile_at_point(f32::NAN, 3.0).is_err());
    }

    #[test]
    fn test_ragged_and_empty_maps_are_rejected() {
        assert_eq!(
            GridMap::from_rows(&["###", "#"]),
            Err(MapError::Ragged { row: 1, expected: 3, found: 1 })
        );
        assert_eq!(GridMap::from_rows::<&str>(&[]), Err(MapError::Empty));
        assert_eq!(GridMap::from_rows(&[""]), Err(MapError::Empty));
    }

    #[test]
    fn test_walls_iterator() {
        let map = GridMap::from_rows(&["1 ", " 2"]).unwrap();
        let walls: Vec<_> = map.walls().collect();
        assert_eq!(walls, vec![(0, 0, Tile::Wall('1')), (1, 1, Tile::Wall('2'))]);
    }
}
