use crate::point::GridPoint;
use crate::types::PointIndex;
use glam::Vec2;

/// The 2D grid of simulated points covering the surface, with one cell of
/// overscan beyond every edge.
///
/// Points are stored column-major: the point at `(column, row)` lives at
/// linear index `column * rows + row`. Both the physics step and the mesh
/// renderer rely on this mapping to locate neighbors, so it is part of the
/// type's contract, not an implementation detail.
///
/// A lattice is never resized in place. Resize and theme-driven refresh
/// both discard it and build a fresh one; no point identity survives.
#[derive(Debug)]
pub struct Lattice {
    /// Column-major point storage, `columns * rows` entries.
    pub points: Vec<GridPoint>,
    pub columns: usize,
    pub rows: usize,
    /// Rest distance between neighboring points, in surface pixels.
    pub spacing: f32,
}

impl Lattice {
    /// Builds the rest lattice for a surface of `width x height` pixels.
    ///
    /// Produces `ceil(width / spacing) + 2` columns and
    /// `ceil(height / spacing) + 2` rows of points at rest positions
    /// `((column - 1) * spacing, (row - 1) * spacing)`, so the first
    /// column/row sits one full cell before the surface and the last sits
    /// at or beyond the far edge.
    ///
    /// Degenerate inputs clamp instead of failing: negative dimensions
    /// count as zero (leaving only the overscan cells), and non-positive
    /// spacing is raised to one pixel so the point count stays finite.
    ///
    /// ### Parameters
    /// - `width` - Surface width in pixels.
    /// - `height` - Surface height in pixels.
    /// - `spacing` - Rest distance between neighboring points.
    ///
    /// ### Returns
    /// A fully-populated [`Lattice`] with every point at rest.
    pub fn build(width: f32, height: f32, spacing: f32) -> Self {
        let spacing = spacing.max(1.0);
        let width = width.max(0.0);
        let height = height.max(0.0);

        let columns = (width / spacing).ceil() as usize + 2;
        let rows = (height / spacing).ceil() as usize + 2;

        let mut points = Vec::with_capacity(columns * rows);
        for col in 0..columns {
            for row in 0..rows {
                let origin = Vec2::new(
                    (col as f32 - 1.0) * spacing,
                    (row as f32 - 1.0) * spacing,
                );
                points.push(GridPoint::new(origin));
            }
        }

        Self {
            points,
            columns,
            rows,
            spacing,
        }
    }

    /// Linear storage index of the point at `(column, row)`.
    ///
    /// Callers are expected to stay in bounds; use [`Lattice::point`] for
    /// a checked lookup.
    #[inline]
    pub fn point_index(&self, column: usize, row: usize) -> PointIndex {
        column * self.rows + row
    }

    /// Inverse of [`Lattice::point_index`]: the `(column, row)` cell a
    /// linear index refers to.
    #[inline]
    pub fn cell_of(&self, index: PointIndex) -> (usize, usize) {
        (index / self.rows, index % self.rows)
    }

    /// Checked lookup of the point at `(column, row)`.
    ///
    /// ### Returns
    /// `None` for any coordinate outside the current bounds, so neighbor
    /// walks can simply skip the missing side.
    pub fn point(&self, column: usize, row: usize) -> Option<&GridPoint> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.points.get(self.point_index(column, row))
    }

    /// Number of mesh edges: `(columns-1)*rows + columns*(rows-1)`.
    pub fn edge_count(&self) -> usize {
        self.columns.saturating_sub(1) * self.rows
            + self.columns * self.rows.saturating_sub(1)
    }

    /// Enumerates every mesh edge exactly once, as segment endpoints at the
    /// points' *current* positions.
    ///
    /// Cells are visited column-major; each yields a segment to its right
    /// neighbor `(column + 1, row)` and its bottom neighbor
    /// `(column, row + 1)` when those exist. Left/top edges are never
    /// revisited, so the total is [`Lattice::edge_count`].
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        (0..self.columns)
            .flat_map(move |col| (0..self.rows).map(move |row| (col, row)))
            .flat_map(move |(col, row)| {
                let here = self.point(col, row).map(|p| p.pos);
                let right = here.zip(self.point(col + 1, row)).map(|(a, b)| (a, b.pos));
                let below = here.zip(self.point(col, row + 1)).map(|(a, b)| (a, b.pos));
                right.into_iter().chain(below)
            })
    }
}
