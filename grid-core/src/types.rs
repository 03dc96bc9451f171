/// Linear storage index of a point in a [`crate::lattice::Lattice`].
///
/// This is an index into `Lattice::points`, computed as
/// `column * rows + row`, and is only meaningful until the lattice is
/// rebuilt (a rebuild discards every point along with its index).
pub type PointIndex = usize;
