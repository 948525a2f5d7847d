/// Borrowed description of a target's active path geometry.
///
/// The control-point array is a flat float list, two floats per point, in the
/// usual path-attachment layout: each anchor is preceded by its incoming
/// handle pair and followed by its outgoing handle pair. An open path with
/// `n` curves therefore carries `6 * (n + 1)` floats (the two outermost
/// handle pairs are unused), a closed path `6 * n`.
#[derive(Copy, Clone, Debug)]
pub struct PathGeometry<'a> {
    /// Whether the last curve connects back to the first anchor.
    pub closed: bool,
    /// Whether sampling should estimate arclengths per call instead of
    /// consulting `lengths`.
    pub constant_speed: bool,
    /// Total float count of the control-point array.
    pub vertices_len: usize,
    /// Cumulative per-curve arclengths. Consulted only when `constant_speed`
    /// is false; may be empty otherwise.
    pub lengths: &'a [f32],
}

/// Path/slot collaborator seam.
///
/// The provider owns the curve geometry (and whatever skinning or deformation
/// applies to it) and materializes world-space coordinates on demand; the
/// constraint only ever asks for contiguous float sub-ranges.
pub trait PathTarget {
    /// The active attachment as path geometry, or `None` when the target does
    /// not currently carry a path. A `None` makes the constraint a no-op.
    fn path(&self) -> Option<PathGeometry<'_>>;

    /// Handedness sign of the target's world frame: positive for a standard
    /// frame, negative when the frame is mirrored. Flips the configured
    /// offset rotation.
    fn winding(&self) -> f32 {
        1.0
    }

    /// Writes `count` world-space floats of the control-point array, starting
    /// at float index `start`, into `out` beginning at `offset`.
    fn world_vertices(&self, start: usize, count: usize, out: &mut [f32], offset: usize);
}

/// A path whose control points are already world-space. Useful for embedders
/// without a skeleton-attached path, and for tests.
#[derive(Clone, Debug)]
pub struct StaticPath {
    pub vertices: Vec<f32>,
    pub lengths: Vec<f32>,
    pub closed: bool,
    pub constant_speed: bool,
    pub winding: f32,
}

impl StaticPath {
    /// An open, constant-speed path.
    pub fn open(vertices: Vec<f32>) -> Self {
        StaticPath {
            vertices,
            lengths: Vec::new(),
            closed: false,
            constant_speed: true,
            winding: 1.0,
        }
    }

    /// A closed, constant-speed path.
    pub fn closed(vertices: Vec<f32>) -> Self {
        StaticPath {
            closed: true,
            ..StaticPath::open(vertices)
        }
    }

    /// Switches to precomputed per-curve cumulative arclengths (the
    /// variable-speed sampler).
    pub fn with_lengths(mut self, lengths: Vec<f32>) -> Self {
        self.lengths = lengths;
        self.constant_speed = false;
        self
    }
}

impl PathTarget for StaticPath {
    fn path(&self) -> Option<PathGeometry<'_>> {
        Some(PathGeometry {
            closed: self.closed,
            constant_speed: self.constant_speed,
            vertices_len: self.vertices.len(),
            lengths: self.lengths.as_slice(),
        })
    }

    fn winding(&self) -> f32 {
        self.winding
    }

    fn world_vertices(&self, start: usize, count: usize, out: &mut [f32], offset: usize) {
        for i in 0..count {
            let value = self.vertices.get(start + i).copied().unwrap_or(0.0);
            if let Some(slot) = out.get_mut(offset + i) {
                *slot = value;
            }
        }
    }
}
