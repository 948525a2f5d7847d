/// World-space affine frame of a bone: a 2x2 linear part (`a`, `b`, `c`, `d`,
/// column-major per column pair) plus a translation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldTransform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub x: f32,
    pub y: f32,
}

impl WorldTransform {
    pub const IDENTITY: WorldTransform = WorldTransform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        x: 0.0,
        y: 0.0,
    };

    /// A pure rotation about the origin.
    pub fn from_rotation(radians: f32) -> Self {
        let cos = radians.cos();
        let sin = radians.sin();
        WorldTransform {
            a: cos,
            b: -sin,
            c: sin,
            d: cos,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn with_translation(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// World rotation of the frame's X axis, in radians.
    pub fn rotation(&self) -> f32 {
        self.c.atan2(self.a)
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        WorldTransform::IDENTITY
    }
}

#[cfg(feature = "glam")]
impl From<WorldTransform> for glam::Affine2 {
    fn from(t: WorldTransform) -> Self {
        glam::Affine2 {
            matrix2: glam::Mat2::from_cols(glam::Vec2::new(t.a, t.c), glam::Vec2::new(t.b, t.d)),
            translation: glam::Vec2::new(t.x, t.y),
        }
    }
}

#[cfg(feature = "glam")]
impl From<glam::Affine2> for WorldTransform {
    fn from(t: glam::Affine2) -> Self {
        WorldTransform {
            a: t.matrix2.x_axis.x,
            b: t.matrix2.y_axis.x,
            c: t.matrix2.x_axis.y,
            d: t.matrix2.y_axis.y,
            x: t.translation.x,
            y: t.translation.y,
        }
    }
}

/// Bone collaborator seam. The constraint borrows the chain's bones for the
/// duration of one evaluation and never creates or destroys them.
pub trait ConstrainedBone {
    fn world_transform(&self) -> WorldTransform;

    fn set_world_transform(&mut self, transform: WorldTransform);

    /// Rest-pose length of the bone, fixed per skeleton definition.
    fn rest_length(&self) -> f32;

    /// Called once per bone per evaluation after the world transform has been
    /// written back, so the owner can invalidate derived local/applied values.
    fn commit_applied(&mut self) {}
}

/// Minimal bone for embedders that do not carry a full skeleton runtime.
/// Also serves as the crate's test double.
#[derive(Clone, Debug, PartialEq)]
pub struct Bone {
    pub transform: WorldTransform,
    pub length: f32,
}

impl Bone {
    pub fn new(transform: WorldTransform, length: f32) -> Self {
        Bone { transform, length }
    }
}

impl ConstrainedBone for Bone {
    fn world_transform(&self) -> WorldTransform {
        self.transform
    }

    fn set_world_transform(&mut self, transform: WorldTransform) {
        self.transform = transform;
    }

    fn rest_length(&self) -> f32 {
        self.length
    }
}
