/// How the constraint's base `position` is interpreted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum PositionMode {
    /// An absolute arclength distance from the path start.
    Fixed,
    /// A fraction of the total path length.
    Percent,
}

/// How the per-bone spacing values are derived.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SpacingMode {
    /// `spacing` is added to each bone's own length.
    Length,
    /// `spacing` scales with the bone's current length relative to its rest length.
    Fixed,
    /// `spacing` is a fraction of the total path length per bone.
    Percent,
    /// The total spacing is distributed proportionally to each bone's length.
    Proportional,
}

/// How chain bones are oriented along the path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RotateMode {
    /// Each bone follows the path tangent at its own sample.
    Tangent,
    /// Each bone points at the next bone's sample.
    Chain,
    /// Like `Chain`, but the bone is also scaled to span the inter-bone distance.
    ChainScale,
}

/// Immutable configuration of a path constraint, shared by reference between
/// the skeleton definition and every runtime instance.
///
/// `bones` and `target` are indices into arrays owned by the caller; the
/// constraint never owns the objects they name.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PathConstraintData {
    pub name: String,
    pub bones: Vec<usize>,
    /// Index of the path-bearing target slot.
    pub target: usize,
    pub position_mode: PositionMode,
    pub spacing_mode: SpacingMode,
    pub rotate_mode: RotateMode,
    /// Degrees. Applied with the target frame's handedness sign, so a mirrored
    /// path frame rotates the offset the other way.
    pub offset_rotation: f32,
    pub position: f32,
    pub spacing: f32,
    pub mix_rotate: f32,
    pub mix_x: f32,
    pub mix_y: f32,
}
