use std::sync::Arc;

use crate::{
    ConstrainedBone, Error, PathConstraintData, PathGeometry, PathTarget, PositionMode, RotateMode,
    SpacingMode,
};

pub(crate) const EPSILON: f32 = 1.0e-5;

const DEG_RAD: f32 = std::f32::consts::PI / 180.0;

/// Runtime state of one path constraint instance.
///
/// The configuration is shared by reference; `position`, `spacing` and the
/// three mix factors start from the configured values and may be overridden
/// at runtime (typically by animation). Scratch buffers are grow-only and
/// reused call-to-call so evaluation allocates nothing in steady state.
#[derive(Clone, Debug)]
pub struct PathConstraint {
    data: Arc<PathConstraintData>,
    pub position: f32,
    pub spacing: f32,
    pub mix_rotate: f32,
    pub mix_x: f32,
    pub mix_y: f32,
    pub active: bool,
    scratch: Scratch,
}

#[derive(Clone, Debug, Default)]
struct Scratch {
    spaces: Vec<f32>,
    lengths: Vec<f32>,
    positions: Vec<f32>,
    world: Vec<f32>,
    curves: Vec<f32>,
}

impl PathConstraint {
    /// Builds a constraint instance, validating the configuration against the
    /// caller's declared bone and slot array sizes. Fails fast; the instance
    /// is never partially built.
    pub fn new(
        data: Arc<PathConstraintData>,
        bone_count: usize,
        slot_count: usize,
    ) -> Result<Self, Error> {
        if data.bones.is_empty() {
            return Err(Error::EmptyBoneChain {
                constraint: data.name.clone(),
            });
        }
        for &bone in &data.bones {
            if bone >= bone_count {
                return Err(Error::UnknownBone {
                    constraint: data.name.clone(),
                    bone,
                    bone_count,
                });
            }
        }
        if data.target >= slot_count {
            return Err(Error::UnknownTargetSlot {
                constraint: data.name.clone(),
                slot: data.target,
                slot_count,
            });
        }
        for (field, value) in [
            ("position", data.position),
            ("spacing", data.spacing),
            ("offsetRotation", data.offset_rotation),
            ("mixRotate", data.mix_rotate),
            ("mixX", data.mix_x),
            ("mixY", data.mix_y),
        ] {
            if !value.is_finite() {
                return Err(Error::InvalidValue {
                    message: format!(
                        "non-finite {field} for path constraint '{}'",
                        data.name
                    ),
                });
            }
        }

        Ok(PathConstraint {
            position: data.position,
            spacing: data.spacing,
            mix_rotate: data.mix_rotate,
            mix_x: data.mix_x,
            mix_y: data.mix_y,
            active: true,
            scratch: Scratch::default(),
            data,
        })
    }

    pub fn data(&self) -> &Arc<PathConstraintData> {
        &self.data
    }

    /// Resets the runtime values to the configured setup values.
    pub fn set_to_setup(&mut self) {
        self.position = self.data.position;
        self.spacing = self.data.spacing;
        self.mix_rotate = self.data.mix_rotate;
        self.mix_x = self.data.mix_x;
        self.mix_y = self.data.mix_y;
    }

    /// Evaluates the constraint once, blending each chain bone toward its
    /// sampled pose on the path.
    ///
    /// `bones` is the caller's full bone array; the chain is selected by the
    /// indices in the constraint data. `target` is the resolved target slot.
    /// Returns `true` when any bone was modified.
    pub fn update<B: ConstrainedBone, P: PathTarget>(
        &mut self,
        bones: &mut [B],
        target: &P,
    ) -> bool {
        if !self.active {
            return false;
        }
        let (mix_rotate, mix_x, mix_y) = (self.mix_rotate, self.mix_x, self.mix_y);
        if mix_rotate == 0.0 && mix_x == 0.0 && mix_y == 0.0 {
            return false;
        }
        let Some(geometry) = target.path() else {
            return false;
        };

        let data = &self.data;
        let bone_count = data.bones.len();
        let tangents = data.rotate_mode == RotateMode::Tangent;
        let scale = data.rotate_mode == RotateMode::ChainScale;
        let spaces_count = if tangents { bone_count } else { bone_count + 1 };

        self.scratch.spaces.resize(spaces_count, 0.0);
        self.scratch.spaces.fill(0.0);
        self.scratch.lengths.clear();
        if scale {
            self.scratch.lengths.resize(bone_count, 0.0);
        }
        solve_spacing(
            data,
            bones,
            self.spacing,
            &mut self.scratch.spaces,
            &mut self.scratch.lengths,
        );

        let positions = compute_world_positions(
            target,
            &geometry,
            &mut self.scratch.positions,
            &mut self.scratch.world,
            &mut self.scratch.curves,
            data.position_mode,
            data.spacing_mode,
            spaces_count,
            tangents,
            &self.scratch.spaces,
            self.position,
        );
        if positions.len() < 2 {
            return false;
        }

        let spaces = self.scratch.spaces.as_slice();
        let lengths = self.scratch.lengths.as_slice();

        let mut bone_x = positions[0];
        let mut bone_y = positions[1];
        let mut offset_rotation = data.offset_rotation;
        let tip = if offset_rotation == 0.0 {
            data.rotate_mode == RotateMode::Chain
        } else {
            offset_rotation *= if target.winding() > 0.0 {
                DEG_RAD
            } else {
                -DEG_RAD
            };
            false
        };

        let mut applied = false;
        let mut p = 3usize;
        for i in 0..bone_count {
            let Some(&bone_index) = data.bones.get(i) else {
                p = p.saturating_add(3);
                continue;
            };
            let Some(bone) = bones.get_mut(bone_index) else {
                p = p.saturating_add(3);
                continue;
            };

            let mut t = bone.world_transform();
            t.x += (bone_x - t.x) * mix_x;
            t.y += (bone_y - t.y) * mix_y;

            let x = positions.get(p).copied().unwrap_or(bone_x);
            let y = positions.get(p + 1).copied().unwrap_or(bone_y);
            let dx = x - bone_x;
            let dy = y - bone_y;

            if scale {
                let length = lengths.get(i).copied().unwrap_or(0.0);
                if length >= EPSILON {
                    let s = ((dx * dx + dy * dy).sqrt() / length - 1.0) * mix_rotate + 1.0;
                    t.a *= s;
                    t.c *= s;
                }
            }

            bone_x = x;
            bone_y = y;

            if mix_rotate > 0.0 {
                let (a, b, c, d) = (t.a, t.b, t.c, t.d);
                let mut r = if tangents {
                    positions.get(p - 1).copied().unwrap_or(0.0)
                } else if spaces.get(i + 1).copied().unwrap_or(0.0) < EPSILON {
                    // Co-located bones inherit the next sample's tangent
                    // instead of deriving a degenerate direction vector.
                    positions.get(p + 2).copied().unwrap_or(0.0)
                } else {
                    dy.atan2(dx)
                };
                r -= c.atan2(a);
                if tip {
                    let cos = r.cos();
                    let sin = r.sin();
                    let length = bone.rest_length();
                    bone_x += (length * (cos * a - sin * c) - dx) * mix_rotate;
                    bone_y += (length * (sin * a + cos * c) - dy) * mix_rotate;
                } else {
                    r += offset_rotation;
                }

                r = wrap_pi(r) * mix_rotate;
                let cos = r.cos();
                let sin = r.sin();
                t.a = cos * a - sin * c;
                t.b = cos * b - sin * d;
                t.c = sin * a + cos * c;
                t.d = sin * b + cos * d;
            }

            bone.set_world_transform(t);
            bone.commit_applied();
            applied = true;
            p += 3;
        }

        applied
    }
}

/// Converts the per-bone space configuration into arclength deltas.
///
/// `spaces` has `spaces_count` entries; `spaces[0]` is left untouched, the
/// rest receive per-bone deltas. `lengths` is filled with projected rest
/// lengths only in `ChainScale` mode (it is empty otherwise).
pub(crate) fn solve_spacing<B: ConstrainedBone>(
    data: &PathConstraintData,
    bones: &[B],
    spacing: f32,
    spaces: &mut [f32],
    lengths: &mut [f32],
) {
    let scale = data.rotate_mode == RotateMode::ChainScale;
    let spaces_count = spaces.len();

    match data.spacing_mode {
        SpacingMode::Percent => {
            if scale {
                for i in 0..spaces_count.saturating_sub(1) {
                    let Some(&bone_index) = data.bones.get(i) else {
                        continue;
                    };
                    let Some(bone) = bones.get(bone_index) else {
                        continue;
                    };
                    let setup_length = bone.rest_length();
                    let t = bone.world_transform();
                    let x = setup_length * t.a;
                    let y = setup_length * t.c;
                    if let Some(out) = lengths.get_mut(i) {
                        *out = (x * x + y * y).sqrt();
                    }
                }
            }
            for space in spaces.iter_mut().skip(1) {
                *space = spacing;
            }
        }
        SpacingMode::Proportional => {
            let mut sum = 0.0f32;
            let mut i = 0usize;
            let n = spaces_count.saturating_sub(1);
            while i < n {
                let Some(&bone_index) = data.bones.get(i) else {
                    i += 1;
                    continue;
                };
                let Some(bone) = bones.get(bone_index) else {
                    i += 1;
                    continue;
                };
                let setup_length = bone.rest_length();
                if setup_length < EPSILON {
                    if scale {
                        if let Some(out) = lengths.get_mut(i) {
                            *out = 0.0;
                        }
                    }
                    i += 1;
                    spaces[i] = spacing;
                    continue;
                }
                let t = bone.world_transform();
                let x = setup_length * t.a;
                let y = setup_length * t.c;
                let length = (x * x + y * y).sqrt();
                if scale {
                    if let Some(out) = lengths.get_mut(i) {
                        *out = length;
                    }
                }
                i += 1;
                spaces[i] = length;
                sum += length;
            }
            if sum > 0.0 {
                let rescale = spaces_count as f32 / sum * spacing;
                for space in spaces.iter_mut().skip(1) {
                    *space *= rescale;
                }
            }
        }
        spacing_mode => {
            let length_spacing = spacing_mode == SpacingMode::Length;
            let mut i = 0usize;
            let n = spaces_count.saturating_sub(1);
            while i < n {
                let Some(&bone_index) = data.bones.get(i) else {
                    i += 1;
                    continue;
                };
                let Some(bone) = bones.get(bone_index) else {
                    i += 1;
                    continue;
                };
                let setup_length = bone.rest_length();
                if setup_length < EPSILON {
                    if scale {
                        if let Some(out) = lengths.get_mut(i) {
                            *out = 0.0;
                        }
                    }
                    i += 1;
                    spaces[i] = spacing;
                    continue;
                }
                let t = bone.world_transform();
                let x = setup_length * t.a;
                let y = setup_length * t.c;
                let length = (x * x + y * y).sqrt();
                if scale {
                    if let Some(out) = lengths.get_mut(i) {
                        *out = length;
                    }
                }
                i += 1;
                spaces[i] = (if length_spacing {
                    setup_length + spacing
                } else {
                    spacing
                }) * length
                    / setup_length;
            }
        }
    }
}

/// Samples the path at each cumulative space offset, writing `(x, y, angle)`
/// triples into `positions` (`3 * spaces_count + 2` floats total; the two
/// trailing floats keep the buffer symmetric with the curve math and are not
/// read by the blender).
#[allow(clippy::too_many_arguments)]
pub(crate) fn compute_world_positions<'a, P: PathTarget>(
    target: &P,
    geometry: &PathGeometry<'_>,
    positions: &'a mut Vec<f32>,
    world: &mut Vec<f32>,
    curves: &mut Vec<f32>,
    position_mode: PositionMode,
    spacing_mode: SpacingMode,
    spaces_count: usize,
    tangents: bool,
    spaces: &[f32],
    mut position: f32,
) -> &'a [f32] {
    const NONE: i32 = -1;
    const BEFORE: i32 = -2;
    const AFTER: i32 = -3;

    let closed = geometry.closed;
    let mut vertices_length = geometry.vertices_len;
    if vertices_length < 6 || spaces_count == 0 {
        positions.clear();
        return positions.as_slice();
    }

    positions.resize(spaces_count * 3 + 2, 0.0);
    positions.fill(0.0);
    let output = positions.as_mut_slice();

    if !geometry.constant_speed {
        let lengths = geometry.lengths;
        if lengths.is_empty() {
            return positions.as_slice();
        }

        let mut curve_count = (vertices_length / 6) as i32;
        curve_count -= if closed { 1 } else { 2 };
        if curve_count < 0 {
            return positions.as_slice();
        }
        let curve_count = curve_count as usize;
        if curve_count >= lengths.len() {
            return positions.as_slice();
        }

        let path_length = lengths[curve_count];
        if position_mode == PositionMode::Percent {
            position *= path_length;
        }
        let multiplier = match spacing_mode {
            SpacingMode::Percent => path_length,
            SpacingMode::Proportional => path_length / spaces_count as f32,
            _ => 1.0,
        };

        world.resize(8, 0.0);
        world.fill(0.0);
        let mut prev_curve = NONE;
        let mut curve = 0usize;
        for i in 0..spaces_count {
            let space = spaces.get(i).copied().unwrap_or(0.0) * multiplier;
            position += space;
            let mut p = position;

            if closed {
                p = p.rem_euclid(path_length);
                curve = 0;
            } else if p < 0.0 {
                if prev_curve != BEFORE {
                    prev_curve = BEFORE;
                    target.world_vertices(2, 4, world, 0);
                }
                add_before_position(p, world, 0, output, i * 3);
                continue;
            } else if p > path_length {
                if prev_curve != AFTER {
                    prev_curve = AFTER;
                    target.world_vertices(vertices_length.saturating_sub(6), 4, world, 0);
                }
                add_after_position(p - path_length, world, 0, output, i * 3);
                continue;
            }

            let (found, local) = locate_segment(lengths, curve, p);
            curve = found;
            p = local;

            // Control points are fetched lazily, only when the containing
            // curve changes between consecutive samples.
            if curve as i32 != prev_curve {
                prev_curve = curve as i32;
                if closed && curve == curve_count {
                    target.world_vertices(vertices_length.saturating_sub(4), 4, world, 0);
                    target.world_vertices(0, 4, world, 4);
                } else {
                    target.world_vertices(curve * 6 + 2, 8, world, 0);
                }
            }

            add_curve_position(
                p,
                world[0],
                world[1],
                world[2],
                world[3],
                world[4],
                world[5],
                world[6],
                world[7],
                output,
                i * 3,
                tangents || (i > 0 && space.abs() < EPSILON),
            );
        }

        return positions.as_slice();
    }

    // Constant speed: rebuild a world-space control-point copy and estimate
    // per-curve arclengths with a fixed-cost forward-difference pass.
    let mut curve_count = vertices_length / 6;
    world.clear();
    if closed {
        vertices_length += 2;
        world.resize(vertices_length, 0.0);
        target.world_vertices(2, vertices_length.saturating_sub(4), world, 0);
        target.world_vertices(0, 2, world, vertices_length.saturating_sub(4));
        world[vertices_length - 2] = world[0];
        world[vertices_length - 1] = world[1];
    } else {
        curve_count = curve_count.saturating_sub(1);
        vertices_length = vertices_length.saturating_sub(4);
        world.resize(vertices_length, 0.0);
        target.world_vertices(2, vertices_length, world, 0);
    }

    let world = world.as_slice();
    curves.resize(curve_count, 0.0);
    let curves = curves.as_mut_slice();
    let mut path_length = 0.0f32;
    let mut x1 = world.first().copied().unwrap_or(0.0);
    let mut y1 = world.get(1).copied().unwrap_or(0.0);
    let mut cx1 = 0.0f32;
    let mut cy1 = 0.0f32;
    let mut cx2 = 0.0f32;
    let mut cy2 = 0.0f32;
    let mut x2 = 0.0f32;
    let mut y2 = 0.0f32;
    let mut w = 2usize;
    for curve in curves.iter_mut() {
        cx1 = world.get(w).copied().unwrap_or(0.0);
        cy1 = world.get(w + 1).copied().unwrap_or(0.0);
        cx2 = world.get(w + 2).copied().unwrap_or(0.0);
        cy2 = world.get(w + 3).copied().unwrap_or(0.0);
        x2 = world.get(w + 4).copied().unwrap_or(0.0);
        y2 = world.get(w + 5).copied().unwrap_or(0.0);

        // 4-step forward-difference estimate of the cubic's arclength.
        let tmpx = (x1 - cx1 * 2.0 + cx2) * 0.1875;
        let tmpy = (y1 - cy1 * 2.0 + cy2) * 0.1875;
        let dddfx = ((cx1 - cx2) * 3.0 - x1 + x2) * 0.09375;
        let dddfy = ((cy1 - cy2) * 3.0 - y1 + y2) * 0.09375;
        let mut ddfx = tmpx * 2.0 + dddfx;
        let mut ddfy = tmpy * 2.0 + dddfy;
        let mut dfx = (cx1 - x1) * 0.75 + tmpx + dddfx * 0.16666667;
        let mut dfy = (cy1 - y1) * 0.75 + tmpy + dddfy * 0.16666667;

        path_length += (dfx * dfx + dfy * dfy).sqrt();
        dfx += ddfx;
        dfy += ddfy;
        ddfx += dddfx;
        ddfy += dddfy;
        path_length += (dfx * dfx + dfy * dfy).sqrt();
        dfx += ddfx;
        dfy += ddfy;
        path_length += (dfx * dfx + dfy * dfy).sqrt();
        dfx += ddfx + dddfx;
        dfy += ddfy + dddfy;
        path_length += (dfx * dfx + dfy * dfy).sqrt();

        *curve = path_length;
        x1 = x2;
        y1 = y2;
        w += 6;
    }

    if position_mode == PositionMode::Percent {
        position *= path_length;
    }
    let multiplier = match spacing_mode {
        SpacingMode::Percent => path_length,
        SpacingMode::Proportional => path_length / spaces_count as f32,
        _ => 1.0,
    };

    let mut segments = [0.0f32; 10];
    let mut curve_length = 0.0f32;
    let mut prev_curve = NONE;
    let mut curve = 0usize;
    let mut segment = 0usize;

    for i in 0..spaces_count {
        let space = spaces.get(i).copied().unwrap_or(0.0) * multiplier;
        position += space;
        let mut p = position;

        if closed {
            p = p.rem_euclid(path_length);
            curve = 0;
        } else if p < 0.0 {
            add_before_position(p, world, 0, output, i * 3);
            continue;
        } else if p > path_length {
            add_after_position(
                p - path_length,
                world,
                vertices_length.saturating_sub(4),
                output,
                i * 3,
            );
            continue;
        }

        let (found, local) = locate_segment(curves, curve, p);
        curve = found;
        p = local;

        if curve as i32 != prev_curve {
            prev_curve = curve as i32;
            let ii = curve * 6;
            x1 = world.get(ii).copied().unwrap_or(0.0);
            y1 = world.get(ii + 1).copied().unwrap_or(0.0);
            cx1 = world.get(ii + 2).copied().unwrap_or(0.0);
            cy1 = world.get(ii + 3).copied().unwrap_or(0.0);
            cx2 = world.get(ii + 4).copied().unwrap_or(0.0);
            cy2 = world.get(ii + 5).copied().unwrap_or(0.0);
            x2 = world.get(ii + 6).copied().unwrap_or(0.0);
            y2 = world.get(ii + 7).copied().unwrap_or(0.0);

            // Subdivide the curve into 10 micro-segments with their own
            // forward-difference arclength table.
            let tmpx = (x1 - cx1 * 2.0 + cx2) * 0.03;
            let tmpy = (y1 - cy1 * 2.0 + cy2) * 0.03;
            let dddfx = ((cx1 - cx2) * 3.0 - x1 + x2) * 0.006;
            let dddfy = ((cy1 - cy2) * 3.0 - y1 + y2) * 0.006;
            let mut ddfx = tmpx * 2.0 + dddfx;
            let mut ddfy = tmpy * 2.0 + dddfy;
            let mut dfx = (cx1 - x1) * 0.3 + tmpx + dddfx * 0.16666667;
            let mut dfy = (cy1 - y1) * 0.3 + tmpy + dddfy * 0.16666667;

            curve_length = (dfx * dfx + dfy * dfy).sqrt();
            segments[0] = curve_length;
            for seg in segments.iter_mut().take(8).skip(1) {
                dfx += ddfx;
                dfy += ddfy;
                ddfx += dddfx;
                ddfy += dddfy;
                curve_length += (dfx * dfx + dfy * dfy).sqrt();
                *seg = curve_length;
            }
            dfx += ddfx;
            dfy += ddfy;
            curve_length += (dfx * dfx + dfy * dfy).sqrt();
            segments[8] = curve_length;
            dfx += ddfx + dddfx;
            dfy += ddfy + dddfy;
            curve_length += (dfx * dfx + dfy * dfy).sqrt();
            segments[9] = curve_length;
            segment = 0;
        }

        let (found, local) = locate_segment(&segments, segment, p * curve_length);
        segment = found;
        p = (segment as f32 + local) * 0.1;

        add_curve_position(
            p,
            x1,
            y1,
            cx1,
            cy1,
            cx2,
            cy2,
            x2,
            y2,
            output,
            i * 3,
            tangents || (i > 0 && space.abs() < EPSILON),
        );
    }

    positions.as_slice()
}

/// Locates the segment containing arclength `p` in a cumulative length table,
/// resuming the forward scan at `from` (positions are processed in
/// non-decreasing order, so the index never moves backwards within one pass),
/// and normalizes `p` to the segment-local `[0, 1]` parameter.
///
/// Shared between the per-curve table, the provider's precomputed table, and
/// the 10-entry micro-segment table so the tie-break behavior cannot drift
/// between the two sampler variants.
pub(crate) fn locate_segment(table: &[f32], from: usize, p: f32) -> (usize, f32) {
    let mut index = from;
    let last = table.len().saturating_sub(1);
    while index < last && p > table[index] {
        index += 1;
    }
    let local = if index == 0 {
        p / table.first().copied().unwrap_or(0.0).max(EPSILON)
    } else {
        let prev = table[index - 1];
        (p - prev) / (table[index] - prev).max(EPSILON)
    };
    (index, local)
}

/// Straight-line extrapolation before the path start, along the first curve's
/// initial tangent.
pub(crate) fn add_before_position(p: f32, temp: &[f32], i: usize, output: &mut [f32], o: usize) {
    let x1 = temp.get(i).copied().unwrap_or(0.0);
    let y1 = temp.get(i + 1).copied().unwrap_or(0.0);
    let dx = temp.get(i + 2).copied().unwrap_or(x1) - x1;
    let dy = temp.get(i + 3).copied().unwrap_or(y1) - y1;
    let r = dy.atan2(dx);
    output[o] = x1 + p * r.cos();
    output[o + 1] = y1 + p * r.sin();
    output[o + 2] = r;
}

/// Straight-line extrapolation past the path end, along the last curve's
/// final tangent.
pub(crate) fn add_after_position(p: f32, temp: &[f32], i: usize, output: &mut [f32], o: usize) {
    let x1 = temp.get(i + 2).copied().unwrap_or(0.0);
    let y1 = temp.get(i + 3).copied().unwrap_or(0.0);
    let dx = x1 - temp.get(i).copied().unwrap_or(x1);
    let dy = y1 - temp.get(i + 1).copied().unwrap_or(y1);
    let r = dy.atan2(dx);
    output[o] = x1 + p * r.cos();
    output[o + 1] = y1 + p * r.sin();
    output[o + 2] = r;
}

/// Evaluates a cubic Bezier at `p`, writing `(x, y)` and optionally the
/// tangent angle at `output[o..o + 3]`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn add_curve_position(
    p: f32,
    x1: f32,
    y1: f32,
    cx1: f32,
    cy1: f32,
    cx2: f32,
    cy2: f32,
    x2: f32,
    y2: f32,
    output: &mut [f32],
    o: usize,
    tangents: bool,
) {
    // A degenerate parameter short-circuits to the first control point; the
    // derivative there is numerically useless.
    if p < EPSILON || p.is_nan() {
        output[o] = x1;
        output[o + 1] = y1;
        output[o + 2] = (cy1 - y1).atan2(cx1 - x1);
        return;
    }
    let tt = p * p;
    let ttt = tt * p;
    let u = 1.0 - p;
    let uu = u * u;
    let uuu = uu * u;
    let ut = u * p;
    let ut3 = ut * 3.0;
    let uut3 = u * ut3;
    let utt3 = ut3 * p;
    let x = x1 * uuu + cx1 * uut3 + cx2 * utt3 + x2 * ttt;
    let y = y1 * uuu + cy1 * uut3 + cy2 * utt3 + y2 * ttt;
    output[o] = x;
    output[o + 1] = y;
    if tangents {
        if p < 0.001 {
            output[o + 2] = (cy1 - y1).atan2(cx1 - x1);
        } else {
            output[o + 2] = (y - (y1 * uu + cy1 * ut * 2.0 + cy2 * tt))
                .atan2(x - (x1 * uu + cx1 * ut * 2.0 + cx2 * tt));
        }
    }
}

/// Normalizes an angle into `(-pi, pi]`.
pub(crate) fn wrap_pi(mut radians: f32) -> f32 {
    const PI: f32 = std::f32::consts::PI;
    const PI2: f32 = 2.0 * std::f32::consts::PI;
    if radians > PI {
        radians -= PI2;
    } else if radians < -PI {
        radians += PI2;
    }
    radians
}
