//! Lays a four-bone chain along a closed circular path and prints the
//! resulting world transforms.

use std::sync::Arc;

use bonerail::{
    Bone, PathConstraint, PathConstraintData, PositionMode, RotateMode, SpacingMode, StaticPath,
    WorldTransform,
};

/// Circle of the given radius, approximated by four cubic curves.
fn circle_path(radius: f32) -> StaticPath {
    let r = radius;
    let k = 0.5522848 * radius;
    StaticPath::closed(vec![
        r, -k, r, 0.0, r, k, // (r, 0)
        k, r, 0.0, r, -k, r, // (0, r)
        -r, k, -r, 0.0, -r, -k, // (-r, 0)
        -k, -r, 0.0, -r, k, -r, // (0, -r)
    ])
}

fn main() {
    let data = PathConstraintData {
        name: "orbit".to_string(),
        bones: vec![0, 1, 2, 3],
        target: 0,
        position_mode: PositionMode::Percent,
        spacing_mode: SpacingMode::Percent,
        rotate_mode: RotateMode::Tangent,
        offset_rotation: 0.0,
        position: 0.0,
        spacing: 0.25,
        mix_rotate: 1.0,
        mix_x: 1.0,
        mix_y: 1.0,
    };
    let mut constraint = PathConstraint::new(Arc::new(data), 4, 1).expect("valid configuration");
    let mut bones = vec![Bone::new(WorldTransform::IDENTITY, 10.0); 4];
    let path = circle_path(100.0);

    constraint.update(&mut bones, &path);

    for (i, bone) in bones.iter().enumerate() {
        let t = &bone.transform;
        println!(
            "bone {i}: x = {:8.3}  y = {:8.3}  rotation = {:7.2} deg",
            t.x,
            t.y,
            t.rotation().to_degrees()
        );
    }
}
