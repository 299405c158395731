use crate::{
    data_structures::{
        instance::{Axis, Instance},
        material::MaterialRef,
        scene_graph::ContainerNode,
    },
    scene::{Blocks, palette::Palette},
};

pub const RING_COUNT: usize = 7;

/// Staff held at the right side: banded shaft, cross-guard with two prongs and
/// a glowing orb. Returns the group and the orb core material.
pub fn staff(p: &Palette) -> (ContainerNode, MaterialRef) {
    let mut staff = ContainerNode::new("staff")
        .with_transform(Instance::at(1.6, -1.5, 0.2).tilted(Axis::Z, -0.08));

    staff.cuboid([0.14, 5.2, 0.14], &p.staff_dark, [0.0, 4.5, 0.0]);
    for i in 0..RING_COUNT {
        staff.cuboid([0.2, 0.08, 0.2], &p.staff, [0.0, 2.3 + i as f32 * 0.5, 0.0]);
    }

    staff.cuboid([0.4, 0.3, 0.4], &p.staff_dark, [0.0, 7.15, 0.0]);
    staff.cuboid([1.0, 0.14, 0.14], &p.staff, [0.0, 7.35, 0.0]);
    staff.cuboid([0.8, 0.1, 0.12], &p.staff_dark, [0.0, 7.48, 0.0]);

    staff.tilted_cuboid([0.12, 0.4, 0.12], &p.staff, [-0.38, 7.55, 0.0], Axis::Z, 0.2);
    staff.tilted_cuboid([0.12, 0.4, 0.12], &p.staff, [0.38, 7.55, 0.0], Axis::Z, -0.2);

    staff.cuboid([0.12, 0.35, 0.12], &p.staff, [0.0, 8.0, 0.0]);

    // Orb: a cube and three slabs stretched along each axis read as a sphere
    let orb = [0.0, 7.55, 0.0];
    staff.cuboid([0.45, 0.45, 0.45], &p.gem, orb);
    staff.cuboid([0.38, 0.52, 0.38], &p.gem, orb);
    staff.cuboid([0.52, 0.38, 0.38], &p.gem, orb);
    staff.cuboid([0.38, 0.38, 0.52], &p.gem, orb);

    let core = p.orb_core();
    staff.cuboid([0.2, 0.2, 0.2], &core, orb);

    (staff, core)
}
