//! The figure itself: a chunky robed mage with an oversized head.
//!
//! All coordinates are in the character's local space. The figure stands on
//! y = 2.5 with its vertical axis on x = z = 0 and faces +z.

use crate::{
    data_structures::{
        instance::{Axis, Instance},
        scene_graph::ContainerNode,
    },
    scene::{Blocks, palette::Palette},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// -1 for left, +1 for right.
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Tiered pointed hat with a bent tip, side and back drapes and a visor gem.
pub fn hat(p: &Palette) -> ContainerNode {
    let mut hat = ContainerNode::new("hat");

    hat.cuboid([2.9, 0.18, 2.9], &p.deep_purple, [0.0, 9.55, -0.15]);

    // Tiers, each capped with a trim band
    hat.cuboid([2.55, 0.55, 2.55], &p.deep_purple, [0.0, 9.95, -0.15]);
    hat.cuboid([2.6, 0.16, 2.6], &p.lavender, [0.0, 10.28, -0.15]);
    hat.cuboid([2.2, 0.55, 2.2], &p.mid_purple, [0.0, 10.58, -0.1]);
    hat.cuboid([2.25, 0.16, 2.25], &p.lavender, [0.0, 10.9, -0.1]);
    hat.cuboid([1.8, 0.55, 1.8], &p.deep_purple, [0.0, 11.2, -0.05]);
    hat.cuboid([1.85, 0.16, 1.85], &p.lavender, [0.0, 11.52, -0.05]);
    hat.cuboid([1.35, 0.55, 1.35], &p.mid_purple, [0.0, 11.82, 0.0]);
    hat.cuboid([1.4, 0.14, 1.4], &p.light_lavender, [0.0, 12.12, 0.0]);

    hat.cuboid([0.95, 0.5, 0.95], &p.deep_purple, [0.0, 12.4, 0.05]);
    hat.cuboid([0.65, 0.45, 0.65], &p.mid_purple, [0.0, 12.85, 0.1]);

    // The tip curls forward
    hat.tilted_cuboid([0.42, 0.5, 0.42], &p.armor_shiny, [0.0, 13.3, 0.18], Axis::X, 0.15);
    hat.tilted_cuboid([0.28, 0.5, 0.28], &p.mid_purple, [0.0, 13.75, 0.35], Axis::X, 0.28);
    hat.tilted_cuboid([0.18, 0.45, 0.18], &p.armor_shiny, [0.0, 14.15, 0.55], Axis::X, 0.38);
    hat.tilted_cuboid([0.12, 0.35, 0.12], &p.lavender, [0.0, 14.5, 0.75], Axis::X, 0.45);

    for side in [Side::Left, Side::Right] {
        let x = side.sign() * 1.38;
        hat.cuboid([0.22, 1.3, 1.7], &p.deep_purple, [x, 9.0, -0.15]);
        hat.cuboid([0.18, 0.9, 1.4], &p.mid_purple, [x, 8.05, -0.15]);
        hat.cuboid([0.25, 0.12, 1.75], &p.lavender, [x, 9.65, -0.15]);
    }

    // Back drape
    hat.cuboid([2.3, 1.5, 0.22], &p.deep_purple, [0.0, 8.8, -1.15]);
    hat.cuboid([1.8, 0.8, 0.18], &p.mid_purple, [0.0, 7.85, -1.1]);
    hat.cuboid([2.35, 0.12, 0.25], &p.lavender, [0.0, 9.55, -1.15]);

    // Visor
    hat.cuboid([2.6, 0.32, 0.22], &p.armor_shiny, [0.0, 9.5, 1.05]);
    hat.cuboid([2.65, 0.12, 0.24], &p.lavender, [0.0, 9.32, 1.07]);
    hat.cuboid([0.22, 0.22, 0.12], &p.gem, [0.0, 9.5, 1.14]);

    hat
}

pub fn head(p: &Palette) -> ContainerNode {
    let mut head = ContainerNode::new("head");
    head.cuboid([2.55, 2.2, 2.3], &p.skin, [0.0, 8.25, 0.1]);
    head.cuboid([2.35, 0.3, 2.1], &p.skin, [0.0, 9.4, 0.05]);
    head.cuboid([2.1, 0.2, 1.8], &p.skin, [0.0, 7.1, 0.1]);
    head
}

/**
 * A big round eye centered on `center`.
 *
 * Three overlapping black plates approximate the disc, two small white plates
 * in front of it are the highlights.
 */
pub fn eye(p: &Palette, side: Side, center: [f32; 3]) -> ContainerNode {
    let [cx, cy, cz] = center;
    let mut eye = ContainerNode::new(format!("{} eye", side.label()));
    eye.cuboid([0.75, 0.75, 0.12], &p.eye, center);
    eye.cuboid([0.65, 0.85, 0.11], &p.eye, center);
    eye.cuboid([0.85, 0.65, 0.11], &p.eye, center);
    let white = p.eye_white();
    eye.cuboid([0.18, 0.18, 0.06], &white, [cx + 0.18, cy + 0.18, cz + 0.07]);
    eye.cuboid([0.1, 0.1, 0.05], &white, [cx - 0.12, cy + 0.08, cz + 0.07]);
    eye
}

/// Layered pauldron with a spike leaning outwards. The group origin is the
/// shoulder joint, so the volumes are given relative to it.
pub fn shoulder(p: &Palette, side: Side) -> ContainerNode {
    let s = side.sign();
    let mut shoulder = ContainerNode::new(format!("{} shoulder", side.label()))
        .with_transform(Instance::at(s * 1.2, 6.55, 0.0));
    shoulder.cuboid([0.9, 0.35, 0.9], &p.armor_shiny, [0.0, 0.0, 0.0]);
    shoulder.cuboid([0.7, 0.2, 0.7], &p.armor_dark, [0.0, 0.24, 0.0]);
    shoulder.cuboid([0.5, 0.15, 0.5], &p.armor_shiny, [0.0, 0.38, 0.0]);
    shoulder.cuboid([0.95, 0.1, 0.95], &p.lavender, [0.0, -0.14, 0.0]);
    shoulder.tilted_cuboid(
        [0.15, 0.35, 0.15],
        &p.lavender,
        [s * 0.25, 0.45, 0.0],
        Axis::Z,
        -s * 0.3,
    );
    shoulder
}

pub fn add_nose_and_neck(character: &mut ContainerNode, p: &Palette) {
    character.cuboid([0.14, 0.1, 0.1], &p.nose(), [0.0, 7.9, 1.24]);
    character.cuboid([0.55, 0.3, 0.5], &p.skin, [0.0, 6.95, 0.05]);
}

/// Chest armour, robe, belt, emblem, skirt and fold highlights.
pub fn add_torso(character: &mut ContainerNode, p: &Palette) {
    // Chest armour
    character.cuboid([2.0, 0.55, 1.1], &p.armor_dark, [0.0, 6.45, 0.0]);
    character.cuboid([1.6, 0.22, 1.0], &p.armor_shiny, [0.0, 6.8, 0.0]);
    character.cuboid([0.18, 0.55, 0.15], &p.lavender, [0.0, 6.45, 0.56]);
    character.cuboid([0.12, 0.35, 0.12], &p.armor_shiny, [-0.5, 6.5, 0.54]);
    character.cuboid([0.12, 0.35, 0.12], &p.armor_shiny, [0.5, 6.5, 0.54]);

    // Robe body and belt
    character.cuboid([1.8, 1.4, 1.1], &p.robe, [0.0, 5.45, 0.0]);
    character.cuboid([1.85, 0.18, 1.15], &p.armor, [0.0, 6.05, 0.0]);
    character.cuboid([0.25, 0.2, 0.16], &p.gem, [0.0, 6.05, 0.6]);

    // Spiral emblem
    character.cuboid([0.7, 0.7, 0.1], &p.armor_dark, [0.0, 5.3, 0.58]);
    character.cuboid([0.6, 0.8, 0.1], &p.armor_dark, [0.0, 5.3, 0.58]);
    character.cuboid([0.5, 0.5, 0.1], &p.armor_shiny, [0.0, 5.3, 0.62]);
    character.cuboid([0.4, 0.6, 0.1], &p.armor_shiny, [0.0, 5.3, 0.62]);
    character.cuboid([0.25, 0.25, 0.1], &p.lavender, [0.0, 5.3, 0.66]);
    character.cuboid([0.3, 0.1, 0.08], &p.lavender, [0.15, 5.5, 0.68]);
    character.cuboid([0.1, 0.25, 0.08], &p.lavender, [0.28, 5.35, 0.68]);
    character.cuboid([0.25, 0.1, 0.08], &p.lavender, [0.1, 5.12, 0.68]);
    character.cuboid([0.1, 0.2, 0.08], &p.lavender, [-0.12, 5.25, 0.68]);

    // Skirt, widening towards the hem
    character.cuboid([2.0, 0.55, 1.3], &p.robe_dark, [0.0, 4.45, 0.0]);
    character.cuboid([2.2, 0.55, 1.4], &p.robe, [0.0, 3.85, 0.0]);
    character.cuboid([2.4, 0.45, 1.5], &p.robe_dark, [0.0, 3.3, 0.0]);
    character.cuboid([2.6, 0.38, 1.6], &p.robe, [0.0, 2.85, 0.0]);
    character.cuboid([2.65, 0.1, 1.65], &p.lavender, [0.0, 2.68, 0.0]);
    character.cuboid([2.55, 0.06, 1.55], &p.light_lavender, [0.0, 2.58, 0.0]);

    // Centre line and folds
    character.cuboid([0.14, 1.9, 0.08], &p.lavender, [0.0, 4.15, 0.72]);
    character.cuboid([0.1, 1.35, 0.55], &p.mid_purple, [-0.85, 4.15, 0.0]);
    character.cuboid([0.1, 1.35, 0.55], &p.mid_purple, [0.85, 4.15, 0.0]);
    character.cuboid([0.15, 0.5, 0.12], &p.armor_shiny, [-0.95, 3.5, 0.55]);
    character.cuboid([0.15, 0.5, 0.12], &p.armor_shiny, [0.95, 3.5, 0.55]);
}

/// Sleeve, cuff and hand. The group origin is the character origin, which is
/// also the pivot of the sway.
pub fn arm(p: &Palette, side: Side) -> ContainerNode {
    let x = side.sign() * 1.3;
    let mut arm = ContainerNode::new(format!("{} arm", side.label()));
    arm.cuboid([0.55, 0.75, 0.55], &p.armor_shiny, [x, 5.95, 0.0]);
    arm.cuboid([0.58, 0.1, 0.58], &p.lavender, [x, 5.55, 0.0]);
    arm.cuboid([0.5, 0.75, 0.5], &p.mid_purple, [x, 5.1, 0.0]);
    arm.cuboid([0.54, 0.12, 0.54], &p.lavender, [x, 4.68, 0.0]);
    arm.cuboid([0.34, 0.34, 0.3], &p.skin, [x, 4.38, 0.0]);
    arm
}

pub fn add_feet(character: &mut ContainerNode, p: &Palette) {
    character.cuboid([0.48, 0.28, 0.65], &p.armor_dark, [-0.4, 2.5, 0.1]);
    character.cuboid([0.48, 0.28, 0.65], &p.armor_dark, [0.4, 2.5, 0.1]);
}
