//! Colours and the material set of the character.

use crate::data_structures::material::{Material, MaterialOptions, MaterialRef};

pub const DEEP_PURPLE: u32 = 0x3a1f6e;
pub const MID_PURPLE: u32 = 0x6b35a8;
pub const LAVENDER: u32 = 0xb88ade;
pub const LIGHT_LAVENDER: u32 = 0xd4aaff;
pub const ROBE_BLUE: u32 = 0x2a1b6e;
pub const ROBE_DARK_BLUE: u32 = 0x1a1155;
pub const ARMOR_PURPLE: u32 = 0x6a3ca0;
pub const ARMOR_DARK: u32 = 0x2e1a55;
pub const ARMOR_SHINY: u32 = 0x8855cc;
pub const SKIN_TONE: u32 = 0xa0724e;
pub const STAFF_TEAL: u32 = 0x40c9a2;
pub const STAFF_DARK_TEAL: u32 = 0x2a9e7e;
pub const STAFF_GEM: u32 = 0x50e8b8;
pub const EYE_BLACK: u32 = 0x0a0a0a;
pub const EYE_WHITE: u32 = 0xffffff;
pub const NOSE: u32 = 0x8f6443;
pub const ORB_CORE: u32 = 0x80ffd0;
pub const PLATFORM_GLOW: u32 = 0x7b40c9;

/// The materials shared across body regions.
///
/// Cloning a field aliases the material: the gem material in particular is
/// used by the visor, the belt and the staff orb, which therefore pulse
/// together.
#[derive(Clone, Debug)]
pub struct Palette {
    pub deep_purple: MaterialRef,
    pub mid_purple: MaterialRef,
    pub lavender: MaterialRef,
    pub light_lavender: MaterialRef,
    pub robe: MaterialRef,
    pub robe_dark: MaterialRef,
    pub armor: MaterialRef,
    pub armor_dark: MaterialRef,
    pub armor_shiny: MaterialRef,
    pub skin: MaterialRef,
    pub staff: MaterialRef,
    pub staff_dark: MaterialRef,
    pub gem: MaterialRef,
    pub eye: MaterialRef,
}

impl Palette {
    pub fn new() -> Self {
        let opts = MaterialOptions::default;
        Self {
            deep_purple: Material::shared("deep purple", DEEP_PURPLE, opts()),
            mid_purple: Material::shared(
                "mid purple",
                MID_PURPLE,
                opts().roughness(0.45).metalness(0.15),
            ),
            lavender: Material::shared(
                "lavender",
                LAVENDER,
                opts().roughness(0.35).metalness(0.2),
            ),
            light_lavender: Material::shared(
                "light lavender",
                LIGHT_LAVENDER,
                opts().roughness(0.3).metalness(0.2),
            ),
            robe: Material::shared("robe", ROBE_BLUE, opts().roughness(0.75)),
            robe_dark: Material::shared("robe dark", ROBE_DARK_BLUE, opts().roughness(0.8)),
            armor: Material::shared(
                "armor",
                ARMOR_PURPLE,
                opts().roughness(0.3).metalness(0.45),
            ),
            armor_dark: Material::shared(
                "armor dark",
                ARMOR_DARK,
                opts().roughness(0.35).metalness(0.4),
            ),
            armor_shiny: Material::shared(
                "armor shiny",
                ARMOR_SHINY,
                opts().roughness(0.2).metalness(0.55),
            ),
            skin: Material::shared("skin", SKIN_TONE, opts().roughness(0.6)),
            staff: Material::shared(
                "staff",
                STAFF_TEAL,
                opts().roughness(0.35).metalness(0.2),
            ),
            staff_dark: Material::shared("staff dark", STAFF_DARK_TEAL, opts().roughness(0.4)),
            gem: Material::shared(
                "gem",
                STAFF_GEM,
                opts()
                    .roughness(0.15)
                    .metalness(0.15)
                    .emissive(STAFF_GEM, 0.6),
            ),
            eye: Material::shared("eye", EYE_BLACK, opts().roughness(0.15).metalness(0.1)),
        }
    }

    /// Each eye gets its own highlight material.
    pub fn eye_white(&self) -> MaterialRef {
        Material::shared("eye white", EYE_WHITE, MaterialOptions::default().roughness(0.1))
    }

    pub fn nose(&self) -> MaterialRef {
        Material::shared("nose", NOSE, MaterialOptions::default())
    }

    pub fn orb_core(&self) -> MaterialRef {
        Material::shared(
            "orb core",
            ORB_CORE,
            MaterialOptions::default()
                .roughness(0.1)
                .metalness(0.1)
                .emissive(ORB_CORE, 0.8),
        )
    }

    pub fn platform(&self) -> MaterialRef {
        Material::shared(
            "platform",
            PLATFORM_GLOW,
            MaterialOptions::default()
                .roughness(0.5)
                .metalness(0.3)
                .emissive(PLATFORM_GLOW, 0.2)
                .translucent(0.3),
        )
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
