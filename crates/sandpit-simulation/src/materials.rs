//! Material definitions

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A material code stored in one grid cell.
///
/// The discriminants are the byte values stored in the grid buffer and handed
/// to renderers in snapshots, so they must never be renumbered.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Stone = 3,
    Wood = 4,
    Fire = 5,
}

/// Returned when a byte does not name any material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown material code {0}")]
pub struct UnknownMaterial(pub u8);

/// How a material behaves physically
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialType {
    /// Nothing there
    Empty,
    /// Doesn't move (stone, wood)
    Solid,
    /// Falls, piles up, sinks through liquid (sand)
    Powder,
    /// Falls, then spreads sideways (water)
    Liquid,
    /// Rises, spreads to fuel, goes out (fire)
    Fire,
}

/// Static properties of a material
#[derive(Clone, Copy, Debug)]
pub struct MaterialDef {
    pub material: Material,
    pub name: &'static str,
    pub description: &'static str,
    pub material_type: MaterialType,
    /// Base color (RGBA)
    pub color: [u8; 4],
}

/// Definitions for every material, indexed by code
pub const MATERIAL_DEFS: [MaterialDef; Material::COUNT] = [
    MaterialDef {
        material: Material::Empty,
        name: "empty",
        description: "Nothing",
        material_type: MaterialType::Empty,
        color: [0, 0, 0, 0],
    },
    MaterialDef {
        material: Material::Sand,
        name: "sand",
        description: "Falls and piles up",
        material_type: MaterialType::Powder,
        color: [0xfb, 0xbf, 0x24, 255],
    },
    MaterialDef {
        material: Material::Water,
        name: "water",
        description: "Flows and fills",
        material_type: MaterialType::Liquid,
        color: [0x3b, 0x82, 0xf6, 255],
    },
    MaterialDef {
        material: Material::Stone,
        name: "stone",
        description: "Static solid",
        material_type: MaterialType::Solid,
        color: [0x52, 0x52, 0x5b, 255],
    },
    MaterialDef {
        material: Material::Wood,
        name: "wood",
        description: "Solid organic",
        material_type: MaterialType::Solid,
        color: [0x78, 0x35, 0x0f, 255],
    },
    MaterialDef {
        material: Material::Fire,
        name: "fire",
        description: "Burns things",
        material_type: MaterialType::Fire,
        color: [0xef, 0x44, 0x44, 255],
    },
];

impl Material {
    /// Number of materials in the closed set
    pub const COUNT: usize = 6;

    /// All materials in code order
    pub const ALL: [Material; Material::COUNT] = [
        Material::Empty,
        Material::Sand,
        Material::Water,
        Material::Stone,
        Material::Wood,
        Material::Fire,
    ];

    /// The byte stored in the grid for this material
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a byte, substituting Stone for anything unknown.
    ///
    /// Scene payloads come from outside the core; a bad entry still yields a
    /// usable (if conservative) cell instead of failing the whole load.
    pub fn from_code_lossy(code: u8) -> Self {
        Self::try_from(code).unwrap_or_else(|err| {
            log::warn!("{}, substituting stone", err);
            Material::Stone
        })
    }

    /// Parse a material name, case-insensitive. `air` is accepted for Empty.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "empty" | "air" => Some(Material::Empty),
            "sand" => Some(Material::Sand),
            "water" => Some(Material::Water),
            "stone" => Some(Material::Stone),
            "wood" => Some(Material::Wood),
            "fire" => Some(Material::Fire),
            _ => None,
        }
    }

    pub fn def(self) -> &'static MaterialDef {
        &MATERIAL_DEFS[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.def().name
    }

    pub fn material_type(self) -> MaterialType {
        self.def().material_type
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    /// Blocks the player box (stone, wood and settled sand)
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, Material::Stone | Material::Wood | Material::Sand)
    }

    /// Submerges the player box
    #[inline]
    pub fn is_fluid(self) -> bool {
        self == Material::Water
    }

    /// Moves on its own under gravity
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, Material::Sand | Material::Water)
    }

    /// Never moves autonomously once placed
    #[inline]
    pub fn is_static(self) -> bool {
        matches!(self, Material::Stone | Material::Wood)
    }
}

impl TryFrom<u8> for Material {
    type Error = UnknownMaterial;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Material::ALL
            .get(code as usize)
            .copied()
            .ok_or(UnknownMaterial(code))
    }
}

impl From<Material> for u8 {
    fn from(material: Material) -> Self {
        material.code()
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
