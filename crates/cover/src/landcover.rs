use crate::Color;

/// The eleven land-cover classes that can appear in a categorical land-cover grid.
/// Cell codes outside this enumeration carry no class, they are skipped by the
/// coverage aggregation but still count towards the total grid area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LandCover {
    TreeCover,
    Shrubland,
    Grassland,
    Cropland,
    BuiltUp,
    BareSparseVegetation,
    SnowAndIce,
    PermanentWaterBodies,
    HerbaceousWetlands,
    Mangroves,
    MossAndLichen,
}

impl LandCover {
    /// Canonical class order, also the column order of the coverage table.
    pub const ALL: [LandCover; 11] = [
        LandCover::TreeCover,
        LandCover::Shrubland,
        LandCover::Grassland,
        LandCover::Cropland,
        LandCover::BuiltUp,
        LandCover::BareSparseVegetation,
        LandCover::SnowAndIce,
        LandCover::PermanentWaterBodies,
        LandCover::HerbaceousWetlands,
        LandCover::Mangroves,
        LandCover::MossAndLichen,
    ];

    /// The cell code of this class in a land-cover grid.
    pub const fn code(self) -> u8 {
        match self {
            LandCover::TreeCover => 10,
            LandCover::Shrubland => 20,
            LandCover::Grassland => 30,
            LandCover::Cropland => 40,
            LandCover::BuiltUp => 50,
            LandCover::BareSparseVegetation => 60,
            LandCover::SnowAndIce => 70,
            LandCover::PermanentWaterBodies => 80,
            LandCover::HerbaceousWetlands => 90,
            LandCover::Mangroves => 95,
            LandCover::MossAndLichen => 100,
        }
    }

    pub const fn from_code(code: u8) -> Option<LandCover> {
        match code {
            10 => Some(LandCover::TreeCover),
            20 => Some(LandCover::Shrubland),
            30 => Some(LandCover::Grassland),
            40 => Some(LandCover::Cropland),
            50 => Some(LandCover::BuiltUp),
            60 => Some(LandCover::BareSparseVegetation),
            70 => Some(LandCover::SnowAndIce),
            80 => Some(LandCover::PermanentWaterBodies),
            90 => Some(LandCover::HerbaceousWetlands),
            95 => Some(LandCover::Mangroves),
            100 => Some(LandCover::MossAndLichen),
            _ => None,
        }
    }

    /// Display name, also used as column header in persisted coverage tables.
    pub const fn name(self) -> &'static str {
        match self {
            LandCover::TreeCover => "Tree Cover",
            LandCover::Shrubland => "Shrubland",
            LandCover::Grassland => "Grassland",
            LandCover::Cropland => "Cropland",
            LandCover::BuiltUp => "Built-up",
            LandCover::BareSparseVegetation => "Bare/Sparse Vegetation",
            LandCover::SnowAndIce => "Snow and Ice",
            LandCover::PermanentWaterBodies => "Permanent water bodies",
            LandCover::HerbaceousWetlands => "Herbaceous wetlands",
            LandCover::Mangroves => "Mangroves",
            LandCover::MossAndLichen => "Moss and lichen",
        }
    }

    pub fn from_name(name: &str) -> Option<LandCover> {
        LandCover::ALL.iter().find(|class| class.name() == name).copied()
    }

    /// Chart color of this class.
    pub const fn color(self) -> Color {
        match self {
            LandCover::TreeCover => Color::rgb(0x00, 0x64, 0x00),
            LandCover::Shrubland => Color::rgb(0xff, 0xbb, 0x22),
            LandCover::Grassland => Color::rgb(0xff, 0xff, 0x4c),
            LandCover::Cropland => Color::rgb(0xf0, 0x96, 0xff),
            LandCover::BuiltUp => Color::rgb(0xfa, 0x00, 0x00),
            LandCover::BareSparseVegetation => Color::rgb(0xb4, 0xb4, 0xb4),
            LandCover::SnowAndIce => Color::rgb(0xf0, 0xf0, 0xf0),
            LandCover::PermanentWaterBodies => Color::rgb(0x00, 0x64, 0xc8),
            LandCover::HerbaceousWetlands => Color::rgb(0x00, 0x96, 0xa0),
            LandCover::Mangroves => Color::rgb(0x00, 0xcf, 0x75),
            LandCover::MossAndLichen => Color::rgb(0xfa, 0xe6, 0xa0),
        }
    }

    /// (name, color) pairs for chart legends, in canonical class order.
    pub fn legend_entries() -> Vec<(&'static str, Color)> {
        LandCover::ALL.iter().map(|class| (class.name(), class.color())).collect()
    }
}

impl std::fmt::Display for LandCover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
