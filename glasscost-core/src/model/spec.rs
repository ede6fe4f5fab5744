//! Glass specification types: the closed option enumerations and the input
//! record consumed by the calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::THIN_BAND_MAX_MM;

/// Glass color/type offered by the shop.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum GlassType {
    #[default]
    Clear,
    Green,
    Grey,
    #[serde(rename = "Dark Grey")]
    DarkGrey,
    #[serde(rename = "Super Grey")]
    SuperGrey,
}

impl GlassType {
    /// All glass types, in display order.
    pub const ALL: [GlassType; 5] = [
        GlassType::Clear,
        GlassType::Green,
        GlassType::Grey,
        GlassType::DarkGrey,
        GlassType::SuperGrey,
    ];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            GlassType::Clear => "Clear",
            GlassType::Green => "Green",
            GlassType::Grey => "Grey",
            GlassType::DarkGrey => "Dark Grey",
            GlassType::SuperGrey => "Super Grey",
        }
    }

    /// Parse from a display name. Case-insensitive; dashes count as spaces.
    pub fn from_name(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "clear" => Some(GlassType::Clear),
            "green" => Some(GlassType::Green),
            "grey" | "gray" => Some(GlassType::Grey),
            "dark grey" | "dark gray" => Some(GlassType::DarkGrey),
            "super grey" | "super gray" => Some(GlassType::SuperGrey),
            _ => None,
        }
    }
}

impl fmt::Display for GlassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GlassType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown glass type: {s}"))
    }
}

/// Glass thickness in millimeters. Only the fixed set stocked by the shop
/// is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Thickness {
    T4,
    T5,
    T6,
    T8,
    T10,
    T12,
}

impl Thickness {
    /// All thicknesses, ascending.
    pub const ALL: [Thickness; 6] = [
        Thickness::T4,
        Thickness::T5,
        Thickness::T6,
        Thickness::T8,
        Thickness::T10,
        Thickness::T12,
    ];

    /// Thickness value in millimeters.
    pub const fn mm(&self) -> u8 {
        match self {
            Thickness::T4 => 4,
            Thickness::T5 => 5,
            Thickness::T6 => 6,
            Thickness::T8 => 8,
            Thickness::T10 => 10,
            Thickness::T12 => 12,
        }
    }

    /// The coefficient band this thickness selects. 6mm belongs to the
    /// thin band.
    pub const fn band(&self) -> Band {
        if self.mm() <= THIN_BAND_MAX_MM {
            Band::Thin
        } else {
            Band::Thick
        }
    }
}

impl TryFrom<u8> for Thickness {
    type Error = String;

    fn try_from(mm: u8) -> Result<Self, Self::Error> {
        match mm {
            4 => Ok(Thickness::T4),
            5 => Ok(Thickness::T5),
            6 => Ok(Thickness::T6),
            8 => Ok(Thickness::T8),
            10 => Ok(Thickness::T10),
            12 => Ok(Thickness::T12),
            other => Err(format!("unsupported glass thickness: {other}mm")),
        }
    }
}

impl From<Thickness> for u8 {
    fn from(thickness: Thickness) -> u8 {
        thickness.mm()
    }
}

impl fmt::Display for Thickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mm())
    }
}

impl FromStr for Thickness {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mm: u8 = s
            .trim()
            .trim_end_matches("mm")
            .parse()
            .map_err(|_| format!("invalid thickness: {s}"))?;
        Thickness::try_from(mm)
    }
}

/// Two-valued thickness partition selecting edgework, hole and shape
/// coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    Thin,
    Thick,
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Band::Thin => write!(f, "thin"),
            Band::Thick => write!(f, "thick"),
        }
    }
}

/// Edge finishing treatment, priced per linear meter of perimeter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Edgework {
    #[serde(rename = "ROUGH ARRIS")]
    RoughArris,
    #[default]
    #[serde(rename = "FLAT GRIND - STRAIGHT")]
    FlatGrindStraight,
    #[serde(rename = "FLAT GRIND - CURVED")]
    FlatGrindCurved,
    #[serde(rename = "FLAT POLISH - STRAIGHT")]
    FlatPolishStraight,
    #[serde(rename = "FLAT POLISH - CURVED")]
    FlatPolishCurved,
}

impl Edgework {
    /// All edgework styles, in display order.
    pub const ALL: [Edgework; 5] = [
        Edgework::RoughArris,
        Edgework::FlatGrindStraight,
        Edgework::FlatGrindCurved,
        Edgework::FlatPolishStraight,
        Edgework::FlatPolishCurved,
    ];

    /// Canonical trade name.
    pub fn name(&self) -> &'static str {
        match self {
            Edgework::RoughArris => "ROUGH ARRIS",
            Edgework::FlatGrindStraight => "FLAT GRIND - STRAIGHT",
            Edgework::FlatGrindCurved => "FLAT GRIND - CURVED",
            Edgework::FlatPolishStraight => "FLAT POLISH - STRAIGHT",
            Edgework::FlatPolishCurved => "FLAT POLISH - CURVED",
        }
    }

    /// Whether this style follows a curved edge profile. Radius corners
    /// require one of these.
    pub fn is_curved(&self) -> bool {
        matches!(self, Edgework::FlatGrindCurved | Edgework::FlatPolishCurved)
    }

    /// Parse from a trade name. Case-insensitive; dashes count as spaces.
    pub fn from_name(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "rough arris" => Some(Edgework::RoughArris),
            "flat grind straight" => Some(Edgework::FlatGrindStraight),
            "flat grind curved" => Some(Edgework::FlatGrindCurved),
            "flat polish straight" => Some(Edgework::FlatPolishStraight),
            "flat polish curved" => Some(Edgework::FlatPolishCurved),
            _ => None,
        }
    }
}

impl fmt::Display for Edgework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Edgework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown edgework style: {s}"))
    }
}

/// Outline classification of the piece. Simple and complex shapes carry a
/// flat per-piece surcharge.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Shape {
    #[default]
    Rectangle,
    Triangle,
    Simple,
    Complex,
}

impl Shape {
    /// All shapes, in display order.
    pub const ALL: [Shape; 4] = [Shape::Rectangle, Shape::Triangle, Shape::Simple, Shape::Complex];

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Rectangle => "RECTANGLE",
            Shape::Triangle => "TRIANGLE",
            Shape::Simple => "SIMPLE",
            Shape::Complex => "COMPLEX",
        }
    }

    /// Parse from a display name. Case-insensitive.
    pub fn from_name(s: &str) -> Option<Self> {
        match normalize(s).as_str() {
            "rectangle" => Some(Shape::Rectangle),
            "triangle" => Some(Shape::Triangle),
            "simple" => Some(Shape::Simple),
            "complex" => Some(Shape::Complex),
            _ => None,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown shape: {s}"))
    }
}

/// Lowercase and collapse dashes/whitespace runs to single spaces.
fn normalize(s: &str) -> String {
    s.to_lowercase()
        .replace('-', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inputs describing one piece of glass to be costed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassSpecification {
    /// Width in millimeters.
    pub width: f64,
    /// Height in millimeters.
    pub height: f64,
    pub thickness: Thickness,
    pub glass_type: GlassType,
    pub edgework: Edgework,
    pub shape: Shape,
    /// Decorative ceramic banding on the edge.
    #[serde(default)]
    pub ceramic_band: bool,
    /// Whether the piece is drilled.
    #[serde(default)]
    pub holes: bool,
    /// Number of holes to drill. Meaningful only when `holes` is set.
    #[serde(default)]
    pub num_holes: u32,
    /// Template scanning of the piece.
    #[serde(default)]
    pub scanning: bool,
    /// UI hint: radius corners force a curved polish edgework style.
    /// Not consumed by the calculator.
    #[serde(default)]
    pub radius_corners: bool,
}

impl Default for GlassSpecification {
    fn default() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            thickness: Thickness::T4,
            glass_type: GlassType::Clear,
            edgework: Edgework::FlatGrindStraight,
            shape: Shape::Rectangle,
            ceramic_band: false,
            holes: false,
            num_holes: 0,
            scanning: false,
            radius_corners: false,
        }
    }
}

impl GlassSpecification {
    /// Glass area in square meters.
    pub fn area_m2(&self) -> f64 {
        crate::pricing::area(self.width, self.height, self.shape)
    }

    /// Billable edge length in meters.
    pub fn perimeter_m(&self) -> f64 {
        crate::pricing::perimeter(self.width, self.height, self.shape)
    }
}
