//! Value types carried by instance properties.
//!
//! Every type renders itself twice: as the Luau constructor expression a
//! script assigns, and as the rbxmx tag a model file stores under a given
//! property name.

use crate::errors::ValidationError;
use crate::format::{escape_xml, lua_number, lua_string, xml_number};
use crate::enums::{FontStyle, FontWeight};
use glam::{DMat3, DVec2, DVec3};

/// A value that can be written as an instance property.
pub trait PropertyValue {
    /// Luau expression for this value.
    fn to_lua(&self) -> String;

    /// rbxmx property tag for this value, named `name`.
    fn to_xml(&self, name: &str) -> String;
}

impl PropertyValue for bool {
    fn to_lua(&self) -> String {
        self.to_string()
    }

    fn to_xml(&self, name: &str) -> String {
        format!("<bool name=\"{}\">{}</bool>", name, self)
    }
}

impl PropertyValue for f64 {
    fn to_lua(&self) -> String {
        lua_number(*self)
    }

    fn to_xml(&self, name: &str) -> String {
        format!("<float name=\"{}\">{}</float>", name, xml_number(*self))
    }
}

impl PropertyValue for i32 {
    fn to_lua(&self) -> String {
        self.to_string()
    }

    fn to_xml(&self, name: &str) -> String {
        format!("<int name=\"{}\">{}</int>", name, self)
    }
}

impl PropertyValue for i64 {
    fn to_lua(&self) -> String {
        self.to_string()
    }

    fn to_xml(&self, name: &str) -> String {
        format!("<int64 name=\"{}\">{}</int64>", name, self)
    }
}

impl PropertyValue for str {
    fn to_lua(&self) -> String {
        lua_string(self)
    }

    fn to_xml(&self, name: &str) -> String {
        format!("<string name=\"{}\">{}</string>", name, escape_xml(self))
    }
}

impl PropertyValue for String {
    fn to_lua(&self) -> String {
        self.as_str().to_lua()
    }

    fn to_xml(&self, name: &str) -> String {
        self.as_str().to_xml(name)
    }
}

fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::NotFinite { field, value })
    }
}

/// A 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2(pub DVec2);

impl Vector2 {
    pub const ZERO: Self = Self(DVec2::ZERO);
    pub const ONE: Self = Self(DVec2::ONE);

    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    pub fn x(&self) -> f64 {
        self.0.x
    }

    pub fn y(&self) -> f64 {
        self.0.y
    }

    fn xml_fields(&self) -> String {
        format!("<X>{}</X><Y>{}</Y>", xml_number(self.0.x), xml_number(self.0.y))
    }
}

impl PropertyValue for Vector2 {
    fn to_lua(&self) -> String {
        format!("Vector2.new({}, {})", lua_number(self.0.x), lua_number(self.0.y))
    }

    fn to_xml(&self, name: &str) -> String {
        format!("<Vector2 name=\"{}\">{}</Vector2>", name, self.xml_fields())
    }
}

/// A 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3(pub DVec3);

impl Vector3 {
    pub const ZERO: Self = Self(DVec3::ZERO);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }
}

impl PropertyValue for Vector3 {
    fn to_lua(&self) -> String {
        format!(
            "Vector3.new({}, {}, {})",
            lua_number(self.0.x),
            lua_number(self.0.y),
            lua_number(self.0.z)
        )
    }

    fn to_xml(&self, name: &str) -> String {
        format!(
            "<Vector3 name=\"{}\"><X>{}</X><Y>{}</Y><Z>{}</Z></Vector3>",
            name,
            xml_number(self.0.x),
            xml_number(self.0.y),
            xml_number(self.0.z)
        )
    }
}

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color3 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color3 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from channel values in `0..=255`, rounding to the nearest step.
    pub fn from_rgb(r: f64, g: f64, b: f64) -> Result<Self, ValidationError> {
        fn channel(channel: char, value: f64) -> Result<u8, ValidationError> {
            if !(0.0..=255.0).contains(&value) {
                return Err(ValidationError::ColorChannel { channel, value });
            }
            Ok(value.round() as u8)
        }
        Ok(Self {
            r: channel('r', r)?,
            g: channel('g', g)?,
            b: channel('b', b)?,
        })
    }

    /// Create from unit-range components, as design tools store them.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Result<Self, ValidationError> {
        for (channel, value) in [('r', r), ('g', g), ('b', b)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::UnitColorChannel { channel, value });
            }
        }
        Self::from_rgb(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Channels as unit-range floats.
    pub fn to_unit(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

impl Default for Color3 {
    fn default() -> Self {
        Self::WHITE
    }
}

impl PropertyValue for Color3 {
    fn to_lua(&self) -> String {
        format!("Color3.fromRGB({}, {}, {})", self.r, self.g, self.b)
    }

    fn to_xml(&self, name: &str) -> String {
        let (r, g, b) = self.to_unit();
        format!(
            "<Color3 name=\"{}\"><R>{}</R><G>{}</G><B>{}</B></Color3>",
            name,
            xml_number(r),
            xml_number(g),
            xml_number(b)
        )
    }
}

/// A one-dimensional scale/offset pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UDim {
    pub scale: f64,
    pub offset: i32,
}

impl UDim {
    pub const fn new(scale: f64, offset: i32) -> Self {
        Self { scale, offset }
    }

    pub const fn from_offset(offset: i32) -> Self {
        Self { scale: 0.0, offset }
    }

    pub const fn from_scale(scale: f64) -> Self {
        Self { scale, offset: 0 }
    }
}

impl PropertyValue for UDim {
    fn to_lua(&self) -> String {
        format!("UDim.new({}, {})", lua_number(self.scale), self.offset)
    }

    fn to_xml(&self, name: &str) -> String {
        format!(
            "<UDim name=\"{}\"><S>{}</S><O>{}</O></UDim>",
            name,
            xml_number(self.scale),
            self.offset
        )
    }
}

/// A two-dimensional scale/offset pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UDim2 {
    pub x: UDim,
    pub y: UDim,
}

impl UDim2 {
    pub const fn new(x_scale: f64, x_offset: i32, y_scale: f64, y_offset: i32) -> Self {
        Self {
            x: UDim::new(x_scale, x_offset),
            y: UDim::new(y_scale, y_offset),
        }
    }

    pub const fn from_offset(x: i32, y: i32) -> Self {
        Self::new(0.0, x, 0.0, y)
    }

    pub const fn from_scale(x: f64, y: f64) -> Self {
        Self::new(x, 0, y, 0)
    }
}

impl PropertyValue for UDim2 {
    fn to_lua(&self) -> String {
        format!(
            "UDim2.new({}, {}, {}, {})",
            lua_number(self.x.scale),
            self.x.offset,
            lua_number(self.y.scale),
            self.y.offset
        )
    }

    fn to_xml(&self, name: &str) -> String {
        format!(
            "<UDim2 name=\"{}\"><XS>{}</XS><XO>{}</XO><YS>{}</YS><YO>{}</YO></UDim2>",
            name,
            xml_number(self.x.scale),
            self.x.offset,
            xml_number(self.y.scale),
            self.y.offset
        )
    }
}

/// An axis-aligned rectangle given by two corners. Corner order is not
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub min: Vector2,
    pub max: Vector2,
}

impl Rect {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Vector2::new(min_x, min_y),
            max: Vector2::new(max_x, max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }
}

impl PropertyValue for Rect {
    fn to_lua(&self) -> String {
        format!(
            "Rect.new({}, {}, {}, {})",
            lua_number(self.min.x()),
            lua_number(self.min.y()),
            lua_number(self.max.x()),
            lua_number(self.max.y())
        )
    }

    fn to_xml(&self, name: &str) -> String {
        format!(
            "<Rect2D name=\"{}\"><min>{}</min><max>{}</max></Rect2D>",
            name,
            self.min.xml_fields(),
            self.max.xml_fields()
        )
    }
}

/// An asset URL, or no asset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content(Option<String>);

impl Content {
    pub const fn none() -> Self {
        Self(None)
    }

    pub fn url(url: impl Into<String>) -> Self {
        let url = url.into();
        if url.is_empty() {
            Self(None)
        } else {
            Self(Some(url))
        }
    }

    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or("")
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl PropertyValue for Content {
    fn to_lua(&self) -> String {
        lua_string(self.as_str())
    }

    fn to_xml(&self, name: &str) -> String {
        match &self.0 {
            Some(url) => format!(
                "<Content name=\"{}\"><url>{}</url></Content>",
                name,
                escape_xml(url)
            ),
            None => format!("<Content name=\"{}\"><null></null></Content>", name),
        }
    }
}

/// A typeface: family asset plus weight and style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    pub family: String,
    pub weight: FontWeight,
    pub style: FontStyle,
}

impl Font {
    /// Family asset of the default UI typeface.
    pub const SOURCE_SANS_PRO: &'static str = "rbxasset://fonts/families/SourceSansPro.json";

    pub fn new(family: impl Into<String>, weight: FontWeight, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            weight,
            style,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(Self::SOURCE_SANS_PRO, FontWeight::Regular, FontStyle::Normal)
    }
}

impl PropertyValue for Font {
    fn to_lua(&self) -> String {
        format!(
            "Font.new({}, {}, {})",
            lua_string(&self.family),
            self.weight.to_lua(),
            self.style.to_lua()
        )
    }

    fn to_xml(&self, name: &str) -> String {
        format!(
            "<Font name=\"{}\"><Family><url>{}</url></Family><Weight>{}</Weight><Style>{}</Style></Font>",
            name,
            escape_xml(&self.family),
            self.weight.value(),
            self.style.name()
        )
    }
}

/// A position and rotation in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CFrame {
    pub position: DVec3,
    pub rotation: DMat3,
}

impl CFrame {
    pub const IDENTITY: Self = Self {
        position: DVec3::ZERO,
        rotation: DMat3::IDENTITY,
    };

    pub fn from_position(position: Vector3) -> Self {
        Self {
            position: position.0,
            rotation: DMat3::IDENTITY,
        }
    }

    /// A frame at `eye` whose look vector (-Z) points at `target`.
    pub fn look_at(eye: Vector3, target: Vector3) -> Result<Self, ValidationError> {
        for (field, v) in [("eye", eye.0), ("target", target.0)] {
            for c in v.to_array() {
                ensure_finite(field, c)?;
            }
        }
        let look = (target.0 - eye.0).normalize_or_zero();
        if look == DVec3::ZERO {
            return Ok(Self::from_position(eye));
        }
        let mut right = look.cross(DVec3::Y);
        if right.length_squared() < 1e-12 {
            // Looking straight up or down
            right = DVec3::X;
        }
        let right = right.normalize();
        let up = right.cross(look);
        Ok(Self {
            position: eye.0,
            rotation: DMat3::from_cols(right, up, -look),
        })
    }

    /// Rotation matrix entries in row-major order.
    #[rustfmt::skip]
    fn rotation_rows(&self) -> [f64; 9] {
        let m = &self.rotation;
        [
            m.x_axis.x, m.y_axis.x, m.z_axis.x,
            m.x_axis.y, m.y_axis.y, m.z_axis.y,
            m.x_axis.z, m.y_axis.z, m.z_axis.z,
        ]
    }
}

impl Default for CFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PropertyValue for CFrame {
    fn to_lua(&self) -> String {
        let p = self.position;
        if self.rotation == DMat3::IDENTITY {
            return format!(
                "CFrame.new({}, {}, {})",
                lua_number(p.x),
                lua_number(p.y),
                lua_number(p.z)
            );
        }
        let rows: Vec<String> = self.rotation_rows().iter().map(|v| lua_number(*v)).collect();
        format!(
            "CFrame.new({}, {}, {}, {})",
            lua_number(p.x),
            lua_number(p.y),
            lua_number(p.z),
            rows.join(", ")
        )
    }

    fn to_xml(&self, name: &str) -> String {
        const LABELS: [&str; 9] = ["R00", "R01", "R02", "R10", "R11", "R12", "R20", "R21", "R22"];
        let p = self.position;
        let mut out = format!(
            "<CoordinateFrame name=\"{}\"><X>{}</X><Y>{}</Y><Z>{}</Z>",
            name,
            xml_number(p.x),
            xml_number(p.y),
            xml_number(p.z)
        );
        for (label, value) in LABELS.iter().zip(self.rotation_rows()) {
            out.push_str(&format!("<{0}>{1}</{0}>", label, xml_number(value)));
        }
        out.push_str("</CoordinateFrame>");
        out
    }
}
