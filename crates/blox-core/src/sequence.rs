//! Keyframe sequences used by gradients.

use crate::errors::ValidationError;
use crate::format::{lua_number, xml_number};
use crate::types::{Color3, PropertyValue};

/// Check keypoint times: at least two, in `0..=1`, ascending, from 0 to 1.
fn validate_times(times: &[f64]) -> Result<(), ValidationError> {
    if times.len() < 2 {
        return Err(ValidationError::TooFewKeypoints { count: times.len() });
    }
    let mut previous: Option<f64> = None;
    for &time in times {
        if !(0.0..=1.0).contains(&time) {
            return Err(ValidationError::KeypointTime { time });
        }
        if let Some(previous) = previous {
            if time <= previous {
                return Err(ValidationError::KeypointOrder { previous, time });
            }
        }
        previous = Some(time);
    }
    let (first, last) = (times[0], times[times.len() - 1]);
    if first != 0.0 || last != 1.0 {
        return Err(ValidationError::SequenceBounds { first, last });
    }
    Ok(())
}

/// A color at a point in a [`ColorSequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSequenceKeypoint {
    pub time: f64,
    pub value: Color3,
}

impl ColorSequenceKeypoint {
    pub const fn new(time: f64, value: Color3) -> Self {
        Self { time, value }
    }
}

/// Color keyframes over `0..=1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSequence {
    keypoints: Vec<ColorSequenceKeypoint>,
}

impl ColorSequence {
    pub fn new(keypoints: Vec<ColorSequenceKeypoint>) -> Result<Self, ValidationError> {
        let times: Vec<f64> = keypoints.iter().map(|k| k.time).collect();
        validate_times(&times)?;
        Ok(Self { keypoints })
    }

    /// A single color across the whole range.
    pub fn solid(color: Color3) -> Self {
        Self {
            keypoints: vec![
                ColorSequenceKeypoint::new(0.0, color),
                ColorSequenceKeypoint::new(1.0, color),
            ],
        }
    }

    /// A two-stop blend.
    pub fn between(start: Color3, end: Color3) -> Self {
        Self {
            keypoints: vec![
                ColorSequenceKeypoint::new(0.0, start),
                ColorSequenceKeypoint::new(1.0, end),
            ],
        }
    }

    pub fn keypoints(&self) -> &[ColorSequenceKeypoint] {
        &self.keypoints
    }
}

impl Default for ColorSequence {
    fn default() -> Self {
        Self::solid(Color3::WHITE)
    }
}

impl PropertyValue for ColorSequence {
    fn to_lua(&self) -> String {
        let points: Vec<String> = self
            .keypoints
            .iter()
            .map(|k| {
                format!(
                    "ColorSequenceKeypoint.new({}, {})",
                    lua_number(k.time),
                    k.value.to_lua()
                )
            })
            .collect();
        format!("ColorSequence.new({{{}}})", points.join(", "))
    }

    fn to_xml(&self, name: &str) -> String {
        let mut body = String::new();
        for k in &self.keypoints {
            let (r, g, b) = k.value.to_unit();
            body.push_str(&format!(
                "{} {} {} {} 0 ",
                xml_number(k.time),
                xml_number(r),
                xml_number(g),
                xml_number(b)
            ));
        }
        format!("<ColorSequence name=\"{}\">{}</ColorSequence>", name, body)
    }
}

/// A number at a point in a [`NumberSequence`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberSequenceKeypoint {
    pub time: f64,
    pub value: f64,
    pub envelope: f64,
}

impl NumberSequenceKeypoint {
    pub const fn new(time: f64, value: f64) -> Self {
        Self { time, value, envelope: 0.0 }
    }

    /// Unchecked; [`NumberSequence::new`] rejects a negative or NaN envelope.
    pub const fn with_envelope(time: f64, value: f64, envelope: f64) -> Self {
        Self { time, value, envelope }
    }
}

/// Numeric keyframes over `0..=1`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberSequence {
    keypoints: Vec<NumberSequenceKeypoint>,
}

impl NumberSequence {
    pub fn new(keypoints: Vec<NumberSequenceKeypoint>) -> Result<Self, ValidationError> {
        let times: Vec<f64> = keypoints.iter().map(|k| k.time).collect();
        validate_times(&times)?;
        for k in &keypoints {
            if !k.value.is_finite() {
                return Err(ValidationError::NotFinite { field: "value", value: k.value });
            }
            if k.envelope.is_nan() || k.envelope < 0.0 {
                return Err(ValidationError::NegativeEnvelope { envelope: k.envelope });
            }
        }
        Ok(Self { keypoints })
    }

    /// The same value across the whole range.
    pub fn constant(value: f64) -> Result<Self, ValidationError> {
        Self::new(vec![
            NumberSequenceKeypoint::new(0.0, value),
            NumberSequenceKeypoint::new(1.0, value),
        ])
    }

    pub fn keypoints(&self) -> &[NumberSequenceKeypoint] {
        &self.keypoints
    }
}

impl Default for NumberSequence {
    fn default() -> Self {
        Self {
            keypoints: vec![
                NumberSequenceKeypoint::new(0.0, 0.0),
                NumberSequenceKeypoint::new(1.0, 0.0),
            ],
        }
    }
}

impl PropertyValue for NumberSequence {
    fn to_lua(&self) -> String {
        let points: Vec<String> = self
            .keypoints
            .iter()
            .map(|k| {
                if k.envelope == 0.0 {
                    format!(
                        "NumberSequenceKeypoint.new({}, {})",
                        lua_number(k.time),
                        lua_number(k.value)
                    )
                } else {
                    format!(
                        "NumberSequenceKeypoint.new({}, {}, {})",
                        lua_number(k.time),
                        lua_number(k.value),
                        lua_number(k.envelope)
                    )
                }
            })
            .collect();
        format!("NumberSequence.new({{{}}})", points.join(", "))
    }

    fn to_xml(&self, name: &str) -> String {
        let mut body = String::new();
        for k in &self.keypoints {
            body.push_str(&format!(
                "{} {} {} ",
                xml_number(k.time),
                xml_number(k.value),
                xml_number(k.envelope)
            ));
        }
        format!("<NumberSequence name=\"{}\">{}</NumberSequence>", name, body)
    }
}
