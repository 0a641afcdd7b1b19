//! The shapes the demo program dispatches over.
use std::f64::consts::PI;
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;
use thintag::{variant_set, TaggedRef, Variant, Visit};

pub trait Area {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RightTriangle {
    pub base: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Area for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

impl Area for RightTriangle {
    fn area(&self) -> f64 {
        self.base * self.height / 2.
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle with radius {}", self.radius)
    }
}

impl Display for RightTriangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Right triangle with base {} and height {}", self.base, self.height)
    }
}

impl Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle with width {} and height {}", self.width, self.height)
    }
}

variant_set! {
    pub ShapeKind = [Circle, RightTriangle, Rectangle];
}

struct AreaOf;

impl<'a, T: Area> Visit<'a, T> for AreaOf {
    type Output = f64;

    fn visit(self, shape: &'a T) -> f64 {
        shape.area()
    }
}

struct Describe;

impl<'a, T: Display> Visit<'a, T> for Describe {
    type Output = String;

    fn visit(self, shape: &'a T) -> String {
        shape.to_string()
    }
}

/// A shape that is one word wide. It derefs to its tagged reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shape<'a>(TaggedRef<'a, ShapeKind>);

impl<'a> Shape<'a> {
    pub fn area(&self) -> f64 {
        self.0.call(AreaOf)
    }

    pub fn describe(&self) -> String {
        self.0.call(Describe)
    }
}

impl<'a, T: Variant<ShapeKind>> From<&'a T> for Shape<'a> {
    fn from(shape: &'a T) -> Self {
        Shape(TaggedRef::new(shape))
    }
}

impl<'a> Deref for Shape<'a> {
    type Target = TaggedRef<'a, ShapeKind>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Names accepted on the command line and at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeName {
    Circle,
    RightTriangle,
    Rectangle,
}

#[derive(Error, Diagnostic, Debug)]
pub enum ShapeError {
    #[error("did not enter a valid shape: '{0}'")]
    #[diagnostic(
        code(thintag::unknown_shape),
        help("expected one of Circle, RightTriangle or Rectangle")
    )]
    Unknown(String),
}

impl FromStr for ShapeName {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Circle" => Ok(ShapeName::Circle),
            "RightTriangle" => Ok(ShapeName::RightTriangle),
            "Rectangle" => Ok(ShapeName::Rectangle),
            other => Err(ShapeError::Unknown(other.to_string())),
        }
    }
}
