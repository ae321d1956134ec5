use crate::domain::{CardId, ColumnId};
use chrono::{DateTime, Utc};
use std::ops::{Add, Sub};

/// A position in client (viewport) coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Bounding box of a rendered card, in client coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// The deepest board element under the pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// A card or any of its content other than the delete control
    Card(CardId),
    /// The delete control of a card
    DeleteControl(CardId),
    /// The insertion marker
    Marker,
    /// A column's card list container itself, not one of its children
    ColumnList(ColumnId),
    /// Anything outside every column's card list
    Outside,
}

/// A pointer event translated by the host
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub target: HitTarget,
    pub client: Point,
    pub at: DateTime<Utc>,
}

impl PointerEvent {
    /// An event happening now
    pub fn new(target: HitTarget, client: Point) -> Self {
        Self {
            target,
            client,
            at: Utc::now(),
        }
    }

    /// Overrides the event timestamp
    pub fn at(mut self, at: DateTime<Utc>) -> Self {
        self.at = at;
        self
    }
}
