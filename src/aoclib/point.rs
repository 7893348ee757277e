use std::fmt;
use std::hash::Hash;

pub trait DimVal:
    num_traits::Signed
    + num_traits::ToPrimitive
    + std::cmp::Ord
    + std::cmp::Eq
    + Hash
    + Clone
    + Copy
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<
        S: num_traits::Signed
            + num_traits::ToPrimitive
            + std::cmp::Ord
            + std::cmp::Eq
            + Hash
            + Clone
            + Copy
            + std::fmt::Display
            + std::fmt::Debug,
    > DimVal for S
{
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point<I: DimVal = i64> {
    pub x: I,
    pub y: I,
}

impl<I: DimVal> Point<I> {
    pub fn new(x: I, y: I) -> Self {
        Point { x, y }
    }

    pub fn origin() -> Self {
        Point {
            x: I::zero(),
            y: I::zero(),
        }
    }

    /// At most one cell apart on both axes, diagonals included.
    pub fn touches(&self, other: &Point<I>) -> bool {
        let delta = *other - *self;
        delta.x.abs() <= I::one() && delta.y.abs() <= I::one()
    }

    pub fn step_toward(&self, other: &Point<I>) -> Point<I> {
        let delta = *other - *self;
        Point {
            x: delta.x.signum(),
            y: delta.y.signum(),
        }
    }
}

impl<I: DimVal> Default for Point<I> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<I: DimVal> fmt::Display for Point<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<I: DimVal> std::ops::Add for Point<I> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<I: DimVal> std::ops::AddAssign for Point<I> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<I: DimVal> std::ops::Sub for Point<I> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}
