use crate::{error::Error, row::PrimaryKey, value::NativeValue};
use derive_more::Display;
use std::str::FromStr;

///
/// Boundary
///
/// One end of a range scan: a sentinel, or concrete values for some key
/// columns (by column or logical name) with the rest filled by `fill`.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Boundary {
    Min,
    Max,
    Keys {
        values: Vec<(String, NativeValue)>,
        fill: Extreme,
    },
}

impl Boundary {
    /// Concrete bound whose unspecified columns take the `fill` marker.
    #[must_use]
    pub const fn keys(fill: Extreme) -> Self {
        Self::Keys {
            values: Vec::new(),
            fill,
        }
    }

    /// Add one concrete key value. Turns a sentinel into a concrete bound
    /// filled with that sentinel.
    #[must_use]
    pub fn with(self, name: impl Into<String>, value: impl Into<NativeValue>) -> Self {
        let (mut values, fill) = match self {
            Self::Min => (Vec::new(), Extreme::Min),
            Self::Max => (Vec::new(), Extreme::Max),
            Self::Keys { values, fill } => (values, fill),
        };
        values.push((name.into(), value.into()));

        Self::Keys { values, fill }
    }

    /// The sentinel this boundary resolves to for unspecified columns.
    #[must_use]
    pub const fn polarity(&self) -> Extreme {
        match self {
            Self::Min => Extreme::Min,
            Self::Max => Extreme::Max,
            Self::Keys { fill, .. } => *fill,
        }
    }
}

impl From<Extreme> for Boundary {
    fn from(extreme: Extreme) -> Self {
        match extreme {
            Extreme::Min => Self::Min,
            Extreme::Max => Self::Max,
        }
    }
}

impl FromStr for Boundary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(Error::invalid_boundary(s, "expected 'min' or 'max'")),
        }
    }
}

///
/// Extreme
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Extreme {
    #[display("min")]
    Min,

    #[display("max")]
    Max,
}

///
/// Direction
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Direction {
    #[display("forward")]
    Forward,

    #[display("backward")]
    Backward,
}

impl Direction {
    /// Forward when the scan starts from the least key.
    #[must_use]
    pub const fn from_start(start: Extreme) -> Self {
        match start {
            Extreme::Min => Self::Forward,
            Extreme::Max => Self::Backward,
        }
    }
}

///
/// RangeBounds
///

#[derive(Clone, Debug, PartialEq)]
pub struct RangeBounds {
    pub start: PrimaryKey,
    pub end: PrimaryKey,
    pub direction: Direction,
}
