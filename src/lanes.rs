use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const LANES_PER_SIDE: usize = 4;

/// The four pavement distress measurements recorded per lane.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Roughness,
    RutDepth,
    CrackArea,
    Ravelling,
}

impl Metric {
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Roughness => "mm/km",
            Self::RutDepth => "mm",
            Self::CrackArea | Self::Ravelling => "% area",
        }
    }
}

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Column prefix used by the survey sheets (`L1`, `R3`, ...).
    pub fn prefix(&self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

/// Scope of an aggregate: the whole carriageway or one half of it.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Overall,
    Left,
    Right,
}

impl Span {
    pub fn covers(&self, side: Side) -> bool {
        match self {
            Self::Overall => true,
            Self::Left => side == Side::Left,
            Self::Right => side == Side::Right,
        }
    }
}

/// One value per metric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ByMetric<T> {
    pub roughness: T,
    pub rut_depth: T,
    pub crack_area: T,
    pub ravelling: T,
}

impl<T> ByMetric<T> {
    pub fn from_fn(mut f: impl FnMut(Metric) -> T) -> Self {
        Self {
            roughness: f(Metric::Roughness),
            rut_depth: f(Metric::RutDepth),
            crack_area: f(Metric::CrackArea),
            ravelling: f(Metric::Ravelling),
        }
    }

    pub fn get(&self, metric: Metric) -> &T {
        match metric {
            Metric::Roughness => &self.roughness,
            Metric::RutDepth => &self.rut_depth,
            Metric::CrackArea => &self.crack_area,
            Metric::Ravelling => &self.ravelling,
        }
    }

    pub fn get_mut(&mut self, metric: Metric) -> &mut T {
        match metric {
            Metric::Roughness => &mut self.roughness,
            Metric::RutDepth => &mut self.rut_depth,
            Metric::CrackArea => &mut self.crack_area,
            Metric::Ravelling => &mut self.ravelling,
        }
    }
}

/// One value per aggregation span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BySpan<T> {
    pub overall: T,
    pub left: T,
    pub right: T,
}

impl<T> BySpan<T> {
    pub fn from_fn(mut f: impl FnMut(Span) -> T) -> Self {
        Self {
            overall: f(Span::Overall),
            left: f(Span::Left),
            right: f(Span::Right),
        }
    }

    pub fn get(&self, span: Span) -> &T {
        match span {
            Span::Overall => &self.overall,
            Span::Left => &self.left,
            Span::Right => &self.right,
        }
    }
}

/// Per-lane readings of a single metric, lane 1 first on each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SideReadings {
    pub left: [Option<f64>; LANES_PER_SIDE],
    pub right: [Option<f64>; LANES_PER_SIDE],
}

impl SideReadings {
    pub fn side(&self, side: Side) -> &[Option<f64>; LANES_PER_SIDE] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut [Option<f64>; LANES_PER_SIDE] {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Readings in survey column order: L1..L4 then R1..R4.
    pub fn iter(&self) -> impl Iterator<Item = (Side, usize, Option<f64>)> + '_ {
        let left = self.left.iter().enumerate().map(|(i, v)| (Side::Left, i + 1, *v));
        let right = self.right.iter().enumerate().map(|(i, v)| (Side::Right, i + 1, *v));
        left.chain(right)
    }
}
