/// Minimum and maximum of a series, e.g. for chart axis scaling.
/// An empty series has both set to `0`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Extent of `values`. NaN values are ignored.
    pub fn from_values(values: &[f64]) -> Self {
        values
            .iter()
            .filter(|v| !v.is_nan())
            .fold(None, |acc: Option<Self>, &v| match acc {
                Some(e) => Some(Self::new(e.min.min(v), e.max.max(v))),
                None => Some(Self::new(v, v)),
            })
            .unwrap_or_default()
    }

    /// `max - min`
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
