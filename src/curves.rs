//! Curve collection
//!
//! An ordered set of blackbody curves, each defined by a temperature and a
//! display color. Insertion order is display order; entries are addressed
//! by position. The collection knows nothing about rendering.

use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    #[error("temperature must be strictly positive, got {0} K")]
    NonPositiveTemperature(f64),
    #[error("index {index} is out of bounds for a set of {len} curve(s)")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("colors are written `r,g,b` with components in 0-255, got `{0}`")]
    ColorFormat(String),
}
type Result<T> = std::result::Result<T, CurveError>;

/// RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}
impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}
impl FromStr for Color {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self> {
        let components: Vec<_> = s.split(',').map(|c| c.trim().parse::<u8>()).collect();
        match components.as_slice() {
            [Ok(r), Ok(g), Ok(b)] => Ok(Self {
                r: *r,
                g: *g,
                b: *b,
            }),
            _ => Err(CurveError::ColorFormat(s.to_string())),
        }
    }
}

/// A single curve entry: a blackbody temperature [K] and its display color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    pub temperature: f64,
    pub color: Color,
}

/// Ordered collection of curves
#[derive(Debug, Default, Clone)]
pub struct CurveSet {
    curves: Vec<Curve>,
}
impl CurveSet {
    /// Appends a curve and returns its position
    ///
    /// Temperatures at or below absolute zero are outside the emission
    /// model's domain and are rejected.
    pub fn add(&mut self, temperature: f64, color: Color) -> Result<usize> {
        if !temperature.is_finite() || temperature <= 0f64 {
            return Err(CurveError::NonPositiveTemperature(temperature));
        }
        self.curves.push(Curve { temperature, color });
        Ok(self.curves.len() - 1)
    }
    /// Removes all curves at the given positions in one atomic batch
    ///
    /// Remaining curves keep their relative order. Any out-of-bounds index
    /// fails the whole batch before anything is removed; duplicate indices
    /// are tolerated.
    pub fn remove(&mut self, indices: &[usize]) -> Result<()> {
        let len = self.curves.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(CurveError::IndexOutOfBounds { index, len });
        }
        let mut kept = vec![true; len];
        for &index in indices {
            kept[index] = false;
        }
        let mut position = 0;
        self.curves.retain(|_| {
            let keep = kept[position];
            position += 1;
            keep
        });
        Ok(())
    }
    /// Empties the collection
    pub fn clear(&mut self) {
        self.curves.clear();
    }
    pub fn len(&self) -> usize {
        self.curves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
    pub fn get(&self, index: usize) -> Result<&Curve> {
        self.curves.get(index).ok_or(CurveError::IndexOutOfBounds {
            index,
            len: self.curves.len(),
        })
    }
    pub fn iter(&self) -> impl Iterator<Item = &Curve> + '_ {
        self.curves.iter()
    }
    /// Prints the curve table
    pub fn summary(&self) {
        println!("CURVES:");
        println!(" - # of curves: {}", self.len());
        if self.is_empty() {
            return;
        }
        println!("    {:^5}  {:^15}  {:^11}", "#", "TEMPERATURE [K]", "COLOR");
        for (k, curve) in self.curves.iter().enumerate() {
            println!(
                "  - {:>5}  {:>15}  {:>11}",
                k,
                curve.temperature,
                curve.color.to_string()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color { r: 255, g: 0, b: 0 };

    #[test]
    fn add_returns_positions() {
        let mut curves = CurveSet::default();
        assert_eq!(curves.add(100f64, RED).unwrap(), 0);
        assert_eq!(curves.add(100f64, RED).unwrap(), 1);
        assert_eq!(curves.len(), 2);
    }

    #[test]
    fn add_rejects_non_positive_temperatures() {
        let mut curves = CurveSet::default();
        assert!(matches!(
            curves.add(0f64, RED),
            Err(CurveError::NonPositiveTemperature(_))
        ));
        assert!(matches!(
            curves.add(-5f64, RED),
            Err(CurveError::NonPositiveTemperature(_))
        ));
        assert!(matches!(
            curves.add(f64::NAN, RED),
            Err(CurveError::NonPositiveTemperature(_))
        ));
        assert!(curves.is_empty());
    }

    #[test]
    fn batch_removal_keeps_order() {
        let mut curves = CurveSet::default();
        for temperature in [100f64, 200f64, 300f64] {
            curves.add(temperature, RED).unwrap();
        }
        curves.remove(&[0, 2]).unwrap();
        assert_eq!(curves.len(), 1);
        assert_eq!(curves.get(0).unwrap().temperature, 200f64);
    }

    #[test]
    fn out_of_bounds_removal_is_atomic() {
        let mut curves = CurveSet::default();
        for temperature in [100f64, 200f64, 300f64] {
            curves.add(temperature, RED).unwrap();
        }
        assert!(matches!(
            curves.remove(&[1, 3]),
            Err(CurveError::IndexOutOfBounds { index: 3, len: 3 })
        ));
        assert_eq!(curves.len(), 3);
    }

    #[test]
    fn clear_empties_the_set() {
        let mut curves = CurveSet::default();
        curves.add(5778f64, RED).unwrap();
        curves.clear();
        assert!(curves.is_empty());
        assert!(matches!(
            curves.get(0),
            Err(CurveError::IndexOutOfBounds { index: 0, len: 0 })
        ));
    }

    #[test]
    fn color_round_trips_through_text() {
        let color: Color = "255, 128,0".parse().unwrap();
        assert_eq!(color, Color::new(255, 128, 0));
        assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
        assert!("255,0".parse::<Color>().is_err());
        assert!("1,2,3,4".parse::<Color>().is_err());
        assert!("256,0,0".parse::<Color>().is_err());
    }
}
