use comfy_table::Color;
use serde::{Deserialize, Serialize};

/// Energy performance certificate letter.
///
/// Declared from the worst to the best, so that the derived ordering
/// reads naturally: `EnergyClass::A > EnergyClass::G`.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    derive_more::Display,
)]
pub enum EnergyClass {
    G,
    F,
    E,
    D,
    C,
    B,
    A,
}

impl EnergyClass {
    pub const SCALE: [Self; 7] = [Self::G, Self::F, Self::E, Self::D, Self::C, Self::B, Self::A];

    /// Minimal class residential buildings have to reach by 2030.
    pub const MIN_2030: Self = Self::E;

    /// Minimal class residential buildings have to reach by 2033.
    pub const MIN_2033: Self = Self::D;

    /// Position on the scale, `0` is G.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::SCALE.get(index).copied()
    }

    /// Move up the scale by the number of letters, stopping at A.
    pub fn improved_by(self, steps: usize) -> Self {
        Self::from_index(self.index().saturating_add(steps)).unwrap_or(Self::A)
    }

    pub const fn color(self) -> Color {
        match self {
            Self::A | Self::B => Color::Green,
            Self::C | Self::D => Color::DarkYellow,
            Self::E => Color::Yellow,
            Self::F | Self::G => Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn test_scale_order() {
        assert!(EnergyClass::SCALE.is_sorted());
        assert_eq!(EnergyClass::G.index(), 0);
        assert_eq!(EnergyClass::A.index(), 6);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(EnergyClass::from_index(2), Some(EnergyClass::E));
        assert_eq!(EnergyClass::from_index(7), None);
    }

    #[test]
    fn test_improved_by() {
        assert_eq!(EnergyClass::G.improved_by(0), EnergyClass::G);
        assert_eq!(EnergyClass::G.improved_by(2), EnergyClass::E);
        assert_eq!(EnergyClass::B.improved_by(3), EnergyClass::A);
        assert_eq!(EnergyClass::A.improved_by(usize::MAX), EnergyClass::A);
    }

    #[test]
    fn test_milestones() {
        assert!(EnergyClass::MIN_2033 > EnergyClass::MIN_2030);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(EnergyClass::from_str("e", true), Ok(EnergyClass::E));
        assert_eq!(EnergyClass::from_str("E", true), Ok(EnergyClass::E));
        assert!(EnergyClass::from_str("H", true).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(EnergyClass::D.to_string(), "D");
    }
}
