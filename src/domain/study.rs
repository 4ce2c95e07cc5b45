//! Study modules and their lessons

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subject area of a study module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Anatomy,
    Physiology,
    Pathology,
    Pharmacology,
    Clinical,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[
            Self::Anatomy,
            Self::Physiology,
            Self::Pathology,
            Self::Pharmacology,
            Self::Clinical,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Anatomy => "Anatomy",
            Self::Physiology => "Physiology",
            Self::Pathology => "Pathology",
            Self::Pharmacology => "Pharmacology",
            Self::Clinical => "Clinical",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::all().iter().map(Category::as_str).collect();
                format!("unknown category '{}', expected one of: {}", s.trim(), names.join(", "))
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty rating from 1 (introductory) to 5 (expert)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Clamp any value into the 1-5 range
    pub const fn clamped(value: u8) -> Self {
        if value < Self::MIN {
            Self(Self::MIN)
        } else if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Filled/empty pips, e.g. `●●●○○` for 3
    pub fn pips(self) -> String {
        (Self::MIN..=Self::MAX)
            .map(|i| if i <= self.0 { '●' } else { '○' })
            .collect()
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "difficulty must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )
        })
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
}

/// A themed collection of lessons shown in the study lab
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyModule {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub difficulty: Difficulty,
    /// Completion percentage, 0-100
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
}

impl StudyModule {
    pub fn completed_lessons(&self) -> usize {
        self.lessons.iter().filter(|l| l.completed).count()
    }

    /// Progress as a 0.0-1.0 fraction for progress bars
    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.progress.min(100)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_bounds() {
        assert!(Difficulty::new(0).is_none());
        assert_eq!(Difficulty::new(1).map(Difficulty::get), Some(1));
        assert_eq!(Difficulty::new(5).map(Difficulty::get), Some(5));
        assert!(Difficulty::new(6).is_none());
    }

    #[test]
    fn test_difficulty_clamped() {
        assert_eq!(Difficulty::clamped(0).get(), 1);
        assert_eq!(Difficulty::clamped(9).get(), 5);
    }

    #[test]
    fn test_difficulty_pips() {
        let d = Difficulty::clamped(3);
        assert_eq!(d.pips(), "●●●○○");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("anatomy".parse::<Category>(), Ok(Category::Anatomy));
        assert_eq!(" Clinical ".parse::<Category>(), Ok(Category::Clinical));
        for &category in Category::all() {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }

        let err = "surgery".parse::<Category>().unwrap_err();
        assert!(err.contains("unknown category 'surgery'"));
        assert!(err.contains("Pharmacology"));
    }

    #[test]
    fn test_difficulty_rejects_out_of_range_yaml() {
        let err = serde_yaml::from_str::<Difficulty>("7").unwrap_err();
        assert!(err.to_string().contains("between 1 and 5"));
    }
}
