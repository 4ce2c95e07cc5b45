//! Content catalog: study modules and quizzes
//!
//! Content is read-only once loaded. The built-in catalog ships with the
//! binary; a YAML or TOML file can replace it:
//!
//! ```yaml
//! modules:
//!   - id: anat-01
//!     title: Cardiovascular Anatomy
//!     category: Anatomy
//!     difficulty: 3
//!     progress: 45
//!     lessons:
//!       - { id: l1, title: Heart Chambers, content: "...", completed: true }
//! quizzes:
//!   - id: q-cardio-01
//!     title: Heart Anatomy Challenge
//!     xp_reward: 500
//!     stone_reward: 50
//!     questions:
//!       - id: q1
//!         text: Which valve separates the left atrium from the left ventricle?
//!         options: [Tricuspid, Mitral, Pulmonary, Aortic]
//!         correct_answer: 1
//!         explanation: The mitral valve...
//! ```

mod builtin;
mod error;
mod validate;

pub use error::ContentError;
pub use validate::validate_quiz;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{Category, Quiz, StudyModule};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Read-only provider of study content
pub trait ContentSource {
    fn study_modules(&self) -> &[StudyModule];

    fn quizzes(&self) -> &[Quiz];

    /// Look up a quiz by id, suggesting a close match on a miss
    fn quiz(&self, id: &str) -> Result<&Quiz, ContentError> {
        self.quizzes()
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| ContentError::QuizNotFound {
                id: id.to_string(),
                suggestion: closest_id(id, self.quizzes().iter().map(|q| q.id.as_str())),
            })
    }

    /// Study modules of one category, in catalog order
    fn study_modules_in(&self, category: Category) -> Vec<&StudyModule> {
        self.study_modules()
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Look up a study module by id, suggesting a close match on a miss
    fn study_module(&self, id: &str) -> Result<&StudyModule, ContentError> {
        self.study_modules()
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| ContentError::ModuleNotFound {
                id: id.to_string(),
                suggestion: closest_id(id, self.study_modules().iter().map(|m| m.id.as_str())),
            })
    }
}

/// Study modules and quizzes, validated on load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub modules: Vec<StudyModule>,
    #[serde(default)]
    pub quizzes: Vec<Quiz>,
}

impl ContentSource for Catalog {
    fn study_modules(&self) -> &[StudyModule] {
        &self.modules
    }

    fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }
}

impl Catalog {
    /// The content shipped with the app
    pub fn builtin() -> Self {
        builtin::BUILTIN.clone()
    }

    /// Load a catalog from a `.yaml`, `.yml` or `.toml` file
    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = match extension.as_str() {
            "yaml" | "yml" => serde_yaml::from_str(&content)?,
            "toml" => toml::from_str(&content)?,
            _ => return Err(ContentError::UnsupportedFormat(path.display().to_string())),
        };

        catalog.validate()?;
        info!(
            path = %path.display(),
            modules = catalog.modules.len(),
            quizzes = catalog.quizzes.len(),
            "Loaded content catalog"
        );
        Ok(catalog)
    }

    /// Load from `path` if given, otherwise use the built-in content
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                debug!("Using built-in content catalog");
                Ok(Self::builtin())
            }
        }
    }

    /// Check ids are unique and every quiz is playable
    pub fn validate(&self) -> Result<(), ContentError> {
        validate::ensure_unique("module", self.modules.iter().map(|m| m.id.as_str()))?;
        validate::ensure_unique("quiz", self.quizzes.iter().map(|q| q.id.as_str()))?;

        for module in &self.modules {
            validate::validate_module(module)?;
            validate::ensure_unique(
                "lesson",
                module.lessons.iter().map(|l| l.id.as_str()),
            )?;
        }
        for quiz in &self.quizzes {
            validate_quiz(quiz)?;
        }
        Ok(())
    }
}

fn closest_id<'a>(query: &str, ids: impl Iterator<Item = &'a str>) -> Option<String> {
    use strsim::jaro_winkler;

    let query_lower = query.to_lowercase();
    ids.map(|id| (id, jaro_winkler(&query_lower, &id.to_lowercase())))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id.to_string())
}
