//! Loading and validating content catalogs from files

mod common;

use common::{write_temp_file, SAMPLE_YAML};
use drstone::content::{Catalog, ContentError, ContentSource};
use drstone::Category;

#[test]
fn test_load_yaml_catalog() {
    let (_dir, path) = write_temp_file("content.yaml", SAMPLE_YAML);
    let catalog = Catalog::from_file(&path).unwrap();

    let module = catalog.study_module("pharm-01").unwrap();
    assert_eq!(module.category, Category::Pharmacology);
    assert_eq!(module.difficulty.get(), 4);
    assert_eq!(module.completed_lessons(), 1);

    let quiz = catalog.quiz("q-pharm-01").unwrap();
    assert_eq!(quiz.question_count(), 3);
    assert_eq!(quiz.questions[2].correct_option(), Some("Protamine"));
}

#[test]
fn test_load_toml_catalog() {
    let toml = r#"
[[quizzes]]
id = "q-renal-01"
title = "Nephron Warm-up"
xp_reward = 100
stone_reward = 10

[[quizzes.questions]]
id = "q1"
text = "Where is most sodium reabsorbed?"
options = ["Proximal tubule", "Collecting duct"]
correct_answer = 0
explanation = "About two thirds is reabsorbed proximally."
"#;
    let (_dir, path) = write_temp_file("content.toml", toml);
    let catalog = Catalog::from_file(&path).unwrap();

    assert!(catalog.modules.is_empty());
    assert_eq!(catalog.quizzes.len(), 1);
    assert_eq!(catalog.quizzes[0].description, "");
}

#[test]
fn test_load_without_path_uses_builtin() {
    let catalog = Catalog::load(None).unwrap();
    assert_eq!(catalog, Catalog::builtin());
}

#[test]
fn test_unsupported_extension() {
    let (_dir, path) = write_temp_file("content.json", "{}");
    assert!(matches!(
        Catalog::from_file(&path),
        Err(ContentError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    let (dir, _) = write_temp_file("other.yaml", "");
    let path = dir.path().join("missing.yaml");
    assert!(matches!(
        Catalog::from_file(&path),
        Err(ContentError::IoError(_))
    ));
}

#[test]
fn test_difficulty_out_of_range() {
    let yaml = SAMPLE_YAML.replace("difficulty: 4", "difficulty: 6");
    let (_dir, path) = write_temp_file("content.yaml", &yaml);
    let err = Catalog::from_file(&path).unwrap_err();
    assert!(matches!(err, ContentError::YamlError(_)));
    assert!(err.to_string().contains("between 1 and 5"));
}

#[test]
fn test_progress_above_hundred() {
    let yaml = SAMPLE_YAML.replace("progress: 10", "progress: 140");
    let (_dir, path) = write_temp_file("content.yaml", &yaml);
    assert!(matches!(
        Catalog::from_file(&path),
        Err(ContentError::InvalidProgress { progress: 140, .. })
    ));
}

#[test]
fn test_answer_out_of_range() {
    let yaml = SAMPLE_YAML.replace("correct_answer: 1", "correct_answer: 7");
    let (_dir, path) = write_temp_file("content.yaml", &yaml);
    let err = Catalog::from_file(&path).unwrap_err();
    assert!(matches!(err, ContentError::AnswerOutOfRange { index: 7, .. }));
}

#[test]
fn test_single_option_question() {
    let yaml = SAMPLE_YAML.replace("options: [INR, aPTT]", "options: [INR]");
    let (_dir, path) = write_temp_file("content.yaml", &yaml);
    assert!(matches!(
        Catalog::from_file(&path),
        Err(ContentError::TooFewOptions { .. })
    ));
}

#[test]
fn test_zero_reward() {
    let yaml = SAMPLE_YAML.replace("stone_reward: 30", "stone_reward: 0");
    let (_dir, path) = write_temp_file("content.yaml", &yaml);
    assert!(matches!(
        Catalog::from_file(&path),
        Err(ContentError::ZeroReward(_))
    ));
}

#[test]
fn test_duplicate_lesson_ids() {
    let yaml = SAMPLE_YAML.replace("id: l2", "id: l1");
    let (_dir, path) = write_temp_file("content.yaml", &yaml);
    assert!(matches!(
        Catalog::from_file(&path),
        Err(ContentError::DuplicateId { kind: "lesson", .. })
    ));
}

#[test]
fn test_duplicate_quiz_ids() {
    let mut catalog = Catalog::builtin();
    let copy = catalog.quizzes[0].clone();
    catalog.quizzes.push(copy);
    assert!(matches!(
        catalog.validate(),
        Err(ContentError::DuplicateId { kind: "quiz", .. })
    ));
}

#[test]
fn test_module_lookup_suggestion() {
    let catalog = Catalog::builtin();
    let err = catalog.study_module("anat-1").unwrap_err();
    assert!(err.to_string().contains("did you mean 'anat-01'"));
}
