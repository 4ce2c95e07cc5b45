//! Shared test utilities for the integration tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use drstone::quiz::QuizSession;
use drstone::{Question, Quiz};
use tempfile::TempDir;

/// The built-in heart anatomy challenge
pub const CARDIO_QUIZ: &str = "q-cardio-01";

/// A small YAML catalog with one module and one three-question quiz
pub const SAMPLE_YAML: &str = r#"
modules:
  - id: pharm-01
    title: Anticoagulants
    category: Pharmacology
    difficulty: 4
    progress: 10
    lessons:
      - id: l1
        title: Vitamin K antagonists
        content: Warfarin and friends.
        completed: true
      - id: l2
        title: Heparins
        content: Unfractionated and low molecular weight heparin.
quizzes:
  - id: q-pharm-01
    title: Anticoagulant Basics
    description: Three quick questions.
    xp_reward: 300
    stone_reward: 30
    questions:
      - id: q1
        text: Which vitamin does warfarin antagonise?
        options: [A, C, K, D]
        correct_answer: 2
        explanation: Warfarin inhibits vitamin K epoxide reductase.
      - id: q2
        text: Which lab value monitors warfarin?
        options: [INR, aPTT]
        correct_answer: 0
        explanation: The INR standardises the prothrombin time.
      - id: q3
        text: Which drug reverses heparin?
        options: [Vitamin K, Protamine, Idarucizumab]
        correct_answer: 1
        explanation: Protamine binds heparin.
"#;

/// Write `content` to `name` inside a fresh temp dir
pub fn write_temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

pub fn question(id: &str, options: usize, correct_answer: usize) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {id}?"),
        options: (0..options).map(|i| format!("Option {i}")).collect(),
        correct_answer,
        explanation: format!("Because of {id}."),
    }
}

/// Quiz whose questions all have their correct answer at index 0
pub fn quiz_with_questions(count: usize, xp_reward: u32, stone_reward: u32) -> Quiz {
    Quiz {
        id: "q-test".to_string(),
        title: "Test Quiz".to_string(),
        description: String::new(),
        questions: (0..count).map(|i| question(&format!("q{i}"), 4, 0)).collect(),
        xp_reward,
        stone_reward,
    }
}

/// Select, confirm and advance in one go
pub fn answer(session: &mut QuizSession, option: usize) -> Option<bool> {
    session.select_option(option);
    let correct = session.confirm();
    session.advance();
    correct
}
