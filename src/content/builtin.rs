//! Content shipped with the app

use once_cell::sync::Lazy;

use super::Catalog;
use crate::domain::{Category, Difficulty, Lesson, Question, Quiz, StudyModule};

pub(super) static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog {
    modules: builtin_modules(),
    quizzes: builtin_quizzes(),
});

fn lesson(id: &str, title: &str, content: &str, completed: bool) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        completed,
    }
}

fn builtin_modules() -> Vec<StudyModule> {
    vec![
        StudyModule {
            id: "anat-01".into(),
            title: "Cardiovascular Anatomy".into(),
            category: Category::Anatomy,
            difficulty: Difficulty::clamped(3),
            progress: 45,
            lessons: vec![
                lesson(
                    "l1",
                    "Heart Chambers",
                    "The heart consists of four chambers...",
                    true,
                ),
                lesson(
                    "l2",
                    "Great Vessels",
                    "The aorta and the venae cavae...",
                    false,
                ),
            ],
        },
        StudyModule {
            id: "phys-01".into(),
            title: "Renal Physiology".into(),
            category: Category::Physiology,
            difficulty: Difficulty::clamped(4),
            progress: 10,
            lessons: vec![lesson(
                "l1",
                "Glomerular Filtration",
                "The first step in urine formation...",
                true,
            )],
        },
    ]
}

fn builtin_quizzes() -> Vec<Quiz> {
    vec![Quiz {
        id: "q-cardio-01".into(),
        title: "Heart Anatomy Challenge".into(),
        description: "A comprehensive test of cardiovascular structures and functions.".into(),
        xp_reward: 500,
        stone_reward: 50,
        questions: vec![
            Question {
                id: "q1".into(),
                text: "Which valve separates the left atrium from the left ventricle?".into(),
                options: vec![
                    "Tricuspid valve".into(),
                    "Mitral valve".into(),
                    "Pulmonary valve".into(),
                    "Aortic valve".into(),
                ],
                correct_answer: 1,
                explanation: "The mitral (bicuspid) valve sits between the left atrium and the left ventricle.".into(),
            },
            Question {
                id: "q2".into(),
                text: "What is the primary pacemaker of the heart?".into(),
                options: vec![
                    "AV node".into(),
                    "Bundle of His".into(),
                    "SA node".into(),
                    "Purkinje fibers".into(),
                ],
                correct_answer: 2,
                explanation: "The sinoatrial (SA) node initiates the electrical impulse in a normal heart.".into(),
            },
        ],
    }]
}
