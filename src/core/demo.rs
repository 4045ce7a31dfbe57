// src/core/demo.rs
use crate::models::{Assignment, Subject};

/// Example subjects shown when no shared state is available.
#[must_use]
pub fn demo_subjects() -> Vec<Subject> {
    vec![
        Subject::new(
            "1",
            "Data Structures & Algorithms",
            vec![
                Assignment::new("1-1", "Assignment 1: Sorting Algorithms", 20.0, Some(85.0)),
                Assignment::new("1-2", "Assignment 2: Tree Traversal", 20.0, Some(92.0)),
                Assignment::new("1-3", "Mid-semester Exam", 25.0, Some(78.0)),
                Assignment::new("1-4", "Final Exam", 35.0, None),
            ],
        ),
        Subject::new(
            "2",
            "Web Development",
            vec![
                Assignment::new("2-1", "Project: Frontend App", 40.0, Some(95.0)),
                Assignment::new("2-2", "Project: Backend API", 40.0, Some(88.0)),
                Assignment::new("2-3", "Documentation", 20.0, Some(90.0)),
            ],
        ),
        Subject::new(
            "3",
            "Database Systems",
            vec![
                Assignment::new("3-1", "SQL Assignment", 15.0, Some(100.0)),
                Assignment::new("3-2", "NoSQL Project", 25.0, None),
                Assignment::new("3-3", "Mid-term", 25.0, None),
                Assignment::new("3-4", "Final Project", 35.0, None),
            ],
        ),
        Subject::new(
            "4",
            "Software Engineering",
            vec![
                Assignment::new("4-1", "Group Project", 50.0, None),
                Assignment::new("4-2", "Individual Report", 30.0, None),
                Assignment::new("4-3", "Peer Reviews", 20.0, None),
            ],
        ),
    ]
}
