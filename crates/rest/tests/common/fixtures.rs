//! Test fixtures producing randomized domain records.
//!
//! The factories generate distinct, unpredictable names so filter tests
//! cannot pass by accident.

use rand::Rng;
use rand::distr::Alphanumeric;
use registrar_persistence::backends::sqlite::SqliteBackend;
use registrar_persistence::core::{CourseStore, StudentStore};
use registrar_persistence::types::{Course, NewCourse, NewStudent, Student};

/// Returns a random name with the given prefix.
pub fn random_name(prefix: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    format!("{}-{}", prefix, suffix)
}

/// Picks a random element of a slice.
pub fn random_choice<T>(items: &[T]) -> &T {
    let index = rand::rng().random_range(0..items.len());
    &items[index]
}

/// Seeds a single student with a randomized name.
pub async fn seed_student(backend: &SqliteBackend) -> Student {
    backend
        .create_student(NewStudent {
            name: random_name("student"),
        })
        .await
        .expect("Failed to seed student")
}

/// Seeds `count` students, returning their ids.
pub async fn seed_students(backend: &SqliteBackend, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for _ in 0..count {
        ids.push(seed_student(backend).await.id);
    }
    ids
}

/// Seeds a single course with a randomized name and the given roster.
pub async fn seed_course(backend: &SqliteBackend, students: &[i64]) -> Course {
    backend
        .create_course(NewCourse {
            name: random_name("course"),
            students: students.to_vec(),
        })
        .await
        .expect("Failed to seed course")
}

/// Seeds `count` courses sharing the same roster.
pub async fn seed_courses(backend: &SqliteBackend, students: &[i64], count: usize) -> Vec<Course> {
    let mut courses = Vec::with_capacity(count);
    for _ in 0..count {
        courses.push(seed_course(backend, students).await);
    }
    courses
}
