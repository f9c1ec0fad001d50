//! Exact-match filters for list operations.

use serde::{Deserialize, Serialize};

/// Filter for listing courses.
///
/// Both criteria are exact matches and compose with AND. An empty filter
/// matches every course.
///
/// # Examples
///
/// ```
/// use registrar_persistence::types::CourseFilter;
///
/// let all = CourseFilter::default();
/// assert!(all.is_empty());
///
/// let by_name = CourseFilter::default().with_name("Topology");
/// assert_eq!(by_name.name.as_deref(), Some("Topology"));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseFilter {
    /// Match a single course by identifier.
    pub id: Option<i64>,

    /// Match courses by exact name.
    pub name: Option<String>,
}

impl CourseFilter {
    /// Returns `true` if no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Sets the id criterion.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the name criterion.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Filter for listing students. Same semantics as [`CourseFilter`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentFilter {
    /// Match a single student by identifier.
    pub id: Option<i64>,

    /// Match students by exact name.
    pub name: Option<String>,
}

impl StudentFilter {
    /// Returns `true` if no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.name.is_none()
    }

    /// Sets the id criterion.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the name criterion.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter() {
        assert!(CourseFilter::default().is_empty());
        assert!(StudentFilter::default().is_empty());
    }

    #[test]
    fn test_filter_builders() {
        let filter = CourseFilter::default().with_id(3).with_name("Calculus");
        assert_eq!(filter.id, Some(3));
        assert_eq!(filter.name.as_deref(), Some("Calculus"));
        assert!(!filter.is_empty());
    }
}
