//! Sort state.

use serde::Deserialize;
use serde::Serialize;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Returns the wire form (`"asc"` / `"desc"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// The active sort: one column and a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Column key.
    pub field: String,
    /// Direction.
    pub direction: Direction,
}

impl Sort {
    /// Creates an ascending sort on a field.
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Desc,
        }
    }

    /// Applies a header click on `field` to the current sort.
    ///
    /// Clicking the active column flips its direction; clicking any other
    /// column sorts by it ascending.
    pub fn clicked(current: Option<&Sort>, field: &str) -> Sort {
        match current {
            Some(sort) if sort.field == field => Sort {
                field: sort.field.clone(),
                direction: sort.direction.toggled(),
            },
            _ => Sort::asc(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_same_column_toggles() {
        let first = Sort::clicked(None, "name");
        assert_eq!(first, Sort::asc("name"));
        let second = Sort::clicked(Some(&first), "name");
        assert_eq!(second, Sort::desc("name"));
        let third = Sort::clicked(Some(&second), "name");
        assert_eq!(third, first);
    }

    #[test]
    fn test_click_other_column_resets_to_asc() {
        let current = Sort::desc("name");
        assert_eq!(Sort::clicked(Some(&current), "code"), Sort::asc("code"));
    }
}
