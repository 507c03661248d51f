//! Log message value type.

use std::fmt;

/// Closed set of routing tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Warning,
    Error,
    FatalError,
    Unknown,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Warning,
        Category::Error,
        Category::FatalError,
        Category::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Warning => "Warning",
            Category::Error => "Error",
            Category::FatalError => "FatalError",
            Category::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable (category, text) pair passed by reference through the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogMessage {
    category: Category,
    text: String,
}

impl LogMessage {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructor_values() {
        let m = LogMessage::new(Category::Error, String::from("disk full"));
        assert_eq!(m.category(), Category::Error);
        assert_eq!(m.text(), "disk full");
    }

    #[test]
    fn empty_text_is_allowed() {
        let m = LogMessage::new(Category::Unknown, "");
        assert_eq!(m.text(), "");
    }

    #[test]
    fn category_display_matches_tag_names() {
        let names: Vec<String> = Category::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["Warning", "Error", "FatalError", "Unknown"]);
    }
}
