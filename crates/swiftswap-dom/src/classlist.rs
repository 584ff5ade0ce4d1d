//! Class list
//!
//! Space-separated token list backing the `class` attribute.

use std::fmt;

/// Ordered, duplicate-free list of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a whitespace-separated string
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token (ignored if empty or already present)
    pub fn add(&mut self, token: &str) {
        if !token.is_empty() && !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    /// Iterate tokens in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Serialized attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

impl<'a> FromIterator<&'a str> for ClassList {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut list = Self::new();
        for token in iter {
            list.add(token);
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collapses_whitespace() {
        let list = ClassList::from_string("  table-scroll \t sticky-top  ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.value(), "table-scroll sticky-top");
    }

    #[test]
    fn test_duplicates_ignored() {
        let list = ClassList::from_string("a b a");
        assert_eq!(list.value(), "a b");
    }

    #[test]
    fn test_collect_wrapper_classes() {
        let list: ClassList = ["table-scroll", "sticky-left", "sticky-top", "sticky-left"]
            .into_iter()
            .collect();
        assert!(list.contains("sticky-top"));
        assert!(!list.contains("sticky"));
        assert_eq!(list.to_string(), "table-scroll sticky-left sticky-top");
    }
}
