// Utility functions for combokit

/// String utilities
pub mod string {
    /// Case-insensitive prefix test. An empty prefix matches everything.
    pub fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
        s.to_lowercase().starts_with(&prefix.to_lowercase())
    }

    /// Case-insensitive equality
    pub fn eq_ignore_case(a: &str, b: &str) -> bool {
        a.to_lowercase() == b.to_lowercase()
    }
}
