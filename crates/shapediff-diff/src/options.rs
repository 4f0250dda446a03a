use serde::{Deserialize, Serialize};

/// Tuning knobs for the record comparator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Joins an embedded field's name to the names of its inner fields.
    pub path_separator: String,
    /// Maximum number of nested embedded records to descend into.
    pub max_depth: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            path_separator: ".".to_owned(),
            max_depth: 64,
        }
    }
}

impl DiffOptions {
    pub fn with_path_separator(mut self, separator: impl Into<String>) -> Self {
        self.path_separator = separator.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let o = DiffOptions::default();
        assert_eq!(o.path_separator, ".");
        assert_eq!(o.max_depth, 64);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let o: DiffOptions = serde_json::from_str(r#"{"path_separator": "/"}"#).unwrap();
        assert_eq!(o.path_separator, "/");
        assert_eq!(o.max_depth, 64);
    }

    #[test]
    fn builder_setters() {
        let o = DiffOptions::default().with_path_separator("::").with_max_depth(2);
        assert_eq!(o, DiffOptions { path_separator: "::".into(), max_depth: 2 });
    }
}
