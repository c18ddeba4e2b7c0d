//! Print profiles: printing options stored as JSON.
//!
//! ```json
//! {
//!   "exclude_paths": ["user.password"],
//!   "string_max_length": 40,
//!   "max_depth": 16,
//!   "culture": "de-DE"
//! }
//! ```

use std::any::TypeId;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::config::{ConfigState, Culture, RenderFn};
use crate::renderer::truncate_chars;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    /// Field paths to leave out of the output.
    pub exclude_paths: Vec<String>,
    /// Strings longer than this many characters are cut down to it.
    pub string_max_length: Option<usize>,
    pub max_depth: Option<usize>,
    /// Name of a [`Culture`] preset used for JSON numbers.
    pub culture: Option<String>,
}

impl Profile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid profile {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Adds the options of `other` on top of `self`. Scalar options set in
    /// `other` win.
    pub fn merged_with(mut self, other: Profile) -> Self {
        self.exclude_paths.extend(other.exclude_paths);
        self.string_max_length = other.string_max_length.or(self.string_max_length);
        self.max_depth = other.max_depth.or(self.max_depth);
        self.culture = other.culture.or(self.culture);
        self
    }

    /// Layers this profile over `state`.
    pub fn apply(&self, state: &ConfigState) -> Result<ConfigState> {
        let mut state = state.clone();

        for path in &self.exclude_paths {
            state = state.with_excluded_path(path.as_str());
        }

        if let Some(length) = self.string_max_length {
            state = state.with_type_renderer(
                TypeId::of::<String>(),
                RenderFn::typed(move |text: &String| Ok(truncate_chars(text, length).to_string())),
            );
        }

        if let Some(max_depth) = self.max_depth {
            state = state.with_max_depth(max_depth);
        }

        if let Some(name) = &self.culture {
            let culture =
                Culture::from_name(name).ok_or_else(|| anyhow!("Unknown culture `{}`", name))?;
            state = state.with_type_renderer(
                TypeId::of::<serde_json::Number>(),
                RenderFn::typed(move |number: &serde_json::Number| {
                    Ok(culture.localize(&number.to_string()))
                }),
            );
        }

        debug!(profile = ?self, "applied print profile");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_profile_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"exclude_paths": ["a.b"], "max_depth": 4}}"#).unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.exclude_paths, vec!["a.b".to_string()]);
        assert_eq!(profile.max_depth, Some(4));
        assert_eq!(profile.string_max_length, None);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Profile::from_json(r#"{"exclude": []}"#).is_err());
    }

    #[test]
    fn test_merge_prefers_later_scalars() {
        let base = Profile {
            exclude_paths: vec!["a".to_string()],
            string_max_length: Some(3),
            max_depth: Some(2),
            culture: None,
        };
        let cli = Profile {
            exclude_paths: vec!["b".to_string()],
            string_max_length: None,
            max_depth: Some(9),
            culture: Some("de-DE".to_string()),
        };

        let merged = base.merged_with(cli);
        assert_eq!(merged.exclude_paths, ["a", "b"]);
        assert_eq!(merged.string_max_length, Some(3));
        assert_eq!(merged.max_depth, Some(9));
        assert_eq!(merged.culture.as_deref(), Some("de-DE"));
    }

    #[test]
    fn test_apply_to_json_document() {
        let profile = Profile {
            exclude_paths: vec!["secret".to_string()],
            string_max_length: Some(2),
            max_depth: None,
            culture: Some("de-DE".to_string()),
        };
        let state = profile.apply(&ConfigState::new()).unwrap();

        let doc = json!({"name": "Alex", "ratio": 0.5, "secret": "hunter2"});
        let text = render(&doc, &state).unwrap();
        assert_eq!(text, "Object\n\tname = Al\n\tratio = 0,5\n");
    }

    #[test]
    fn test_apply_rejects_unknown_culture() {
        let profile = Profile {
            culture: Some("tlh-QS".to_string()),
            ..Profile::default()
        };
        assert!(profile.apply(&ConfigState::new()).is_err());
    }
}
