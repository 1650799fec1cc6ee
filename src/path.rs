//! Slash-delimited resource paths.
//!
//! A path such as `"Colors/primary"` names a top-level namespace (the
//! collection, `"Colors"`) and an optional residual sub-path (`"primary"`).
//! Nesting below the namespace is only a naming convention: callers prefix the
//! sub-path onto a child's own name, so `"primary"` + `"main"` is stored as the
//! flat variable name `"primary/main"`.

use crate::core::DsforgeError;

/// Separator between path segments.
pub const PATH_DELIMITER: char = '/';

/// The result of splitting a path into namespace and sub-path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    /// First segment; the name resolved through the resource cache.
    pub namespace: String,
    /// Everything after the first `/`, verbatim, or `None` for a single segment.
    pub sub_path: Option<String>,
}

impl ResourcePath {
    /// Split `path` on `/`.
    ///
    /// The remainder after the first delimiter is returned verbatim, so
    /// `"A/B/C"` yields `("A", Some("B/C"))` and `"A/"` yields `("A", Some(""))`.
    ///
    /// # Errors
    ///
    /// Returns [`DsforgeError::InvalidPath`] if the namespace segment is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsforge::path::ResourcePath;
    ///
    /// let path = ResourcePath::parse("Spacing/golden").unwrap();
    /// assert_eq!(path.namespace, "Spacing");
    /// assert_eq!(path.sub_path.as_deref(), Some("golden"));
    /// assert_eq!(path.qualify("md"), "golden/md");
    /// ```
    pub fn parse(path: &str) -> Result<Self, DsforgeError> {
        let (namespace, sub_path) = match path.split_once(PATH_DELIMITER) {
            Some((namespace, rest)) => (namespace, Some(rest.to_string())),
            None => (path, None),
        };

        if namespace.is_empty() {
            return Err(DsforgeError::InvalidPath {
                path: path.to_string(),
                reason: "namespace segment is empty".to_string(),
            });
        }

        Ok(Self {
            namespace: namespace.to_string(),
            sub_path,
        })
    }

    /// Name a child resource inside this path's namespace.
    ///
    /// Returns `"sub_path/leaf"`, or `leaf` unchanged when there is no
    /// (or an empty) sub-path.
    #[must_use]
    pub fn qualify(&self, leaf: &str) -> String {
        qualify(self.sub_path.as_deref(), leaf)
    }
}

/// Prefix `leaf` with `folder` when one is set.
#[must_use]
pub fn qualify(folder: Option<&str>, leaf: &str) -> String {
    match folder {
        Some(folder) if !folder.is_empty() => format!("{folder}{PATH_DELIMITER}{leaf}"),
        _ => leaf.to_string(),
    }
}

/// Everything before the last `/` of a stored name, if it has one.
#[must_use]
pub fn folder_of(name: &str) -> Option<&str> {
    name.rsplit_once(PATH_DELIMITER).map(|(folder, _)| folder)
}
