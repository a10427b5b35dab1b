//! Input normalization: one path, a list of paths, or any iterator of paths.

/// Ordered list of paths to checksum in one batch.
///
/// Built from a single path, a slice/array/`Vec`, or collected from a lazy
/// iterator. Order only affects the argument list handed to the checksum
/// binary, never the resulting map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathSet(Vec<String>);

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for PathSet {
    fn from(path: &str) -> Self {
        Self(vec![path.to_string()])
    }
}

impl From<String> for PathSet {
    fn from(path: String) -> Self {
        Self(vec![path])
    }
}

impl<S: Into<String>> From<Vec<S>> for PathSet {
    fn from(paths: Vec<S>) -> Self {
        paths.into_iter().collect()
    }
}

impl<S: AsRef<str>> From<&[S]> for PathSet {
    fn from(paths: &[S]) -> Self {
        Self(paths.iter().map(|p| p.as_ref().to_string()).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for PathSet {
    fn from(paths: [S; N]) -> Self {
        paths.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for PathSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a PathSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
