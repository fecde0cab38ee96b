use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::utils::FragmentGroup;

/// A static list of class fragments, as stored in the style tables.
pub type Fragments = &'static [&'static str];

/// The resolved, space separated class string of a styled element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_ascii_whitespace()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens().any(|existing| existing == token)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ClassName> for String {
    fn from(class_name: ClassName) -> Self {
        class_name.0
    }
}

impl PartialEq<&str> for ClassName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Merges layers of class fragments into a single [`ClassName`].
///
/// Fragments are pushed in layer order. A fragment that writes the same
/// property as an earlier one (see [`FragmentGroup`]) replaces it and moves
/// to the later position; exact repeats collapse the same way.
#[derive(Debug, Default)]
pub struct ClassComposer<'a> {
    tokens: IndexMap<FragmentGroup<'a>, &'a str>,
}

impl<'a> ClassComposer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer of single-token fragments.
    pub fn layer(mut self, fragments: &[&'a str]) -> Self {
        for &fragment in fragments {
            self.insert(fragment);
        }
        self
    }

    /// Adds a whitespace separated class string.
    pub fn push(mut self, classes: &'a str) -> Self {
        for token in classes.split_ascii_whitespace() {
            self.insert(token);
        }
        self
    }

    pub fn push_if(self, condition: bool, classes: &'a str) -> Self {
        if condition { self.push(classes) } else { self }
    }

    pub fn push_opt(self, classes: Option<&'a str>) -> Self {
        match classes {
            Some(classes) => self.push(classes),
            None => self,
        }
    }

    fn insert(&mut self, token: &'a str) {
        let token = token.trim();
        if token.is_empty() {
            return;
        }

        let group = FragmentGroup::of(token);
        self.tokens.shift_remove(&group);
        self.tokens.insert(group, token);
    }

    pub fn finish(self) -> ClassName {
        let mut joined = String::new();
        for token in self.tokens.values() {
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(token);
        }
        ClassName(joined)
    }
}

/// Joins class strings left to right, letting later classes override
/// conflicting earlier ones.
pub fn cn<'a>(classes: impl IntoIterator<Item = &'a str>) -> ClassName {
    classes
        .into_iter()
        .fold(ClassComposer::new(), ClassComposer::push)
        .finish()
}
