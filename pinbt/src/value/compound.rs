use std::ops::Index;

use indexmap::IndexMap;
use serde::Serialize;

use super::{List, Path, Step, Value};
use crate::error::{Error, Result};
use crate::Tag;

/// A map of names to values. Entries are kept in insertion order, which is
/// the order they are written in, but compare equal regardless of order.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Compound(IndexMap<String, Value>);

macro_rules! typed_get {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $variant:ident) => {
        $(#[$doc])*
        pub fn $name(&self, key: &str) -> Result<$ty> {
            match self.get(key) {
                Some(Value::$variant(v)) => Ok(v.to_owned()),
                Some(other) => Err(Error::type_mismatch(Tag::$variant, other.tag())),
                None => Err(Error::not_found(key)),
            }
        }
    };
}

impl Compound {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert a value under `key`, returning the value it replaced. A
    /// replaced key keeps its position, new keys go on the end.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Remove a key, shifting later entries down so the order of the rest
    /// is kept.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    typed_get!(get_byte, i8, Byte);
    typed_get!(get_short, i16, Short);
    typed_get!(get_int, i32, Int);
    typed_get!(
        /// Get a Long. Other integral tags are a `TypeMismatch`, since
        /// writing the value back would change its width.
        get_long, i64, Long
    );
    typed_get!(get_string, String, String);

    pub fn get_str(&self, key: &str) -> Result<&str> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(Error::type_mismatch(Tag::String, other.tag())),
            None => Err(Error::not_found(key)),
        }
    }

    pub fn get_compound(&self, key: &str) -> Result<&Compound> {
        match self.get(key) {
            Some(Value::Compound(c)) => Ok(c),
            Some(other) => Err(Error::type_mismatch(Tag::Compound, other.tag())),
            None => Err(Error::not_found(key)),
        }
    }

    pub fn get_compound_mut(&mut self, key: &str) -> Result<&mut Compound> {
        match self.get_mut(key) {
            Some(Value::Compound(c)) => Ok(c),
            Some(other) => Err(Error::type_mismatch(Tag::Compound, other.tag())),
            None => Err(Error::not_found(key)),
        }
    }

    pub fn get_list(&self, key: &str) -> Result<&List> {
        match self.get(key) {
            Some(Value::List(l)) => Ok(l),
            Some(other) => Err(Error::type_mismatch(Tag::List, other.tag())),
            None => Err(Error::not_found(key)),
        }
    }

    /// See [`Value::get_path`]. The compound is the starting point of the
    /// path, and an empty path is `NotFound` since it names no value.
    pub fn get_path(&self, path: &Path) -> Result<&Value> {
        let (first, rest) = split_first_key(path.steps())?;
        let v = self.get(first).ok_or_else(|| Error::not_found(first))?;
        v.follow(rest)
    }

    /// See [`Value::get_path_mut`].
    pub fn get_path_mut(&mut self, path: &Path) -> Result<&mut Value> {
        let (first, rest) = split_first_key(path.steps())?;
        let v = self.get_mut(first).ok_or_else(|| Error::not_found(first))?;
        v.follow_mut(rest)
    }

    /// See [`Value::set_path`].
    pub fn set_path(&mut self, path: &Path, value: Value) -> Result<()> {
        match split_first_key(path.steps())? {
            (first, []) => {
                self.insert(first, value);
                Ok(())
            }
            (first, rest) => {
                let v = self.get_mut(first).ok_or_else(|| Error::not_found(first))?;
                v.set_steps(rest, value)
            }
        }
    }
}

fn split_first_key(steps: &[Step]) -> Result<(&str, &[Step])> {
    match steps.split_first() {
        Some((Step::Key(key), rest)) => Ok((key, rest)),
        Some((step, _)) => Err(Error::not_found(format!("{} in {}", step, Tag::Compound))),
        None => Err(Error::not_found("empty path")),
    }
}

impl Index<&str> for Compound {
    type Output = Value;

    /// Panics if the key is not present, like `HashMap`.
    fn index(&self, key: &str) -> &Value {
        &self.0[key]
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        u.arbitrary_iter::<(String, Value)>()?.collect()
    }
}
