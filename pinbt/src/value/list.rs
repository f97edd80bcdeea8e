use serde::Serialize;

use super::Value;
use crate::error::{Error, Result};
use crate::Tag;

/// An ordered list of values that all share one tag.
///
/// The element tag is kept even when the list is empty, since it is part of
/// the encoded form. A list whose tag is [`Tag::End`] is untyped and empty;
/// the first value pushed into it decides its type.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    tag: Tag,
    values: Vec<Value>,
}

impl List {
    /// An empty list of the given element tag.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            values: Vec::new(),
        }
    }

    /// A list of `tag` elements. Fails with `TypeMismatch` if any value has a
    /// different tag.
    pub fn from_values(tag: Tag, values: Vec<Value>) -> Result<Self> {
        if let Some(bad) = values.iter().find(|v| v.tag() != tag) {
            return Err(Error::type_mismatch(tag, bad.tag()));
        }
        Ok(Self { tag, values })
    }

    /// Build a list without checking the element tags. The decoder reads
    /// every element with the declared tag, so they cannot differ.
    pub(crate) fn from_parts(tag: Tag, values: Vec<Value>) -> Self {
        Self { tag, values }
    }

    /// The declared tag of every element.
    pub fn element_tag(&self) -> Tag {
        self.tag
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.values.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    fn check(&self, value: &Value) -> Result<()> {
        if value.tag() == self.tag {
            Ok(())
        } else {
            Err(Error::type_mismatch(self.tag, value.tag()))
        }
    }

    /// Append a value, failing with `TypeMismatch` if it is not of the
    /// list's element tag.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if self.tag == Tag::End && self.values.is_empty() {
            self.tag = value.tag();
        }

        self.check(&value)?;
        self.values.push(value);
        Ok(())
    }

    /// Replace the element at `index`, returning the old one. Lists are not
    /// extended: an index at or past the end is `IndexOutOfRange`.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<Value> {
        let value = value.into();
        if index >= self.values.len() {
            return Err(Error::index_out_of_range(index, self.values.len()));
        }

        self.check(&value)?;
        Ok(std::mem::replace(&mut self.values[index], value))
    }

    /// Remove the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index < self.values.len() {
            Ok(self.values.remove(index))
        } else {
            Err(Error::index_out_of_range(index, self.values.len()))
        }
    }

    /// Shorten the list to `len` elements. The element tag is kept.
    pub fn truncate(&mut self, len: usize) {
        self.values.truncate(len);
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new(Tag::End)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Lists serialize as a plain sequence of their values.
impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(&self.values)
    }
}

#[cfg(feature = "arbitrary1")]
fn homogeneous<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<Vec<Value>>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let tag = u.arbitrary::<Tag>()?;
        let values = match tag {
            Tag::End => vec![],
            Tag::Byte => homogeneous(u, Value::Byte)?,
            Tag::Short => homogeneous(u, Value::Short)?,
            Tag::Int => homogeneous(u, Value::Int)?,
            Tag::Long => homogeneous(u, Value::Long)?,
            Tag::Float => homogeneous(u, Value::Float)?,
            Tag::Double => homogeneous(u, Value::Double)?,
            Tag::ByteArray => homogeneous(u, Value::ByteArray)?,
            Tag::String => homogeneous(u, Value::String)?,
            Tag::List => homogeneous(u, Value::List)?,
            Tag::Compound => homogeneous(u, Value::Compound)?,
        };
        Ok(Self::from_parts(tag, values))
    }
}
