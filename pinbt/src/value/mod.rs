mod compound;
mod list;
mod path;

use serde::Serialize;

use crate::{
    error::{Error, ErrorKind, Result},
    Tag,
};

pub use self::compound::Compound;
pub use self::list::List;
pub use self::path::{Path, Step};

/// Value is a complete NBT value. It owns its data. Compounds and Lists are
/// recursively decoded, and both keep their elements in the order they were
/// read so that writing the value back out reproduces the original bytes.
///
/// ```
/// # use pinbt::{Compound, Value};
/// let mut player = Compound::new();
/// player.insert("Health", Value::short(20).unwrap());
///
/// match player["Health"] {
///     Value::Short(health) => println!("Health: {}", health),
///     _ => {}
/// }
/// ```
///
/// Equality is structural: two values are equal when they have the same
/// variant and equal payloads. List elements are compared in order, compound
/// entries are compared as a map, ignoring order.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Value {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
}

macro_rules! checked_ctor {
    ($(#[$doc:meta])* $name:ident, $ty:ty, $variant:ident) => {
        $(#[$doc])*
        pub fn $name(val: i128) -> Result<Value> {
            <$ty>::try_from(val)
                .map(Value::$variant)
                .map_err(|_| Error::out_of_range(Tag::$variant, val))
        }
    };
}

impl Value {
    checked_ctor!(
        /// A Byte, failing with `OutOfRange` outside `-128..=127`.
        byte, i8, Byte
    );
    checked_ctor!(
        /// A Short, failing with `OutOfRange` outside `-32768..=32767`.
        short, i16, Short
    );
    checked_ctor!(
        /// An Int, failing with `OutOfRange` outside the range of `i32`.
        int, i32, Int
    );
    checked_ctor!(
        /// A Long, failing with `OutOfRange` outside the range of `i64`.
        long, i64, Long
    );

    /// The tag id this value is written with.
    pub fn tag(&self) -> Tag {
        match self {
            Value::Byte(_) => Tag::Byte,
            Value::Short(_) => Tag::Short,
            Value::Int(_) => Tag::Int,
            Value::Long(_) => Tag::Long,
            Value::Float(_) => Tag::Float,
            Value::Double(_) => Tag::Double,
            Value::ByteArray(_) => Tag::ByteArray,
            Value::String(_) => Tag::String,
            Value::List(_) => Tag::List,
            Value::Compound(_) => Tag::Compound,
        }
    }

    /// The value of any integral tag, widened to i64.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Byte(v) => Some(v as i64),
            Value::Short(v) => Some(v as i64),
            Value::Int(v) => Some(v as i64),
            Value::Long(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Byte(v) => Some(v as f64),
            Value::Short(v) => Some(v as f64),
            Value::Int(v) => Some(v as f64),
            Value::Long(v) => Some(v as f64),
            Value::Float(v) => Some(v as f64),
            Value::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Value::Compound(v) => Some(v),
            _ => None,
        }
    }

    /// Follow a single path step from this value.
    fn child(&self, step: &Step) -> Result<&Value> {
        let child = match (self, step) {
            (Value::Compound(c), Step::Key(key)) => c.get(key),
            (Value::List(l), Step::Index(i)) => l.get(*i),
            _ => None,
        };
        child.ok_or_else(|| Error::not_found(format!("{} in {}", step, self.tag())))
    }

    fn child_mut(&mut self, step: &Step) -> Result<&mut Value> {
        let tag = self.tag();
        let child = match (self, step) {
            (Value::Compound(c), Step::Key(key)) => c.get_mut(key),
            (Value::List(l), Step::Index(i)) => l.get_mut(*i),
            _ => None,
        };
        child.ok_or_else(|| Error::not_found(format!("{} in {}", step, tag)))
    }

    pub(crate) fn follow(&self, steps: &[Step]) -> Result<&Value> {
        steps.iter().try_fold(self, |v, step| v.child(step))
    }

    pub(crate) fn follow_mut(&mut self, steps: &[Step]) -> Result<&mut Value> {
        steps.iter().try_fold(self, |v, step| v.child_mut(step))
    }

    pub(crate) fn set_steps(&mut self, steps: &[Step], value: Value) -> Result<()> {
        let (last, parent) = steps
            .split_last()
            .ok_or_else(|| Error::not_found("empty path"))?;

        match (self.follow_mut(parent)?, last) {
            (Value::Compound(c), Step::Key(key)) => {
                c.insert(key.clone(), value);
                Ok(())
            }
            (Value::List(l), Step::Index(i)) => l.set(*i, value).map(|_| ()),
            (parent, step) => Err(Error::new(
                ErrorKind::TypeMismatch,
                format!("cannot set {} in {}", step, parent.tag()),
            )),
        }
    }

    /// Get the value at the end of `path`. An empty path gives this value.
    ///
    /// Fails with `NotFound` if a key or index does not exist, or if a step
    /// does not suit the value it is applied to, such as an index into a
    /// compound.
    pub fn get_path(&self, path: &Path) -> Result<&Value> {
        self.follow(path.steps())
    }

    /// Mutable version of [`Value::get_path`].
    ///
    /// Values reached this way can be replaced wholesale. Replacing an
    /// element of a list with a value of another type is caught when the
    /// tree is encoded; prefer [`Value::set_path`] which checks it up front.
    pub fn get_path_mut(&mut self, path: &Path) -> Result<&mut Value> {
        self.follow_mut(path.steps())
    }

    /// Set the value at the end of `path`.
    ///
    /// A key step at the end inserts or replaces that key of the compound.
    /// An index step replaces an existing element of the list, failing with
    /// `IndexOutOfRange` past the end and `TypeMismatch` if the value is not
    /// the list's element type. A final step applied to the wrong kind of
    /// container is a `TypeMismatch`. Every earlier step behaves as in
    /// [`Value::get_path`], and an empty path is `NotFound`.
    pub fn set_path(&mut self, path: &Path, value: Value) -> Result<()> {
        self.set_steps(path.steps(), value)
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Value {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
        impl From<&$type> for Value {
            fn from(val: &$type) -> Self {
                Self::$variant(val.to_owned()$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

impl From<Vec<i8>> for Value {
    fn from(val: Vec<i8>) -> Self {
        Self::ByteArray(val)
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Value {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Value::*;

        Ok(match u.arbitrary::<Tag>()? {
            Tag::End => return Err(arbitrary::Error::IncorrectFormat),
            Tag::Byte => Byte(u.arbitrary()?),
            Tag::Short => Short(u.arbitrary()?),
            Tag::Int => Int(u.arbitrary()?),
            Tag::Long => Long(u.arbitrary()?),
            Tag::Float => Float(u.arbitrary()?),
            Tag::Double => Double(u.arbitrary()?),
            Tag::ByteArray => ByteArray(u.arbitrary()?),
            Tag::String => String(u.arbitrary()?),
            Tag::List => List(u.arbitrary()?),
            Tag::Compound => Compound(u.arbitrary()?),
        })
    }
}
