//! Type classifier: maps Rust types onto [`ValueCategory`] at compile time.
//!
//! Classification is trait resolution. A type with no [`Classify`] impl cannot be used as a parameter or return type
//! of a described function; the build fails rather than the descriptor silently reporting a default.
//!
//! ## Notes
//! - User enums and structs opt in with `#[derive(Classify)]`. Structs additionally become a [`Class`], which lets
//!   them act as method receivers and be shared through `Arc`/`Rc` (`Reference` category).
//! - `&T` and `&mut T` classify as `T`, and share `T`'s identity token. Unsized referents (`str`, `[T]`) are
//!   identified by their `&'static` form, so tokens never depend on the lifetime a particular signature uses.
//! - Every type also carries an [`ArgShape`](shape::ArgShape): whether it may lead the argument list of a free
//!   function, or is a borrowed class and therefore a method receiver.
//!
//! ## Examples
//! ```rust
//! use fnreflect::{ValueCategory, classify};
//!
//! assert_eq!(classify::<bool>(), ValueCategory::Boolean);
//! assert_eq!(classify::<&str>(), ValueCategory::String);
//! assert_eq!(classify::<&Vec<i64>>(), ValueCategory::Array);
//! assert_eq!(classify::<Vec<u8>>(), ValueCategory::Array);
//! assert_eq!(classify::<()>(), ValueCategory::None);
//! ```

use std::any::{TypeId, type_name};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use fnreflect_core::ValueCategory;

/// Associates a type with its runtime value category.
///
/// Types without an impl are rejected at build time:
///
/// ```compile_fail
/// use fnreflect::new_function;
///
/// struct Opaque;
///
/// // `Opaque` has no value category.
/// let _ = new_function("consume", |_: Opaque| ());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no value category",
    label = "cannot be used as a parameter or return type of a described function",
    note = "derive `Classify` for user enums and structs; other types need a manual `Classify` impl"
)]
pub trait Classify {
    /// `'static` stand-in used for type identity.
    type Canonical: 'static;

    const CATEGORY: ValueCategory;

    /// How the type behaves as the first argument of a callable.
    type Shape: shape::ArgShape;
}

/// Marker for reflected classes: user structs that may appear as a method receiver.
pub trait Class: Classify<Shape = shape::Object> + 'static {}

/// Type-level argument shapes.
///
/// A callable whose first argument has shape [`Receiver`](shape::Receiver) is a method; any other shape may lead the
/// argument list of a free function.
pub mod shape {
    pub trait ArgShape {
        /// Shape of `&Self` / `&mut Self` for a type of this shape.
        type Borrowed: ArgShape;
    }

    /// Shapes allowed in the first position of a free function.
    pub trait Leading: ArgShape {}

    /// Plain values and borrows of them.
    pub enum Plain {}

    /// A reflected class taken by value.
    pub enum Object {}

    /// A borrowed reflected class.
    pub enum Receiver {}

    impl ArgShape for Plain {
        type Borrowed = Plain;
    }

    impl ArgShape for Object {
        type Borrowed = Receiver;
    }

    impl ArgShape for Receiver {
        type Borrowed = Plain;
    }

    impl Leading for Plain {}
    impl Leading for Object {}
}

/// Return the value category of `T`.
#[inline]
pub const fn classify<T: Classify + ?Sized>() -> ValueCategory {
    T::CATEGORY
}

/// Type identity token.
///
/// Two tokens are equal iff their canonical `TypeId`s are equal; the name is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    pub fn of<T: Classify + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T::Canonical>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Full type name as reported by [`std::any::type_name`].
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Last path segment of the type name, without generic arguments.
    ///
    /// `alloc::vec::Vec<i32>` becomes `Vec`, `my_crate::shapes::Point` becomes `Point`.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    pub fn is<T: Classify + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T::Canonical>()
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.name, f)
    }
}

macro_rules! classify_as {
    ($category:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Classify for $ty {
                type Canonical = Self;
                const CATEGORY: ValueCategory = ValueCategory::$category;
                type Shape = shape::Plain;
            }
        )+
    };
}

classify_as!(None => ());
classify_as!(Boolean => bool);
classify_as!(Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);
classify_as!(Real => f32, f64);
classify_as!(String => String, Box<str>);

impl Classify for str {
    type Canonical = &'static str;
    const CATEGORY: ValueCategory = ValueCategory::String;
    type Shape = shape::Plain;
}

impl Classify for Cow<'_, str> {
    type Canonical = Cow<'static, str>;
    const CATEGORY: ValueCategory = ValueCategory::String;
    type Shape = shape::Plain;
}

impl<T: Classify> Classify for Vec<T> {
    type Canonical = Vec<T::Canonical>;
    const CATEGORY: ValueCategory = ValueCategory::Array;
    type Shape = shape::Plain;
}

impl<T: Classify> Classify for VecDeque<T> {
    type Canonical = VecDeque<T::Canonical>;
    const CATEGORY: ValueCategory = ValueCategory::Array;
    type Shape = shape::Plain;
}

impl<T: Classify, const N: usize> Classify for [T; N] {
    type Canonical = [T::Canonical; N];
    const CATEGORY: ValueCategory = ValueCategory::Array;
    type Shape = shape::Plain;
}

impl<T: Classify> Classify for [T] {
    type Canonical = &'static [T::Canonical];
    const CATEGORY: ValueCategory = ValueCategory::Array;
    type Shape = shape::Plain;
}

impl<C: Class> Classify for Arc<C> {
    type Canonical = Arc<C>;
    const CATEGORY: ValueCategory = ValueCategory::Reference;
    type Shape = shape::Plain;
}

impl<C: Class> Classify for Rc<C> {
    type Canonical = Rc<C>;
    const CATEGORY: ValueCategory = ValueCategory::Reference;
    type Shape = shape::Plain;
}

impl<T: Classify + ?Sized> Classify for &T {
    type Canonical = T::Canonical;
    const CATEGORY: ValueCategory = T::CATEGORY;
    type Shape = <T::Shape as shape::ArgShape>::Borrowed;
}

impl<T: Classify + ?Sized> Classify for &mut T {
    type Canonical = T::Canonical;
    const CATEGORY: ValueCategory = T::CATEGORY;
    type Shape = <T::Shape as shape::ArgShape>::Borrowed;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classify;

    #[allow(dead_code)]
    #[derive(Classify)]
    struct Point {
        x: f64,
    }

    #[allow(dead_code)]
    #[derive(Classify)]
    enum Color {
        Red,
    }

    #[test]
    fn primitives() {
        assert_eq!(classify::<()>(), ValueCategory::None);
        assert_eq!(classify::<bool>(), ValueCategory::Boolean);
        assert_eq!(classify::<u8>(), ValueCategory::Integer);
        assert_eq!(classify::<char>(), ValueCategory::Integer);
        assert_eq!(classify::<f32>(), ValueCategory::Real);
        assert_eq!(classify::<String>(), ValueCategory::String);
        assert_eq!(classify::<Cow<'static, str>>(), ValueCategory::String);
    }

    #[test]
    fn sequences() {
        assert_eq!(classify::<Vec<String>>(), ValueCategory::Array);
        assert_eq!(classify::<[f64; 3]>(), ValueCategory::Array);
        assert_eq!(classify::<&[i32]>(), ValueCategory::Array);
        assert_eq!(classify::<VecDeque<bool>>(), ValueCategory::Array);
    }

    #[test]
    fn user_types() {
        assert_eq!(classify::<Point>(), ValueCategory::User);
        assert_eq!(classify::<Color>(), ValueCategory::Enum);
        assert_eq!(classify::<Arc<Point>>(), ValueCategory::Reference);
        assert_eq!(classify::<Rc<Point>>(), ValueCategory::Reference);
        assert_eq!(classify::<Vec<Point>>(), ValueCategory::Array);
    }

    #[test]
    fn borrowed_token_ignores_lifetime() {
        fn token_of(s: &str) -> TypeToken {
            fn inner<T: Classify>(_: T) -> TypeToken {
                TypeToken::of::<T>()
            }
            inner(s)
        }
        let local = String::from("x");
        assert_eq!(token_of(&local), TypeToken::of::<&'static str>());
        assert!(token_of(&local).is::<&str>());
        assert_ne!(TypeToken::of::<&str>(), TypeToken::of::<String>());
    }

    #[test]
    fn borrows_classify_as_their_referent() {
        assert_eq!(classify::<&Point>(), ValueCategory::User);
        assert_eq!(classify::<&mut Point>(), ValueCategory::User);
        assert_eq!(classify::<&Color>(), ValueCategory::Enum);
        assert_eq!(classify::<&String>(), ValueCategory::String);
        assert_eq!(classify::<&mut Vec<i32>>(), ValueCategory::Array);
        assert_eq!(classify::<&i64>(), ValueCategory::Integer);

        assert_eq!(TypeToken::of::<&Point>(), TypeToken::of::<Point>());
        assert_eq!(TypeToken::of::<&mut Vec<i32>>(), TypeToken::of::<Vec<i32>>());
        assert!(TypeToken::of::<&[u8]>().is::<&'static [u8]>());
    }

    #[test]
    fn only_borrowed_classes_are_receivers() {
        use std::any::TypeId;

        fn shape_of<T: Classify + ?Sized>() -> TypeId
        where
            T::Shape: 'static,
        {
            TypeId::of::<T::Shape>()
        }

        assert_eq!(shape_of::<Point>(), TypeId::of::<shape::Object>());
        assert_eq!(shape_of::<&Point>(), TypeId::of::<shape::Receiver>());
        assert_eq!(shape_of::<&mut Point>(), TypeId::of::<shape::Receiver>());
        assert_eq!(shape_of::<&&Point>(), TypeId::of::<shape::Plain>());
        assert_eq!(shape_of::<&Color>(), TypeId::of::<shape::Plain>());
        assert_eq!(shape_of::<&Vec<i32>>(), TypeId::of::<shape::Plain>());
        assert_eq!(shape_of::<Arc<Point>>(), TypeId::of::<shape::Plain>());
    }

    #[test]
    fn short_name_strips_path_and_generics() {
        assert_eq!(TypeToken::of::<Vec<i32>>().short_name(), "Vec");
        assert_eq!(TypeToken::of::<Point>().short_name(), "Point");
        assert_eq!(TypeToken::of::<i64>().short_name(), "i64");
    }
}
