//! Parameter-list walker.
//!
//! Turns a compile-time tuple of parameter types into a fixed-size array of [`ParamInfo`], one per parameter, in
//! declaration order.
//!
//! ## Notes
//! - `()` is the "no parameters" list and yields `[ParamInfo; 0]`. A single unit parameter is spelled `((),)` and
//!   yields one entry with category `None`; the two are never conflated.
//! - Tuples up to [`MAX_ARITY`] elements are supported. All impls come from one recursive macro expansion.

use std::fmt;

use fnreflect_core::ValueCategory;

use crate::classify::{Classify, TypeToken};

/// Largest supported parameter count.
pub const MAX_ARITY: usize = 16;

/// Descriptor of a single parameter (or of a return type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamInfo {
    token: TypeToken,
    category: ValueCategory,
}

impl ParamInfo {
    pub fn of<T: Classify + ?Sized>() -> Self {
        Self {
            token: TypeToken::of::<T>(),
            category: T::CATEGORY,
        }
    }

    pub fn token(&self) -> TypeToken {
        self.token
    }

    pub fn type_name(&self) -> &'static str {
        self.token.name()
    }

    pub fn category(&self) -> ValueCategory {
        self.category
    }

    /// Exact-type check against `T`.
    pub fn is<T: Classify + ?Sized>(&self) -> bool {
        self.token.is::<T>()
    }
}

/// An ordered, compile-time list of parameter types.
pub trait ParamList {
    const COUNT: usize;

    /// Fixed-size storage produced by [`ParamList::param_infos`], always `[ParamInfo; COUNT]`.
    type Infos: AsRef<[ParamInfo]> + Send + Sync + fmt::Debug + 'static;

    fn param_infos() -> Self::Infos;
}

impl ParamList for () {
    const COUNT: usize = 0;
    type Infos = [ParamInfo; 0];

    fn param_infos() -> Self::Infos {
        []
    }
}

macro_rules! count {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count!($($tail)*) };
}

macro_rules! impl_param_list {
    () => {};
    ($head:ident $($tail:ident)*) => {
        impl<$head: Classify, $($tail: Classify),*> ParamList for ($head, $($tail,)*) {
            const COUNT: usize = count!($head $($tail)*);
            type Infos = [ParamInfo; count!($head $($tail)*)];

            fn param_infos() -> Self::Infos {
                [ParamInfo::of::<$head>(), $(ParamInfo::of::<$tail>()),*]
            }
        }

        impl_param_list!($($tail)*);
    };
}

impl_param_list!(A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 A11 A12 A13 A14 A15);
