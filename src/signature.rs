//! Signature analysis: derive family, parameter list and return type from a callable's type.
//!
//! [`FunctionTraits`] is implemented for three shapes of callable, each selected by a distinct marker type:
//!
//! - [`FreeFn`]: any `Fn(A0, .., An) -> R` whose parameters are all [`Classify`] and whose first parameter is not a
//!   borrowed class. This covers free functions, receiver-less associated functions, methods taking `self` by value,
//!   function pointers and closures with annotated parameters.
//! - [`MemberFn`] / [`MemberMutFn`]: any `Fn(&C, A0, .., An) -> R` (or `&mut C`) where `C` is a reflected [`Class`].
//!   The receiver is not part of the parameter list; it is reported through [`FunctionTraits::class_type`].
//! - [`IsFunctor`]: user types implementing [`Functor`].
//!
//! The markers never overlap: a leading `&C` has the [`Receiver`](crate::classify::shape::Receiver) shape, which
//! free functions do not accept in first position, and closures do not implement [`Functor`]. Borrowed classes are
//! ordinary parameters anywhere after the first. Callers never name markers; they are inferred.
//!
//! A callable whose first argument borrows a class is always a member function, whether it was declared as a
//! method or not. A method taking `self` by value is indistinguishable from `fn(C, ..)` and is a free function.
//!
//! ## Notes
//! - Methods returning borrows of their receiver (`fn name(&self) -> &str`) are rejected: the return type must not
//!   depend on an argument lifetime.
//! - Callables must be `'static` so the extension hooks can inspect them as `&dyn Any`.

use std::marker::PhantomData;

use fnreflect_core::{FunctionFamily, ValueCategory};

use crate::classify::shape::Leading;
use crate::classify::{Class, Classify, TypeToken};
use crate::params::{ParamInfo, ParamList};

/// Compile-time traits of a describable callable.
///
/// Anything else fails to build. A plain value is not a callable:
///
/// ```compile_fail
/// let _ = fnreflect::new_function("five", 5u8);
/// ```
///
/// and a method whose return value borrows from the receiver has no single return type:
///
/// ```compile_fail
/// use fnreflect::{Classify, new_function};
///
/// #[derive(Classify)]
/// struct User {
///     name: String,
/// }
///
/// impl User {
///     fn name(&self) -> &str {
///         &self.name
///     }
/// }
///
/// let _ = new_function("name", User::name);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be described as a function",
    label = "not a supported function, method or functor",
    note = "supported shapes are `Fn(A..) -> R`, `Fn(&C, A..) -> R` for a `#[derive(Classify)]` struct `C`, \
            and types implementing `Functor`; every parameter and the return type must implement `Classify`"
)]
pub trait FunctionTraits<Marker>: 'static {
    const FAMILY: FunctionFamily;

    type Params: ParamList;
    type Return: Classify;

    /// Receiver class for member functions.
    fn class_type() -> Option<TypeToken> {
        None
    }
}

/// A user-defined callable object.
///
/// `Params` is the argument tuple (`()` for none); `Output` the return type.
pub trait Functor: 'static {
    type Params: ParamList;
    type Output: Classify;

    fn call(&self, args: Self::Params) -> Self::Output;
}

/// Marker for free functions and closures.
pub struct FreeFn<Args, R>(PhantomData<fn(Args) -> R>);

/// Marker for methods taking `&C`.
pub struct MemberFn<C, Args, R>(PhantomData<fn(&C, Args) -> R>);

/// Marker for methods taking `&mut C`.
pub struct MemberMutFn<C, Args, R>(PhantomData<fn(&mut C, Args) -> R>);

/// Marker for [`Functor`] implementors.
pub struct IsFunctor;

impl<F: Functor> FunctionTraits<IsFunctor> for F {
    const FAMILY: FunctionFamily = FunctionFamily::Functor;

    type Params = F::Params;
    type Return = F::Output;
}

macro_rules! impl_free_fn {
    () => {
        impl<Func, R> FunctionTraits<FreeFn<(), R>> for Func
        where
            Func: Fn() -> R + 'static,
            R: Classify,
        {
            const FAMILY: FunctionFamily = FunctionFamily::Function;

            type Params = ();
            type Return = R;
        }
    };
    ($A0:ident $($A:ident)*) => {
        impl<Func, R, $A0, $($A,)*> FunctionTraits<FreeFn<($A0, $($A,)*), R>> for Func
        where
            Func: Fn($A0, $($A),*) -> R + 'static,
            R: Classify,
            $A0: Classify,
            <$A0 as Classify>::Shape: Leading,
            ($A0, $($A,)*): ParamList,
        {
            const FAMILY: FunctionFamily = FunctionFamily::Function;

            type Params = ($A0, $($A,)*);
            type Return = R;
        }
    };
}

macro_rules! impl_function_traits {
    ($($A:ident)*) => {
        impl_free_fn!($($A)*);

        impl<Func, C, R, $($A,)*> FunctionTraits<MemberFn<C, ($($A,)*), R>> for Func
        where
            Func: Fn(&C, $($A),*) -> R + 'static,
            C: Class,
            R: Classify,
            ($($A,)*): ParamList,
        {
            const FAMILY: FunctionFamily = FunctionFamily::MemberFunction;

            type Params = ($($A,)*);
            type Return = R;

            fn class_type() -> Option<TypeToken> {
                Some(TypeToken::of::<C>())
            }
        }

        impl<Func, C, R, $($A,)*> FunctionTraits<MemberMutFn<C, ($($A,)*), R>> for Func
        where
            Func: Fn(&mut C, $($A),*) -> R + 'static,
            C: Class,
            R: Classify,
            ($($A,)*): ParamList,
        {
            const FAMILY: FunctionFamily = FunctionFamily::MemberFunction;

            type Params = ($($A,)*);
            type Return = R;

            fn class_type() -> Option<TypeToken> {
                Some(TypeToken::of::<C>())
            }
        }
    };
}

macro_rules! impl_all_arities {
    () => {
        impl_function_traits!();
    };
    ($head:ident $($tail:ident)*) => {
        impl_function_traits!($head $($tail)*);
        impl_all_arities!($($tail)*);
    };
}

impl_all_arities!(A0 A1 A2 A3 A4 A5 A6 A7 A8 A9 A10 A11 A12 A13 A14 A15);

/// Runtime view of a callable's signature.
///
/// Borrowed from a descriptor (or, during construction, from the parameter array being built) and handed to
/// extension hooks in place of the compile-time traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature<'a> {
    pub family: FunctionFamily,
    pub return_info: ParamInfo,
    pub params: &'a [ParamInfo],
    pub class_type: Option<TypeToken>,
}

impl FunctionSignature<'_> {
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    pub fn return_type(&self) -> ValueCategory {
        self.return_info.category()
    }

    /// Parameter categories in declaration order.
    pub fn param_types(&self) -> impl Iterator<Item = ValueCategory> + '_ {
        self.params.iter().map(ParamInfo::category)
    }
}

/// Build the runtime signature view for `F`, using `params` as the parameter storage.
pub(crate) fn signature_of<'a, F, M>(params: &'a [ParamInfo]) -> FunctionSignature<'a>
where
    F: FunctionTraits<M>,
{
    FunctionSignature {
        family: F::FAMILY,
        return_info: ParamInfo::of::<F::Return>(),
        params,
        class_type: F::class_type(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classify;

    #[allow(dead_code)]
    #[derive(Classify)]
    struct Counter {
        value: i64,
    }

    impl Counter {
        fn get(&self) -> i64 {
            self.value
        }

        fn add(&mut self, by: i64) {
            self.value += by;
        }

        fn absorb(&mut self, other: &Counter) {
            self.value += other.value;
        }

        fn into_value(self) -> i64 {
            self.value
        }
    }

    #[allow(clippy::ptr_arg)]
    fn total(values: &Vec<i32>) -> i32 {
        values.iter().sum()
    }

    struct Double;

    impl Functor for Double {
        type Params = (f64,);
        type Output = f64;

        fn call(&self, (x,): (f64,)) -> f64 {
            x * 2.0
        }
    }

    fn family_of<F: FunctionTraits<M>, M>(_: &F) -> FunctionFamily {
        F::FAMILY
    }

    fn arity_of<F: FunctionTraits<M>, M>(_: &F) -> usize {
        <F::Params as ParamList>::COUNT
    }

    fn len(s: &str) -> usize {
        s.len()
    }

    #[test]
    fn free_functions_and_closures() {
        assert_eq!(family_of(&len), FunctionFamily::Function);
        assert_eq!(arity_of(&len), 1);

        let closure = |a: i32, b: i32| a + b;
        assert_eq!(family_of(&closure), FunctionFamily::Function);
        assert_eq!(arity_of(&closure), 2);

        let pointer: fn() -> bool = || true;
        assert_eq!(family_of(&pointer), FunctionFamily::Function);
        assert_eq!(arity_of(&pointer), 0);
    }

    #[test]
    fn methods_drop_the_receiver() {
        assert_eq!(family_of(&Counter::get), FunctionFamily::MemberFunction);
        assert_eq!(arity_of(&Counter::get), 0);

        assert_eq!(family_of(&Counter::add), FunctionFamily::MemberFunction);
        assert_eq!(arity_of(&Counter::add), 1);
    }

    #[test]
    fn borrowed_parameters() {
        assert_eq!(family_of(&Counter::absorb), FunctionFamily::MemberFunction);
        assert_eq!(arity_of(&Counter::absorb), 1);

        assert_eq!(family_of(&total), FunctionFamily::Function);
        assert_eq!(arity_of(&total), 1);

        let scale = |values: &mut Vec<f64>, by: &f64| values.iter_mut().for_each(|v| *v *= by);
        assert_eq!(family_of(&scale), FunctionFamily::Function);
        assert_eq!(arity_of(&scale), 2);
    }

    #[test]
    fn by_value_self_is_a_free_function() {
        assert_eq!(family_of(&Counter::into_value), FunctionFamily::Function);
        assert_eq!(arity_of(&Counter::into_value), 1);
    }

    #[test]
    fn functor() {
        assert_eq!(family_of(&Double), FunctionFamily::Functor);
        assert_eq!(arity_of(&Double), 1);
        assert_eq!(Double.call((2.0,)), 4.0);
    }

    #[test]
    fn signature_view() {
        fn view<F: FunctionTraits<M>, M>(_: &F) -> (FunctionFamily, ValueCategory, Option<TypeToken>) {
            let infos = <F::Params as ParamList>::param_infos();
            let sig = signature_of::<F, M>(infos.as_ref());
            (sig.family, sig.return_type(), sig.class_type)
        }

        let (family, ret, class) = view(&Counter::get);
        assert_eq!(family, FunctionFamily::MemberFunction);
        assert_eq!(ret, ValueCategory::Integer);
        assert_eq!(class, Some(TypeToken::of::<Counter>()));

        let (_, ret, class) = view(&len);
        assert_eq!(ret, ValueCategory::Integer);
        assert_eq!(class, None);
    }
}
