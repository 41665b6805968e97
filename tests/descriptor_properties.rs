//! Behavioral properties of function descriptors.
//!
//! These lock in the observable contract of `Box<dyn Function>`: arity, category order, the zero-parameter case,
//! out-of-range queries, family detection and the stability of the extension payload.

use std::any::Any;
use std::sync::Arc;

use fnreflect::{
    Classify, Function, FunctionError, FunctionFactory, FunctionFamily, FunctionSignature, HookRegistry, MAX_ARITY,
    ValueCategory, hook_fn, new_function,
};
use proptest::prelude::*;

#[derive(Debug, Classify)]
struct Vector {
    x: f64,
    y: f64,
}

impl Vector {
    fn dot(&self, other_x: f64, other_y: f64) -> f64 {
        self.x * other_x + self.y * other_y
    }
}

fn dot(x: f64, y: f64) -> f64 {
    x * y
}

fn mixed(flag: bool, count: i32, label: String) -> f64 {
    if flag { f64::from(count) } else { label.len() as f64 }
}

macro_rules! arity {
    ($($p:ident)*) => {
        new_function("f", |$($p: u8),*| { $(let _ = $p;)* }).param_count()
    };
}

// =============================================================================
// Arity
// =============================================================================

#[test]
fn every_supported_arity_is_reported() {
    let counts = [
        arity!(),
        arity!(a),
        arity!(a b),
        arity!(a b c),
        arity!(a b c d),
        arity!(a b c d e),
        arity!(a b c d e f),
        arity!(a b c d e f g),
        arity!(a b c d e f g h),
        arity!(a b c d e f g h i),
        arity!(a b c d e f g h i j),
        arity!(a b c d e f g h i j k),
        arity!(a b c d e f g h i j k l),
        arity!(a b c d e f g h i j k l m),
        arity!(a b c d e f g h i j k l m n),
        arity!(a b c d e f g h i j k l m n o),
        arity!(a b c d e f g h i j k l m n o p),
    ];
    assert_eq!(counts.len(), MAX_ARITY + 1);
    for (expected, actual) in counts.into_iter().enumerate() {
        assert_eq!(actual, expected);
    }
}

/// Regression guard: "no parameters" must not be confused with "one unit parameter".
#[test]
fn zero_params_differs_from_one_unit_param() {
    let none = new_function("none", || 0u8);
    let unit = new_function("unit", |_: ()| 0u8);

    assert_eq!(none.param_count(), 0);
    assert!(none.params().is_empty());

    assert_eq!(unit.param_count(), 1);
    assert_eq!(unit.param_type(0), Ok(ValueCategory::None));
}

// =============================================================================
// Categories
// =============================================================================

#[test]
fn categories_follow_declaration_order() {
    let f = new_function("mixed", mixed);
    assert_eq!(f.param_type(0), Ok(ValueCategory::Boolean));
    assert_eq!(f.param_type(1), Ok(ValueCategory::Integer));
    assert_eq!(f.param_type(2), Ok(ValueCategory::String));
    assert_eq!(f.return_type(), ValueCategory::Real);

    assert!(f.param_info(0).unwrap().is::<bool>());
    assert!(f.param_info(2).unwrap().is::<String>());
    assert!(f.return_info().is::<f64>());
}

#[test]
fn out_of_range_carries_index_and_count() {
    let f = new_function("mixed", mixed);
    let count = f.param_count();
    for index in [count, count + 1, usize::MAX] {
        assert_eq!(f.param_type(index), Err(FunctionError::OutOfRange { index, count }));
    }
}

#[test]
fn same_signature_different_names() {
    let a = new_function("first", mixed);
    let b = new_function("second", mixed);

    assert_ne!(a.name(), b.name());
    assert_eq!(a.family(), b.family());
    assert_eq!(a.param_count(), b.param_count());
    assert_eq!(a.params(), b.params());
    assert_eq!(a.return_type(), b.return_type());
}

#[test]
fn member_and_free_differ_only_in_family() {
    let member = new_function("dot", Vector::dot);
    let free = new_function("dot", dot);

    assert_eq!(member.family(), FunctionFamily::MemberFunction);
    assert_eq!(free.family(), FunctionFamily::Function);
    assert_eq!(member.params(), free.params());
    assert_eq!(member.return_type(), free.return_type());

    let v = Vector { x: 1.0, y: 2.0 };
    assert_eq!(v.dot(3.0, 4.0), 11.0);
}

#[test]
fn reference_and_user_categories() {
    let f = new_function("wrap", |v: Vector| Arc::new(v));
    assert_eq!(f.param_type(0), Ok(ValueCategory::User));
    assert_eq!(f.return_type(), ValueCategory::Reference);
}

// =============================================================================
// Extension payload
// =============================================================================

fn arity_hook(_: &str, signature: &FunctionSignature<'_>, _: &dyn Any) -> usize {
    signature.param_count()
}

#[test]
fn user_data_is_built_once_and_stable() {
    let mut hooks = HookRegistry::new();
    hooks.register(hook_fn("arity", arity_hook)).unwrap();
    let factory = FunctionFactory::with_hooks(hooks);

    let f = factory.new_function("mixed", mixed);
    assert!(!f.user_data().is_empty());
    assert!(std::ptr::eq(f.user_data(), f.user_data()));

    let first = f.user_data().get::<usize>("arity").unwrap();
    let second = f.user_data().get::<usize>("arity").unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(*first, 3);
}

#[test]
fn no_hooks_means_empty_user_data() {
    let f = new_function("mixed", mixed);
    assert!(f.user_data().is_empty());
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn display_snapshots() {
    let rendered: Vec<String> = [
        new_function("mixed", mixed),
        new_function("dot", Vector::dot),
        new_function("names", |xs: &[String]| xs.len()),
    ]
    .iter()
    .map(|f| f.to_string())
    .collect();

    insta::assert_snapshot!(rendered.join("\n"), @r"
    mixed(boolean, integer, string) -> real
    Vector::dot(real, real) -> real
    names(array) -> integer
    ");
}

#[test]
fn descriptors_are_shareable_across_threads() {
    let f: Arc<dyn Function> = Arc::from(new_function("mixed", mixed));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let f = Arc::clone(&f);
            std::thread::spawn(move || (f.param_count(), f.return_type()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), (3, ValueCategory::Real));
    }
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Property: `param_type(i)` succeeds exactly for `i < param_count()`.
    #[test]
    fn param_type_in_range_iff_below_count(index in 0usize..64) {
        let f = new_function("mixed", mixed);
        let result = f.param_type(index);
        if index < f.param_count() {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result, Err(FunctionError::OutOfRange { index, count: 3 }));
        }
    }

    /// Property: building the same descriptor twice yields identical categories.
    #[test]
    fn construction_is_deterministic(name in "[a-z_]{1,12}") {
        let a = new_function(name.clone(), mixed);
        let b = new_function(name.clone(), mixed);
        prop_assert_eq!(a.name(), name.as_str());
        prop_assert_eq!(a.params(), b.params());
        prop_assert_eq!(a.return_info(), b.return_info());
    }
}
