//! Value category vocabulary.
//!
//! A value category is the small, closed, runtime-observable classification of a Rust type. Descriptors report one
//! category per parameter and one for the return type; marshalling layers dispatch on it without knowing the
//! concrete type.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-insensitive ASCII**.
//! - The registry table is ordered by discriminant, so [`info_for`] is a direct index.
//!
//! ## Examples
//! ```rust
//! use fnreflect_core::categories::{self, ValueCategory};
//!
//! assert_eq!(categories::from_str("bool"), Some(ValueCategory::Boolean));
//! assert_eq!(categories::as_str(ValueCategory::Array), "array");
//! assert_eq!(ValueCategory::Real.to_string(), "real");
//! ```

use std::fmt;

use crate::registry::{self, Example, VocabInfo};

/// Closed set of runtime value categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueCategory {
    /// No value (`()`).
    None,
    Boolean,
    Integer,
    Real,
    String,
    Enum,
    /// Homogeneous sequence.
    Array,
    /// Shared handle to a reflected class instance.
    Reference,
    /// Reflected class instance held by value.
    User,
}

impl ValueCategory {
    /// Every category, in discriminant order.
    pub const ALL: [ValueCategory; 9] = [
        ValueCategory::None,
        ValueCategory::Boolean,
        ValueCategory::Integer,
        ValueCategory::Real,
        ValueCategory::String,
        ValueCategory::Enum,
        ValueCategory::Array,
        ValueCategory::Reference,
        ValueCategory::User,
    ];

    /// Return `true` for categories whose values are self-contained scalars.
    ///
    /// Strings and enums count as scalars; arrays, references and user objects do not.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            ValueCategory::Boolean
                | ValueCategory::Integer
                | ValueCategory::Real
                | ValueCategory::String
                | ValueCategory::Enum
        )
    }
}

impl fmt::Display for ValueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for a value category.
pub type CategoryInfo = VocabInfo<ValueCategory>;

/// Registry of value categories, ordered by discriminant.
pub const CATEGORIES: &[CategoryInfo] = &[
    info(
        ValueCategory::None,
        "none",
        &["void", "unit"],
        "Absence of a value. Only `()` maps here; a function with no parameters has an empty parameter list instead.",
        &[Example {
            code: "fn reset()",
            note: Some("Return category is `none`."),
        }],
    ),
    info(
        ValueCategory::Boolean,
        "boolean",
        &["bool"],
        "Truth value.",
        &[Example {
            code: "bool",
            note: None,
        }],
    ),
    info(
        ValueCategory::Integer,
        "integer",
        &["int"],
        "Signed or unsigned integer of any width, including `char`.",
        &[Example {
            code: "i32, u64, usize, char",
            note: None,
        }],
    ),
    info(
        ValueCategory::Real,
        "real",
        &["float", "double"],
        "Floating-point number.",
        &[Example {
            code: "f32, f64",
            note: None,
        }],
    ),
    info(
        ValueCategory::String,
        "string",
        &["str", "text"],
        "Owned or borrowed UTF-8 text.",
        &[Example {
            code: "String, &str, Box<str>, Cow<'_, str>",
            note: None,
        }],
    ),
    info(
        ValueCategory::Enum,
        "enum",
        &["enumeration"],
        "User enumeration registered with `#[derive(Classify)]`.",
        &[Example {
            code: "#[derive(Classify)] enum Color { Red, Green }",
            note: None,
        }],
    ),
    info(
        ValueCategory::Array,
        "array",
        &["sequence", "list"],
        "Homogeneous sequence of a classifiable element type.",
        &[Example {
            code: "Vec<T>, VecDeque<T>, [T; N], &[T]",
            note: Some("The element type must itself be classifiable."),
        }],
    ),
    info(
        ValueCategory::Reference,
        "reference",
        &["ref"],
        "Shared handle to an instance of a reflected class.",
        &[Example {
            code: "Arc<Point>, Rc<Point>",
            note: None,
        }],
    ),
    info(
        ValueCategory::User,
        "user",
        &["object", "class"],
        "Instance of a reflected class held by value.",
        &[Example {
            code: "#[derive(Classify)] struct Point { x: f64, y: f64 }",
            note: None,
        }],
    ),
];

/// Return the canonical spelling for a category (e.g. `"integer"`).
#[inline]
pub fn as_str(category: ValueCategory) -> &'static str {
    info_for(category).canonical
}

/// Return the user-facing description for a category.
#[inline]
pub fn description(category: ValueCategory) -> &'static str {
    info_for(category).description
}

/// Resolve a spelling (canonical or alias) to a category.
pub fn from_str(name: &str) -> Option<ValueCategory> {
    registry::lookup(CATEGORIES, name)
}

/// Return full metadata for a category.
#[inline]
pub fn info_for(category: ValueCategory) -> &'static CategoryInfo {
    &CATEGORIES[category as usize]
}

const fn info(
    id: ValueCategory,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    examples: &'static [Example],
) -> CategoryInfo {
    VocabInfo {
        id,
        canonical,
        aliases,
        description,
        examples,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_by_discriminant() {
        for (i, info) in CATEGORIES.iter().enumerate() {
            assert_eq!(info.id as usize, i, "registry out of order at {:?}", info.id);
        }
        assert_eq!(CATEGORIES.len(), ValueCategory::ALL.len());
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(from_str("INTEGER"), Some(ValueCategory::Integer));
        assert_eq!(from_str("Float"), Some(ValueCategory::Real));
        assert_eq!(from_str("pointer"), None);
    }

    #[test]
    fn scalars() {
        assert!(ValueCategory::String.is_scalar());
        assert!(ValueCategory::Enum.is_scalar());
        assert!(!ValueCategory::None.is_scalar());
        assert!(!ValueCategory::Array.is_scalar());
        assert!(!ValueCategory::User.is_scalar());
    }
}
