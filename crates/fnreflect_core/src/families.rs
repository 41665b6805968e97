//! Function family vocabulary.
//!
//! The family records the calling shape a descriptor was built from. It is decided entirely by trait resolution at
//! registration time; this module only provides the ids and their spellings.
//!
//! ## Examples
//! ```rust
//! use fnreflect_core::families::{self, FunctionFamily};
//!
//! assert_eq!(families::from_str("method"), Some(FunctionFamily::MemberFunction));
//! assert!(FunctionFamily::MemberFunction.has_receiver());
//! ```

use std::fmt;

use crate::registry::{self, Example, VocabInfo};

/// Closed set of callable shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunctionFamily {
    /// Free function, receiver-less associated function, closure or function pointer.
    Function,
    /// Callable whose first argument is `&C` or `&mut C` for a reflected class `C`.
    MemberFunction,
    /// User type implementing the `Functor` trait.
    Functor,
}

impl FunctionFamily {
    /// Every family, in discriminant order.
    pub const ALL: [FunctionFamily; 3] = [
        FunctionFamily::Function,
        FunctionFamily::MemberFunction,
        FunctionFamily::Functor,
    ];

    /// Return `true` if descriptors of this family carry a class receiver.
    pub const fn has_receiver(self) -> bool {
        matches!(self, FunctionFamily::MemberFunction)
    }
}

impl fmt::Display for FunctionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for a function family.
pub type FamilyInfo = VocabInfo<FunctionFamily>;

/// Registry of function families, ordered by discriminant.
pub const FAMILIES: &[FamilyInfo] = &[
    VocabInfo {
        id: FunctionFamily::Function,
        canonical: "function",
        aliases: &["free", "free_function", "closure"],
        description: "A callable taking only classifiable parameters and no borrowed receiver. \
                      Methods taking `self` by value belong here.",
        examples: &[
            Example {
                code: "fn add(a: i32, b: i32) -> i32",
                note: None,
            },
            Example {
                code: "fn into_len(self) -> f64",
                note: Some("A by-value receiver is an ordinary first parameter."),
            },
            Example {
                code: "|name: &str| name.len()",
                note: Some("Closures need annotated parameter types."),
            },
        ],
    },
    VocabInfo {
        id: FunctionFamily::MemberFunction,
        canonical: "member_function",
        aliases: &["method", "member"],
        description: "A callable whose receiver is a reflected class; the receiver is not listed as a parameter.",
        examples: &[Example {
            code: "fn length(&self) -> f64",
            note: Some("`&mut self` receivers are accepted as well."),
        }],
    },
    VocabInfo {
        id: FunctionFamily::Functor,
        canonical: "functor",
        aliases: &["callable", "function_object"],
        description: "A user type declaring its parameter and output types through the `Functor` trait.",
        examples: &[Example {
            code: "impl Functor for Scale { type Params = (f64,); type Output = f64; }",
            note: None,
        }],
    },
];

/// Return the canonical spelling for a family (e.g. `"functor"`).
#[inline]
pub fn as_str(family: FunctionFamily) -> &'static str {
    info_for(family).canonical
}

/// Return the user-facing description for a family.
#[inline]
pub fn description(family: FunctionFamily) -> &'static str {
    info_for(family).description
}

/// Resolve a spelling (canonical or alias) to a family.
pub fn from_str(name: &str) -> Option<FunctionFamily> {
    registry::lookup(FAMILIES, name)
}

/// Return full metadata for a family.
#[inline]
pub fn info_for(family: FunctionFamily) -> &'static FamilyInfo {
    &FAMILIES[family as usize]
}
