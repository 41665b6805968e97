//! Serializable snapshot of a descriptor, for tooling output.

use serde::Serialize;

use fnreflect_core::{categories, families};

use crate::function::Function;
use crate::params::ParamInfo;

/// One parameter or return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamSummary {
    pub category: &'static str,
    pub type_name: &'static str,
}

impl From<&ParamInfo> for ParamSummary {
    fn from(info: &ParamInfo) -> Self {
        Self {
            category: categories::as_str(info.category()),
            type_name: info.type_name(),
        }
    }
}

/// Owned, serializable view of a [`Function`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSummary {
    pub name: String,
    pub family: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    pub params: Vec<ParamSummary>,
    pub returns: ParamSummary,
    /// Hook modules that contributed a payload.
    pub extensions: Vec<&'static str>,
}

impl FunctionSummary {
    pub fn of(function: &dyn Function) -> Self {
        Self {
            name: function.name().to_string(),
            family: families::as_str(function.family()),
            class: function.class_type().map(|c| c.name()),
            params: function.params().iter().map(ParamSummary::from).collect(),
            returns: function.return_info().into(),
            extensions: function.user_data().iter().map(|e| e.module()).collect(),
        }
    }
}
