//! Built-in analyzers
//!
//! Each one is a pure function over the program, its elaboration and the
//! shared inspector: no shared state is mutated, every check declares its
//! own node-kind filter, and findings go through the pass's report channel.

mod deprecated_key_functions;
mod missing_commas;
mod number_supertype;
mod reference_to_optional;
mod supertype_inference;

pub use deprecated_key_functions::{DEPRECATED_KEY_FUNCTIONS, DeprecatedKeyFunctions};
pub use missing_commas::{PARAMETER_LIST_MISSING_COMMAS, ParameterListMissingCommas};
pub use number_supertype::{NUMBER_SUPERTYPE_BINARY_OPERATIONS, NumberSupertypeBinaryOperations};
pub use reference_to_optional::{REFERENCE_TO_OPTIONAL, ReferenceToOptional};
pub use supertype_inference::{SUPERTYPE_INFERENCE, SupertypeInference};

use crate::error::AnalysisResult;
use crate::inspector::{INSPECTOR, InspectorAnalyzer};
use crate::registry::Registry;

/// Registry preloaded with the inspector and every built-in analyzer.
pub fn builtin_registry() -> AnalysisResult<Registry> {
    let mut registry = Registry::new();
    registry.register(INSPECTOR, InspectorAnalyzer)?;
    registry.register(REFERENCE_TO_OPTIONAL, ReferenceToOptional)?;
    registry.register(DEPRECATED_KEY_FUNCTIONS, DeprecatedKeyFunctions)?;
    registry.register(
        NUMBER_SUPERTYPE_BINARY_OPERATIONS,
        NumberSupertypeBinaryOperations,
    )?;
    registry.register(PARAMETER_LIST_MISSING_COMMAS, ParameterListMissingCommas)?;
    registry.register(SUPERTYPE_INFERENCE, SupertypeInference)?;
    Ok(registry)
}
