//! Error macros for lodestar

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::LodestarError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::LodestarError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a node that is not part of the graph
#[macro_export]
macro_rules! bail_unknown_node {
    ($node:expr) => {
        return Err($crate::error::LodestarError::unknown_node($node))
    };
}
