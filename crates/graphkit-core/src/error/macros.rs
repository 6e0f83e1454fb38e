//! Error macros for graphkit

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for returning a missing-node error
#[macro_export]
macro_rules! bail_node_not_found {
    ($id:expr) => {
        return Err($crate::error::GraphError::node_not_found($id))
    };
}

/// Macro for usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}
