//! Error macros for pathfinder

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::PathfinderError::UsageError($msg.to_string()))
    };
}
