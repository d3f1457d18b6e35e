//! Parser configuration for resource limits.
//!
//! [`ParseConfig`] travels by value inside every [`State`](crate::State), so
//! every combinator sees the same limits without any shared mutable handle.
//!
//! # Recursion Limits
//!
//! Recursive rules built with [`lazy`](crate::combinator::lazy) map nesting
//! depth directly onto the call stack. The engine has no trampolined
//! evaluation, so instead of overflowing the stack it stops with
//! [`InternalError::RecursionLimitExceeded`](crate::InternalError) once the
//! configured depth is passed. The default of 128 follows `serde_json`.
//!
//! # Example
//!
//! ```
//! use parsekit_core::ParseConfig;
//!
//! let config = ParseConfig::new()
//!     .with_max_recursion_depth(256)
//!     .with_max_tokens(1 << 20);
//! assert_eq!(config.max_recursion_depth, 256);
//! ```

/// Limits applied to a single parse invocation.
///
/// | Setting | Default | Rationale |
/// |---------|---------|-----------|
/// | `max_recursion_depth` | 128 | Matches serde_json default |
/// | `max_tokens` | `usize::MAX` | No limit by default |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum nesting of [`lazy`](crate::combinator::lazy) rules.
    ///
    /// Default: 128
    pub max_recursion_depth: usize,

    /// Maximum input length accepted by [`run_with`](crate::run_with).
    ///
    /// Default: `usize::MAX` (no limit)
    pub max_tokens: usize,
}

impl Default for ParseConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ParseConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        max_recursion_depth: 128,
        max_tokens: usize::MAX,
    };

    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum recursion depth. Use `usize::MAX` to disable the limit.
    #[inline]
    pub const fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Sets the maximum input length in tokens.
    #[inline]
    pub const fn with_max_tokens(mut self, count: usize) -> Self {
        self.max_tokens = count;
        self
    }

    /// Disables the recursion limit.
    ///
    /// # Warning
    ///
    /// Only use this with trusted input. Deeply nested input can then
    /// overflow the stack, which aborts the process.
    #[inline]
    pub const fn disable_recursion_limit(self) -> Self {
        self.with_max_recursion_depth(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_defaults() {
        let config = ParseConfig::default();
        assert_eq!(config.max_recursion_depth, 128);
        assert_eq!(config.max_tokens, usize::MAX);
        assert_eq!(config, ParseConfig::new());
    }

    #[test]
    fn test_parse_config_builder() {
        let config = ParseConfig::new()
            .with_max_recursion_depth(256)
            .with_max_tokens(10000);

        assert_eq!(config.max_recursion_depth, 256);
        assert_eq!(config.max_tokens, 10000);
    }

    #[test]
    fn test_parse_config_disable_recursion() {
        let config = ParseConfig::new().disable_recursion_limit();
        assert_eq!(config.max_recursion_depth, usize::MAX);
    }
}
