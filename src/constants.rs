//! Codec defaults and tuning parameters.
//!
//! The wire format itself has no size or nesting limits; these are the
//! policies this crate applies when nothing else is configured.

// ============================================================================
// Decoding
// ============================================================================

/// Maximum container nesting accepted by the decoder unless overridden with
/// [`DecodeOptions::with_max_depth`](crate::bencode::DecodeOptions::with_max_depth).
pub const DEFAULT_MAX_DEPTH: usize = 64;

// ============================================================================
// Debug dump
// ============================================================================

/// Spaces added per nesting level in the debug dump.
pub const DUMP_INDENT: usize = 2;
