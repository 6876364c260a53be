//! Default values shared between config structs and their TOML representation.

/// Characters of context taken either side of a match start for scoring.
pub const DEFAULT_CONTEXT_WINDOW_CHARS: usize = 50;
