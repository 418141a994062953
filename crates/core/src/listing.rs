//! Raw directory listings produced by platform enumeration tools.
//!
//! Scanners shell out to `dir /s /b /ad` or `find -type d` and hand the
//! captured stdout over as-is. The catalog stores each line verbatim; only
//! surrounding whitespace and blank lines are dropped.

/// Split a newline-delimited listing into directory paths.
///
/// Order and duplicates are preserved.
pub fn parse_listing(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
