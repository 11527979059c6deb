//! Type-level members: an associated constant and a pure associated function,
//! both usable without ever constructing an instance.

/// Math helpers that live on the type itself. Process-wide, immutable after
/// initialization.
pub struct MathTable;

impl MathTable {
    /// Circle constant, to five decimals.
    pub const PI: f64 = 3.14159;

    /// Squares `x`. Pure: same input always yields the same output, and no
    /// shared state is touched.
    pub fn square(x: f64) -> f64 {
        x * x
    }
}

/// Runs the static-member walkthrough and returns its output lines.
pub fn demonstrate() -> Vec<String> {
    vec![
        format!("pi: {:?}", MathTable::PI),
        format!("square of 5: {:?}", MathTable::square(5.0)),
    ]
}
