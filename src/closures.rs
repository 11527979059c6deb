//! Closure values in three shapes: no captures, captured mutable state that
//! persists across calls, and parameter-only pure computation.

/// Invokes a closure that captures nothing.
pub fn greeting() -> String {
    let greet = || "a closure with no captured state".to_string();
    greet()
}

/// Returns a counter that owns its count. The count lives in the closure's
/// private environment: each call mutates it in place, so it persists for
/// the lifetime of the closure value rather than resetting per call.
/// Distinct counters own independent cells.
pub fn make_counter() -> impl FnMut() -> u64 {
    let mut count: u64 = 0;
    move || {
        count += 1;
        count
    }
}

/// Pure two-argument sum. No captures, no side effects, commutative.
pub fn sum_pair() -> impl Fn(i64, i64) -> i64 {
    |a, b| a + b
}

/// Pure three-argument sum.
pub fn sum_triple() -> impl Fn(i64, i64, i64) -> i64 {
    |a, b, c| a + b + c
}

/// Runs the closure walkthrough and returns its output lines.
pub fn demonstrate() -> Vec<String> {
    let mut lines = vec![greeting()];

    let mut tick = make_counter();
    lines.push(format!("counter inside closure: {}", tick()));
    lines.push(format!("counter inside closure: {}", tick()));

    let add = sum_pair();
    lines.push(format!("sum of 5 and 3: {}", add(5, 3)));

    let add3 = sum_triple();
    lines.push(format!("sum of 7, 2 and 3: {}", add3(7, 2, 3)));

    lines
}
