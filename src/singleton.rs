//! A process-wide singleton with lazy, at-most-once initialization.
//!
//! Construction is private, so the only way to reach a [`Coordinator`] is
//! through [`Coordinator::shared`]. Building one by hand does not compile:
//!
//! ```compile_fail
//! let rogue = scope_tour::singleton::Coordinator::new();
//! ```

use once_cell::sync::OnceCell;
use parking_lot::Mutex;

static SHARED: OnceCell<Coordinator> = OnceCell::new();

/// The one shared coordinator for the whole process.
///
/// Every call to [`Coordinator::shared`] returns a reference to the same
/// instance, so a mutation made through one reference is observable through
/// every other, obtained before or after the write.
#[derive(Debug)]
pub struct Coordinator {
    value: Mutex<i64>,
}

impl Coordinator {
    fn new() -> Self {
        Self {
            value: Mutex::new(0),
        }
    }

    /// Shared instance, created on first access. Initialization runs at most
    /// once even when the first accesses race across threads.
    pub fn shared() -> &'static Coordinator {
        SHARED.get_or_init(Coordinator::new)
    }

    pub fn set_value(&self, value: i64) {
        *self.value.lock() = value;
    }

    pub fn value(&self) -> i64 {
        *self.value.lock()
    }

    pub fn announce(&self) -> String {
        "coordinator is doing something".to_string()
    }
}

/// Runs the singleton walkthrough and returns its output lines.
pub fn demonstrate() -> Vec<String> {
    let first = Coordinator::shared();
    first.set_value(42);

    let second = Coordinator::shared();

    vec![
        format!("value through first reference: {}", first.value()),
        format!("value through second reference: {}", second.value()),
        format!(
            "references identical: {}",
            std::ptr::eq(first, second)
        ),
        second.announce(),
    ]
}
