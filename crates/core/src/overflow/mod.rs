//! Overflow measurement for vertically constrained lists.
//!
//! Given a container holding rendered item boxes and an overflow indicator,
//! decide how many trailing items to hide so the rest fits. The algorithm
//! only sees box metrics through [`OverflowLayout`], so it works the same for
//! a terminal grid cell or any other box model.

mod measure;
mod observer;
mod stack;

pub use measure::{compute_overflow, overflow_label, OverflowLayout, ResizableLayout};
pub use observer::OverflowObserver;
pub use stack::StackLayout;
