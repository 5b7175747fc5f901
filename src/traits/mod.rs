pub mod example_suite;
pub mod example_target;

pub use example_suite::{Example, ExampleKind, ExampleSuite};
pub use example_target::{ExampleTarget, SerializedForm};
