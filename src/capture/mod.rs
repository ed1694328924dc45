mod compare;
mod spec;
mod tools;
mod tshark;

pub use spec::CaptureSpec;
pub use tools::{CaptureTools, ExternalTools};
#[cfg(test)]
pub use compare::builtin_diff;
