pub mod version_comparison;

pub use version_comparison::{ComponentVersion, VersionComparison};
