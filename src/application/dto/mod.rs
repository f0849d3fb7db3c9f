/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod update_report;

pub use update_report::{ComponentState, ComponentStatus, UpdateReport};
