/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports only: the host calls the application layer
/// directly through the `Updater` facade.
pub mod outbound;
