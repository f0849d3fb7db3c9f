mod updater_factory;

pub use updater_factory::UpdaterFactory;
