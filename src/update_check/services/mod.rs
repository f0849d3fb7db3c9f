mod cache_keys;
mod update_detector;

pub use cache_keys::CacheKeys;
pub use update_detector::UpdateDetector;
