mod geocode;
mod info;
mod options;

pub use geocode::*;
pub use info::*;
pub use options::*;
