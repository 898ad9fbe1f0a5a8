mod orm;
mod signal;

pub use orm::*;
pub use signal::*;
