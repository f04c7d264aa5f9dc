mod primitives;

pub use primitives::*;
