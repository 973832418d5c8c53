pub mod intensity;
pub mod tags;

pub use intensity::average_intensity;
pub use tags::*;
