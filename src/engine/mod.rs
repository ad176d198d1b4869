pub mod calculation;
pub mod load;
pub mod uptime;

pub use load::LoadEngine;
