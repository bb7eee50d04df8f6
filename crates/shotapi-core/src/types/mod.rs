mod device;
mod options;
mod response;

pub use device::*;
pub use options::*;
pub use response::*;
