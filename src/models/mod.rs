pub mod category;
pub mod entry;
pub mod enums;

pub use category::*;
pub use entry::*;
pub use enums::*;
