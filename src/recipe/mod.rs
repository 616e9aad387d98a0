pub mod accessories;
pub mod conversion;
pub mod raw;
pub mod record;

pub use accessories::*;
pub use conversion::*;
pub use raw::*;
pub use record::*;
