pub mod annotation;
pub mod record;
pub mod stage;

pub use annotation::*;
pub use record::*;
pub use stage::*;
