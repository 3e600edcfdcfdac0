//! Command implementations

mod depunct;
pub use depunct::{DepunctArgs, TagFieldArg};

mod to_conllx;
pub use to_conllx::ToConllxArgs;
