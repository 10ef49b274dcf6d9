pub mod forced;

pub use forced::ForcedSystem;
