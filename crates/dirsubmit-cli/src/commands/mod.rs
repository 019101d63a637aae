pub mod completion;
pub mod profile;
pub mod submit;
pub mod summary;
pub mod usage;
