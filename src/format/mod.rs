pub mod number;
pub mod resource;
pub mod spec;
