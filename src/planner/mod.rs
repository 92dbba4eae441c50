pub mod assignment;
pub mod capacity;
pub mod selection;
pub mod service;
