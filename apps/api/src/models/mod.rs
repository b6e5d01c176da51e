pub mod job;
pub mod nullable;
pub mod page;
pub mod resume;
