pub mod metadata;
pub mod pipeline;
pub mod schedule;
pub mod upload;
