pub mod phrases;
pub mod pipeline;
pub mod scoring;
pub mod session;
pub mod shared;
pub mod text;
