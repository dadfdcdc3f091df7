pub mod error;
pub mod feedback;
pub mod loading;
pub mod quiz;
pub mod result;
pub mod start;
