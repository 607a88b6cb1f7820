pub mod config;
pub mod error;
pub mod ics;
pub mod model;
pub mod onefootball;
pub mod pipeline;
