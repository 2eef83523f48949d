pub mod cors;
pub mod middleware;
pub mod prometheus;
