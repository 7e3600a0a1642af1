// everything in here is independent of the DOM, so it can be exercised with
// plain cargo test on the host
pub mod config;
pub mod payload;
pub mod swipe;
pub mod upload;
pub mod view;
pub mod viewer;
