mod async_engine;
mod event;
#[cfg(test)]
mod tests;

pub use async_engine::AsyncEngine;
pub use event::{Action, Event};
