pub mod collector;
pub mod html_renderer;
pub mod report_builder;
pub mod store;
pub mod submitter;

pub use collector::Collector;
pub use store::ResultStore;
pub use submitter::Submitter;
