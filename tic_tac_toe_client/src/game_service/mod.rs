mod model;
mod service;

pub use model::{BoardView, StartForm};
pub use service::GameService;
