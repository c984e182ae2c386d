pub mod cli;
pub mod logging;
pub mod session;
pub mod state;

pub use session::{Flow, Session, SessionError};
pub use state::{AppConfig, AppState, StateError};
