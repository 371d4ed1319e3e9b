mod errors;
mod session;
mod session_actor;

pub use errors::SessionError;
pub use session::Session;
pub use session_actor::SessionActor;
