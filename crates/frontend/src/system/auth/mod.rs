pub mod context;
pub mod guard;
pub mod storage;

pub use context::{use_session, SessionProvider};
pub use guard::RequireSession;
