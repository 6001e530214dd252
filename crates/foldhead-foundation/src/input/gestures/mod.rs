pub mod arbiter;
pub mod config;
pub mod delegation;
pub mod session;
pub mod source;

pub use arbiter::{settle_target, DragUpdate, GestureArbiter, InterceptCheck, SettleTarget};
pub use config::ArbiterConfig;
pub use delegation::DelegationHook;
pub use session::GestureSession;
pub use source::GestureSource;
