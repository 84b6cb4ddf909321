pub mod guard;

pub use guard::{BlockedCommand, Guard, InputError, ToolInvocation};
