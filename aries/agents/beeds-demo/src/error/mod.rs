mod convertors;
mod error_kind;
mod error_struct;
mod result;

pub use error_kind::AgentErrorKind;
pub use error_struct::AgentError;
pub use result::AgentResult;
