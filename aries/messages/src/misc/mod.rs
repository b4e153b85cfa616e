mod mime_type;
pub(crate) mod utils;

pub use mime_type::MimeType;
