pub mod codec;
pub mod schema;

pub use codec::{decode, encode, read_document, write_document};
pub use schema::{SignalDocument, DOCUMENT_VERSION};
