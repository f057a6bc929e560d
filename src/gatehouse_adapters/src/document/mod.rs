pub mod in_memory_document;

pub use in_memory_document::InMemoryDocument;
