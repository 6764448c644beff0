//! Object storage adapters implementing the `ImageStorage` port.

mod http_object_storage;

pub use http_object_storage::HttpObjectStorage;
