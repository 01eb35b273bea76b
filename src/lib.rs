//! notesvc — gRPC CRUD service for a single notes collection in MongoDB.
//!
//! The crate is three thin layers:
//!
//! - [`grpc`] — the `notes.NotesService` transport and request handler
//! - [`store`] — the `NoteStore` trait with Mongo and in-memory bindings
//! - [`note`] — the persisted document shape
//!
//! plus [`config`] for the env-derived runtime policy and [`error`] for the
//! invalid-argument / not-found / internal taxonomy.

pub mod config;
pub mod error;
pub mod grpc;
pub mod note;
pub mod store;

pub use config::Config;
pub use error::{ServiceError, StoreError};
pub use note::{NoteRecord, TIME_FORMAT};
pub use store::{MemoryStore, MongoStore, NoteStore};
