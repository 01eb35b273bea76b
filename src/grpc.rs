//! gRPC transport — message types, the generated service, and the handler.
//!
//! Messages are declared as `prost::Message` structs and the service trait,
//! server, and client are generated by `tonic_build::manual` in `build.rs`
//! (standard protobuf wire format, no `.proto` file).
//!
//! ## RPCs
//!
//! - `CreateNote` — insert a note with a fresh timestamp, return it with the
//!   store-assigned id.
//! - `ReadNote` — fetch one note by id.
//! - `UpdateNote` — wholesale-replace the document behind an id.
//! - `DeleteNote` — remove the document behind an id.
//!
//! ## Example
//!
//! ```ignore
//! use notesvc::grpc;
//! use notesvc::store::MongoStore;
//!
//! let store = MongoStore::connect(&config).await?;
//! grpc::serve(store, addr, shutdown_signal()).await?;
//! ```

use std::future::Future;
use std::net::SocketAddr;

use mongodb::bson::oid::ObjectId;
use tonic::{Request, Response, Status};
use tracing::{error, info};

use crate::error::ServiceError;
use crate::note::NoteRecord;
use crate::store::NoteStore;

// ---------------------------------------------------------------------------
// Message types (prost — standard protobuf wire format)
// ---------------------------------------------------------------------------

/// A note as it crosses the wire. `id` is the hex rendering of the store's
/// ObjectId; `time` is stamped by the server, never by the caller.
#[derive(Clone, PartialEq, prost::Message)]
pub struct Note {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub title: String,
    #[prost(string, tag = "3")]
    pub note: String,
    #[prost(string, tag = "4")]
    pub time: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateNoteRequest {
    /// Only `title` and `note` are read; `id` and `time` are ignored.
    #[prost(message, optional, tag = "1")]
    pub note: Option<Note>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct CreateNoteResponse {
    #[prost(message, optional, tag = "1")]
    pub note: Option<Note>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReadNoteRequest {
    #[prost(string, tag = "1")]
    pub note_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct ReadNoteResponse {
    #[prost(message, optional, tag = "1")]
    pub note: Option<Note>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateNoteRequest {
    /// `id` selects the document; `title` and `note` replace it wholesale.
    #[prost(message, optional, tag = "1")]
    pub note: Option<Note>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct UpdateNoteResponse {
    #[prost(message, optional, tag = "1")]
    pub note: Option<Note>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteNoteRequest {
    #[prost(string, tag = "1")]
    pub note_id: String,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct DeleteNoteResponse {
    #[prost(bool, tag = "1")]
    pub done: bool,
}

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/notes.NotesService.rs"));

pub use notes_service_client::NotesServiceClient;
pub use notes_service_server::{NotesService, NotesServiceServer};

// ---------------------------------------------------------------------------
// Handler implementation
// ---------------------------------------------------------------------------

/// Request handler over an injected store.
///
/// Stateless apart from the store handle, which is read-only after
/// construction; tonic runs each request on its own task.
pub struct NotesHandler<S> {
    store: S,
}

impl<S> NotesHandler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[tonic::async_trait]
impl<S: NoteStore> NotesService for NotesHandler<S> {
    async fn create_note(
        &self,
        request: Request<CreateNoteRequest>,
    ) -> Result<Response<CreateNoteResponse>, Status> {
        let input = request
            .into_inner()
            .note
            .ok_or_else(|| Status::invalid_argument("note is required"))?;
        info!(title = %input.title, "creating a note");

        let record = NoteRecord::new(input.title, input.note);
        let oid = self.store.insert(&record).await.map_err(|e| {
            error!(error = %e, "insert failed");
            Status::from(ServiceError::Internal(e.to_string()))
        })?;

        info!(id = %oid.to_hex(), "note created");
        Ok(Response::new(CreateNoteResponse {
            note: Some(to_wire(oid, &record)),
        }))
    }

    async fn read_note(
        &self,
        request: Request<ReadNoteRequest>,
    ) -> Result<Response<ReadNoteResponse>, Status> {
        let req = request.into_inner();
        info!(id = %req.note_id, "reading a note");

        let oid = parse_note_id(&req.note_id)?;
        // A failed lookup is not distinguished from a missing document.
        let record = match self.store.find(oid).await {
            Ok(Some(record)) => record,
            Ok(None) => return Err(ServiceError::NotFound(req.note_id).into()),
            Err(e) => {
                error!(error = %e, "lookup failed");
                return Err(ServiceError::NotFound(format!("{}: {}", req.note_id, e)).into());
            }
        };

        Ok(Response::new(ReadNoteResponse {
            note: Some(to_wire(oid, &record)),
        }))
    }

    async fn update_note(
        &self,
        request: Request<UpdateNoteRequest>,
    ) -> Result<Response<UpdateNoteResponse>, Status> {
        let input = request
            .into_inner()
            .note
            .ok_or_else(|| Status::invalid_argument("note is required"))?;
        info!(id = %input.id, "updating a note");

        let oid = parse_note_id(&input.id)?;
        let record = NoteRecord::new(input.title, input.note);
        let matched = self.store.replace(oid, &record).await.map_err(|e| {
            error!(error = %e, "replace failed");
            Status::from(ServiceError::Internal(e.to_string()))
        })?;
        if matched == 0 {
            return Err(ServiceError::NotFound(input.id).into());
        }

        Ok(Response::new(UpdateNoteResponse {
            note: Some(to_wire(oid, &record)),
        }))
    }

    async fn delete_note(
        &self,
        request: Request<DeleteNoteRequest>,
    ) -> Result<Response<DeleteNoteResponse>, Status> {
        let req = request.into_inner();
        info!(id = %req.note_id, "deleting a note");

        let oid = parse_note_id(&req.note_id)?;
        // Store failures on delete collapse into not-found, like reads do.
        let deleted = match self.store.delete(oid).await {
            Ok(count) => count,
            Err(e) => {
                error!(error = %e, "delete failed");
                return Err(ServiceError::NotFound(format!("{}: {}", req.note_id, e)).into());
            }
        };
        if deleted == 0 {
            return Err(ServiceError::NotFound(req.note_id).into());
        }

        info!(id = %req.note_id, "note deleted");
        Ok(Response::new(DeleteNoteResponse { done: true }))
    }
}

/// Translate a caller-supplied id into the store's native form. Rejected
/// requests never reach the store.
fn parse_note_id(raw: &str) -> Result<ObjectId, Status> {
    ObjectId::parse_str(raw)
        .map_err(|e| ServiceError::InvalidId(format!("{}: {}", raw, e)).into())
}

fn to_wire(id: ObjectId, record: &NoteRecord) -> Note {
    Note {
        id: id.to_hex(),
        title: record.title.clone(),
        note: record.note.clone(),
        time: record.time.clone(),
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create a `NotesServiceServer` from an injected store.
pub fn notes_server<S: NoteStore>(store: S) -> NotesServiceServer<NotesHandler<S>> {
    NotesServiceServer::new(NotesHandler::new(store))
}

/// Bind and serve at the given address until `shutdown` resolves, then stop
/// accepting and let in-flight requests finish.
pub async fn serve<S, F>(
    store: S,
    addr: SocketAddr,
    shutdown: F,
) -> Result<(), tonic::transport::Error>
where
    S: NoteStore,
    F: Future<Output = ()>,
{
    tonic::transport::Server::builder()
        .add_service(notes_server(store))
        .serve_with_shutdown(addr, shutdown)
        .await
}
