//! Shared harness: a live gRPC server backed by the in-memory store.

use notesvc::grpc::{notes_server, CreateNoteRequest, Note, NotesServiceClient};
use notesvc::store::MemoryStore;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Channel;

/// A well-formed ObjectId hex string that was never assigned by the store.
pub const UNKNOWN_ID: &str = "0123456789abcdef01234567";

/// Bind to port 0, spawn the gRPC server, and return a connected client.
pub async fn start_server() -> NotesServiceClient<Channel> {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let svc = notes_server(MemoryStore::new());
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(svc)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await
            .unwrap();
    });

    NotesServiceClient::connect(format!("http://{addr}"))
        .await
        .unwrap()
}

/// Create a note through the API and return the stored wire form.
pub async fn create_note(
    client: &mut NotesServiceClient<Channel>,
    title: &str,
    body: &str,
) -> Note {
    let resp = client
        .create_note(CreateNoteRequest {
            note: Some(Note {
                title: title.to_string(),
                note: body.to_string(),
                ..Default::default()
            }),
        })
        .await
        .unwrap()
        .into_inner();
    resp.note.unwrap()
}
