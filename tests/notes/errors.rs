//! Error taxonomy over the wire: invalid-argument, not-found, and the
//! missing-message guards.

use notesvc::grpc::{
    CreateNoteRequest, DeleteNoteRequest, Note, ReadNoteRequest, UpdateNoteRequest,
};
use tonic::Code;

use crate::support::{create_note, start_server, UNKNOWN_ID};

#[tokio::test]
async fn create_without_a_note_is_invalid() {
    let mut client = start_server().await;

    let err = client
        .create_note(CreateNoteRequest { note: None })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn read_with_a_malformed_id_is_invalid() {
    let mut client = start_server().await;

    let err = client
        .read_note(ReadNoteRequest {
            note_id: "not-a-valid-id".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn read_with_an_unknown_id_is_not_found() {
    let mut client = start_server().await;

    let err = client
        .read_note(ReadNoteRequest {
            note_id: UNKNOWN_ID.to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
    assert!(err.message().contains(UNKNOWN_ID));
}

#[tokio::test]
async fn update_without_a_note_is_invalid() {
    let mut client = start_server().await;

    let err = client
        .update_note(UpdateNoteRequest { note: None })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn update_with_a_malformed_id_is_invalid() {
    let mut client = start_server().await;

    let err = client
        .update_note(UpdateNoteRequest {
            note: Some(Note {
                id: "nope".to_string(),
                title: "T2".to_string(),
                note: "B2".to_string(),
                ..Default::default()
            }),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn update_with_an_unknown_id_is_not_found() {
    let mut client = start_server().await;

    let err = client
        .update_note(UpdateNoteRequest {
            note: Some(Note {
                id: UNKNOWN_ID.to_string(),
                title: "T2".to_string(),
                note: "B2".to_string(),
                ..Default::default()
            }),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
}

#[tokio::test]
async fn delete_with_a_malformed_id_is_invalid() {
    let mut client = start_server().await;

    let err = client
        .delete_note(DeleteNoteRequest {
            note_id: "nope".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn delete_twice_reports_not_found_the_second_time() {
    let mut client = start_server().await;

    let created = create_note(&mut client, "T1", "B1").await;

    let first = client
        .delete_note(DeleteNoteRequest {
            note_id: created.id.clone(),
        })
        .await
        .unwrap()
        .into_inner();
    assert!(first.done);

    let err = client
        .delete_note(DeleteNoteRequest {
            note_id: created.id.clone(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), Code::NotFound);
}
