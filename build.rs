fn main() {
    // Message types live in src/grpc.rs as prost structs; only the service
    // trait, server, and client are generated here.
    let service = tonic_build::manual::Service::builder()
        .name("NotesService")
        .package("notes")
        .method(
            tonic_build::manual::Method::builder()
                .name("create_note")
                .route_name("CreateNote")
                .input_type("crate::grpc::CreateNoteRequest")
                .output_type("crate::grpc::CreateNoteResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("read_note")
                .route_name("ReadNote")
                .input_type("crate::grpc::ReadNoteRequest")
                .output_type("crate::grpc::ReadNoteResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("update_note")
                .route_name("UpdateNote")
                .input_type("crate::grpc::UpdateNoteRequest")
                .output_type("crate::grpc::UpdateNoteResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("delete_note")
                .route_name("DeleteNote")
                .input_type("crate::grpc::DeleteNoteRequest")
                .output_type("crate::grpc::DeleteNoteResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);
}
