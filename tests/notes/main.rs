//! End-to-end tests for the notes gRPC service.
//!
//! A real tonic server runs over the in-memory store; every assertion goes
//! through the generated client.

mod support;

mod errors;
