/// Movie identifiers are random (v4) UUIDs assigned by the server.
pub type MovieId = uuid::Uuid;
