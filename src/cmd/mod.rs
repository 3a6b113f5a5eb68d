pub mod batch;
pub mod ingest;
pub mod locate;
pub mod segments;
pub mod summary;
