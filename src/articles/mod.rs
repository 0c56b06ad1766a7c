// Article input: processed article records and raw line ingestion.

pub mod ingest;
pub mod models;
