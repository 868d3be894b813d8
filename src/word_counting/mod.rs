/// Word counting core - pure domain model and services
///
/// Nothing in here touches the file system or the console; services work on
/// any `BufRead` so the whole pipeline runs against in-memory buffers.
pub mod domain;
pub mod services;
