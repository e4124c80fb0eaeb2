//! SiteDeck engine: persistence and effect execution around the pure core.
mod codec;
mod dashboard;
mod kv;
mod persist;
mod registry_store;

pub use codec::{decode_sites, encode_sites, DecodeError};
pub use dashboard::{Dashboard, DashboardConfig};
pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use persist::{ensure_dir, AtomicFileWriter, PersistError};
pub use registry_store::{LoadOutcome, LoadSource, RegistryStore, SITES_KEY};
