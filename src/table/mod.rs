//! Table Module
//!
//! Fixed-bucket chained hash table with tick-driven sliding TTL and
//! release callbacks.
//!
//! Chain storage is not part of the public surface:
//!
//! ```compile_fail
//! use ttl_hash::table::Bucket;
//! ```

mod bucket;
mod entry;
mod hash;
mod stats;
mod store;


// Chain internals stay crate-private; only the table and its stats are public
pub(crate) use bucket::Bucket;
pub(crate) use entry::Entry;
pub(crate) use hash::bucket_index;
pub use stats::TableStats;
pub use store::{EvictFn, TtlHash};
