#[cfg(test)]
pub mod memory;
pub mod mongo;
pub mod traits;

pub use mongo::MongoStore;
pub use traits::{ListingStore, UpdateOutcome};
