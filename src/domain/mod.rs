//! Domain logic - pure release rules independent of files and processes

pub mod changeset;
pub mod commit;
pub mod version;

pub use changeset::{ChangeSet, Section};
pub use commit::CommitRecord;
pub use version::{Version, VersionBump};
