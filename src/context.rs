//! Service context bundling the port trait objects.

use crate::adapters::live::{LiveClock, LiveFileSystem, LiveIdGenerator};
use crate::ports::{Clock, FileSystem, IdGenerator};

/// Bundles the ports used by the store and the attachment intake.
///
/// Constructed once per command and passed by reference.
pub struct ServiceContext {
    /// Filesystem for drafts and attachment metadata.
    pub fs: Box<dyn FileSystem>,
    /// Clock for attachment timestamps.
    pub clock: Box<dyn Clock>,
    /// ID generator for drafts and attachment handles.
    pub id_gen: Box<dyn IdGenerator>,
}

impl ServiceContext {
    /// Context wired to the real filesystem, system clock and UUIDs.
    #[must_use]
    pub fn live() -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            clock: Box::new(LiveClock),
            id_gen: Box::new(LiveIdGenerator),
        }
    }

    /// Context built from explicit port implementations.
    #[must_use]
    pub fn new(
        fs: Box<dyn FileSystem>,
        clock: Box<dyn Clock>,
        id_gen: Box<dyn IdGenerator>,
    ) -> Self {
        Self { fs, clock, id_gen }
    }
}
