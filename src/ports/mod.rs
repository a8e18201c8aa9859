//! Port traits for the boundaries the wizard touches.
//!
//! Draft storage and attachment intake go through these traits so tests
//! can run against in-memory doubles. Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod id_gen;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
