//! UUID-backed ID generator.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Generates random v4 UUIDs.
#[derive(Default)]
pub struct LiveIdGenerator;

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
