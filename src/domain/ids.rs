use uuid::Uuid;

/// Source of fresh task IDs
pub trait IdGenerator {
    /// Produce an ID that has never been returned before
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, hyphenated
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counts up from 1, for deterministic tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        self.next.to_string()
    }
}
