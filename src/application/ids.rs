// src/application/ids.rs

/// Source of unique note and tag identifiers.
pub trait IdGenerator {
    fn generate(&mut self) -> String;
}
