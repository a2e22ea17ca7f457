use ulid::{Generator, Ulid};

/// Hands out record identifiers. Ids are monotonic ULIDs, so an id is never
/// issued twice by the same process even after its record has been removed.
pub struct IdGenerator {
    inner: Generator,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    /// Draws ids until one is not claimed by `is_taken` (ids loaded from seed
    /// data are not ULIDs, but nothing stops a collision in principle).
    pub fn next(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        loop {
            let id = match self.inner.generate() {
                Ok(id) => id,
                Err(err) => {
                    tracing::warn!("Monotonic id space exhausted, falling back: {}", err);
                    Ulid::new()
                }
            }
            .to_string();

            if !is_taken(&id) {
                return id;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
