use std::collections::HashSet;

/// Per-key in-flight guard for row-level mutations. Distinct keys run
/// concurrently; a second attempt on a key already in flight is refused.
#[derive(Clone, Debug, Default)]
pub struct BusyKeys(HashSet<String>);

impl BusyKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the key. Returns `false` when it is already in flight, in which
    /// case the caller must not start the mutation.
    pub fn try_begin(&mut self, key: &str) -> bool {
        if self.0.contains(key) {
            return false;
        }
        self.0.insert(key.to_string());
        true
    }

    pub fn finish(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn is_busy(&self, key: &str) -> bool {
        self.0.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_on_the_same_key_is_refused() {
        let mut busy = BusyKeys::new();
        assert!(busy.try_begin("EMP-1"));
        assert!(!busy.try_begin("EMP-1"));
        busy.finish("EMP-1");
        assert!(busy.try_begin("EMP-1"));
    }

    #[test]
    fn keys_are_independent() {
        let mut busy = BusyKeys::new();
        assert!(busy.try_begin("EMP-1"));
        assert!(busy.try_begin("EMP-2"));
        assert!(busy.is_busy("EMP-1"));
        assert!(busy.is_busy("EMP-2"));

        busy.finish("EMP-1");
        assert!(!busy.is_busy("EMP-1"));
        assert!(busy.is_busy("EMP-2"));
    }

    #[test]
    fn finishing_an_unknown_key_is_a_no_op() {
        let mut busy = BusyKeys::new();
        busy.finish("EMP-9");
        assert!(!busy.is_busy("EMP-9"));
    }
}
