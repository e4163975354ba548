//! Nullable entropy: deterministic "random" bytes for testing.

use coinkey_crypto::EntropySource;
use coinkey_types::ConstructionError;
use std::sync::Mutex;

/// A deterministic entropy source for testing.
///
/// Returns pre-configured 32-byte values in order, wrapping around at the end.
pub struct NullEntropy {
    outputs: Vec<[u8; 32]>,
    index: Mutex<usize>,
}

impl NullEntropy {
    /// Create with a sequence of deterministic values.
    pub fn new(outputs: Vec<[u8; 32]>) -> Self {
        Self {
            outputs,
            index: Mutex::new(0),
        }
    }

    /// Create with a single value that will be returned for every call.
    pub fn constant(value: [u8; 32]) -> Self {
        Self::new(vec![value])
    }

    /// Number of fills served so far.
    pub fn calls(&self) -> usize {
        self.index.lock().map(|idx| *idx).unwrap_or(0)
    }
}

impl EntropySource for NullEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), ConstructionError> {
        if self.outputs.is_empty() {
            return Err(ConstructionError::EntropyUnavailable(
                "null entropy has no outputs".into(),
            ));
        }
        let mut idx = self
            .index
            .lock()
            .map_err(|_| ConstructionError::EntropyUnavailable("poisoned".into()))?;
        let current = &self.outputs[*idx % self.outputs.len()];
        *idx += 1;
        for (byte, src) in dest.iter_mut().zip(current.iter().cycle()) {
            *byte = *src;
        }
        Ok(())
    }
}

/// An entropy source that always fails, for exercising the no-fallback path.
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill(&self, _dest: &mut [u8]) -> Result<(), ConstructionError> {
        Err(ConstructionError::EntropyUnavailable(
            "entropy source disabled".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_outputs_in_order() {
        let entropy = NullEntropy::new(vec![[1u8; 32], [2u8; 32]]);
        let mut buf = [0u8; 32];
        entropy.fill(&mut buf).unwrap();
        assert_eq!(buf, [1u8; 32]);
        entropy.fill(&mut buf).unwrap();
        assert_eq!(buf, [2u8; 32]);
        entropy.fill(&mut buf).unwrap();
        assert_eq!(buf, [1u8; 32]);
        assert_eq!(entropy.calls(), 3);
    }

    #[test]
    fn empty_source_fails() {
        let entropy = NullEntropy::new(Vec::new());
        assert!(entropy.fill(&mut [0u8; 32]).is_err());
    }

    #[test]
    fn failing_source_fails() {
        assert!(matches!(
            FailingEntropy.fill(&mut [0u8; 32]),
            Err(ConstructionError::EntropyUnavailable(_))
        ));
    }
}
