use std::hash::{BuildHasher, Hasher};

/// A deliberately poor hasher: every hash is reduced modulo a small number of buckets so that
/// tests can force unequal values to collide.
#[derive(Debug)]
pub struct CollidingHasher {
    state: u64,
    buckets: u64,
}

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        self.state % self.buckets
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_mul(31).wrapping_add(*byte as u64);
        }
    }
}

/// Builds [`CollidingHasher`]s which map every value to one of `buckets` hashes. With a single
/// bucket, all values share the same hash.
#[derive(Debug, Clone, Copy)]
pub struct CollidingHasherBuilder {
    buckets: u64,
}

impl CollidingHasherBuilder {
    pub const fn new(buckets: u64) -> CollidingHasherBuilder {
        CollidingHasherBuilder {
            buckets: if buckets == 0 { 1 } else { buckets },
        }
    }
}

impl Default for CollidingHasherBuilder {
    fn default() -> Self {
        CollidingHasherBuilder::new(1)
    }
}

impl BuildHasher for CollidingHasherBuilder {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher {
            state: 0,
            buckets: self.buckets,
        }
    }
}
