// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Random sources for mock token generation

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Bytes at or above this are discarded so every character is equally likely
const ALPHANUMERIC_ZONE: u8 = (256 - 256 % ALPHANUMERIC.len()) as u8;

/// Source of random bytes for node ids and signatures
///
/// Injected into [`TokenIssuer`](super::TokenIssuer) so tests can pin the output.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` with random bytes
    fn fill_bytes(&self, dest: &mut [u8]);

    /// Random lowercase hex string of `len` characters
    fn hex(&self, len: usize) -> String {
        let mut bytes = vec![0u8; len.div_ceil(2)];
        self.fill_bytes(&mut bytes);
        let mut out: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        out.truncate(len);
        out
    }

    /// Random alphanumeric string of `len` characters
    ///
    /// Rejection-samples bytes, drawing more until `len` are accepted. A source
    /// that only ever yields bytes >= 248 never finishes.
    fn alphanumeric(&self, len: usize) -> String {
        let mut out = String::with_capacity(len);
        let mut bytes = vec![0u8; len];
        while out.len() < len {
            let missing = len - out.len();
            let bytes = &mut bytes[..missing];
            self.fill_bytes(bytes);
            out.extend(
                bytes
                    .iter()
                    .filter(|b| **b < ALPHANUMERIC_ZONE)
                    .map(|b| ALPHANUMERIC[*b as usize % ALPHANUMERIC.len()] as char),
            );
        }
        out
    }
}

/// Thread-local OS-seeded generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        rand::thread_rng().fill_bytes(dest);
    }
}

/// Deterministic generator for tests and reproducible demos
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Create a generator from a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.rng.lock().fill_bytes(dest);
    }
}
