//! Known vectors and deterministic payload builders

/// A text input with its expected SHA-1 digest
#[derive(Debug, Clone, Copy)]
pub struct TestVector {
    pub name: &'static str,
    pub input: &'static str,
    pub expected_hex: &'static str,
}

/// Vectors shared by the integration tests and benches
pub const KNOWN_VECTORS: &[TestVector] = &[
    TestVector {
        name: "empty",
        input: "",
        expected_hex: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    TestVector {
        name: "1 byte",
        input: "A",
        expected_hex: "6dcd4ce23d88e2ee9568ba546c007c63d9131c1b",
    },
    TestVector {
        name: "2-byte character",
        input: "α",
        expected_hex: "6ebca356400287949b04fa5bf555e1981b80e784",
    },
    TestVector {
        name: "3-byte character",
        input: "漢",
        expected_hex: "4f9f9d6e98756181266931323ed898250182a5c5",
    },
    TestVector {
        name: "4-byte character",
        input: "\u{1F60D}",
        expected_hex: "a4019edcc896b89693ee04673c47510425be3c9f",
    },
    TestVector {
        name: "quick brown fox",
        input: "The quick brown fox jumps over the lazy dog",
        expected_hex: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
    },
    TestVector {
        name: "64 digits",
        input: "1234567890123456789012345678901234567890123456789012345678901234",
        expected_hex: "c71490fc24aa3d19e11282da77032dd9cdb33103",
    },
    TestVector {
        name: "palindrome",
        input: "Oh, wet Alex, a jar, a fag! Up, disk, curve by! Man Oz, Iraq, Arizona, my Bev? Ruck's id-pug, a far Ajax, elate? Who?",
        expected_hex: "8a6b5061c2724db215c1f23de00272f39bfa2cb5",
    },
    TestVector {
        name: "french pangram",
        input: "Le cœur déçu mais l'âme plutôt naïve, Louÿs rêva de crapaüter en canoë au delà des îles, près du mälströn où brûlent les novæ.",
        expected_hex: "4142d9c0caf72a8002e0da869dc26703269533be",
    },
    TestVector {
        name: "german pangram",
        input: "Victor jagt zwölf Boxkämpfer quer über den großen Sylter Deich.",
        expected_hex: "44a10786489a48d229b238b3290d3d750bc9b3a8",
    },
    TestVector {
        name: "spanish pangram",
        input: "El veloz murciélago hindú comía feliz cardillo y kiwi. La cigüeña tocaba el saxofón detrás del palenque de paja.",
        expected_hex: "475ae9798e1129a81c644ec3702cbbd98a24a455",
    },
];

/// Builder for deterministic binary payloads
#[derive(Debug, Clone)]
pub struct TestDataBuilder {
    size: usize,
    seed: u32,
}

impl TestDataBuilder {
    /// Create a new test data builder
    pub fn new() -> Self {
        Self { size: 0, seed: 1 }
    }

    /// Set payload size in bytes
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the generator seed
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed.max(1);
        self
    }

    /// Build the payload with a xorshift sequence
    pub fn build(self) -> Vec<u8> {
        let mut state = self.seed;
        (0..self.size)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            })
            .collect()
    }
}

impl Default for TestDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a deterministic payload of `size` bytes
pub fn generate_test_data(size: usize) -> Vec<u8> {
    TestDataBuilder::new().with_size(size).build()
}
