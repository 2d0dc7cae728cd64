//! Sizes and fixed values of the secp256k1-zkp byte formats

/// Length of a secret key, blind or nonce
pub const SECRET_KEY_SIZE: usize = 32;

/// Length of a SEC1 compressed public key
pub const PUBLIC_KEY_COMPRESSED_SIZE: usize = 33;

/// Length of a SEC1 uncompressed public key
pub const PUBLIC_KEY_UNCOMPRESSED_SIZE: usize = 65;

/// Length of a serialized Pedersen commitment
pub const COMMITMENT_SIZE: usize = 33;

/// Length of a compact ECDSA or Schnorr signature
pub const SIGNATURE_SIZE: usize = 64;

/// Upper bound of a classic range proof
pub const MAX_PROOF_SIZE: usize = 5134;

/// Upper bound of a single-value 64-bit bulletproof
pub const SINGLE_BULLET_PROOF_SIZE: usize = 675;

/// Message capacity of a bulletproof
pub const BULLET_PROOF_MSG_SIZE: usize = 16;

/// Message capacity of a classic range proof
pub const PROOF_MSG_SIZE: usize = 20;

/// Maximum number of rows in an MLSAG matrix
pub const MAX_MLSAG_ROWS: usize = 33;

/// Order `n` of the secp256k1 group, big-endian
pub const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// Uncompressed encoding of the value generator `H`
pub const GENERATOR_H: [u8; 65] = [
    0x04, 0x50, 0x92, 0x9b, 0x74, 0xc1, 0xa0, 0x49, 0x54, 0xb7, 0x8b, 0x4b, 0x60, 0x35, 0xe9, 0x7a,
    0x5e, 0x07, 0x8a, 0x5a, 0x0f, 0x28, 0xec, 0x96, 0xd5, 0x47, 0xbf, 0xee, 0x9a, 0xce, 0x80, 0x3a,
    0xc0, 0x31, 0xd3, 0xc6, 0x86, 0x39, 0x73, 0x92, 0x6e, 0x04, 0x9e, 0x63, 0x7c, 0xb1, 0xb5, 0xf4,
    0x0a, 0x36, 0xda, 0xc2, 0x8a, 0xf1, 0x76, 0x69, 0x68, 0xc3, 0x0c, 0x23, 0x13, 0xf3, 0xa3, 0x89,
    0x04,
];

/// Uncompressed encoding of the switch-commitment generator `J`,
/// `lift_x(SHA256(SHA256(G)))` with even `y`
pub const GENERATOR_J: [u8; 65] = [
    0x04, 0xb8, 0x60, 0xf5, 0x67, 0x95, 0xfc, 0x03, 0xf3, 0xc2, 0x16, 0x85, 0x38, 0x3d, 0x1b, 0x5a,
    0x2f, 0x29, 0x54, 0xf4, 0x9b, 0x7e, 0x39, 0x8b, 0x8d, 0x2a, 0x01, 0x93, 0x93, 0x36, 0x21, 0x15,
    0x5f, 0xa4, 0x3f, 0x09, 0xd3, 0x2c, 0xaa, 0x8f, 0x53, 0x42, 0x3f, 0x42, 0x74, 0x03, 0xa5, 0x6a,
    0x31, 0x65, 0xa5, 0xa6, 0x9a, 0x74, 0xcf, 0x56, 0xfc, 0x59, 0x01, 0xa2, 0xdc, 0xa6, 0xc5, 0xc4,
    0x3a,
];
