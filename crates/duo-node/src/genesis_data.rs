//! Embedded genesis blobs: the TimeChain and ValueChain genesis
//! blocks, serialized per `duo-types`' fixed schema, plus their
//! expected tip hashes. Both are signed by a fixed genesis key pair
//! and dated `GENESIS_TIME`, produced once by the generator described
//! in [`crate::genesis`] and frozen here as byte constants so every
//! node boots from the same chain root.

/// `1_730_467_980 * 10^9` nanoseconds — the TimeChain genesis block's
/// `time` field, and the anchor time carried by the ValueChain
/// genesis block.
pub const GENESIS_TIME_NANOS: u64 = 1_730_467_980_000_000_000;

/// Serialized TimeChain genesis block (168 bytes, per `TIME_BLOCK_SIZE`).
pub const TIME_BLOCK_GENESIS_BYTES: [u8; 168] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x78, 0x16, 0x9b, 0x75, 0xdb, 0x03, 0x18, 0x0b, 0xdd, 0x79, 0xe1, 0xb2, 0x3d, 0xdd, 0x80,
    0xf6, 0x9d, 0xb1, 0x43, 0x90, 0x1e, 0xf1, 0x22, 0x8d, 0xb7, 0x8a, 0x6c, 0x50, 0x10, 0xc2, 0x99,
    0xff, 0xda, 0x64, 0x7c, 0xd1, 0xc8, 0xc4, 0xb9, 0x93, 0x12, 0x8a, 0x90, 0x49, 0x63, 0xc4, 0x39,
    0x75, 0x9f, 0xc5, 0x4a, 0x29, 0xb2, 0x03, 0x40, 0x29, 0xce, 0xf7, 0x2d, 0x3f, 0xcd, 0x36, 0x97,
    0x8a, 0xf7, 0xbf, 0xf7, 0xa5, 0x52, 0xc3, 0x91, 0xc8, 0xcb, 0x56, 0x16, 0x2b, 0x72, 0xd8, 0x4c,
    0x6f, 0x84, 0xcc, 0x98, 0x12, 0x1f, 0x18, 0xec, 0x80, 0xfb, 0xf4, 0x9e, 0x22, 0x60, 0xf1, 0x0c,
    0xba, 0x01, 0x22, 0xc3, 0xfe, 0x64, 0x58, 0xf0, 0x86, 0xe9, 0x10, 0xb5, 0xc6, 0xa1, 0x99, 0x77,
    0x77, 0x2c, 0xd4, 0x79, 0x34, 0xbe, 0x33, 0xd5, 0xcb, 0x4a, 0x31, 0xbb, 0x7a, 0x05, 0xbf, 0xde,
    0x7f, 0x86, 0x82, 0xfa, 0x7d, 0x36, 0x97, 0x26,
];

/// Expected SHA-256 hash of `TIME_BLOCK_GENESIS_BYTES` once decoded —
/// `86e910b5c6a19977772cd47934be33d5cb4a31bb7a05bfde7f8682fa7d36972`.
pub const TIME_BLOCK_GENESIS_HASH: [u8; 32] = [
    0x86, 0xe9, 0x10, 0xb5, 0xc6, 0xa1, 0x99, 0x77, 0x77, 0x2c, 0xd4, 0x79, 0x34, 0xbe, 0x33, 0xd5,
    0xcb, 0x4a, 0x31, 0xbb, 0x7a, 0x05, 0xbf, 0xde, 0x7f, 0x86, 0x82, 0xfa, 0x7d, 0x36, 0x97, 0x26,
];

/// Serialized ValueChain genesis block: one coinbase transaction
/// whose `data` is the UTF-8 bytes of `"First ValueChain Genesis
/// Block Reference"`, anchored to the TimeChain genesis block.
pub const VALUE_BLOCK_GENESIS_BYTES: [u8; 432] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x86, 0xe9, 0x10, 0xb5, 0xc6, 0xa1, 0x99, 0x77, 0x77, 0x2c, 0xd4, 0x79, 0x34, 0xbe, 0x33, 0xd5,
    0xcb, 0x4a, 0x31, 0xbb, 0x7a, 0x05, 0xbf, 0xde, 0x7f, 0x86, 0x82, 0xfa, 0x7d, 0x36, 0x97, 0x26,
    0x00, 0x78, 0x16, 0x9b, 0x75, 0xdb, 0x03, 0x18, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0xd8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0b, 0xdd, 0x79, 0xe1, 0xb2, 0x3d, 0xdd, 0x80,
    0xf6, 0x9d, 0xb1, 0x43, 0x90, 0x1e, 0xf1, 0x22, 0x8d, 0xb7, 0x8a, 0x6c, 0x50, 0x10, 0xc2, 0x99,
    0xff, 0xda, 0x64, 0x7c, 0xd1, 0xc8, 0xc4, 0xb9, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x28, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46, 0x69, 0x72, 0x73, 0x74, 0x20, 0x56, 0x61,
    0x6c, 0x75, 0x65, 0x43, 0x68, 0x61, 0x69, 0x6e, 0x20, 0x47, 0x65, 0x6e, 0x65, 0x73, 0x69, 0x73,
    0x20, 0x42, 0x6c, 0x6f, 0x63, 0x6b, 0x20, 0x52, 0x65, 0x66, 0x65, 0x72, 0x65, 0x6e, 0x63, 0x65,
    0x5f, 0x33, 0x8b, 0xdd, 0xca, 0xc9, 0xe1, 0xb1, 0x80, 0x2a, 0x78, 0x08, 0xa3, 0xca, 0xd5, 0x53,
    0x86, 0x34, 0xc6, 0xc5, 0x83, 0x16, 0xe0, 0xb6, 0x02, 0xf5, 0x8a, 0x0e, 0xf1, 0xc0, 0x61, 0xd8,
    0x22, 0xa2, 0x34, 0xff, 0x7f, 0x02, 0xe8, 0x31, 0xfd, 0x64, 0xdb, 0xb2, 0xbc, 0x6e, 0xa1, 0x8d,
    0xe7, 0x79, 0x6c, 0xab, 0xb9, 0x94, 0x32, 0xf6, 0x4c, 0x68, 0x02, 0xa1, 0x13, 0x6b, 0x85, 0xe4,
    0x44, 0x6e, 0x04, 0x02, 0x2c, 0x1d, 0x4a, 0x98, 0xf8, 0xa8, 0xa5, 0x09, 0x77, 0x58, 0x87, 0xe6,
    0x03, 0x58, 0xf4, 0xbc, 0xbc, 0x35, 0xf4, 0x6d, 0x67, 0x81, 0xcb, 0x3c, 0xde, 0x49, 0x7c, 0x0d,
    0x0b, 0xdd, 0x79, 0xe1, 0xb2, 0x3d, 0xdd, 0x80, 0xf6, 0x9d, 0xb1, 0x43, 0x90, 0x1e, 0xf1, 0x22,
    0x8d, 0xb7, 0x8a, 0x6c, 0x50, 0x10, 0xc2, 0x99, 0xff, 0xda, 0x64, 0x7c, 0xd1, 0xc8, 0xc4, 0xb9,
    0xd5, 0xc7, 0x15, 0xe7, 0xc1, 0xa3, 0x0a, 0x77, 0x84, 0xb4, 0xac, 0xe9, 0xc3, 0x60, 0x42, 0xf1,
    0x15, 0x84, 0x26, 0x0b, 0x0c, 0xb0, 0x52, 0x4d, 0xdb, 0x2f, 0xe6, 0xf9, 0x2b, 0x87, 0x77, 0x5b,
    0x09, 0xc6, 0xda, 0xbe, 0xb1, 0xb7, 0xd6, 0x7a, 0xe7, 0x40, 0xfe, 0x88, 0x52, 0x65, 0x22, 0x7c,
    0x92, 0xe5, 0x06, 0xb2, 0x94, 0xb6, 0x27, 0x71, 0x08, 0xf6, 0x21, 0x07, 0x8d, 0x37, 0xe6, 0x8b,
    0x1b, 0x85, 0x53, 0x49, 0xb7, 0xde, 0x0e, 0x23, 0x58, 0x34, 0xfc, 0x8e, 0x33, 0xf4, 0xbb, 0x00,
    0x1c, 0xf4, 0x52, 0x6c, 0x11, 0xfe, 0xb5, 0x8e, 0x3c, 0x50, 0x58, 0x80, 0xa3, 0x15, 0xa7, 0xcc,
];

/// Expected SHA-256 hash of `VALUE_BLOCK_GENESIS_BYTES` once decoded.
pub const VALUE_BLOCK_GENESIS_HASH: [u8; 32] = [
    0x1b, 0x85, 0x53, 0x49, 0xb7, 0xde, 0x0e, 0x23, 0x58, 0x34, 0xfc, 0x8e, 0x33, 0xf4, 0xbb, 0x00,
    0x1c, 0xf4, 0x52, 0x6c, 0x11, 0xfe, 0xb5, 0x8e, 0x3c, 0x50, 0x58, 0x80, 0xa3, 0x15, 0xa7, 0xcc,
];
