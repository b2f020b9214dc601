//! tests/legacy_tests.rs
//! Legacy CFB encryptor: keying, integrity calculator, stream behaviour

mod common;

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::Aes128;
use common::{pattern, RecordingBackend, FAKE_MASK, TEST_DATA, TEST_KEY_128};
use pgp_encryptor::{
    DataEncryptor, HashAlgorithm, PgpDataEncryptor, PgpDataEncryptorBuilder, PgpError,
    StreamState, SymmetricAlgorithm,
};
use std::io::Write;
use std::sync::Arc;

fn build(integrity: bool) -> PgpDataEncryptor {
    PgpDataEncryptorBuilder::new(SymmetricAlgorithm::Aes128)
        .unwrap()
        .with_integrity_packet(integrity)
        .build(&TEST_KEY_128)
        .unwrap()
}

fn encrypt(encryptor: PgpDataEncryptor, plaintext: &[u8]) -> Vec<u8> {
    let mut out = encryptor.wrap_output(Vec::new());
    out.write_all(plaintext).unwrap();
    out.finish().unwrap()
}

/// Plain CFB over a zero vector, one block at a time
fn reference_cfb(key: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes128::new(GenericArray::from_slice(key));
    let mut feedback = [0u8; 16];
    let mut out = Vec::with_capacity(plaintext.len());
    for block in plaintext.chunks(16) {
        let mut keystream = GenericArray::clone_from_slice(&feedback);
        cipher.encrypt_block(&mut keystream);
        let ct: Vec<u8> = block.iter().zip(keystream.iter()).map(|(p, k)| p ^ k).collect();
        feedback[..ct.len()].copy_from_slice(&ct);
        out.extend_from_slice(&ct);
    }
    out
}

#[test]
fn ciphertext_length_equals_plaintext_length() {
    for integrity in [false, true] {
        for len in [0usize, 1, 15, 16, 17, 18, 19, 100, 4096] {
            let ct = encrypt(build(integrity), &pattern(len));
            assert_eq!(ct.len(), len, "integrity={integrity} len={len}");
        }
    }
}

#[test]
fn integrity_mode_is_plain_cfb_over_zero_vector() {
    let plaintext = pattern(100);
    let ct = encrypt(build(true), &plaintext);
    assert_eq!(ct, reference_cfb(&TEST_KEY_128, &plaintext));
}

#[test]
fn openpgp_cfb_resyncs_after_prefix() {
    let plaintext = pattern(64);
    let resync = encrypt(build(false), &plaintext);
    let plain = reference_cfb(&TEST_KEY_128, &plaintext);

    // identical up to block_size + 2, diverging afterwards
    assert_eq!(&resync[..18], &plain[..18]);
    assert_ne!(&resync[18..34], &plain[18..34]);
}

#[test]
fn integrity_calculator_follows_flag() {
    assert!(build(false).integrity_calculator().is_none());

    let calc = build(true).integrity_calculator().unwrap();
    assert_eq!(calc.algorithm(), HashAlgorithm::Sha1);
}

#[test]
fn integrity_digest_is_deterministic() {
    let encryptor = build(true);
    let mut a = encryptor.integrity_calculator().unwrap();
    let mut b = encryptor.integrity_calculator().unwrap();
    a.update(TEST_DATA);
    b.write_all(TEST_DATA).unwrap();

    let digest = a.finish();
    assert_eq!(digest.len(), HashAlgorithm::Sha1.digest_len());
    assert_eq!(digest, b.finish());
}

#[test]
fn keying_uses_zero_vector_only_with_integrity() {
    for integrity in [false, true] {
        let backend = RecordingBackend::new();
        let encryptor = PgpDataEncryptorBuilder::new(SymmetricAlgorithm::Cast5)
            .unwrap()
            .with_integrity_packet(integrity)
            .with_backend(Arc::new(backend.clone()))
            .build(&[0x11; 16])
            .unwrap();
        assert_eq!(encryptor.block_size(), 8);

        let inits = backend.inits();
        assert_eq!(inits.len(), 1);
        assert_eq!(inits[0].with_integrity, integrity);
        assert_eq!(inits[0].key, vec![0x11; 16]);
        if integrity {
            assert_eq!(inits[0].iv.as_deref(), Some(&[0u8; 8][..]));
        } else {
            assert_eq!(inits[0].iv, None);
        }
    }
}

#[test]
fn plaintext_flows_through_cipher() {
    let backend = RecordingBackend::new();
    let encryptor = PgpDataEncryptorBuilder::new(SymmetricAlgorithm::Aes128)
        .unwrap()
        .with_backend(Arc::new(backend))
        .build(&TEST_KEY_128)
        .unwrap();

    let ct = encrypt(encryptor, TEST_DATA);
    let expected: Vec<u8> = TEST_DATA.iter().map(|b| b ^ FAKE_MASK).collect();
    assert_eq!(ct, expected);
}

#[test]
fn split_writes_match_single_write() {
    let plaintext = pattern(1000);
    let whole = encrypt(build(false), &plaintext);

    for split in [1usize, 7, 16, 17, 18, 333] {
        let mut out = build(false).wrap_output(Vec::new());
        for piece in plaintext.chunks(split) {
            out.write_all(piece).unwrap();
        }
        assert_eq!(out.finish().unwrap(), whole, "split={split}");
    }
}

#[test]
fn write_after_close_is_rejected() {
    let mut out = build(true).wrap_output(Vec::new());
    out.write_all(TEST_DATA).unwrap();
    out.close().unwrap();
    assert_eq!(out.state(), StreamState::Closed);

    let err = out.write(b"more").unwrap_err();
    assert!(matches!(PgpError::from_io(err), PgpError::StreamClosed));
    assert_eq!(out.get_ref().len(), TEST_DATA.len());

    // second close is a no-op
    out.close().unwrap();
}

#[test]
fn every_supported_cipher_streams() {
    for id in [2u8, 3, 4, 7, 8, 9, 10, 11, 12, 13] {
        let alg = SymmetricAlgorithm::try_from(id).unwrap();
        let encryptor = PgpDataEncryptorBuilder::new(alg)
            .unwrap()
            .build(&vec![0x33; alg.key_len()])
            .unwrap();
        assert_eq!(encryptor.block_size(), alg.block_size(), "{alg}");

        let ct = encrypt(encryptor, &pattern(50));
        assert_eq!(ct.len(), 50, "{alg}");
        assert_ne!(ct, pattern(50), "{alg}");
    }
}

#[test]
fn idea_is_unsupported_by_default_backend() {
    let err = PgpDataEncryptorBuilder::new(SymmetricAlgorithm::Idea)
        .unwrap()
        .build(&[0u8; 16])
        .unwrap_err();
    assert!(matches!(err, PgpError::UnsupportedAlgorithm(_)));
}

#[test]
fn cipher_failure_poisons_stream() {
    let backend = RecordingBackend {
        fail_process: true,
        ..RecordingBackend::new()
    };
    let mut out = PgpDataEncryptorBuilder::new(SymmetricAlgorithm::Aes128)
        .unwrap()
        .with_backend(Arc::new(backend))
        .build(&TEST_KEY_128)
        .unwrap()
        .wrap_output(Vec::new());

    let err = out.write(TEST_DATA).unwrap_err();
    match PgpError::from_io(err) {
        PgpError::StreamFault { chunk_index, .. } => assert_eq!(chunk_index, 0),
        other => panic!("expected stream fault, got {other:?}"),
    }
    assert_eq!(out.state(), StreamState::Failed);
    assert!(out.get_ref().is_empty());

    let err = out.write(b"more").unwrap_err();
    assert!(matches!(PgpError::from_io(err), PgpError::StreamClosed));
    assert!(matches!(out.close(), Err(PgpError::StreamClosed)));
}

#[test]
fn encryptor_debug_shows_configuration() {
    let shown = format!("{:?}", build(true));
    assert!(shown.contains("LegacyDataEncryptor"), "{shown}");
    assert!(shown.contains("with_integrity: true"), "{shown}");
    assert!(!shown.contains("cipher"), "{shown}");
}
