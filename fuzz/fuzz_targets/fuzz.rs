#![no_main]

use libfuzzer_sys::fuzz_target;
use lz77_container::{Container, decode};

/// Verifies that the decoder safely handles arbitrary, potentially malformed input.
///
/// # Invariants
/// * Never panics, whatever the bytes.
/// * Output never exceeds the declared size.
/// * `is_complete()` holds exactly when the output reached the declared size.
fn verify_decode_robustness(data: &[u8]) {
    let Ok((output, status)) = decode(data) else {
        assert!(Container::parse(data).is_err());
        return;
    };

    assert!(output.len() <= status.declared_size);
    assert_eq!(output.len(), status.produced);
    assert_eq!(status.is_complete(), output.len() == status.declared_size);
}

/// Verifies the literal-only round trip.
///
/// Masking every byte to 7 bits makes each one a literal token, so decoding a
/// container over them must reproduce them exactly.
fn verify_literal_round_trip(data: &[u8]) {
    let literals: Vec<u8> = data.iter().map(|b| b & 0x7F).collect();

    let mut container = Vec::with_capacity(16 + literals.len());
    container.extend_from_slice(b"LZ77");
    container.extend_from_slice(&(literals.len() as u32).to_le_bytes());
    container.extend_from_slice(&[0; 8]);
    container.extend_from_slice(&literals);

    match decode(&container) {
        Ok((output, status)) => {
            if output != literals || !status.is_complete() {
                panic!(
                    "Literal round-trip mismatch!\nInput len: {}\nDecoded len: {}",
                    literals.len(),
                    output.len()
                );
            }
        }
        Err(e) => panic!("Decoder rejected a well-formed container: {e:?}"),
    }
}

fuzz_target!(|data: &[u8]| {
    // 1. Robustness: arbitrary bytes, header included.
    verify_decode_robustness(data);

    // 2. Correctness: literal-only streams survive unchanged.
    verify_literal_round_trip(data);
});
