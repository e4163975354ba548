#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must decode or fail cleanly, never panic.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(payload) = coinkey_crypto::decode_check(text) {
            // Anything that decodes must re-encode to a string that decodes
            // to the same payload.
            let again = coinkey_crypto::encode_check(&payload);
            assert_eq!(coinkey_crypto::decode_check(&again).ok(), Some(payload));
        }
    }

    // Any bytes must survive an encode/decode round trip.
    let text = coinkey_crypto::encode_check(data);
    assert_eq!(coinkey_crypto::decode_check(&text).ok().as_deref(), Some(data));
});
