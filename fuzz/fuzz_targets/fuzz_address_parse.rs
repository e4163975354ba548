#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(payload) = coinkey::parse_address(text) {
            assert_eq!(coinkey::parse_address(&payload.encode()), Ok(payload));
        }
    }

    let text = coinkey_crypto::encode_check(data);
    let _ = coinkey::parse_address(&text);
});
