#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary text as a WIF; errors are fine, panics are not.
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(ck) = coinkey::CoinKey::from_wif(text) {
            let _ = ck.public_address();
            let again = coinkey::CoinKey::from_wif(&ck.private_wif()).ok();
            assert!(again.is_some_and(|k| k.private_key() == ck.private_key()));
        }
    }

    // Raw payloads wrapped in a valid checksum exercise the length and
    // compression-marker checks.
    let text = coinkey_crypto::encode_check(data);
    let _ = coinkey::CoinKey::from_wif(&text);
});
