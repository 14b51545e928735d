#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(mut parser) = derwalk::asn1::Parser::new(data) else {
        return;
    };

    let mut buf = [0u8; 256];
    while let Ok(token) = parser.read_token() {
        let _ = token.boolean();
        let _ = token.integer();
        let _ = token.bit_string(&mut buf);
        let _ = token.string(&mut buf);
        let _ = token.time();
        if let Ok(oid) = token.oid() {
            let mut text = [0u8; 128];
            let _ = oid.to_str(&mut text);
        }
    }
});
