#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(mut parser) = derwalk::asn1::Parser::new(data) else {
        return;
    };

    loop {
        match parser.read_token() {
            Ok(token) => {
                // Exercise both traversal paths: skip every other subtree.
                if !token.primitive && token.number % 2 == 0 {
                    parser.skip_children(&token);
                }
            }
            Err(_) => break,
        }
    }
});
