#![no_main]
use libfuzzer_sys::fuzz_target;

use chroma::{parse, standard_registry};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let registry = standard_registry();

        let color = match parse(s, registry) {
            Ok(color) => color,
            Err(..) => return,
        };

        let text = color.as_text();
        let reparsed = parse(&text, registry)
            .unwrap_or_else(|_| panic!("{:?} was written as {:?}, which does not parse", s, text));

        assert_eq!(reparsed, color, "{:?} changed after writing it as {:?}", s, text);
        assert_eq!(reparsed.as_text(), text);
    }
});
