#![no_main]

use libfuzzer_sys::fuzz_target;
use secret_seal::{status, Status};

fuzz_target!(|input: (&str, &[u8], u16)| {
    let (key, plaintext, capacity) = input;
    let _ = status::init();

    let mut out = vec![0u8; usize::from(capacity)];
    let mut capacity = out.len();
    let code = status::seal(key, plaintext, &mut out, &mut capacity);

    match code {
        Status::Success => assert!(capacity <= out.len()),
        Status::BufferTooSmall => assert!(capacity > out.len()),
        _ => assert_eq!(capacity, out.len()),
    }
});
