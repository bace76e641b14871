#![no_main]
use fen_mirror::fen::Fields;
use fen_mirror::mirror_fen;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(fields) = Fields::try_from(input) else {
        assert!(mirror_fen(input).is_err());
        return;
    };
    let mirrored = mirror_fen(input).expect("inputs with 3 fields are accepted");
    // Any other side to move collapses into "b" and can not be restored.
    if fields.side_to_move == "w" || fields.side_to_move == "b" {
        assert_eq!(mirror_fen(&mirrored).unwrap(), input);
    }
});
