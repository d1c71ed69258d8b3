#![no_main]

use chaum_pedersen_modp::{GroupParameters, ProofTranscript, Verifier};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(proof) = ProofTranscript::from_bytes(data) {
        assert_eq!(ProofTranscript::from_bytes(&proof.to_bytes()).ok(), Some(proof.clone()));
        let verifier = Verifier::new(GroupParameters::toy());
        let _ = verifier.verify_transcript(proof.commitment(), &proof);
    }
});
