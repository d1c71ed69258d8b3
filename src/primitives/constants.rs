//! Embedded 1024-bit group with a 160-bit prime-order subgroup.
//!
//! The modulus, order and generator are the RFC 5114 §2.1 constants. The
//! second generator is derived as `beta = alpha^k mod p`.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::encoding::decode_hex;
use super::group::GroupParameters;
use super::rng::random_in_range;
use crate::Result;

/// 1024-bit prime modulus `p`.
const P_HEX: &str = "B10B8F96A080E01DDE92DE5EAE5D54EC52C99FBCFB06A3C69A6A9DCA52D23B61\
                     6073E28675A23D189838EF1E2EE652C013ECB4AEA906112324975C3CD49B83BF\
                     ACCBDD7D90C4BD7098488E9C219A73724EFFD6FAE5644738FAA31A4FF55BCCC0\
                     A151AF5F0DC8B4BD45BF37DF365C1A65E68CFDA76D4DA708DF1FB2BC2E4A4371";

/// 160-bit prime order `q` of the subgroup.
const Q_HEX: &str = "F518AA8781A8DF278ABA4E7D64B7CB9D49462353";

/// Generator `alpha` of the order-`q` subgroup.
const ALPHA_HEX: &str = "A4D1CBD5C3FD34126765A442EFB99905F8104DD258AC507FD6406CFF14266D31\
                         266FEA1E5C41564B777E690F5504F213160217B4B01B886A5E91547F9E2749F4\
                         D7FBD7D3B9A92EE1909D0D2263F80A76A6A24C087A091F531DBF0A0169B6A28A\
                         D662A4D18E73AFA32D779D5918D08BC8858F4DCEF97C2A24855E6EEB22B3B2E5";

/// Fixed demonstration exponent relating `beta` to `alpha`.
const DEMO_EXPONENT_HEX: &str = "266FEA1E5C41564B777E69";

/// Provides the embedded 1024-bit group.
pub struct ConstantsProvider;

impl ConstantsProvider {
    /// Builds the group with `beta` derived from the fixed demo exponent.
    ///
    /// Deterministic: every call returns identical parameters.
    pub fn generate() -> Result<GroupParameters> {
        let (p, q, alpha) = Self::decode_base()?;
        let k = decode_hex("exponent", DEMO_EXPONENT_HEX)?;
        Self::derive(p, q, alpha, &k)
    }

    /// Builds the group with `beta` derived from a fresh exponent in `[2, q)`.
    ///
    /// Exponents `0` and `1` are excluded because they would make `beta`
    /// the identity or equal to `alpha`.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<GroupParameters> {
        let (p, q, alpha) = Self::decode_base()?;
        let k = random_in_range(rng, &BigUint::from(2u32), &q);
        Self::derive(p, q, alpha, &k)
    }

    /// Decodes `(p, q, alpha)` from the embedded hex constants.
    pub fn decode_base() -> Result<(BigUint, BigUint, BigUint)> {
        Ok((
            decode_hex("p", P_HEX)?,
            decode_hex("q", Q_HEX)?,
            decode_hex("alpha", ALPHA_HEX)?,
        ))
    }

    fn derive(p: BigUint, q: BigUint, alpha: BigUint, k: &BigUint) -> Result<GroupParameters> {
        let beta = alpha.modpow(k, &p);
        debug!(modulus_bits = p.bits(), order_bits = q.bits(), "derived second generator");
        GroupParameters::new(p, q, alpha, beta)
    }
}
