//! Public description of a prime-order subgroup of `Z*_p`.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use super::encoding::{decode_hex, serde_hex};
use crate::{Error, Result};

/// Public group parameters `(p, q, alpha, beta)`.
///
/// `alpha` and `beta` both generate the order-`q` subgroup of `Z*_p`. The
/// exponent relating them is known only while the parameters are generated
/// and is never stored. Parameters are validated on construction and are
/// immutable afterwards, so they can be shared freely across threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct GroupParameters {
    p: BigUint,
    q: BigUint,
    alpha: BigUint,
    beta: BigUint,
}

impl GroupParameters {
    /// Creates validated group parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if:
    /// - `p <= 2` or `q <= 1`
    /// - `q` does not divide `p - 1`
    /// - either generator is not in `(1, p)`
    /// - the generators are equal
    /// - either generator does not have order `q`
    pub fn new(p: BigUint, q: BigUint, alpha: BigUint, beta: BigUint) -> Result<Self> {
        let two = BigUint::from(2u32);
        if p <= two {
            return Err(Error::InvalidParams("modulus p must exceed 2".to_string()));
        }
        if q <= BigUint::one() {
            return Err(Error::InvalidParams("order q must exceed 1".to_string()));
        }
        if !((&p - 1u32) % &q).is_zero() {
            return Err(Error::InvalidParams("q must divide p - 1".to_string()));
        }

        for (name, generator) in [("alpha", &alpha), ("beta", &beta)] {
            if *generator <= BigUint::one() || *generator >= p {
                return Err(Error::InvalidParams(format!(
                    "generator {name} must lie in (1, p)"
                )));
            }
            if !generator.modpow(&q, &p).is_one() {
                return Err(Error::InvalidParams(format!(
                    "generator {name} does not have order q"
                )));
            }
        }

        if alpha == beta {
            return Err(Error::InvalidParams(
                "generators alpha and beta must be different".to_string(),
            ));
        }

        Ok(Self { p, q, alpha, beta })
    }

    /// Parses and validates parameters from big-endian hex strings.
    pub fn from_hex(p: &str, q: &str, alpha: &str, beta: &str) -> Result<Self> {
        Self::new(
            decode_hex("p", p)?,
            decode_hex("q", q)?,
            decode_hex("alpha", alpha)?,
            decode_hex("beta", beta)?,
        )
    }

    /// The toy group `p = 23, q = 11, alpha = 4, beta = 9`.
    ///
    /// Only suitable for demonstrations and tests.
    pub fn toy() -> Self {
        Self {
            p: BigUint::from(23u32),
            q: BigUint::from(11u32),
            alpha: BigUint::from(4u32),
            beta: BigUint::from(9u32),
        }
    }

    /// Returns the modulus `p`.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Returns the subgroup order `q`.
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// Returns the first generator `alpha`.
    pub fn alpha(&self) -> &BigUint {
        &self.alpha
    }

    /// Returns the second generator `beta`.
    pub fn beta(&self) -> &BigUint {
        &self.beta
    }

    /// Returns true if `value` is a scalar in `[0, q)`.
    pub fn is_scalar(&self, value: &BigUint) -> bool {
        value < &self.q
    }

    /// Returns true if `value` is a candidate group element in `[1, p)`.
    pub fn is_element(&self, value: &BigUint) -> bool {
        !value.is_zero() && value < &self.p
    }

    /// Returns the bit length of the modulus.
    pub fn modulus_bits(&self) -> u64 {
        self.p.bits()
    }
}

#[derive(Serialize, Deserialize)]
struct RawParameters {
    #[serde(with = "serde_hex")]
    p: BigUint,
    #[serde(with = "serde_hex")]
    q: BigUint,
    #[serde(with = "serde_hex")]
    alpha: BigUint,
    #[serde(with = "serde_hex")]
    beta: BigUint,
}

impl TryFrom<RawParameters> for GroupParameters {
    type Error = Error;

    fn try_from(raw: RawParameters) -> Result<Self> {
        Self::new(raw.p, raw.q, raw.alpha, raw.beta)
    }
}

impl From<GroupParameters> for RawParameters {
    fn from(params: GroupParameters) -> Self {
        Self {
            p: params.p,
            q: params.q,
            alpha: params.alpha,
            beta: params.beta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u32) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn toy_group_is_valid() {
        let toy = GroupParameters::toy();
        let rebuilt = GroupParameters::new(n(23), n(11), n(4), n(9)).unwrap();
        assert_eq!(toy, rebuilt);
    }

    #[test]
    fn rejects_q_not_dividing_p_minus_one() {
        let err = GroupParameters::new(n(23), n(7), n(4), n(9)).unwrap_err();
        assert!(matches!(err, Error::InvalidParams(_)));
    }

    #[test]
    fn rejects_generator_of_wrong_order() {
        // 5 generates all of Z*_23, order 22.
        assert!(GroupParameters::new(n(23), n(11), n(5), n(9)).is_err());
    }

    #[test]
    fn rejects_equal_generators() {
        assert!(GroupParameters::new(n(23), n(11), n(4), n(4)).is_err());
    }

    #[test]
    fn rejects_out_of_range_generators() {
        assert!(GroupParameters::new(n(23), n(11), n(1), n(9)).is_err());
        assert!(GroupParameters::new(n(23), n(11), n(27), n(9)).is_err());
    }

    #[test]
    fn rejects_degenerate_modulus() {
        assert!(GroupParameters::new(n(2), n(1), n(1), n(1)).is_err());
    }

    #[test]
    fn from_hex_reports_decode_errors() {
        let err = GroupParameters::from_hex("17", "0B", "0G", "09").unwrap_err();
        assert!(matches!(err, Error::ParameterDecode { label: "alpha", .. }));
    }

    #[test]
    fn from_hex_builds_toy_group() {
        let params = GroupParameters::from_hex("17", "0B", "04", "09").unwrap();
        assert_eq!(params, GroupParameters::toy());
    }

    #[test]
    fn scalar_and_element_ranges() {
        let toy = GroupParameters::toy();
        assert!(toy.is_scalar(&n(0)));
        assert!(toy.is_scalar(&n(10)));
        assert!(!toy.is_scalar(&n(11)));
        assert!(!toy.is_element(&n(0)));
        assert!(toy.is_element(&n(22)));
        assert!(!toy.is_element(&n(23)));
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let json = serde_json::to_string(&GroupParameters::toy()).unwrap();
        assert!(json.contains("\"p\":\"17\""));
        let back: GroupParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GroupParameters::toy());

        let bad = json.replace("\"beta\":\"09\"", "\"beta\":\"04\"");
        assert!(serde_json::from_str::<GroupParameters>(&bad).is_err());
    }
}
