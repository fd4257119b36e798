//! Integer transport packing of quantized deltas.
//!
//! Signed series are ZigZag mapped (`0, -1, 1, -2, 2...` to `0, 1, 2, 3, 4...`)
//! so that small negative deltas stay small as unsigned integers.

use crate::errors::{Result, TrackError};

use super::{DeltaCodec, Sign};

fn zigzag(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

fn unzigzag(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

impl DeltaCodec {
    /// Packs stored deltas (output of [`DeltaCodec::encode`]) as unsigned
    /// integers. Deltas must be integral, i.e. produced with rounding.
    /// Negative deltas are an error for [`Sign::Unsigned`] codecs.
    pub fn pack(&self, deltas: &[f64]) -> Result<Vec<u64>> {
        deltas
            .iter()
            .enumerate()
            .map(|(index, &delta)| {
                if !delta.is_finite() || delta.fract() != 0.0 {
                    return Err(TrackError::NotQuantized { index, value: delta });
                }
                match self.sign {
                    Sign::Signed => Ok(zigzag(delta as i64)),
                    Sign::Unsigned if delta < 0.0 => {
                        Err(TrackError::NegativeDelta { index, delta })
                    }
                    Sign::Unsigned => Ok(delta as u64),
                }
            })
            .collect()
    }

    /// Reverses [`DeltaCodec::pack`] into stored deltas, ready for
    /// [`DeltaCodec::decode`].
    pub fn unpack(&self, packed: &[u64]) -> Vec<f64> {
        packed
            .iter()
            .map(|&p| match self.sign {
                Sign::Signed => unzigzag(p) as f64,
                Sign::Unsigned => p as f64,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zigzag_order() {
        let mapped = [0, -1, 1, -2, 2].map(zigzag);
        assert_eq!(mapped, [0, 1, 2, 3, 4]);
        assert_eq!([0, 1, 2, 3, 4].map(unzigzag), [0, -1, 1, -2, 2]);
        assert_eq!(unzigzag(zigzag(i64::MIN)), i64::MIN);
    }

    #[test]
    fn signed_packing_keeps_negatives() {
        let codec = DeltaCodec::AIRSPACE_TIME;
        let end_sec = [1200., 300., 900.];
        let packed = codec.pack(&codec.encode(&end_sec)).unwrap();
        assert_eq!(packed, vec![2400, 1799, 1200]);
        assert_eq!(codec.decode(&codec.unpack(&packed)), end_sec.to_vec());
    }

    #[test]
    fn unsigned_packing_rejects_negatives() {
        let codec = DeltaCodec::new(1.0, true, Sign::Unsigned).unwrap();
        assert_eq!(codec.pack(&[10., 5., 0.]).unwrap(), vec![10, 5, 0]);
        assert_eq!(
            codec.pack(&[10., -5.]),
            Err(TrackError::NegativeDelta { index: 1, delta: -5. })
        );
    }

    #[test]
    fn rejects_fractional_deltas() {
        let codec = DeltaCodec::TIME;
        assert_eq!(
            codec.pack(&codec.encode(&[0.0, 0.5])),
            Err(TrackError::NotQuantized { index: 1, value: 0.5 })
        );
    }
}
