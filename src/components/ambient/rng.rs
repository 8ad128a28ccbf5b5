//! Randomness seam for the ambient scene.
//!
//! Every random draw goes through [`RngSource`], so tests can substitute a
//! fixed value sequence and assert exact post-spawn field values. The
//! deployed host uses [`JsRng`], backed by `Math.random`.

/// Uniform random source.
pub trait RngSource {
	/// Next uniform value in [0, 1).
	fn next_f64(&mut self) -> f64;

	/// Uniform value in [lo, hi).
	fn range(&mut self, lo: f64, hi: f64) -> f64 {
		lo + self.next_f64() * (hi - lo)
	}
}

/// Browser random source backed by `js_sys::Math::random`.
pub struct JsRng;

impl RngSource for JsRng {
	fn next_f64(&mut self) -> f64 {
		js_sys::Math::random()
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::RngSource;

	/// Replays a fixed value sequence, cycling when exhausted.
	pub struct CycleRng {
		values: Vec<f64>,
		at: usize,
	}

	impl CycleRng {
		pub fn new(values: &[f64]) -> Self {
			Self {
				values: values.to_vec(),
				at: 0,
			}
		}

		pub fn constant(value: f64) -> Self {
			Self::new(&[value])
		}
	}

	impl RngSource for CycleRng {
		fn next_f64(&mut self) -> f64 {
			let value = self.values[self.at % self.values.len()];
			self.at += 1;
			value
		}
	}
}
