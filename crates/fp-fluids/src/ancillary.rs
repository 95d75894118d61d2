//! Ancillary saturation-curve evaluation.

use crate::data::AncillaryCurve;

impl AncillaryCurve {
    /// Evaluate the curve at temperature `t` [K].
    ///
    /// Supported shapes, with theta = 1 - T/T_r and S = sum(n_i * theta^t_i):
    /// - `"pV"`, `"pL"`, `"rhoV"`: reducing_value * exp((T_r/T) * S)
    /// - `"rhoLnoexp"`: reducing_value * (1 + S)
    ///
    /// Unknown curve types evaluate to 0 so that callers can treat the
    /// curve as absent. The reducing temperature falls back to `Tmax`
    /// when the record carries none.
    pub fn evaluate(&self, t: f64) -> f64 {
        let t_r = if self.t_r > 0.0 { self.t_r } else { self.t_max };

        let theta = 1.0 - t / t_r;

        let mut sum = 0.0;
        for (n, e) in self.n.iter().zip(self.t.iter()) {
            sum += n * theta.powf(*e);
        }

        match self.kind.as_str() {
            "pV" | "pL" | "rhoV" => self.reducing_value * ((t_r / t) * sum).exp(),
            "rhoLnoexp" => self.reducing_value * (1.0 + sum),
            _ => 0.0,
        }
    }

    /// True when the record actually describes a curve.
    pub fn is_present(&self) -> bool {
        !self.n.is_empty() && self.reducing_value != 0.0
    }
}
