use serde::{Deserialize, Serialize};

use trigproofs_core::constants::{HYPERBOLA_POINTS, HYPERBOLA_RENDER_RANGE_T};
use trigproofs_core::math::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HyperbolaForm {
    /// x² − y² = k
    #[serde(rename = "x^2-y^2=k")]
    XSquaredMinusYSquared,
    /// y² − x² = k
    #[serde(rename = "y^2-x^2=k")]
    YSquaredMinusXSquared,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperbola {
    pub form: HyperbolaForm,
    pub cx: f64,
    pub cy: f64,
    /// The `k` in the defining equation; kept strictly positive.
    pub constant_value: f64,
}

impl Hyperbola {
    pub fn new(form: HyperbolaForm, cx: f64, cy: f64, constant_value: f64) -> Self {
        Self {
            form,
            cx,
            cy,
            constant_value,
        }
    }

    /// Samples both branches parametrically over t ∈ [−range_t, range_t]
    /// using cosh/sinh, in world coordinates. The rendering layer connects
    /// each branch into a polyline.
    pub fn sample_branches(&self, range_t: f64, samples: usize) -> [Vec<Point>; 2] {
        let sqrt_k = self.constant_value.max(1e-4).sqrt();
        let step = (2.0 * range_t) / samples as f64;
        let mut primary = Vec::with_capacity(samples + 1);
        let mut mirror = Vec::with_capacity(samples + 1);

        for i in 0..=samples {
            let t = -range_t + i as f64 * step;
            match self.form {
                HyperbolaForm::XSquaredMinusYSquared => {
                    primary.push(Point::new(
                        self.cx + sqrt_k * t.cosh(),
                        self.cy + sqrt_k * t.sinh(),
                    ));
                    mirror.push(Point::new(
                        self.cx - sqrt_k * t.cosh(),
                        self.cy + sqrt_k * t.sinh(),
                    ));
                }
                HyperbolaForm::YSquaredMinusXSquared => {
                    primary.push(Point::new(
                        self.cx + sqrt_k * t.sinh(),
                        self.cy + sqrt_k * t.cosh(),
                    ));
                    mirror.push(Point::new(
                        self.cx + sqrt_k * t.sinh(),
                        self.cy - sqrt_k * t.cosh(),
                    ));
                }
            }
        }
        [primary, mirror]
    }

    /// Branch sampling with the default render range and density.
    pub fn default_branches(&self) -> [Vec<Point>; 2] {
        self.sample_branches(HYPERBOLA_RENDER_RANGE_T, HYPERBOLA_POINTS)
    }
}
