use nalgebra::DVector;
use rosenbrock::{Argument, OdeProblem, RhsFn};

/// Rate constants `k1..k25`
const K: [f64; 25] = [
    0.35, 26.6, 1.23e4, 8.6e-4, 8.2e-4, 1.5e4, 1.3e-4, 2.4e4, 1.65e4, 9e3, 0.022, 1.2e4, 1.88,
    1.63e4, 4.8e6, 3.5e-4, 0.0175, 1e8, 4.44e11, 1240.0, 2.1, 5.78, 0.0474, 1780.0, 3.12,
];

/// Chemical reaction part of the air pollution model of the Dutch National Institute of Public
/// Health, 20 species and 25 reactions.
pub fn pollution() -> OdeProblem<RhsFn> {
    fn rhs(_t: f64, y: &DVector<f64>, out: &mut DVector<f64>) {
        // y[i] is species y_{i+1}
        let rates = [
            K[0] * y[0],
            K[1] * y[1] * y[3],
            K[2] * y[4] * y[1],
            K[3] * y[6],
            K[4] * y[6],
            K[5] * y[6] * y[5],
            K[6] * y[8],
            K[7] * y[8] * y[5],
            K[8] * y[10] * y[1],
            K[9] * y[10] * y[0],
            K[10] * y[12],
            K[11] * y[9] * y[1],
            K[12] * y[13],
            K[13] * y[0] * y[5],
            K[14] * y[2],
            K[15] * y[3],
            K[16] * y[3],
            K[17] * y[15],
            K[18] * y[15],
            K[19] * y[16] * y[5],
            K[20] * y[18],
            K[21] * y[18],
            K[22] * y[0] * y[3],
            K[23] * y[18] * y[0],
            K[24] * y[19],
        ];
        // reaction rates are 1-based in the model description
        let r = |i: usize| rates[i - 1];

        out[0] = -(r(1) + r(10) + r(14) + r(23) + r(24))
            + (r(2) + r(3) + r(9) + r(11) + r(12) + r(22) + r(25));
        out[1] = -r(2) - r(3) - r(9) - r(12) + r(1) + r(21);
        out[2] = -r(15) + r(1) + r(17) + r(19) + r(22);
        out[3] = -r(2) - r(16) - r(17) - r(23) + r(15);
        out[4] = -r(3) + 2.0 * r(4) + r(6) + r(7) + r(13) + r(20);
        out[5] = -r(6) - r(8) - r(14) - r(20) + r(3) + 2.0 * r(18);
        out[6] = -r(4) - r(5) - r(6) + r(13);
        out[7] = r(4) + r(5) + r(6) + r(7);
        out[8] = -r(7) - r(8);
        out[9] = -r(12) + r(7) + r(9);
        out[10] = -r(9) - r(10) + r(8) + r(11);
        out[11] = r(9);
        out[12] = -r(11) + r(10);
        out[13] = -r(13) + r(12);
        out[14] = r(14);
        out[15] = -r(18) - r(19) + r(16);
        out[16] = -r(20);
        out[17] = r(20);
        out[18] = -r(21) - r(22) - r(24) + r(23) + r(25);
        out[19] = -r(25) + r(24);
    }

    let mut initial = DVector::zeros(20);
    for (i, y0) in [(1, 0.2), (3, 0.04), (6, 0.1), (7, 0.3), (8, 0.01), (16, 0.007)] {
        initial[i] = y0;
    }

    OdeProblem::new(
        "Pollution",
        Argument::new("t", 0.0, 60.0, 0.002),
        initial,
        rhs as RhsFn,
    )
    .with_tolerance(1e-6)
}
