use faer::Mat;
use opalg::{
    CgnSolver, Element, LandweberSolver, LinearSolver, MatrixOperator, Op, Operator, Rn,
    RnVector, ScalingOperator, Space, power_method_opnorm,
};
use rand::Rng;

fn main() {
    let n = 64;
    let space = Rn::<f64>::new(n);

    // periodic gaussian blur
    let width = 2.0;
    let blur = Mat::from_fn(n, n, |i, j| {
        let d = (i as f64 - j as f64).abs();
        let d = d.min(n as f64 - d);
        (-(d * d) / (2.0 * width * width)).exp() / (width * (2.0 * std::f64::consts::PI).sqrt())
    });
    let a = Op::linear(MatrixOperator::new(blur));

    // box signal
    let x_true = space.element_from_fn(|i| if (n / 4..n / 2).contains(&i) { 1.0 } else { 0.0 });
    let mut data = a.call(&x_true).unwrap();
    let mut rng = rand::thread_rng();
    for v in data.as_mut_slice() {
        *v += 1e-3 * rng.gen_range(-1.0..1.0);
    }

    let norm = power_method_opnorm(&a, &space.full(1.0), 100).unwrap();
    println!("estimated ‖A‖ = {norm:.6}");

    let mut x = space.zero();
    let mut landweber = LandweberSolver::new(1.0 / (norm * norm), 1e-3, 500);
    let stats = landweber.solve(&a, &data, &mut x).unwrap();
    println!("landweber: stats = {stats:?}, error = {:.4e}", error(&x, &x_true));

    // Tikhonov-regularised normal operator AᵀA + λI, still linear
    let lambda = 1e-3;
    let regularised = a
        .adjoint()
        .unwrap()
        .compose(&a)
        .unwrap()
        .sum(&Op::self_adjoint(ScalingOperator::new(space.clone(), lambda)))
        .unwrap();
    let rhs = a.call_adjoint(&data).unwrap();
    let mut x = space.zero();
    let mut cgn = CgnSolver::new(1e-8, 200);
    let stats = cgn.solve(&regularised, &rhs, &mut x).unwrap();
    println!("cgn (tikhonov): stats = {stats:?}, error = {:.4e}", error(&x, &x_true));
}

fn error(x: &RnVector<f64>, x_true: &RnVector<f64>) -> f64 {
    let mut diff = x.clone();
    diff.axpy(-1.0, x_true);
    (diff.norm_sq() / x_true.norm_sq()).sqrt()
}
