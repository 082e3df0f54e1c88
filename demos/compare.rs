use std::io::{self, BufRead, Write};

use faer::Mat;
use stationary::config::{SolveOptions, parse_tolerance};
use stationary::context::compare;
use stationary::matrix::DenseMatrix;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10x1 -  x2 + 2x3 =   6
    //  -x1 + 11x2 -  x3 =  25
    //  2x1 -  x2 + 10x3 = -11
    let a: Mat<f64> =
        DenseMatrix::from_rows(&[[10.0, -1.0, 2.0], [-1.0, 11.0, -1.0], [2.0, -1.0, 10.0]])?;
    let b = vec![6.0, 25.0, -11.0];

    // tolerance from the first argument, otherwise ask for it
    let input = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            print!("Enter tolerance (e.g. 1e-4): ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };
    let tol = parse_tolerance(&input)?;

    let cmp = compare(&a, &b, &SolveOptions::new(tol))?;

    println!("\n=== Jacobi Method ===");
    println!("Approximate solution: {:?}", cmp.jacobi.x);
    println!("Iterations: {}", cmp.jacobi.iterations);

    println!("\n=== Gauss-Seidel Method ===");
    println!("Approximate solution: {:?}", cmp.gauss_seidel.x);
    println!("Iterations: {}", cmp.gauss_seidel.iterations);

    println!("\nComparison:");
    println!("{}", cmp.summary());

    println!("\nError convergence (log10 of step norm):");
    println!("{:>5} {:>12} {:>12}", "iter", "Jacobi", "Gauss-Seidel");
    let jac = cmp.jacobi.log10_history();
    let gs = cmp.gauss_seidel.log10_history();
    for k in 0..jac.len().max(gs.len()) {
        let cell = |v: Option<&f64>| v.map_or(String::new(), |e| format!("{e:.3}"));
        println!("{:>5} {:>12} {:>12}", k + 1, cell(jac.get(k)), cell(gs.get(k)));
    }
    Ok(())
}
