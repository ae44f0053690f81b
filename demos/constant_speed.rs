use glide::{distance, Point3, SplineSolver};

fn main() {
    let mut solver = SplineSolver::catmull_rom(vec![
        Point3::new([-4.0, 0.0, 0.0]),
        Point3::new([0.0, 0.0, 0.0]),
        Point3::new([1.0, 3.0, 0.0]),
        Point3::new([6.0, 2.0, 0.0]),
        Point3::new([8.0, -1.0, 1.0]),
        Point3::new([12.0, 0.0, 0.0]),
    ])
    .with_subdivisions(16);

    if let Err(err) = solver.build_path() {
        eprintln!("cannot build path: {}", err);
        return;
    }
    println!("path length (approx): {:.5}", solver.path_length());

    let steps = 8;
    let mut prev_raw: Option<Point3<f64>> = None;
    let mut prev_even: Option<Point3<f64>> = None;
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let (raw, even) = match (solver.point(t), solver.point_on_path(t)) {
            (Ok(raw), Ok(even)) => (raw, even),
            (Err(err), _) | (_, Err(err)) => {
                eprintln!("sampling failed at t={}: {}", t, err);
                return;
            }
        };
        let raw_gap = prev_raw.map(|q| distance(raw, q));
        let even_gap = prev_even.map(|q| distance(even, q));
        match (raw_gap, even_gap) {
            (Some(r), Some(e)) => println!("t={:.3}  raw gap={:.4}  constant-speed gap={:.4}", t, r, e),
            _ => println!("t={:.3}  start={:?}", t, even),
        }
        prev_raw = Some(raw);
        prev_even = Some(even);
    }

    if let Err(err) = solver.close_path() {
        eprintln!("cannot close loop: {}", err);
        return;
    }
    match solver.build_path() {
        Ok(()) => println!("closed loop length (approx): {:.5}", solver.path_length()),
        Err(err) => eprintln!("cannot build closed loop: {}", err),
    }
}
