use std::fs;
use std::path::Path;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// A noisy circle of radius 3 around (5, 2) and a noisy line below it.
/// Rendered with equal aspect the circle must come out round.
fn generate_points(rng: &mut SimpleRng) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for i in 0..200 {
        let t = i as f64 / 200.0 * 2.0 * std::f64::consts::PI;
        let r = 3.0 + rng.gauss(0.0, 0.05);
        xs.push(5.0 + r * t.cos());
        ys.push(2.0 + r * t.sin());
    }
    for i in 0..50 {
        let x = i as f64 * 0.2;
        xs.push(x);
        ys.push(-2.5 + 0.1 * x + rng.gauss(0.0, 0.05));
    }

    (xs, ys)
}

fn write_csv(path: &Path, xs: &[f64], ys: &[f64]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["x", "y"])?;
    for (x, y) in xs.iter().zip(ys) {
        writer.write_record([format!("{x:.6}"), format!("{y:.6}")])?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let (xs, ys) = generate_points(&mut rng);

    let dir = Path::new("input");
    fs::create_dir_all(dir)?;
    fs::create_dir_all("output")?;

    let csv_path = dir.join("points.csv");
    write_csv(&csv_path, &xs, &ys)?;

    println!("Wrote {} points to {}", xs.len(), csv_path.display());
    Ok(())
}
