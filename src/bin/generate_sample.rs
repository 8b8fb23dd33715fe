use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

/// One row in the layout of the public used-bikes dataset.
#[derive(Serialize)]
struct Row<'a> {
    bike_name: &'a str,
    price: f64,
    city: &'a str,
    kms_driven: f64,
    owner: &'a str,
    age: f64,
    power: f64,
    brand: &'a str,
}

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

    fn below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64) as usize % n
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }
}

/// (brand, model, engine size, new price)
const MODELS: &[(&str, &str, f64, f64)] = &[
    ("Bajaj", "Bajaj Pulsar 150cc", 150.0, 105_000.0),
    ("Bajaj", "Bajaj Avenger Street 220", 220.0, 125_000.0),
    ("Hero", "Hero Splendor Plus 100cc", 100.0, 70_000.0),
    ("Hero", "Hero Xtreme 200R", 200.0, 115_000.0),
    ("Honda", "Honda CB Shine 125cc", 125.0, 78_000.0),
    ("Honda", "Honda CB350", 350.0, 210_000.0),
    ("KTM", "KTM Duke 390cc", 390.0, 290_000.0),
    ("Royal Enfield", "Royal Enfield Classic 350cc", 350.0, 190_000.0),
    ("Royal Enfield", "Royal Enfield Himalayan 410cc", 410.0, 215_000.0),
    ("Suzuki", "Suzuki Gixxer 155cc", 155.0, 120_000.0),
    ("TVS", "TVS Apache RTR 160cc", 160.0, 112_000.0),
    ("Yamaha", "Yamaha YZF-R15 V3 150cc", 150.0, 165_000.0),
];

const CITIES: &[&str] = &["Delhi", "Bangalore", "Mumbai", "Pune", "Ahmedabad", "Chennai"];
const OWNERS: &[&str] = &["First Owner", "First Owner", "Second Owner", "Third Owner"];

fn main() -> Result<()> {
    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Used_Bikes.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let rows = 600;
    for _ in 0..rows {
        let &(brand, model, cc, new_price) = rng.pick(MODELS);
        let age = rng.below(12) as f64 + 1.0;
        let kms = (age * (4_000.0 + rng.next_f64() * 8_000.0)).round();
        // Roughly 9% value lost per year, plus some noise.
        let depreciation = 0.91f64.powf(age) * (0.85 + rng.next_f64() * 0.3);
        let price = (new_price * depreciation / 500.0).round() * 500.0;

        writer.serialize(Row {
            bike_name: model,
            price,
            city: *rng.pick(CITIES),
            kms_driven: kms,
            owner: *rng.pick(OWNERS),
            age,
            power: cc,
            brand,
        })?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {rows} listings to {}", output_path.display());
    Ok(())
}
