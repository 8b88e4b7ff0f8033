use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Builder, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const N_ROWS: usize = 2000;

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

    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "credit_sample.parquet".to_string());
    let mut rng = SimpleRng::new(42);

    let mut ids = Vec::with_capacity(N_ROWS);
    let mut targets = Vec::with_capacity(N_ROWS);
    let mut genders = Vec::with_capacity(N_ROWS);
    let mut contracts = Vec::with_capacity(N_ROWS);
    let mut credit = Float64Builder::with_capacity(N_ROWS);
    let mut ext_source = Float64Builder::with_capacity(N_ROWS);

    for i in 0..N_ROWS {
        // Roughly 8% defaults, as in typical credit data.
        let defaulted = rng.chance(0.08);
        ids.push(100_000 + i as i64);
        targets.push(i64::from(defaulted));
        genders.push(if rng.chance(if defaulted { 0.45 } else { 0.35 }) { "M" } else { "F" });
        contracts.push(if rng.chance(0.9) { "Cash loans" } else { "Revolving loans" });

        if rng.chance(0.02) {
            credit.append_null();
        } else {
            let log_amount = rng.gauss(if defaulted { 12.9 } else { 13.1 }, 0.6);
            credit.append_value(log_amount.exp().round());
        }

        // EXT_SOURCE_1 is mostly missing; lower for defaulters.
        if rng.chance(0.55) {
            ext_source.append_null();
        } else {
            let score = rng.gauss(if defaulted { 0.38 } else { 0.51 }, 0.2);
            ext_source.append_value(score.clamp(0.0, 1.0));
        }
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("SK_ID", DataType::Int64, false),
        Field::new("TARGET", DataType::Int64, false),
        Field::new("CODE_GENDER", DataType::Utf8, false),
        Field::new("NAME_CONTRACT_TYPE", DataType::Utf8, false),
        Field::new("AMT_CREDIT", DataType::Float64, true),
        Field::new("EXT_SOURCE_1", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from(ids)),
            Arc::new(Int64Array::from(targets)),
            Arc::new(StringArray::from(genders)),
            Arc::new(StringArray::from(contracts)),
            Arc::new(credit.finish()),
            Arc::new(ext_source.finish()),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(&output_path)
        .with_context(|| format!("creating {output_path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;

    println!("Wrote {N_ROWS} rows to {output_path}");
    Ok(())
}
