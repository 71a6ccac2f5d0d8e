//! Writes the six `csv/pendulum_<method>_<scenario>.csv` fixtures from the
//! closed-form small-angle response of a damped (optionally driven)
//! pendulum, with a little per-method noise so the lines can be told apart.

use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pendulum_plot::config::INPUT_DIR;
use pendulum_plot::data::loader::file_path;
use pendulum_plot::data::model::{Method, Sample, Scenario};

// Physical parameters
const LENGTH: f64 = 1.0; // m
const MASS: f64 = 0.2; // kg
const DAMPING: f64 = 0.1; // N·s/m
const GRAVITY: f64 = 9.81; // m/s²

// Drive
const DRIVE_AMPLITUDE: f64 = 0.5; // rad/s²
const DRIVE_FREQ: f64 = 2.0; // rad/s

// Initial conditions and sampling
const THETA0: f64 = 0.2; // rad
const OMEGA0: f64 = 0.0; // rad/s
const T_END: f64 = 20.0; // s
const STEP: f64 = 0.01; // s

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
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Linearised response θ'' + 2γθ' + ω₀²θ = A·cos(Ωt).
struct Response {
    gamma: f64,
    damped_freq: f64,
    c1: f64,
    c2: f64,
    amplitude: f64,
    phase: f64,
}

impl Response {
    fn new(scenario: Scenario) -> Self {
        let gamma = DAMPING / (2.0 * MASS * LENGTH);
        let natural_sq = GRAVITY / LENGTH;
        let damped_freq = (natural_sq - gamma * gamma).sqrt();

        let drive = if scenario.is_forced() {
            DRIVE_AMPLITUDE
        } else {
            0.0
        };
        let detuning = natural_sq - DRIVE_FREQ * DRIVE_FREQ;
        let friction = 2.0 * gamma * DRIVE_FREQ;
        let amplitude = drive / (detuning * detuning + friction * friction).sqrt();
        let phase = friction.atan2(detuning);

        let c1 = THETA0 - amplitude * phase.cos();
        let c2 = (OMEGA0 + gamma * c1 - amplitude * DRIVE_FREQ * phase.sin()) / damped_freq;

        Response {
            gamma,
            damped_freq,
            c1,
            c2,
            amplitude,
            phase,
        }
    }

    fn at(&self, t: f64) -> (f64, f64) {
        let decay = (-self.gamma * t).exp();
        let (sin, cos) = (self.damped_freq * t).sin_cos();
        let drive_arg = DRIVE_FREQ * t - self.phase;

        let theta = decay * (self.c1 * cos + self.c2 * sin) + self.amplitude * drive_arg.cos();
        let omega = decay
            * ((self.damped_freq * self.c2 - self.gamma * self.c1) * cos
                - (self.damped_freq * self.c1 + self.gamma * self.c2) * sin)
            - self.amplitude * DRIVE_FREQ * drive_arg.sin();
        (theta, omega)
    }
}

fn noise_level(method: Method) -> f64 {
    match method {
        Method::Gauss => 2e-4,
        Method::Romberg => 5e-5,
        Method::Adaptive => 1e-5,
    }
}

fn main() -> Result<()> {
    let dir = Path::new(INPUT_DIR);
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let steps = (T_END / STEP).round() as usize;
    let mut rng = SimpleRng::new(42);

    for method in Method::ALL {
        for scenario in Scenario::ALL {
            let response = Response::new(scenario);
            let sigma = noise_level(method);
            let path = file_path(dir, method.id(), scenario);

            let mut writer = csv::Writer::from_path(&path)
                .with_context(|| format!("CSV: cannot open {}", path.display()))?;
            for i in 0..=steps {
                let t = i as f64 * STEP;
                let (theta, omega) = response.at(t);
                writer.serialize(Sample {
                    t,
                    theta: theta + rng.gauss(0.0, sigma),
                    omega: omega + rng.gauss(0.0, sigma),
                })?;
            }
            writer.flush()?;

            println!("Wrote {} samples to {}", steps + 1, path.display());
        }
    }
    Ok(())
}
