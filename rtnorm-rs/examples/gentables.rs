//! Print `src/tables.rs`.
//!
//! The stripes are rebuilt from the mode outward so that each one has the
//! same area under the standard normal density.

use std::f64::consts::PI;
use std::fmt::Debug;

const INVH: f64 = 1631.73284006;
/// Stripes left of the mode.
const MODE_CELL: usize = 1954;
/// Stripes right of the mode.
const RIGHT: usize = 2047;

fn phi(x: f64) -> f64 {
    (-x * x / 2.0).exp() / (2.0 * PI).sqrt()
}

fn print_array<T: Debug>(doc: &str, name: &str, ty: &str, vals: &[T], per_line: usize) {
    println!("/// {}", doc);
    println!("pub static {}: [{}; {}] = [", name, ty, vals.len());
    for row in vals.chunks(per_line) {
        let row: Vec<String> = row.iter().map(|v| format!("{:?}", v)).collect();
        println!("    {},", row.join(", "));
    }
    println!("];");
}

fn main() {
    let area = (1.0 / (2.0 * PI).sqrt()) / INVH;

    let mut x = vec![0.0f64; MODE_CELL + RIGHT + 1];
    for k in (0..MODE_CELL).rev() {
        x[k] = x[k + 1] - area / phi(x[k + 1]);
    }
    for k in MODE_CELL..MODE_CELL + RIGHT {
        x[k + 1] = x[k] + area / phi(x[k]);
    }
    let n = x.len() - 1;

    let yu: Vec<f64> = (0..n)
        .map(|k| if k < MODE_CELL { phi(x[k + 1]) } else { phi(x[k]) })
        .collect();

    let i0 = -(x[0] * INVH).floor() as i64;
    let ilast = i0 + (x[n] * INVH).floor() as i64;
    let mut ncell = Vec::with_capacity((ilast + 1) as usize);
    let mut k = 0usize;
    for i in 0..=ilast {
        let v = (i - i0) as f64 / INVH;
        while k + 1 < n && x[k + 1] <= v {
            k += 1;
        }
        ncell.push(k as u16);
    }

    println!("//! Stripe table for Chopin's truncated-normal sampler.");
    println!("//!");
    println!(
        "//! Generated by `cargo run -p rtnorm-rs --example gentables > rtnorm-rs/src/tables.rs`."
    );
    println!("//! Do not edit by hand.");
    println!("//!");
    println!("//! Every stripe has area `A = φ(0) / INVH`. Boundaries grow outward from the");
    println!("//! mode at `X[MODE_CELL] = 0`: leftward with `x_k = x_{{k+1}} - A / φ(x_{{k+1}})`,");
    println!("//! rightward with `x_{{k+1}} = x_k + A / φ(x_k)`.");
    println!();
    println!("/// Inverse of the narrowest stripe width (the stripes touching the mode).");
    println!("pub const INVH: f64 = {:?};", INVH);
    println!("/// Quantization offset, `-floor(X[0] * INVH)`.");
    println!("pub const I0: usize = {};", i0);
    println!("/// Number of stripes. As a cell index it names the tail beyond `X[N]`.");
    println!("pub const N: usize = {};", n);
    println!("/// First stripe to the right of the mode.");
    println!("pub const MODE_CELL: usize = {};", MODE_CELL);
    println!("/// Leftmost stripe boundary, `X[0]`.");
    println!("pub const XMIN: f64 = {:?};", x[0]);
    println!("/// Rightmost stripe boundary, `X[N]`.");
    println!("pub const XMAX: f64 = {:?};", x[n]);
    println!("/// Lower density envelope of the leftmost stripe, `φ(X[0])`.");
    println!("pub const YL_FIRST: f64 = {:?};", phi(x[0]));
    println!("/// Lower density envelope of the rightmost stripe, `φ(X[N])`.");
    println!("pub const YL_LAST: f64 = {:?};", phi(x[n]));
    println!();
    print_array("Stripe boundaries, strictly increasing.", "X", "f64", &x, 4);
    println!();
    print_array("Density upper bound of each stripe.", "YU", "f64", &yu, 4);
    println!();
    print_array(
        "Stripe containing the left edge of each quantization bucket.",
        "NCELL",
        "u16",
        &ncell,
        16,
    );
}
