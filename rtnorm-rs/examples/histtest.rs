use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use rtnorm_rs::TruncatedNormal;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Lower truncation bound
    #[arg(short, allow_negative_numbers = true, default_value_t = 1.0)]
    a: f64,

    /// Upper truncation bound
    #[arg(short, allow_negative_numbers = true, default_value_t = 9.0)]
    b: f64,

    #[arg(long, allow_negative_numbers = true, default_value_t = 2.0)]
    mu: f64,

    #[arg(long, default_value_t = 3.0)]
    sigma: f64,

    /// Number of variates
    #[arg(short, long, default_value_t = 10000000)]
    nvariates: usize,

    /// Number of histogram bins
    #[arg(long, default_value_t = 100)]
    nbins: usize,
}

fn main() -> rtnorm_rs::Result<()> {
    let args = Args::parse();
    let dist = TruncatedNormal::new(args.mu, args.sigma, args.a, args.b)?;
    let mut rng = StdRng::seed_from_u64(0);

    let mut minv = f64::INFINITY;
    let mut maxv = f64::NEG_INFINITY;
    let variate: Vec<f64> = (0..args.nvariates)
        .map(|_| {
            let v = dist.sample_from(&mut rng);
            minv = minv.min(v);
            maxv = maxv.max(v);
            v
        })
        .collect();

    let binwidth = (maxv - minv) / args.nbins as f64;
    let mut bin = vec![0usize; args.nbins];
    for &v in &variate {
        let j = ((v - minv) / binwidth).floor() as usize;
        // the maximum lands on the upper edge
        bin[j.min(args.nbins - 1)] += 1;
    }

    // Bin center, observed count, expected count
    for (i, &count) in bin.iter().enumerate() {
        let x = binwidth * (i as f64 + 0.5) + minv;
        let expected = args.nvariates as f64 * binwidth * dist.pdf(x);
        println!("{} {} {}", x, count, expected);
    }
    Ok(())
}
