//! Glaze CLI: samples an operator curve and prints the values.
//!
//! This is the golden-output harness: the same kernels the editor previews
//! and the compiler emits, evaluated on the host and dumped as CSV or a
//! table, so curve output can be pinned, diffed, and eyeballed.

use glaze_nodes::op::{CurveOp, Preview};
use glaze_nodes::{
    BiasGain, Contrast, Ease, EaseKind, Logistic, Parabola, Remap, SmoothStep, SmootherStep, Step,
    Terrace,
};
use std::error::Error;

#[derive(Debug, Default)]
struct Args {
    list_ops: bool,
    op: Option<String>,
    // threshold family
    low: Option<f32>,
    high: Option<f32>,
    // remap output range
    out_low: Option<f32>,
    out_high: Option<f32>,
    clamp: bool,
    // per-op extras
    ease: Option<String>,
    pivot: Option<f32>,
    strength: Option<f32>,
    steps: Option<u32>,
    smoothness: Option<f32>,
    bias: Option<f32>,
    gain: Option<f32>,
    sharpness: Option<f32>,
    k: Option<f32>,
    // sweep
    from: Option<f32>,
    to: Option<f32>,
    samples: Option<usize>,
    format: Option<String>,
}

fn parse_args() -> Args {
    let mut a = Args::default();
    for s in std::env::args().skip(1) {
        if s == "--list-ops" { a.list_ops = true; continue; }
        if s == "--clamp"    { a.clamp = true;    continue; }
        if let Some(rest) = s.strip_prefix("--op=")         { a.op         = Some(rest.to_string()); continue; }
        if let Some(rest) = s.strip_prefix("--low=")        { a.low        = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--high=")       { a.high       = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--out-low=")    { a.out_low    = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--out-high=")   { a.out_high   = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--ease=")       { a.ease       = Some(rest.to_string()); continue; }
        if let Some(rest) = s.strip_prefix("--pivot=")      { a.pivot      = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--strength=")   { a.strength   = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--steps=")      { a.steps      = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--smoothness=") { a.smoothness = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--bias=")       { a.bias       = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--gain=")       { a.gain       = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--sharpness=")  { a.sharpness  = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--k=")          { a.k          = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--from=")       { a.from       = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--to=")         { a.to         = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--samples=")    { a.samples    = rest.parse().ok();      continue; }
        if let Some(rest) = s.strip_prefix("--format=")     { a.format     = Some(rest.to_string()); continue; }
        eprintln!("[warn] unknown arg: {s}");
    }
    a
}

fn list_ops() {
    println!("Available operators:");
    println!("- smootherstep   quintic threshold remap (--low, --high)");
    println!("- smoothstep     cubic threshold remap (--low, --high)");
    println!("- step           hard step (--low as the edge)");
    println!("- remap          range remap (--low/--high in, --out-low/--out-high, --clamp)");
    println!("- ease           easing curve (--ease=<name>)");
    println!("- biasgain       Schlick bias+gain (--bias, --gain)");
    println!("- logistic       centered sigmoid (--sharpness)");
    println!("- parabola       power bump (--k)");
    println!("- contrast       pivot S-curve preset (--pivot, --strength)");
    println!("- terrace        banded steps preset (--steps, --smoothness)");
    println!();
    println!("Easing curves:");
    for kind in EaseKind::ALL {
        println!("- {}", kind.name());
    }
}

fn parse_ease(name: &str) -> Result<EaseKind, Box<dyn Error>> {
    EaseKind::ALL
        .into_iter()
        .find(|k| k.name() == name)
        .ok_or_else(|| format!("unknown easing curve: {name} (try --list-ops)").into())
}

fn make_op(a: &Args) -> Result<Box<dyn CurveOp>, Box<dyn Error>> {
    let name = a.op.as_deref().unwrap_or("smootherstep").to_ascii_lowercase();
    let op: Box<dyn CurveOp> = match name.as_str() {
        "smootherstep" => {
            let mut n = SmootherStep::default();
            let (low, high) = n.thresholds();
            n.set_thresholds(a.low.unwrap_or(low), a.high.unwrap_or(high));
            Box::new(n)
        }
        "smoothstep" => {
            let mut n = SmoothStep::default();
            n.set_thresholds(a.low.unwrap_or(0.0), a.high.unwrap_or(1.0));
            Box::new(n)
        }
        "step" => {
            let mut n = Step::default();
            if let Some(edge) = a.low { n.set_edge(edge); }
            Box::new(n)
        }
        "remap" => {
            let mut n = Remap::new(
                a.low.unwrap_or(0.0),
                a.high.unwrap_or(1.0),
                a.out_low.unwrap_or(0.0),
                a.out_high.unwrap_or(1.0),
            );
            n.set_clamp(a.clamp);
            Box::new(n)
        }
        "ease" => {
            let kind = match a.ease.as_deref() {
                Some(name) => parse_ease(name)?,
                None => EaseKind::SineInOut,
            };
            Box::new(Ease::new(kind))
        }
        "biasgain" => {
            let mut n = BiasGain::default();
            if let Some(b) = a.bias { n.set_bias(b); }
            if let Some(g) = a.gain { n.set_gain(g); }
            Box::new(n)
        }
        "logistic" => {
            let mut n = Logistic::default();
            if let Some(k) = a.sharpness { n.set_sharpness(k); }
            Box::new(n)
        }
        "parabola" => {
            let mut n = Parabola::default();
            if let Some(k) = a.k { n.set_k(k); }
            Box::new(n)
        }
        "contrast" => {
            let mut n = Contrast::default();
            if let Some(p) = a.pivot { n.set_pivot(p); }
            if let Some(s) = a.strength { n.set_strength(s); }
            Box::new(n)
        }
        "terrace" => {
            let mut n = Terrace::default();
            if let Some(s) = a.steps { n.set_steps(s); }
            if let Some(s) = a.smoothness { n.set_smoothness(s); }
            Box::new(n)
        }
        other => return Err(format!("unknown op: {other} (try --list-ops)").into()),
    };
    Ok(op)
}

fn print_csv(positions: &[f32], values: &[f32]) {
    println!("t,value");
    for (t, v) in positions.iter().zip(values.iter()) {
        println!("{t},{v}");
    }
}

fn print_table(op_name: &str, positions: &[f32], values: &[f32]) {
    println!("op: {op_name}");
    println!("{:>12}  {:>12}", "t", "value");
    for (t, v) in positions.iter().zip(values.iter()) {
        println!("{t:>12.6}  {v:>12.6}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args();

    if args.list_ops {
        list_ops();
        return Ok(());
    }

    let op_name = args.op.clone().unwrap_or_else(|| "smootherstep".to_string());
    let op = make_op(&args)?;

    let mut pv = Preview::new(op);
    pv.set_domain(args.from.unwrap_or(0.0), args.to.unwrap_or(1.0));

    let n = args.samples.unwrap_or(17).max(1);
    let positions: Vec<f32> = (0..n).map(|i| pv.position(i, n)).collect();
    let mut values = vec![0.0_f32; n];
    pv.fill(&mut values);

    match args.format.as_deref().unwrap_or("table") {
        "csv" => print_csv(&positions, &values),
        "table" => print_table(&op_name, &positions, &values),
        other => return Err(format!("unknown format: {other} (csv|table)").into()),
    }

    Ok(())
}
