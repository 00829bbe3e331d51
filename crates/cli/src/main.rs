use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use vect::prelude::*;

mod chain_io;
mod provenance;

#[derive(Parser)]
#[command(name = "vect")]
#[command(about = "2D segment, SED and antipodal-vertex queries")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Distance from a point to the bounded segment A→B
    Distance {
        /// Start point as `x,y` or `x,y,t`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        /// End point as `x,y` or `x,y,t`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
    },
    /// Side of a point relative to the directed line A→B
    Side {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
    },
    /// Synchronized Euclidean distance of a point at time T against leg A→B
    Sed {
        /// Timed start point `x,y,t`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: Point,
        /// Timed end point `x,y,t`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point,
        #[arg(long, allow_hyphen_values = true)]
        t: f64,
    },
    /// Antipodal vertices of a convex chain read from CSV (`x`,`y` columns)
    Antipodal {
        #[arg(long)]
        input: PathBuf,
        /// Only this edge (default: every edge)
        #[arg(long)]
        edge: Option<usize>,
    },
    /// Draw a reproducible convex chain; CSV + provenance when `--out` is given
    Sample {
        #[arg(long, default_value_t = 12)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 1.0)]
        radius: f64,
        /// Clockwise instead of counter-clockwise winding
        #[arg(long)]
        cw: bool,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let doc = match cmd.action {
        Action::Distance { a, b, point } => distance(a, b, point),
        Action::Side { a, b, point } => side(a, b, point),
        Action::Sed { a, b, point, t } => sed(a, b, point, t)?,
        Action::Antipodal { input, edge } => antipodal_cmd(input, edge)?,
        Action::Sample {
            n,
            seed,
            index,
            radius,
            cw,
            out,
        } => sample(n, seed, index, radius, cw, out)?,
        Action::Report => report(),
    };
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn parse_point(s: &str) -> Result<Point, String> {
    let parts = s
        .split(',')
        .map(|c| c.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("bad coordinate in {s:?}: {e}"))?;
    match parts[..] {
        [x, y] => Ok(Point::new(x, y)),
        [x, y, t] => Ok(Point::with_time(x, y, t)),
        _ => Err(format!("expected `x,y` or `x,y,t`, got {s:?}")),
    }
}

#[derive(Serialize)]
struct PointOut {
    x: f64,
    y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    t: Option<f64>,
}

impl From<Point> for PointOut {
    fn from(p: Point) -> Self {
        Self {
            x: p.x(),
            y: p.y(),
            t: p.t(),
        }
    }
}

#[derive(Serialize)]
struct EdgeOut {
    edge: usize,
    vertex: usize,
    extent: f64,
}

fn distance(a: Point, b: Point, point: Point) -> Value {
    tracing::info!(?a, ?b, ?point, "distance");
    let seg = Vect::new(a, b);
    json!({
        "distance": seg.distance_to_point(&point),
        "side": seg.side_of(&point).to_string(),
        "segment_length": seg.magnitude(),
    })
}

fn side(a: Point, b: Point, point: Point) -> Value {
    tracing::info!(?a, ?b, ?point, "side");
    json!({ "side": side_of(&a, &b, &point).to_string() })
}

fn sed(a: Point, b: Point, point: Point, t: f64) -> Result<Value> {
    tracing::info!(?a, ?b, ?point, t, "sed");
    let leg = Vect::new(a, b);
    if leg.dt() == 0.0 {
        bail!("sed needs timed endpoints with distinct times (got at={}, bt={})", leg.at(), leg.bt());
    }
    let v = leg.sed_vector(point, t);
    Ok(json!({
        "sed": v.magnitude(),
        "synchronized": PointOut::from(v.a()),
        "vector": { "dx": v.v().dx(), "dy": v.v().dy() },
    }))
}

fn antipodal_cmd(input: PathBuf, edge: Option<usize>) -> Result<Value> {
    tracing::info!(input = %input.display(), ?edge, "antipodal");
    let chain = chain_io::read_chain_csv(&input)?;
    antipodal_report(&chain, edge)
}

fn antipodal_report(chain: &[Point], edge: Option<usize>) -> Result<Value> {
    let edges: Vec<usize> = match edge {
        Some(i) => vec![i],
        None => (0..chain.len()).collect(),
    };
    let mut out = Vec::with_capacity(edges.len());
    for i in edges {
        let k = antipodal(chain, i).with_context(|| format!("edge {i}"))?;
        let seg = Vect::new(chain[i], chain[(i + 1) % chain.len()]);
        let extent = ccw(&seg.a(), &seg.b(), &chain[k]).abs() / seg.magnitude();
        out.push(EdgeOut {
            edge: i,
            vertex: k,
            extent,
        });
    }
    Ok(json!({ "vertices": chain.len(), "edges": out }))
}

fn sample(
    n: usize,
    seed: u64,
    index: u64,
    radius: f64,
    cw: bool,
    out: Option<PathBuf>,
) -> Result<Value> {
    tracing::info!(n, seed, index, radius, cw, "sample");
    let cfg = ChainCfg {
        vertex_count: VertexCount::Fixed(n),
        radius,
        winding: if cw { Winding::Cw } else { Winding::Ccw },
        ..ChainCfg::default()
    };
    let chain = draw_convex_chain(cfg, ReplayToken { seed, index })
        .with_context(|| format!("cannot sample a chain with radius {radius}"))?;
    let params = json!({ "n": chain.len(), "seed": seed, "index": index, "radius": radius, "cw": cw });
    match out {
        Some(path) => {
            chain_io::write_chain_csv(&path, &chain)?;
            let sidecar = provenance::write_sidecar(&path, "sample", &params)?;
            Ok(json!({
                "out": path.to_string_lossy(),
                "provenance": sidecar.to_string_lossy(),
                "params": params,
            }))
        }
        None => {
            let pts: Vec<PointOut> = chain.into_iter().map(PointOut::from).collect();
            Ok(json!({ "params": params, "chain": pts }))
        }
    }
}

fn report() -> Value {
    json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": vect::VERSION,
    })
}
