//! Minimum width of a convex polygon via the antipodal search.
//!
//! Usage:
//!   cargo run -p vect --example polygon_width -- [n] [seed]
//!
//! For every edge, the antipodal vertex gives the polygon's extent
//! perpendicular to that edge; the smallest such extent is the width.

use vect::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(16);
    let seed: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(2025);
    let cfg = ChainCfg {
        vertex_count: VertexCount::Fixed(n),
        linear: nalgebra::Matrix2::new(3.0, 0.4, 0.0, 1.0),
        ..ChainCfg::default()
    };
    let Some(chain) = draw_convex_chain(cfg, ReplayToken { seed, index: 0 }) else {
        eprintln!("could not sample a chain");
        return;
    };
    let far = match antipodal_all(&chain) {
        Ok(far) => far,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    let mut best: Option<(usize, f64)> = None;
    for (i, &k) in far.iter().enumerate() {
        let edge = Vect::new(chain[i], chain[(i + 1) % chain.len()]);
        let h = ccw(&edge.a(), &edge.b(), &chain[k]).abs() / edge.magnitude();
        println!("edge {i:>3} -> vertex {k:>3}  extent {h:.6}");
        if best.is_none_or(|(_, w)| h < w) {
            best = Some((i, h));
        }
    }
    if let Some((i, w)) = best {
        println!("width {w:.6} across edge {i}");
    }
}
