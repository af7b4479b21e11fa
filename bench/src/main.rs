use bfs_path_core::{Graph, Label, PathConfig, Vertex};
use std::time::Instant;

const DEFAULT_NODE_COUNT: usize = 200_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&str> = args
        .iter()
        .skip(1)
        .map(String::as_str)
        .filter(|a| *a != "--json")
        .collect();

    let mode = positional.first().copied().unwrap_or("all");
    let node_count: usize = positional
        .get(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_NODE_COUNT);

    if mode == "help" || mode == "--help" {
        println!("Usage: bfs-path-bench [mode] [node_count] [--json]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  tree        Ternary branching tree (deep paths)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!("  fixture     BFS and shortest path on the 9-vertex reference graph");
        println!();
        println!("--json prints fixture results as JSON.");
        println!("Default node_count: {}", DEFAULT_NODE_COUNT);
        return;
    }

    if mode == "fixture" {
        run_fixture(json);
        return;
    }

    let generators: Vec<(&str, fn(&[Label]) -> Vec<(Label, Label)>)> = match mode {
        "tree" => vec![("Ternary tree", gen_tree)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "all" => vec![
            ("Ternary tree", gen_tree as fn(&[Label]) -> Vec<(Label, Label)>),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    // Every non-surrogate scalar value is a usable label.
    let labels: Vec<Label> = ('0'..=char::MAX).take(node_count).collect();
    if labels.len() < node_count {
        println!("Capped at {} distinct labels", labels.len());
    }

    println!("bfs-path-bench");
    println!("==============");
    println!();

    for (name, generator) in generators {
        run_benchmark(name, generator, &labels);
    }
}

fn run_fixture(json: bool) {
    let graph = Graph::new([
        ('r', 's'),
        ('r', 't'),
        ('r', 'w'),
        ('s', 'u'),
        ('s', 'v'),
        ('t', 'u'),
        ('u', 'y'),
        ('v', 'w'),
        ('v', 'y'),
        ('w', 'x'),
        ('w', 'z'),
        ('x', 'y'),
        ('x', 'z'),
    ]);

    let traversal = match graph.bfs('s') {
        Ok(t) => t,
        Err(e) => {
            eprintln!("bfs failed: {}", e);
            return;
        }
    };
    let vertices: Vec<Vertex> = traversal.vertices().collect();
    let path = match graph.shortest_path('s', 'x') {
        Ok(p) => p,
        Err(e) => {
            eprintln!("shortest path failed: {}", e);
            return;
        }
    };

    if json {
        let report = serde_json::json!({ "bfs": vertices, "path": path });
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("json encoding failed: {}", e),
        }
        return;
    }

    println!("bfs from s:");
    for v in &vertices {
        println!("  {}", v);
    }
    println!();
    println!("shortest path s -> x:");
    for v in &path {
        println!("  {}", v);
    }
}

fn run_benchmark(name: &str, generator: fn(&[Label]) -> Vec<(Label, Label)>, labels: &[Label]) {
    println!("--- {} ---", name);
    println!("Target: {} vertices", labels.len());

    let t = Instant::now();
    let graph = Graph::new(generator(labels));
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s: {} vertices, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let (Some(&first), Some(&last)) = (graph.labels().first(), graph.labels().last()) else {
        println!("(empty graph)");
        println!();
        return;
    };

    let t = Instant::now();
    match graph.bfs(first) {
        Ok(traversal) => {
            let elapsed = t.elapsed();
            let eccentricity = traversal
                .vertices()
                .filter(Vertex::is_reached)
                .map(|v| v.dist)
                .max()
                .unwrap_or(0);
            println!(
                "Full BFS: {} visited, eccentricity {}, {:.1}ms",
                traversal.visited_count(),
                eccentricity,
                elapsed.as_secs_f64() * 1000.0
            );
        }
        Err(e) => println!("Full BFS failed: {}", e),
    }

    for (label, config) in [
        ("early exit", PathConfig::new()),
        ("full scan ", PathConfig::new().with_early_exit(false)),
    ] {
        let t = Instant::now();
        let path = graph.shortest_path_with(first, last, &config);
        let elapsed = t.elapsed();
        match path {
            Ok(p) => println!(
                "Shortest path first -> last ({}): {} hops in {:.1}ms",
                label,
                p.len() - 1,
                elapsed.as_secs_f64() * 1000.0
            ),
            Err(e) => println!(
                "Shortest path first -> last ({}): {} ({:.1}ms)",
                label,
                e,
                elapsed.as_secs_f64() * 1000.0
            ),
        }
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic edge lists over the supplied label pool
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Ternary tree: every vertex gets 3 children, level by level.
///
/// Log-depth paths with exponential width; the last label is a leaf on the
/// deepest level.
fn gen_tree(labels: &[Label]) -> Vec<(Label, Label)> {
    (1..labels.len())
        .map(|child| (labels[(child - 1) / 3], labels[child]))
        .collect()
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
///
/// Each vertex links to its K successors on a ring; each link is rewired to
/// a random vertex with probability p.
fn gen_small_world(labels: &[Label]) -> Vec<(Label, Label)> {
    let n = labels.len();
    let k = 5usize.min(n.saturating_sub(1));
    let p = 0.05f64;
    let mut rng = FastRng::new(67890);
    let mut edges = Vec::with_capacity(n * k);

    for i in 0..n {
        for j in 1..=k {
            let mut neighbor = (i + j) % n;
            if rng.next_f64() < p {
                let rewired = rng.next(n);
                if rewired != i {
                    neighbor = rewired;
                }
            }
            edges.push((labels[i], labels[neighbor]));
        }
    }

    edges
}

/// Erdos-Renyi: ~5 uniform random edges per vertex, no structure.
fn gen_random(labels: &[Label]) -> Vec<(Label, Label)> {
    let n = labels.len();
    let mut rng = FastRng::new(54321);
    let mut edges = Vec::with_capacity(n * 5);

    for i in 0..n {
        // Every vertex appears at least once so it is registered.
        edges.push((labels[i], labels[rng.next(n)]));
    }
    for _ in 0..n * 4 {
        let from = rng.next(n);
        let to = rng.next(n);
        if from != to {
            edges.push((labels[from], labels[to]));
        }
    }

    edges
}

/// Barbell: two dense random clusters joined by a chain of 10 bridge vertices.
///
/// Every path between the clusters squeezes through the bridge.
fn gen_barbell(labels: &[Label]) -> Vec<(Label, Label)> {
    let bridge_len = 10usize;
    let n = labels.len();
    if n < bridge_len + 2 {
        return gen_tree(labels);
    }
    let cluster = (n - bridge_len) / 2;
    let mut rng = FastRng::new(99999);
    let mut edges = Vec::new();

    let mut densify = |start: usize, edges: &mut Vec<(Label, Label)>| {
        for i in 0..cluster {
            // Ring keeps the cluster connected; random chords make it dense.
            edges.push((labels[start + i], labels[start + (i + 1) % cluster]));
            for _ in 0..8 {
                let other = rng.next(cluster);
                if other != i {
                    edges.push((labels[start + i], labels[start + other]));
                }
            }
        }
    };

    densify(0, &mut edges);

    let b_start = cluster + bridge_len;
    for id in cluster..=b_start {
        edges.push((labels[id - 1], labels[id]));
    }

    densify(b_start, &mut edges);

    // Leftover labels from an odd split hang off the last cluster.
    for id in (b_start + cluster)..n {
        edges.push((labels[id - 1], labels[id]));
    }

    edges
}
