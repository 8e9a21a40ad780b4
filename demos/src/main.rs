//! Demo harness for the `earworm` library: a thin CLI driver, not part of
//! the stable library surface.
//!
//! Two subcommands: `hash` derives one password hash and prints it as hex,
//! `demo` reproduces the sixteen-thread concurrent scenario described for
//! the library's self-consistency vector, one thread per salt, all reading
//! the same arena.

use clap::{Parser, Subcommand};
use colored::Colorize;
use earworm::Params;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "earworm-harness", about = "Driver for the earworm password hashing function")]
struct Cli {
    /// log2 of the shared arena size in bytes.
    #[arg(long, default_value_t = 24)]
    arena_exponent: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive a single password hash and print it as hex.
    Hash {
        secret: String,
        salt: String,
        #[arg(long, default_value_t = 10)]
        t_cost: u32,
        #[arg(long, default_value_t = 16)]
        m_cost: u32,
        #[arg(long, default_value_t = 32)]
        out_len: usize,
    },
    /// Run sixteen threads concurrently against one shared arena.
    Demo {
        #[arg(long, default_value_t = 10_000)]
        t_cost: u32,
        #[arg(long, default_value_t = 16)]
        m_cost: u32,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    if let Err(e) = earworm::initialize_arena(cli.arena_exponent) {
        eprintln!("{}: {e}", "error".red().bold());
        std::process::exit(1);
    }
    println!(
        "{} arena ready in {:.3}s",
        "ok:".green().bold(),
        start.elapsed().as_secs_f64()
    );

    match cli.command {
        Command::Hash {
            secret,
            salt,
            t_cost,
            m_cost,
            out_len,
        } => run_hash(&secret, &salt, Params { t_cost, m_cost, out_len }),
        Command::Demo { t_cost, m_cost } => run_demo(t_cost, m_cost),
    }
}

fn run_hash(secret: &str, salt: &str, params: Params) {
    let mut out = vec![0u8; params.out_len];
    let start = Instant::now();
    match earworm::phs(&mut out, secret.as_bytes(), salt.as_bytes(), params.t_cost, params.m_cost) {
        Ok(()) => {
            let hex: String = out.iter().map(|b| format!("{b:02x}")).collect();
            println!("{} {hex} ({:.3}s)", "hash:".cyan().bold(), start.elapsed().as_secs_f64());
        }
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            std::process::exit(1);
        }
    }
}

fn run_demo(t_cost: u32, m_cost: u32) {
    println!(
        "{} spawning 16 threads, t_cost={t_cost} m_cost={m_cost}",
        "demo:".yellow().bold()
    );

    let start = Instant::now();
    let handles: Vec<_> = (0u32..16)
        .map(|thread_no| {
            std::thread::spawn(move || {
                let mut out = [0u8; 16];
                earworm::phs(&mut out, b"secret", &thread_no.to_be_bytes(), t_cost, m_cost)
                    .expect("arena was initialized before any thread was spawned");
                (thread_no, out)
            })
        })
        .collect();

    let mut results: Vec<(u32, [u8; 16])> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    results.sort_by_key(|(thread_no, _)| *thread_no);

    for (thread_no, out) in &results {
        let hex: String = out.iter().map(|b| format!("{b:02x}")).collect();
        println!("  thread {thread_no:>2}: {hex}");
    }
    println!(
        "{} {:.3}s total, {} distinct outputs",
        "demo done:".green().bold(),
        start.elapsed().as_secs_f64(),
        results.iter().map(|(_, o)| o).collect::<std::collections::HashSet<_>>().len()
    );
}
