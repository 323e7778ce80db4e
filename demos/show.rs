//! Load a dotenv file into the process-wide store and print a few typed
//! values.
//!
//! Usage: `cargo run --example show -- [PATH]` (defaults to `.env`).
//! Set `RUST_LOG=envtab=debug` to see what the loader did.

use std::env;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = env::args().nth(1).unwrap_or_else(|| ".env".to_owned());
    // SAFETY: single-threaded at this point; nothing else touches the
    // environment while the file loads.
    unsafe { envtab::load(&path) };

    let port = envtab::get::<i32>("PORT").unwrap_or(-1);
    let host = envtab::get::<String>("HOST");
    let max_conn = envtab::get::<u32>("MAX_CONNECTIONS");
    let timeout = envtab::get::<f64>("TIMEOUT").unwrap_or(0.0);
    let empty = envtab::get::<String>("EMPTY");
    let spaced = envtab::get::<String>("SPACED");

    println!("PORT: {port}");
    println!("HOST: {}", host.as_deref().unwrap_or("undefined"));
    match max_conn {
        Some(max_conn) => println!("MAX_CONNECTIONS: {max_conn}"),
        None => println!("MAX_CONNECTIONS: undefined"),
    }
    println!("TIMEOUT: {timeout}");
    println!("EMPTY: '{}'", empty.as_deref().unwrap_or("undefined"));
    println!("SPACED: '{}'", spaced.as_deref().unwrap_or("undefined"));

    // Loaded pairs are also in the real environment.
    let from_env = env::var("HOST").unwrap_or_else(|_| "undefined".to_owned());
    println!("HOST via std::env: {from_env}");

    let (loaded, total) = envtab::with_store(|store| {
        let loaded = store.iter().map(|(key, _)| key.to_owned()).collect::<Vec<_>>();
        (loaded, store.len())
    });
    println!("{total} variables: {}", loaded.join(", "));
}
