use std::env;
use std::process;
use std::sync::Arc;

use creational::UserBuilder;
use structural::adapter::{ConsoleWriter, ModernConsoleWriter, PrinterAdapter, Writer};
use structural::{UserDbFinder, UserFinderProxy, UserMemoryFinder};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

fn about() -> String {
    format!(
        "{} v{}: design patterns walkthrough",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

fn print_usage() {
    eprintln!(
        "{}\n\nUsage:\n  patterns-demo builder [--name <name>] [--email <email>] [--age <n>]\n  patterns-demo singleton\n  patterns-demo print <text>...\n  patterns-demo find <id>...\n\nEnvironment:\n  LOG_FORMAT=pretty|json   DB_LATENCY_MS=<ms>   CACHE_PRELOAD=<id,id,...>",
        about()
    );
}

fn run(cfg: &config::Config) -> Result<(), String> {
    let mut args = env::args().skip(1); // skip program name

    let Some(cmd) = args.next() else {
        print_usage();
        return Ok(());
    };
    let rest: Vec<String> = args.collect();

    match cmd.as_str() {
        "builder" => run_builder(&rest),
        "singleton" => {
            let first = creational::instance();
            let second = creational::instance();
            first.do_work();
            let same = std::ptr::eq(
                first as *const dyn creational::Singleton as *const (),
                second as *const dyn creational::Singleton as *const (),
            );
            println!("same instance: {}", same);
            Ok(())
        }
        "print" => {
            let text = rest.join(" ");
            println!("{}", ConsoleWriter.write(&text));
            println!("{}", PrinterAdapter::new(ModernConsoleWriter).print(&text));
            Ok(())
        }
        "find" => run_find(cfg, &rest),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

fn run_builder(rest: &[String]) -> Result<(), String> {
    let mut builder = UserBuilder::new();

    // Parse simple flags: --name <val>, --email <val>, --age <n>
    let mut i = 0;
    while i < rest.len() {
        let flag = rest[i].as_str();
        let Some(val) = rest.get(i + 1) else {
            return Err(format!("{} requires a value", flag));
        };
        match flag {
            "--name" => {
                builder.name(val.as_str());
            }
            "--email" => {
                builder.email(val.as_str());
            }
            "--age" => {
                let age: i32 = val
                    .parse()
                    .map_err(|e| format!("invalid --age '{}': {}", val, e))?;
                builder.age(age);
            }
            unk => return Err(format!("unknown argument: {}", unk)),
        }
        i += 2;
    }

    let user = builder.build();
    let json = serde_json::to_string(&user).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}

fn run_find(cfg: &config::Config, ids: &[String]) -> Result<(), String> {
    if ids.is_empty() {
        return Err("missing <id> for find".into());
    }

    let cache = Arc::new(UserMemoryFinder::new());
    let db = UserDbFinder::new().with_latency(cfg.db_latency);
    let proxy = UserFinderProxy::new(db, Arc::clone(&cache));

    for id in &cfg.cache_preload {
        if let Err(e) = proxy.lookup(id) {
            warn!(user_id = %id, error = %e, "cache preload failed");
        }
    }

    let mut failed = 0usize;
    for id in ids {
        match proxy.lookup(id) {
            Ok(user) => {
                let json = serde_json::to_string(&user).map_err(|e| e.to_string())?;
                println!("{}", json);
            }
            Err(e) => {
                eprintln!("{}", e);
                failed += 1;
            }
        }
    }

    let cached = cache.len().map_err(|e| e.to_string())?;
    info!(cached, requested = ids.len(), failed, "find finished");

    if failed > 0 {
        return Err(format!("{} of {} lookups failed", failed, ids.len()));
    }
    Ok(())
}

fn init_tracing(cfg: &config::Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    match cfg.log_format {
        config::LogFormat::Json => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(fmt::time::SystemTime)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
        config::LogFormat::Pretty => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_writer(std::io::stdout),
                )
                .init();
        }
    }
}

fn main() {
    let cfg = match config::Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    init_tracing(&cfg);

    if let Err(msg) = run(&cfg) {
        eprintln!("error: {}", msg);
        process::exit(1);
    }
}
