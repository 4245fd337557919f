use graphd::server::{default_acceptors, Server, ServerConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        usage_and_exit(2);
    }

    let port: u16 = match args[1].parse() {
        Ok(p) if p > 0 => p,
        _ => {
            eprintln!("Invalid port");
            usage_and_exit(2);
        }
    };

    let acceptors = match args.get(2) {
        None => default_acceptors(),
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n >= 1 => n,
            _ => {
                eprintln!("Invalid thread count");
                usage_and_exit(2);
            }
        },
    };

    let server = match Server::bind(&ServerConfig { port, acceptors }) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("graphd: bind failed: {e}");
            std::process::exit(1);
        }
    };

    server.serve();
}

fn usage_and_exit(code: i32) -> ! {
    eprintln!(
        "Usage:\n  graphd <port> [threads]\n\nOptions:\n  <port>     TCP port to listen on (1-65535)\n  [threads]  Acceptor thread count (default: logical cores)\n"
    );
    std::process::exit(code)
}
