//! RankDB CLI Client
//!
//! Sends one command to a RankDB server and prints the reply.
//!
//! ```text
//! $ rankdb-cli ZADD users 10 u1
//! OK 1
//! $ rankdb-cli ZADD users CH 11 u1
//! OK 1
//! ```

use std::net::TcpStream;

use clap::Parser;
use rankdb::protocol::{read_reply, write_request, Reply, Request};
use rankdb::RankError;

/// RankDB CLI
#[derive(Parser, Debug)]
#[command(name = "rankdb-cli")]
#[command(about = "CLI for the RankDB data store")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:7379")]
    server: String,

    /// Command tokens, e.g. ZADD users 10 u1
    ///
    /// Hyphen values are allowed so negative scores pass through
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let request = match Request::new(args.tokens) {
        Ok(req) => req,
        Err(e) => {
            eprintln!("ERR {}", e);
            std::process::exit(1);
        }
    };

    match send(&args.server, &request) {
        Ok(reply) => print_reply(&reply),
        Err(RankError::Server(msg)) => {
            eprintln!("ERR {}", msg);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("ERR {}", e);
            std::process::exit(1);
        }
    }
}

fn send(server: &str, request: &Request) -> rankdb::Result<Reply> {
    let mut stream = TcpStream::connect(server)?;
    write_request(&mut stream, request)?;
    read_reply(&mut stream)
}

fn print_reply(reply: &Reply) {
    match reply {
        Reply::Count(n) => println!("OK {}", n),
        Reply::Score(n) => println!("OK {}", n),
        Reply::Simple(s) => println!("{}", s),
        Reply::Nil => println!("(nil)"),
    }
}
