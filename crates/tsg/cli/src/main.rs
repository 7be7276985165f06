//! Binary entry point for `tsg`.

#[tokio::main]
async fn main() {
    if let Err(err) = tsg_cli::run().await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
