use docker_tag_deleter::cli::{Args, Runner};

#[tokio::main]
async fn main() {
    let args = Args::parse_args().from_env();
    let runner = Runner::new(args);

    if let Err(e) = runner.run().await {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
