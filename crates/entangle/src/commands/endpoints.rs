//! Endpoints command - render the endpoint constants file.

use clap::Args;
use std::path::PathBuf;

use entangle_typegen::generate_endpoints;

/// Endpoints command arguments
#[derive(Args)]
pub struct EndpointsArgs {
    /// URL paths, one constant per path (e.g. /users)
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Output root; the constants land in <OUTPUT>/endpoints.ts
    #[arg(short, long, default_value = "angular")]
    pub output: PathBuf,
}

/// Run the endpoints command
pub fn run(args: EndpointsArgs) -> i32 {
    let code = generate_endpoints(&args.paths);

    if let Err(e) = std::fs::create_dir_all(&args.output) {
        eprintln!("Failed to prepare {}: {}", args.output.display(), e);
        return 1;
    }
    let path = args.output.join("endpoints.ts");
    if let Err(e) = std::fs::write(&path, &code) {
        eprintln!("Failed to write {}: {}", path.display(), e);
        return 1;
    }
    eprintln!("Generated {}", path.display());

    0
}
