//! Generate command - render model files from an entity schema document.

use clap::Args;
use std::path::{Path, PathBuf};

use entangle_typegen::ir::{DEFAULT_ENTITY_PATH, NamespaceFilter};
use entangle_typegen::output::{generate_endpoints, generate_interface};
use entangle_typegen::provider::{EntityProvider, SchemaProvider, load_descriptor};

/// Separator between per-entity progress blocks.
const RULE: &str = "------------------";

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Entity schema document (JSON)
    pub schema: PathBuf,

    /// Output root; model files land in <OUTPUT>/model
    #[arg(short, long, default_value = "angular")]
    pub output: PathBuf,

    /// Namespace prefix of in-scope entities
    #[arg(long, default_value = DEFAULT_ENTITY_PATH)]
    pub entity_path: String,

    /// Render entities outside the namespace prefix instead of skipping them
    #[arg(long)]
    pub keep_foreign: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> i32 {
    let content = match std::fs::read_to_string(&args.schema) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.schema.display(), e);
            return 1;
        }
    };
    let document = match entangle_typegen::parse_schema_str(&content) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to parse {}: {}", args.schema.display(), e);
            return 1;
        }
    };

    let filter = NamespaceFilter {
        prefix: args.entity_path,
        discard_foreign: !args.keep_foreign,
    };
    let provider = SchemaProvider::new(document);

    // Enumeration failure aborts before anything is written.
    let names = match provider.entity_names() {
        Ok(names) => names,
        Err(e) => {
            eprintln!("Failed to enumerate entities: {}", e);
            return 1;
        }
    };

    if let Err(e) = prepare_output_root(&args.output) {
        eprintln!("Failed to prepare {}: {}", args.output.display(), e);
        return 1;
    }

    eprintln!("{}", RULE);
    eprintln!("Entities namespace base: {}", filter.prefix);
    eprintln!(
        "3rd party namespaces: {}discarded",
        if filter.discard_foreign { "" } else { "not " }
    );

    for name in &names {
        eprintln!("{}", RULE);
        if !filter.accepts(name) {
            eprintln!("Skip entity: \"{}\"", name);
            continue;
        }
        eprintln!("Load entity: \"{}\"", name);

        let assembled = match load_descriptor(&provider, name) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Failed to load {}: {}", name, e);
                return 1;
            }
        };
        for (field, err) in &assembled.dropped_fields {
            eprintln!("Dropped field {}: {}", field, err);
        }
        eprintln!("{} attributes generated", assembled.descriptor.fields.len());

        let Some(rendered) = generate_interface(&assembled.descriptor, &filter) else {
            continue;
        };

        let path = args.output.join("model").join(format!("{}.ts", rendered.name));
        if let Err(e) = std::fs::write(&path, &rendered.code) {
            eprintln!("Failed to write {}: {}", path.display(), e);
            return 1;
        }
        eprintln!("TS file successfully generated in \"{}\"", path.display());
    }

    let endpoints = &provider.document().endpoints;
    if !endpoints.is_empty() {
        eprintln!("{}", RULE);
        let code = generate_endpoints(endpoints);
        let path = args.output.join("endpoints.ts");
        if let Err(e) = std::fs::write(&path, &code) {
            eprintln!("Failed to write {}: {}", path.display(), e);
            return 1;
        }
        eprintln!("Generated {}", path.display());
    }

    0
}

/// Clear and recreate the output root, including its model/ subdirectory.
///
/// Destructive: a previous run's files are removed wholesale. Invoked
/// once per run, before any rendering output is written.
pub fn prepare_output_root(root: &Path) -> std::io::Result<()> {
    match std::fs::remove_dir_all(root) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    std::fs::create_dir_all(root.join("model"))
}
