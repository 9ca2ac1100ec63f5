//! Argument-free binding generator.
//!
//! Regenerates `src/ui/builder.rs` from `data/ui/*.ui` in the invocation
//! directory. `RUST_LOG` controls diagnostic verbosity and never affects
//! the generated bytes.

use uibind::Generator;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    match Generator::default().run() {
        Ok(summary) => {
            println!(
                "bound {} objects from {} descriptors into {}",
                summary.objects,
                summary.files,
                summary.output.display()
            );
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
