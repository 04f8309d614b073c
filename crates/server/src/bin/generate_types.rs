//! Run with: cargo run --package server --bin generate-types --features typescript

use std::fs;
use std::path::Path;

fn main() {
    println!("Generating TypeScript types...");

    let out_dir = Path::new("frontend/src/types/generated");

    if let Err(e) = fs::create_dir_all(out_dir) {
        eprintln!("Failed to create output directory: {}", e);
        std::process::exit(1);
    }

    #[cfg(feature = "typescript")]
    {
        use ts_rs::TS;

        prototyper_core::AnswerSet::export_all_to(out_dir).expect("Failed to export AnswerSet");
        prototyper_core::CreatePrototypeRequest::export_all_to(out_dir)
            .expect("Failed to export CreatePrototypeRequest");
        prototyper_core::UpdatePrototypeRequest::export_all_to(out_dir)
            .expect("Failed to export UpdatePrototypeRequest");
        prototyper_core::Prototype::export_all_to(out_dir).expect("Failed to export Prototype");
        prototyper_core::UiConfiguration::export_all_to(out_dir)
            .expect("Failed to export UiConfiguration");
        prototyper_core::UiComponent::export_all_to(out_dir)
            .expect("Failed to export UiComponent");
        prototyper_core::ComponentKind::export_all_to(out_dir)
            .expect("Failed to export ComponentKind");
        prototyper_core::Layout::export_all_to(out_dir).expect("Failed to export Layout");
        prototyper_core::Theme::export_all_to(out_dir).expect("Failed to export Theme");

        println!("Types exported to {}", out_dir.display());

        generate_index(out_dir);
    }

    #[cfg(not(feature = "typescript"))]
    {
        eprintln!("Error: typescript feature is not enabled");
        eprintln!("Run with: cargo run --package server --bin generate-types --features typescript");
        std::process::exit(1);
    }
}

#[cfg(feature = "typescript")]
fn generate_index(out_dir: &Path) {
    const TYPES: &[&str] = &[
        "AnswerSet",
        "CreatePrototypeRequest",
        "UpdatePrototypeRequest",
        "Prototype",
        "UiConfiguration",
        "UiComponent",
        "ComponentKind",
        "Layout",
        "Theme",
    ];

    let mut index = String::from(
        "// Auto-generated - regenerate with: cargo run --package server --bin generate-types --features typescript\n\n",
    );
    for name in TYPES {
        index.push_str(&format!("export * from './{}';\n", name));
    }

    let index_path = out_dir.join("index.ts");
    fs::write(&index_path, index).expect("Failed to write index.ts");
    println!("Index written to {}", index_path.display());
}
