use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("Proto schema '{0}' is missing")]
    MissingSchema(String),
}

const RESOURCES_DIR: &str = "resources";
const SCHEMAS: [&str; 1] = ["resources/phone_record.proto"];

fn main() -> Result<(), BuildError> {
    for schema in SCHEMAS {
        if !Path::new(schema).exists() {
            return Err(BuildError::MissingSchema(schema.to_string()));
        }
        println!("cargo:rerun-if-changed={}", schema);
    }

    protobuf_codegen::Codegen::new()
        .pure()
        .includes([RESOURCES_DIR])
        .inputs(SCHEMAS)
        .cargo_out_dir("proto_gen")
        .run_from_script();
    Ok(())
}
