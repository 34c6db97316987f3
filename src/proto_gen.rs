// Generated by build/rust_build.rs from resources/*.proto
include!(concat!(env!("OUT_DIR"), "/proto_gen/mod.rs"));
