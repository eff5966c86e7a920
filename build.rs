fn main() {
    // Bindings come from uniffi::setup_scaffolding!() in uniffi_bindings.rs,
    // so there is no UDL file to compile here
    println!("cargo:rerun-if-changed=build.rs");

    if std::env::var_os("CARGO_FEATURE_UNIFFI").is_some() {
        println!("cargo:rerun-if-changed=src/uniffi_bindings.rs");
    }
}
