fn main() {
    emit_espidf_env();
}

#[cfg(feature = "espidf")]
fn emit_espidf_env() {
    // Host builds (tests, simulation) have no ESP-IDF toolchain to describe.
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }
}

#[cfg(not(feature = "espidf"))]
fn emit_espidf_env() {}
