#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(beacon::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    // The binary only makes sense as a WASM bundle; native builds exist so
    // `cargo test` can exercise the state core.
}
