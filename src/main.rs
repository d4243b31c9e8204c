//! Todo App Frontend Entry Point

mod app;
mod components;
mod context;
mod logging;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging();
    mount_to_body(App);
}
