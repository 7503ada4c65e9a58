#![allow(warnings)]
//! Tag Admin Frontend Entry Point

mod app;
mod components;
mod context;
mod gateway;
mod hooks;
mod models;
mod query;
mod route;
mod slug;
mod tags_query;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
