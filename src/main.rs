use leptos::prelude::*;
use porcelain_atlas::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
