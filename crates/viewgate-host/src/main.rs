//! Demo host for the viewgate stack.
//!
//! Stands in for the content platform: loads `viewgate.yaml`, flags one item
//! "logged-in only", then renders a marker-bearing document as an anonymous
//! visitor and as an authenticated author, printing the listing exclusion for
//! each.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use viewgate_core::ViewerIdentity;
use viewgate_host::config;
use viewgate_host::store::{FlagStore, MemoryFlagStore};
use viewgate_host::Gate;

const SAMPLE_DOC: &str = "\
Welcome to the site.
[require_login]Member newsletter archive.[/require_login]
[require_logout]Create an account to join the discussion.[/require_logout]
[require_role #author|administrator]Draft queue: 3 posts awaiting review.[/require_role]
";

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("viewgate.yaml").expect("config load failed");

    let store = Arc::new(MemoryFlagStore::new());
    store.set_flag("post-7", true).expect("flag write failed");
    store.set_flag("post-9", false).expect("flag write failed");

    let gate = Gate::new(cfg, store).expect("gate assembly failed");

    let anonymous = ViewerIdentity::anonymous();
    let author = ViewerIdentity::authenticated(7)
        .with_login("satvik")
        .with_roles(["author"]);

    tracing::info!("rendering as anonymous visitor");
    println!("--- anonymous ---");
    println!("{}", gate.render(SAMPLE_DOC, &anonymous));
    println!("hidden from listings: {:?}", gate.excluded_ids(false));

    tracing::info!("rendering as authenticated author");
    println!("--- author ---");
    println!("{}", gate.render(SAMPLE_DOC, &author));
    println!("hidden from listings: {:?}", gate.excluded_ids(true));
}
