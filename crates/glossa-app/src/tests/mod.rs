mod command_tests;
mod profile_tests;
mod shell_tests;

use std::path::Path;

use glossa_store::ShardStore;

use crate::session::Session;

fn open_session(dir: &Path) -> Session {
    Session::open(ShardStore::new(dir))
}
