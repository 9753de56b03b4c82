pub mod config;
pub mod filter;
pub mod system;
pub mod transaction;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let definitions = transaction::definitions()
        .into_iter()
        .chain(filter::definitions())
        .chain(config::definitions())
        .chain(system::definitions());
    for entry in definitions {
        registry.register(entry);
    }
}
