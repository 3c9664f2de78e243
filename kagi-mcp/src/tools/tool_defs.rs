//! Tool definitions organized by category.
//!
//! Each submodule defines tools for a specific category and provides
//! a registration function that appends them to the catalog.

mod kagi;
mod system;

use super::registry::ToolMetadata;

/// Register all tools from all categories, in catalog order.
pub fn register_all_tools(registry: &mut Vec<ToolMetadata>) {
    kagi::register(registry);
    system::register(registry);
}
