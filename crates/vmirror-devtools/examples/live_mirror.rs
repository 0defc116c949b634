//! Example: mirror a small view tree into a logging inspector
//!
//! Run with `RUST_LOG=debug` to see materialization as well.

use tracing_subscriber::EnvFilter;
use vmirror_devtools::{InspectedTree, LoggingInspector, MirrorConfig, MutationNotifier};
use vmirror_view::{Color, Length, ViewTree};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let notifier = MutationNotifier::new(MirrorConfig::default(), Some(Box::new(LoggingInspector)));
    let mut tree = InspectedTree::new(ViewTree::new("Frame"), notifier);

    let root = tree.root();
    let stack = tree.create_view("StackLayout");
    tree.set_property(stack, "orientation", "vertical")?;
    tree.set_property(stack, "width", Length::percent(100.0))?;
    println!("{}", serde_json::to_string_pretty(&tree.document())?);

    tree.add_child(root, stack)?;

    let title = tree.create_view("Label");
    tree.set_property(title, "text", "Inbox")?;
    tree.add_child(stack, title)?;

    let button = tree.create_view("Button");
    tree.set_property(button, "text", "Refresh")?;
    tree.set_property(button, "backgroundColor", Color::rgb(0, 120, 215))?;
    tree.insert_child(stack, button, 0)?;

    tree.set_property(title, "text", "Inbox (3)")?;
    tree.unset_property(stack, "orientation")?;
    tree.remove_child(stack, button)?;
    tree.dispose(button)?;

    tree.set_computed_style(title, "fontSize", 17)?;
    for property in tree.computed_properties(title) {
        println!("{}: {}", property.name, property.value);
    }

    Ok(())
}
