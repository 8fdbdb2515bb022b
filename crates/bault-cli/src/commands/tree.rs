//! Folder tree rendering.

use bault_entity::{FolderNode, FolderTree};

use crate::output::{self, OutputFormat};

/// Print the folder tree
pub fn print_tree(tree: &FolderTree, format: OutputFormat) {
    if format == OutputFormat::Json {
        output::print_json(tree);
        return;
    }

    println!("/ ({} files)", tree.root_file_count);
    let count = tree.roots.len();
    for (i, node) in tree.roots.iter().enumerate() {
        print_node(node, "", i + 1 == count);
    }
    println!();
    output::print_kv("Folders", &tree.total_folders.to_string());
}

fn print_node(node: &FolderNode, prefix: &str, last: bool) {
    let branch = if last { "└── " } else { "├── " };
    println!(
        "{prefix}{branch}{}/ ({} files) [{}]",
        node.name,
        node.file_count,
        node.id.short()
    );

    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        print_node(child, &child_prefix, i + 1 == count);
    }
}
