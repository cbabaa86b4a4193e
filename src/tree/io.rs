//! Binary tree load/save and newick parsing.
//!
//! The on-disk payload is a protobuf message (see `proto/mat.proto`)
//! holding the newick topology string and one mutation-token list per node
//! in preorder, optionally gzip-compressed (niffler sniffs the input, the
//! `.gz` suffix selects compression on output).

use super::{MutationTree, NodeId};
use crate::generated::mat::{NodeMutations, TreeData};
use anyhow::{anyhow, bail, Context, Result};
use niffler::get_reader;
use protobuf::Message;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn load(path: &Path) -> Result<MutationTree> {
    let file = File::open(path).with_context(|| format!("opening tree file {:?}", path))?;
    let (inner_reader, _compression) = get_reader(Box::new(file))?;
    let mut reader = BufReader::with_capacity(16 * 1024 * 1024, inner_reader);

    let data = TreeData::parse_from_reader(&mut reader)
        .with_context(|| format!("decoding tree payload {:?}", path))?;

    let mut tree = parse_newick(&data.newick)?;
    let order = tree.preorder();
    if data.node_mutations.len() != order.len() {
        bail!(
            "tree payload mismatch: {} mutation lists for {} nodes",
            data.node_mutations.len(),
            order.len()
        );
    }
    for (id, list) in order.into_iter().zip(data.node_mutations) {
        tree.nodes[id.idx()].mutations = list.mutations;
    }
    Ok(tree)
}

pub fn save(tree: &MutationTree, path: &Path) -> Result<()> {
    let mut data = TreeData::new();
    data.newick = write_newick(tree);
    for id in tree.preorder() {
        let mut list = NodeMutations::new();
        list.mutations = tree.mutations(id).to_vec();
        data.node_mutations.push(list);
    }

    let file = File::create(path).with_context(|| format!("creating tree file {:?}", path))?;
    let format = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        niffler::compression::Format::Gzip
    } else {
        niffler::compression::Format::No
    };
    let mut writer = niffler::get_writer(Box::new(file), format, niffler::Level::Six)?;
    data.write_to_writer(&mut writer)
        .with_context(|| format!("writing tree payload {:?}", path))?;
    Ok(())
}

/// Parses a single newick string into a [MutationTree]. Unnamed internal
/// nodes receive generated `node_<arena index>` names. Quoted labels and
/// comment blocks are not supported (the tree writer never emits them).
pub fn parse_newick(input: &str) -> Result<MutationTree> {
    let bytes = input.as_bytes();
    let mut pos = 0usize;

    // Flat parse nodes; converted to the arena once the root is known.
    struct PNode {
        name: String,
        length: f64,
        children: Vec<usize>,
    }
    let mut nodes: Vec<PNode> = Vec::new();
    // One open children list per unclosed '('.
    let mut open: Vec<Vec<usize>> = Vec::new();
    let mut root: Option<usize> = None;

    let skip_ws = |pos: &mut usize| {
        while *pos < bytes.len() && bytes[*pos].is_ascii_whitespace() {
            *pos += 1;
        }
    };
    let read_label = |pos: &mut usize| -> String {
        let start = *pos;
        while *pos < bytes.len() && !b"(),:;".contains(&bytes[*pos]) && !bytes[*pos].is_ascii_whitespace()
        {
            *pos += 1;
        }
        input[start..*pos].to_string()
    };

    loop {
        skip_ws(&mut pos);
        let byte = *bytes
            .get(pos)
            .ok_or_else(|| anyhow!("unterminated newick string"))?;
        match byte {
            b'(' => {
                pos += 1;
                open.push(Vec::new());
            }
            b',' => {
                pos += 1;
            }
            b')' => {
                pos += 1;
                let children = open
                    .pop()
                    .ok_or_else(|| anyhow!("unbalanced ')' in newick string at byte {}", pos))?;
                let name = read_label(&mut pos);
                let length = read_length(input, bytes, &mut pos)?;
                nodes.push(PNode {
                    name,
                    length,
                    children,
                });
                let idx = nodes.len() - 1;
                match open.last_mut() {
                    Some(siblings) => siblings.push(idx),
                    None => root = Some(idx),
                }
            }
            b';' => break,
            _ => {
                let name = read_label(&mut pos);
                if name.is_empty() {
                    bail!("unexpected byte {:?} in newick string at byte {}", byte as char, pos);
                }
                let length = read_length(input, bytes, &mut pos)?;
                nodes.push(PNode {
                    name,
                    length,
                    children: Vec::new(),
                });
                let idx = nodes.len() - 1;
                match open.last_mut() {
                    Some(siblings) => siblings.push(idx),
                    None => root = Some(idx),
                }
            }
        }
    }
    if !open.is_empty() {
        bail!("unbalanced '(' in newick string");
    }
    let root = root.ok_or_else(|| anyhow!("empty newick string"))?;

    // Convert into the arena; the payload's mutation lists are matched up
    // by `preorder()` on both load and save, so arena order is free.
    let mut tree = MutationTree::new(display_name(&nodes[root].name, 0));
    tree.nodes[0].branch_length = nodes[root].length;
    let mut stack: Vec<(usize, NodeId)> = vec![(root, tree.root())];
    while let Some((pidx, pid)) = stack.pop() {
        let child_indices = nodes[pidx].children.clone();
        for cidx in child_indices {
            let name = display_name(&nodes[cidx].name, tree.nodes.len());
            let id = tree.add_child(pid, name, Vec::new());
            tree.nodes[id.idx()].branch_length = nodes[cidx].length;
            stack.push((cidx, id));
        }
    }
    Ok(tree)
}

fn display_name(name: &str, arena_index: usize) -> String {
    if name.is_empty() {
        format!("node_{}", arena_index)
    } else {
        name.to_string()
    }
}

fn read_length(input: &str, bytes: &[u8], pos: &mut usize) -> Result<f64> {
    if bytes.get(*pos) != Some(&b':') {
        return Ok(0.0);
    }
    *pos += 1;
    let start = *pos;
    while *pos < bytes.len() && !b"(),;".contains(&bytes[*pos]) && !bytes[*pos].is_ascii_whitespace()
    {
        *pos += 1;
    }
    input[start..*pos]
        .parse()
        .map_err(|_| anyhow!("invalid branch length {:?}", &input[start..*pos]))
}

/// Serializes the tree reachable from the root back into newick form.
pub fn write_newick(tree: &MutationTree) -> String {
    let mut out = String::new();
    write_node(tree, tree.root(), &mut out);
    out.push(';');
    out
}

fn write_node(tree: &MutationTree, id: NodeId, out: &mut String) {
    if !tree.is_leaf(id) {
        out.push('(');
        for (i, child) in tree.children(id).iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            write_node(tree, *child, out);
        }
        out.push(')');
    }
    out.push_str(tree.name(id));
    if tree.nodes[id.idx()].parent.is_some() {
        out.push(':');
        out.push_str(&tree.branch_length(id).to_string());
    }
}
