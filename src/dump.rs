use std::fmt::{Display, Write};

use crate::{iter::Iter, node::Node};

/// Render the subtree rooted at `node` as a pre-order structural dump.
///
/// Each node is rendered as `[value]` on its own line, indented with one tab
/// per tree level. An absent child renders as a blank line, so the shape of
/// the tree (including one-child nodes) can be read back from the output.
pub(crate) fn write_tree<T, W>(node: Option<&Node<T>>, depth: usize, buf: &mut W)
where
    T: Display,
    W: Write,
{
    let node = match node {
        Some(v) => v,
        None => {
            writeln!(buf).unwrap();
            return;
        }
    };

    for _ in 0..depth {
        write!(buf, "\t").unwrap();
    }
    writeln!(buf, "[{}]", node.value()).unwrap();

    write_tree(node.left(), depth + 1, buf);
    write_tree(node.right(), depth + 1, buf);
}

/// Render the values of the subtree rooted at `root` in ascending order,
/// separated by single spaces.
pub(crate) fn write_sorted<T, W>(root: Option<&Node<T>>, buf: &mut W)
where
    T: Display,
    W: Write,
{
    for (i, v) in root.into_iter().flat_map(Iter::new).enumerate() {
        if i > 0 {
            write!(buf, " ").unwrap();
        }
        write!(buf, "{}", v.value()).unwrap();
    }
}
