//! Output file writer

use std::io::{self, Write};
use std::path::Path;

use leafy_core::Graph;

/// Write trees in the output format: the tree count, then for each tree its
/// edge count and one `u v` line per edge in ascending order.
pub fn write_trees<'a, W, I>(out: &mut W, trees: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Graph>,
    I::IntoIter: ExactSizeIterator,
{
    let trees = trees.into_iter();
    writeln!(out, "{}", trees.len())?;
    for tree in trees {
        let edges = tree.edges();
        writeln!(out, "{}", edges.len())?;
        for edge in edges {
            writeln!(out, "{} {}", edge.u(), edge.v())?;
        }
    }
    Ok(())
}

/// Render trees to a string.
pub fn format_trees(trees: &[Graph]) -> String {
    let mut buffer = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_trees(&mut buffer, trees);
    String::from_utf8_lossy(&buffer).into_owned()
}

pub fn write_trees_to_file(path: &Path, trees: &[Graph]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trees(&mut file, trees)?;
    file.flush()?;
    tracing::debug!("Wrote {} trees to {}", trees.len(), path.display());
    Ok(())
}
