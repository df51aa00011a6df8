//! Graphviz export of a computation graph.
//!
//! Only reads the producer relation, op labels, data and grads. Render the
//! output with e.g. `dot -Tpng graph.dot -o graph.png`.

use crate::error::MichigradError;
use crate::value::Value;

/// Exports the nodes reachable from `root` in DOT format.
///
/// Every node becomes a record `{ label | data | grad }`. Nodes produced by
/// an operation get an extra ellipse holding the op tag, with edges
/// `producer -> op -> node`.
pub fn to_dot(root: &Value) -> Result<String, MichigradError> {
    let graph = root.graph();
    let order = graph.topological_sort(root)?;
    let data = graph.read();

    let mut dot = String::from("digraph ComputationGraph {\n");
    dot.push_str("  rankdir=LR;\n");

    for id in &order {
        let node = data.node(*id)?;
        let name = format!("n{}", id.index());
        let label = node.label.as_deref().map(escape_record).unwrap_or_default();
        dot.push_str(&format!(
            "  {} [shape=record, label=\"{{ {} | data {:.4} | grad {:.4} }}\"];\n",
            name, label, node.data, node.grad
        ));

        if !node.op.is_leaf() {
            dot.push_str(&format!("  {}_op [label=\"{}\"];\n", name, node.op));
            dot.push_str(&format!("  {}_op -> {};\n", name, name));
            for input in node.op.inputs() {
                dot.push_str(&format!("  n{} -> {}_op;\n", input.index(), name));
            }
        }
    }

    dot.push_str("}\n");
    Ok(dot)
}

fn escape_record(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        if matches!(c, '"' | '{' | '}' | '|' | '<' | '>' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
