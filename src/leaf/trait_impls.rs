use super::*;
use crate::traits::Dot;

/// Renders a single leaf as a graphviz record node labelled with its
/// occupancy and width; used by [`crate::tree::PrefixSumVec`]'s own `Dot`
/// impl to assemble a whole-tree diagram.
impl<const CAP: usize> Dot for Leaf<CAP> {
    fn dotviz(&self, self_id: isize) -> String {
        format!(
            "L{self_id} [label=\"L{self_id}\\nnum={}\\nwidth={}\" shape=record];\n",
            self.num, self.width
        )
    }
}
