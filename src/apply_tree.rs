//
// A sequence container optimized for absorbing one value into every
// element of a range at once: range updates and point reads in O(log n),
// with no per-element sweep.
//
use crate::ops::FoldOp;
use crate::tree_base::{Result, Shape, TreeBase};

/// Range-update / point-query tree.
///
/// An internal node's cell holds a pending delta that has not been pushed
/// to its children; the logical value of a leaf is the fold of its own
/// cell with every delta on its ancestor chain, leaf-to-root. Updates
/// therefore touch only the minimal covering ancestors of their range,
/// and reads walk one root path.
#[derive(Debug, Clone)]
pub struct ApplyTree<T, O> {
    base: TreeBase<T, O>,
}

/// Push the node's pending delta into both children and reset the node to
/// the identity. Callers must proceed strictly root-down: a parent's delta
/// has to reach its children before a grandparent's delta reaches the
/// parent.
fn consolidate<T, O>(base: &mut TreeBase<T, O>, index: usize)
where
    T: Clone,
    O: FoldOp<T>,
{
    let delta = base.take(index);
    base.absorb(Shape::left(index), delta.clone());
    base.absorb(Shape::right(index), delta);
}

impl<T, O> ApplyTree<T, O>
where
    T: Clone,
    O: FoldOp<T>,
{
    /// A tree of `size` leaves, every element starting at the identity.
    pub fn new(size: usize, op: O) -> Result<Self> {
        Ok(ApplyTree { base: TreeBase::new(size, op)? })
    }

    pub fn size(&self) -> usize {
        self.base.size()
    }

    /// Absorb `x` into every element of `[i1, i2)`. O(log n).
    pub fn apply_range(&mut self, i1: usize, i2: usize, x: T) -> Result<()> {
        self.base.check_range(i1, i2)?;
        if i1 == i2 {
            return Ok(());
        }
        let shape = self.base.shape();
        let l = shape.leaf(i1);
        let r = shape.leaf(i2 - 1);
        let base = &mut self.base;
        shape.for_covering_ancestors(l, r, |i, _| base.absorb(i, x.clone()));
        Ok(())
    }

    /// Absorb `x` into element `index`. O(1): a single leaf is its own
    /// minimal covering ancestor.
    pub fn apply(&mut self, index: usize, x: T) -> Result<()> {
        self.base.check_index(index)?;
        let leaf = self.base.shape().leaf(index);
        self.base.absorb(leaf, x);
        Ok(())
    }

    /// The logical value of element `index`: the fold of its leaf cell
    /// with every pending delta above it, leaf-to-root. O(log n).
    pub fn get(&self, index: usize) -> Result<T> {
        self.base.check_index(index)?;
        let shape = self.base.shape();
        let base = &self.base;
        let mut acc = base.op().identity();
        shape.for_path_leafup(shape.leaf(index), |i| base.fold_into(&mut acc, i));
        Ok(acc)
    }

    /// Consolidate every pending delta on the root path of element
    /// `index`, then absorb `x` into its leaf cell. O(log n).
    pub fn assign(&mut self, index: usize, x: T) -> Result<()> {
        self.base.check_index(index)?;
        let shape = self.base.shape();
        let leaf = shape.leaf(index);
        let base = &mut self.base;
        shape.for_path_rootdown(Shape::parent(leaf), |i| consolidate(base, i));
        base.absorb(leaf, x);
        Ok(())
    }

    /// The logical values of `[i1, i2)`, in order. Consolidates every
    /// ancestor of the range first, so this runs in O(k + log n - log k)
    /// rather than k point reads.
    pub fn copy_range(&mut self, i1: usize, i2: usize) -> Result<Vec<T>> {
        self.base.check_range(i1, i2)?;
        let mut out = Vec::with_capacity(i2 - i1);
        if i1 == i2 {
            return Ok(out);
        }
        let shape = self.base.shape();
        let l = shape.leaf(i1);
        let r = shape.leaf(i2 - 1);
        let base = &mut self.base;
        shape.for_span_rootdown(Shape::parent(l), Shape::parent(r), |i| consolidate(base, i));
        let base = &self.base;
        shape.for_leaves_in_order(l, r, |i| out.push(base.node(i).clone()));
        Ok(out)
    }
}
