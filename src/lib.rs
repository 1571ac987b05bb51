mod apply_tree;
mod bit_twiddles;
mod fold_tree;
mod ops;
mod tree_base;

pub use crate::apply_tree::ApplyTree;
pub use crate::fold_tree::FoldTree;
pub use crate::ops::{FoldOp, Max, Min, Product, Sum};
pub use crate::tree_base::FoldTreeError;

#[cfg(test)]
#[macro_use]
extern crate assert_let;
