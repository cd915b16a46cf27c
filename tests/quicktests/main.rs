//! Property tests comparing [`plain_bst::Tree`] against a `BTreeSet` model.

mod op;
mod tree;

pub(crate) use op::Op;
