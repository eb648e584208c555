//! Ordered, row-indexed container of drawable nodes.
//!
//! Traversal is insertion order: rows in order, then each row front to back. No
//! sorting and no culling; callers wanting back-to-front compositing insert in
//! that order.

use crate::{
    foundation::error::{EaselError, EaselResult},
    scene::draw::{ColorSource, DrawParams, Drawable, FrameCtx, NodeRef, RenderContext},
};

/// Address of a node inside a [`Composite`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Index {
    /// Position in traversal order.
    Flat(usize),
    Cell { row: usize, col: usize },
}

#[derive(Default)]
pub struct Composite {
    rows: Vec<Vec<NodeRef>>,
}

impl Composite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `node` to `row` (row 0 when `None`), growing rows on demand.
    pub fn push(&mut self, node: NodeRef, row: Option<usize>) {
        let row = row.unwrap_or(0);
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        self.rows[row].push(node);
    }

    /// Remove the last node of `row` (row 0 when `None`).
    pub fn pop(&mut self, row: Option<usize>) -> Option<NodeRef> {
        self.rows.get_mut(row.unwrap_or(0))?.pop()
    }

    pub fn get(&self, index: Index) -> Option<NodeRef> {
        match index {
            Index::Flat(i) => self.rows.iter().flatten().nth(i).cloned(),
            Index::Cell { row, col } => self.rows.get(row)?.get(col).cloned(),
        }
    }

    pub fn count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    fn nodes(&self) -> impl Iterator<Item = &NodeRef> {
        self.rows.iter().flatten()
    }

    /// Per-frame walk: update then draw each node, in insertion order.
    pub fn traverse(
        &self,
        frame: &mut FrameCtx<'_>,
        ctx: &mut dyn RenderContext,
        params: &DrawParams,
    ) -> EaselResult<()> {
        for (i, node) in self.nodes().enumerate() {
            let mut node = node.try_borrow_mut().map_err(|_| conflict(i))?;
            node.update(frame)?;
            node.draw(ctx, params)?;
        }
        Ok(())
    }
}

fn conflict(index: usize) -> EaselError {
    EaselError::borrow(format!("node #{index} is already borrowed"))
}

impl Drawable for Composite {
    fn update(&mut self, frame: &mut FrameCtx<'_>) -> EaselResult<()> {
        for (i, node) in self.nodes().enumerate() {
            node.try_borrow_mut().map_err(|_| conflict(i))?.update(frame)?;
        }
        Ok(())
    }

    fn draw(&self, ctx: &mut dyn RenderContext, params: &DrawParams) -> EaselResult<()> {
        for (i, node) in self.nodes().enumerate() {
            node.try_borrow().map_err(|_| conflict(i))?.draw(ctx, params)?;
        }
        Ok(())
    }

    fn animate_slow(&mut self, source: &mut ColorSource<'_>) -> EaselResult<()> {
        for (i, node) in self.nodes().enumerate() {
            node.try_borrow_mut()
                .map_err(|_| conflict(i))?
                .animate_slow(source)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composite")
            .field("rows", &self.rows.iter().map(Vec::len).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composite.rs"]
mod tests;
