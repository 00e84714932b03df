//! DOF registry - node numbering and per-node boundary data

use serde::{Deserialize, Serialize};

use crate::elements::{Point, SupportKind};
use crate::error::{FrameError, FrameResult};
use crate::loads::NodeLoad;

/// Degrees of freedom carried by each node: DX, DY, RZ
pub const DOFS_PER_NODE: usize = 3;

/// Handle to a registered node
///
/// Issued in registration order and never reused within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(usize);

impl NodeId {
    /// 0-based registration index
    pub fn index(self) -> usize {
        self.0
    }

    /// Global DOF ids `[3i, 3i+1, 3i+2]` for translation X, translation Y, rotation
    pub fn dofs(self) -> [usize; 3] {
        let base = self.0 * DOFS_PER_NODE;
        [base, base + 1, base + 2]
    }
}

/// Ordered collection of the points of one frame
///
/// Each registered point owns one DOF triple and at most one load and one
/// support.
#[derive(Debug, Clone, Default)]
pub struct DofRegistry {
    points: Vec<Point>,
    loads: Vec<Option<NodeLoad>>,
    supports: Vec<Option<SupportKind>>,
}

impl DofRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register points in order, returning their handles
    ///
    /// Nothing is registered if any point duplicates an existing point or
    /// another point of the same batch.
    pub fn register(&mut self, points: impl IntoIterator<Item = Point>) -> FrameResult<Vec<NodeId>> {
        let batch: Vec<Point> = points.into_iter().collect();

        for (n, point) in batch.iter().enumerate() {
            if self.index_of(point).is_some() || batch[..n].contains(point) {
                return Err(FrameError::DuplicateRegistration(*point));
            }
        }

        let first = self.points.len();
        let count = batch.len();
        self.points.extend(batch);
        self.loads.resize(first + count, None);
        self.supports.resize(first + count, None);

        Ok((first..first + count).map(NodeId).collect())
    }

    /// Number of registered points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no points are registered
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total number of DOFs (3N)
    pub fn dof_count(&self) -> usize {
        self.points.len() * DOFS_PER_NODE
    }

    /// Find the node at exactly this position
    pub fn index_of(&self, point: &Point) -> Option<NodeId> {
        self.points.iter().position(|p| p == point).map(NodeId)
    }

    /// Find the node at exactly this position or fail with `UnregisteredPoint`
    pub fn resolve(&self, point: &Point) -> FrameResult<NodeId> {
        self.index_of(point).ok_or(FrameError::UnregisteredPoint(*point))
    }

    /// Check that a handle belongs to this registry
    pub fn check(&self, node: NodeId) -> FrameResult<NodeId> {
        if node.0 < self.points.len() {
            Ok(node)
        } else {
            Err(FrameError::UnknownNode(node.0))
        }
    }

    /// Position of a registered node
    pub fn point(&self, node: NodeId) -> FrameResult<Point> {
        self.check(node).map(|node| self.points[node.0])
    }

    /// Global DOF ids of a node issued by this registry
    pub fn dof_ids(&self, node: NodeId) -> FrameResult<[usize; 3]> {
        self.check(node).map(NodeId::dofs)
    }

    /// Iterate over the registered nodes in registration order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Point)> {
        self.points.iter().enumerate().map(|(i, p)| (NodeId(i), p))
    }

    /// Bind a load to a node
    ///
    /// A node keeps a single load: a second load is summed into the first.
    pub fn bind_load(&mut self, node: NodeId, load: NodeLoad) -> FrameResult<()> {
        let node = self.check(node)?;
        let position = self.points[node.0];
        let load = NodeLoad { position, ..load };

        let combined = match self.loads[node.0].take() {
            Some(existing) => existing + load,
            None => load,
        };
        self.loads[node.0] = Some(combined);
        Ok(())
    }

    /// Bind a support to a node
    pub fn bind_support(&mut self, node: NodeId, kind: SupportKind) -> FrameResult<()> {
        let node = self.check(node)?;
        if self.supports[node.0].is_some() {
            return Err(FrameError::OverConstrainedPoint(self.points[node.0]));
        }
        self.supports[node.0] = Some(kind);
        Ok(())
    }

    /// Load bound to a node, if any
    pub fn load(&self, node: NodeId) -> Option<&NodeLoad> {
        self.loads.get(node.0).and_then(Option::as_ref)
    }

    /// Support bound to a node, if any
    pub fn support(&self, node: NodeId) -> Option<SupportKind> {
        self.supports.get(node.0).copied().flatten()
    }

    /// Iterate over nodes carrying a load
    pub fn loads(&self) -> impl Iterator<Item = (NodeId, &NodeLoad)> {
        self.loads
            .iter()
            .enumerate()
            .filter_map(|(i, load)| load.as_ref().map(|load| (NodeId(i), load)))
    }

    /// Iterate over nodes carrying a support
    pub fn supports(&self) -> impl Iterator<Item = (NodeId, SupportKind)> + '_ {
        self.supports
            .iter()
            .enumerate()
            .filter_map(|(i, kind)| kind.map(|kind| (NodeId(i), kind)))
    }

    /// DOFs restrained by the bound supports, ascending
    pub fn fixed_dofs(&self) -> Vec<usize> {
        self.supports()
            .flat_map(|(node, kind)| kind.constrained_dofs(node.dofs()))
            .collect()
    }

    /// DOFs not restrained by any support, ascending
    pub fn free_dofs(&self) -> Vec<usize> {
        let fixed = self.fixed_dofs();
        (0..self.dof_count())
            .filter(|dof| fixed.binary_search(dof).is_err())
            .collect()
    }
}
