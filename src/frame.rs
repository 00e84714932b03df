//! Frame - 2D frame model and direct stiffness solver

use log::{debug, info, warn};

use crate::analysis::AnalysisOptions;
use crate::elements::{Member, Point, Support, SupportKind};
use crate::error::{FrameError, FrameResult};
use crate::loads::NodeLoad;
use crate::math::{self, Mat, Vec6, Vector};
use crate::registry::{DofRegistry, NodeId};
use crate::results::{AnalysisSummary, FrameSolution, MemberForces};

/// A member together with the nodes it connects
#[derive(Debug, Clone)]
struct Element {
    member: Member,
    nodes: [NodeId; 2],
}

impl Element {
    /// Global DOF ids: begin triple followed by end triple
    fn dofs(&self) -> [usize; 6] {
        let [a, b, c] = self.nodes[0].dofs();
        let [d, e, f] = self.nodes[1].dofs();
        [a, b, c, d, e, f]
    }
}

/// A 2D frame model
///
/// Owns its node registry and members. Every call to [`Frame::solve`]
/// rebuilds the global matrices from scratch.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    registry: DofRegistry,
    elements: Vec<Element>,
}

impl Frame {
    /// Create a frame from its points, numbered in the given order
    pub fn new(points: impl IntoIterator<Item = Point>) -> FrameResult<Self> {
        let mut registry = DofRegistry::new();
        registry.register(points)?;
        Ok(Self {
            registry,
            elements: Vec::new(),
        })
    }

    // ========================
    // Model Building Methods
    // ========================

    /// Node registry of this frame
    pub fn registry(&self) -> &DofRegistry {
        &self.registry
    }

    /// Handle of the node at exactly this position
    pub fn node_id(&self, point: &Point) -> FrameResult<NodeId> {
        self.registry.resolve(point)
    }

    /// Add members; both endpoints of every member must be registered
    pub fn add_members(&mut self, members: impl IntoIterator<Item = Member>) -> FrameResult<()> {
        let elements = members
            .into_iter()
            .map(|member| -> FrameResult<Element> {
                let nodes = [
                    self.registry.resolve(&member.begin())?,
                    self.registry.resolve(&member.end())?,
                ];
                Ok(Element { member, nodes })
            })
            .collect::<FrameResult<Vec<_>>>()?;

        self.elements.extend(elements);
        Ok(())
    }

    /// Add supports at registered points
    ///
    /// Nothing is bound if any support lands on a point that already has
    /// one or that appears twice in the batch.
    pub fn add_supports(&mut self, supports: impl IntoIterator<Item = Support>) -> FrameResult<()> {
        let bindings = supports
            .into_iter()
            .map(|support| -> FrameResult<(NodeId, SupportKind)> {
                Ok((self.registry.resolve(&support.position)?, support.kind))
            })
            .collect::<FrameResult<Vec<_>>>()?;

        for (n, (node, _)) in bindings.iter().enumerate() {
            let repeated = bindings[..n].iter().any(|(earlier, _)| earlier == node);
            if repeated || self.registry.support(*node).is_some() {
                return Err(FrameError::OverConstrainedPoint(self.registry.point(*node)?));
            }
        }

        for (node, kind) in bindings {
            self.registry.bind_support(node, kind)?;
        }
        Ok(())
    }

    /// Add loads at registered points
    pub fn add_loads(&mut self, loads: impl IntoIterator<Item = NodeLoad>) -> FrameResult<()> {
        let bindings = loads
            .into_iter()
            .map(|load| -> FrameResult<(NodeId, NodeLoad)> {
                Ok((self.registry.resolve(&load.position)?, load))
            })
            .collect::<FrameResult<Vec<_>>>()?;

        for (node, load) in bindings {
            self.registry.bind_load(node, load)?;
        }
        Ok(())
    }

    /// Add a support by node handle
    pub fn add_support_at(&mut self, node: NodeId, kind: SupportKind) -> FrameResult<()> {
        self.registry.bind_support(node, kind)
    }

    /// Add a load by node handle
    pub fn add_load_at(&mut self, node: NodeId, fx: f64, fy: f64, m: f64) -> FrameResult<()> {
        let position = self.registry.point(node)?;
        self.registry.bind_load(node, NodeLoad::new(fx, fy, m, position))
    }

    /// Members in insertion order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.elements.iter().map(|element| &element.member)
    }

    /// Number of members
    pub fn member_count(&self) -> usize {
        self.elements.len()
    }

    // ========================
    // Analysis Methods
    // ========================

    /// Build the global load vector
    pub fn build_load_vector(&self) -> Vector {
        let mut f = Vector::zeros(self.registry.dof_count());

        for (node, load) in self.registry.loads() {
            for (dof, value) in node.dofs().into_iter().zip(load.as_array()) {
                f[dof] += value;
            }
        }

        f
    }

    /// Build the global stiffness matrix
    pub fn build_global_stiffness(&self) -> Mat {
        let n_dofs = self.registry.dof_count();
        let mut k_global = Mat::zeros(n_dofs, n_dofs);

        for element in &self.elements {
            let k_member = element.member.global_stiffness();
            let dofs = element.dofs();

            for (a, &row) in dofs.iter().enumerate() {
                for (b, &col) in dofs.iter().enumerate() {
                    k_global[(row, col)] += k_member[(a, b)];
                }
            }
        }

        k_global
    }

    /// Run linear static analysis with default options
    pub fn solve(&self) -> FrameResult<FrameSolution> {
        self.solve_with(&AnalysisOptions::default())
    }

    /// Run linear static analysis
    pub fn solve_with(&self, options: &AnalysisOptions) -> FrameResult<FrameSolution> {
        let n_dofs = self.registry.dof_count();

        let f_global = self.build_load_vector();
        let k_global = self.build_global_stiffness();
        debug_assert!(math::is_symmetric(&k_global, 1e-9));
        debug!(
            "assembled {} members into a {n_dofs}x{n_dofs} stiffness matrix",
            self.elements.len()
        );

        let fixed_dofs = self.registry.fixed_dofs();
        let free_dofs = self.registry.free_dofs();
        debug!("{} free DOFs, {} fixed DOFs", free_dofs.len(), fixed_dofs.len());

        let (k11, p1) = math::remove_dofs(&k_global, &f_global, &fixed_dofs);

        // Solve K11 * D1 = P1
        let d1 = if free_dofs.is_empty() {
            Vector::zeros(0)
        } else {
            math::solve_linear_system(&k11, &p1, options.pivot_tolerance).ok_or(
                FrameError::SingularSystem {
                    free_dofs: free_dofs.len(),
                },
            )?
        };

        let d_full = math::expand(&d1, &free_dofs, n_dofs);
        let reactions = &k_global * &d_full - &f_global;

        let solution = FrameSolution {
            displacements: d_full,
            reactions,
            free_dofs,
            fixed_dofs,
        };

        if options.check_statics {
            let residual = solution.max_free_residual();
            let allowed = options.residual_tolerance * f_global.amax().max(1.0);
            if residual > allowed {
                warn!("free DOF residual {residual:e} exceeds {allowed:e}; results may be inaccurate");
            }
        }

        info!(
            "solved frame with {} nodes and {} members",
            self.registry.len(),
            self.elements.len()
        );
        Ok(solution)
    }

    /// Member end forces in local axes as `[i-end, j-end]`
    pub fn member_end_forces(
        &self,
        solution: &FrameSolution,
        index: usize,
    ) -> FrameResult<[MemberForces; 2]> {
        let element = self
            .elements
            .get(index)
            .ok_or(FrameError::UnknownMember(index))?;

        let dofs = element.dofs();
        if dofs[5] >= solution.dof_count() {
            return Err(FrameError::InvalidInput(format!(
                "solution has {} DOFs but member {index} needs DOF {}",
                solution.dof_count(),
                dofs[5]
            )));
        }

        let d_global = Vec6::from_fn(|i, _| solution.displacements[dofs[i]]);
        let f_local = element.member.end_forces(&d_global);

        let mut forces = [0.0; 6];
        forces.copy_from_slice(f_local.as_slice());

        Ok([
            MemberForces::from_i_node_forces(&forces),
            MemberForces::from_j_node_forces(&forces),
        ])
    }

    /// Get analysis summary
    pub fn summary(&self, solution: &FrameSolution) -> AnalysisSummary {
        let mut summary = AnalysisSummary {
            num_nodes: self.registry.len(),
            num_members: self.elements.len(),
            total_dofs: solution.dof_count(),
            free_dofs: solution.free_dofs.len(),
            ..Default::default()
        };

        // Find max displacement
        for (node, _) in self.registry.iter() {
            if let Some(disp) = solution.node_displacement(node) {
                let mag = disp.translation_magnitude();
                if mag > summary.max_displacement {
                    summary.max_displacement = mag;
                    summary.max_disp_node = Some(node);
                }
            }
        }

        // Find max reaction
        for (node, _) in self.registry.supports() {
            if let Some(rxn) = solution.node_reactions(node) {
                let mag = rxn.force_magnitude();
                if mag > summary.max_reaction {
                    summary.max_reaction = mag;
                    summary.max_reaction_node = Some(node);
                }
            }
        }

        summary
    }
}
