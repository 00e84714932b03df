use approx::assert_relative_eq;
use frame_solver::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn members(pairs: &[(Point, Point)]) -> Vec<Member> {
    pairs
        .iter()
        .map(|&(begin, end)| Member::new(begin, end).unwrap())
        .collect()
}

/// Sum of support reactions and applied loads: [Fx, Fy, moment about origin]
fn out_of_balance(frame: &Frame, solution: &FrameSolution) -> [f64; 3] {
    let mut total = [0.0; 3];

    for (node, _) in frame.registry().supports() {
        let point = frame.registry().point(node).unwrap();
        let rxn = solution.node_reactions(node).unwrap();
        total[0] += rxn.fx;
        total[1] += rxn.fy;
        total[2] += point.x * rxn.fy - point.y * rxn.fx + rxn.mz;
    }

    for (_, load) in frame.registry().loads() {
        let point = load.position;
        total[0] += load.fx;
        total[1] += load.fy;
        total[2] += point.x * load.fy - point.y * load.fx + load.m;
    }

    total
}

/// Two collinear members, fixed at the left end and on a vertical roller at the right
fn collinear_frame() -> Frame {
    let (a, b, c) = (p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0));

    let mut frame = Frame::new([a, b, c]).unwrap();
    frame.add_members(members(&[(a, b), (b, c)])).unwrap();
    frame
        .add_supports([Support::fixed(a), Support::roller(c, RollerOrientation::Y)])
        .unwrap();
    frame
        .add_loads([
            NodeLoad::force(20.0, 20.0, b),
            NodeLoad::force(30.0, -30.0, c),
        ])
        .unwrap();
    frame
}

/// Closed square portal, hinged at `a` and on a vertical roller at `d`
fn closed_portal() -> Frame {
    let (a, b, c, d) = (p(0.0, 0.0), p(0.0, 5.0), p(5.0, 5.0), p(5.0, 0.0));

    let mut frame = Frame::new([a, b, c, d]).unwrap();
    frame
        .add_members(members(&[(a, b), (b, c), (c, d), (d, a)]))
        .unwrap();
    frame
        .add_supports([Support::hinged(a), Support::roller(d, RollerOrientation::Y)])
        .unwrap();
    frame
        .add_loads([NodeLoad::force(10.0, 0.0, b), NodeLoad::force(0.0, -20.0, c)])
        .unwrap();
    frame
}

/// Inclined member followed by a horizontal one, fixed at the first point
/// and hinged at the last
fn bent_frame(offset: (f64, f64)) -> Frame {
    let [a, b, c] = [p(0.0, 0.0), p(3.0, 4.0), p(8.0, 4.0)].map(|pt| pt.offset(offset.0, offset.1));

    let mut frame = Frame::new([a, b, c]).unwrap();
    frame.add_members(members(&[(a, b), (b, c)])).unwrap();
    frame
        .add_supports([Support::fixed(a), Support::hinged(c)])
        .unwrap();
    frame.add_loads([NodeLoad::new(5.0, -10.0, 2.0, b)]).unwrap();
    frame
}

#[test]
fn collinear_members_share_axial_load() {
    init_logging();
    let frame = collinear_frame();
    let solution = frame.solve().unwrap();

    let mid = solution.node_displacement(frame.node_id(&p(5.0, 0.0)).unwrap()).unwrap();
    let end = solution.node_displacement(frame.node_id(&p(10.0, 0.0)).unwrap()).unwrap();

    // Both loads pass through the first member, only the second load through the other
    assert_relative_eq!(mid.dx, 250.0, epsilon = 1e-8);
    assert_relative_eq!(end.dx, 400.0, epsilon = 1e-8);
    assert_eq!(end.dy, 0.0);

    // Propped cantilever bending under the upward load at midspan
    assert!(mid.dy != 0.0 && mid.rz != 0.0 && end.rz != 0.0);
    assert_relative_eq!(mid.dy, 4375.0 / 24.0, epsilon = 1e-7);
    assert_relative_eq!(mid.rz, 15.625, epsilon = 1e-7);
    assert_relative_eq!(end.rz, -62.5, epsilon = 1e-7);

    // Fixed end does not move
    assert_eq!(&solution.displacements.as_slice()[0..3], &[0.0, 0.0, 0.0]);

    let base = solution.node_reactions(frame.node_id(&p(0.0, 0.0)).unwrap()).unwrap();
    let roller = solution.node_reactions(frame.node_id(&p(10.0, 0.0)).unwrap()).unwrap();
    assert_relative_eq!(base.fx, -50.0, epsilon = 1e-8);
    assert_relative_eq!(base.fy, -13.75, epsilon = 1e-8);
    assert_relative_eq!(base.mz, -37.5, epsilon = 1e-8);
    assert_relative_eq!(roller.fy, 23.75, epsilon = 1e-8);
    assert_relative_eq!(base.fy + roller.fy, 10.0, epsilon = 1e-8);
}

#[test]
fn closed_portal_reactions_match_statics() {
    init_logging();
    let frame = closed_portal();
    let solution = frame.solve().unwrap();

    let a = solution.node_reactions(frame.node_id(&p(0.0, 0.0)).unwrap()).unwrap();
    let d = solution.node_reactions(frame.node_id(&p(5.0, 0.0)).unwrap()).unwrap();

    assert_relative_eq!(a.fx, -10.0, epsilon = 1e-8);
    assert_relative_eq!(a.fy, -10.0, epsilon = 1e-8);
    assert_relative_eq!(d.fy, 30.0, epsilon = 1e-8);
    // Neither support restrains rotation
    assert_eq!(solution.fixed_dofs, vec![0, 1, 10]);
}

#[test]
fn simply_supported_beam_midspan_load() {
    init_logging();
    let (a, b, c) = (p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0));
    let mut frame = Frame::new([a, b, c]).unwrap();
    frame.add_members(members(&[(a, b), (b, c)])).unwrap();
    frame
        .add_supports([Support::hinged(a), Support::roller(c, RollerOrientation::Y)])
        .unwrap();
    frame.add_loads([NodeLoad::force(0.0, -10.0, b)]).unwrap();

    let solution = frame.solve().unwrap();
    let ids: Vec<NodeId> = [a, b, c].iter().map(|pt| frame.node_id(pt).unwrap()).collect();

    // PL^3 / 48EI at midspan, PL^2 / 16EI at the ends
    let mid = solution.node_displacement(ids[1]).unwrap();
    assert_relative_eq!(mid.dy, -1250.0 / 6.0, epsilon = 1e-8);
    assert_relative_eq!(mid.rz, 0.0, epsilon = 1e-9);
    assert_relative_eq!(solution.node_displacement(ids[0]).unwrap().rz, -62.5, epsilon = 1e-8);
    assert_relative_eq!(solution.node_displacement(ids[2]).unwrap().rz, 62.5, epsilon = 1e-8);

    assert_relative_eq!(solution.node_reactions(ids[0]).unwrap().fy, 5.0, epsilon = 1e-9);
    assert_relative_eq!(solution.node_reactions(ids[2]).unwrap().fy, 5.0, epsilon = 1e-9);

    // PL / 4 under the load
    let [i_end, j_end] = frame.member_end_forces(&solution, 0).unwrap();
    assert_relative_eq!(i_end.moment, 0.0, epsilon = 1e-9);
    assert_relative_eq!(i_end.shear, 5.0, epsilon = 1e-9);
    assert_relative_eq!(j_end.shear, 5.0, epsilon = 1e-9);
    assert_relative_eq!(j_end.moment, 25.0, epsilon = 1e-9);
}

#[test]
fn reactions_balance_applied_loads() {
    init_logging();

    for frame in [collinear_frame(), closed_portal(), bent_frame((0.0, 0.0))] {
        let solution = frame.solve().unwrap();
        let [fx, fy, mz] = out_of_balance(&frame, &solution);

        assert_relative_eq!(fx, 0.0, epsilon = 1e-8);
        assert_relative_eq!(fy, 0.0, epsilon = 1e-8);
        assert_relative_eq!(mz, 0.0, epsilon = 1e-7);
    }
}

#[test]
fn free_dofs_are_in_equilibrium() {
    init_logging();

    for frame in [collinear_frame(), closed_portal(), bent_frame((0.0, 0.0))] {
        let solution = frame.solve().unwrap();
        assert!(solution.max_free_residual() < 1e-8);

        for &dof in &solution.fixed_dofs {
            assert_eq!(solution.displacements[dof], 0.0);
        }
    }
}

#[test]
fn results_do_not_depend_on_frame_position() {
    init_logging();
    let origin = bent_frame((0.0, 0.0));
    let shifted = bent_frame((3.5, -2.25));

    let at_origin = origin.solve().unwrap();
    let after_shift = shifted.solve().unwrap();

    assert_eq!(at_origin.fixed_dofs, after_shift.fixed_dofs);
    assert_eq!(origin.member_count(), shifted.member_count());
    for (before, after) in origin.members().zip(shifted.members()) {
        assert_relative_eq!(before.length(), after.length(), epsilon = 1e-12);

        let (k_before, k_after) = (before.global_stiffness(), after.global_stiffness());
        for i in 0..6 {
            for j in 0..6 {
                assert_relative_eq!(k_before[(i, j)], k_after[(i, j)], epsilon = 1e-12);
            }
        }
    }
    for dof in 0..at_origin.dof_count() {
        assert_relative_eq!(
            at_origin.displacements[dof],
            after_shift.displacements[dof],
            epsilon = 1e-9
        );
    }
}

#[test]
fn assembled_stiffness_is_symmetric() {
    for frame in [collinear_frame(), closed_portal(), bent_frame((1.0, 1.0))] {
        let k = frame.build_global_stiffness();
        let n = k.nrows();

        assert_eq!(n, frame.registry().dof_count());
        for i in 0..n {
            for j in 0..n {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-12);
            }
        }
    }
}

#[test]
fn reversed_member_gives_same_response() {
    init_logging();
    let (a, b) = (p(0.0, 0.0), p(0.0, 4.0));

    let solve = |begin: Point, end: Point| {
        let mut frame = Frame::new([a, b]).unwrap();
        frame.add_members(members(&[(begin, end)])).unwrap();
        frame.add_supports([Support::fixed(a)]).unwrap();
        frame.add_loads([NodeLoad::new(3.0, -1.0, 0.5, b)]).unwrap();
        frame.solve().unwrap()
    };

    let forward = solve(a, b);
    let backward = solve(b, a);
    for dof in 0..forward.dof_count() {
        assert_relative_eq!(forward.displacements[dof], backward.displacements[dof], epsilon = 1e-9);
        assert_relative_eq!(forward.reactions[dof], backward.reactions[dof], epsilon = 1e-9);
    }
}

#[test]
fn mechanism_is_reported_as_singular() {
    init_logging();
    let (a, b, c) = (p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0));
    let mut frame = Frame::new([a, b, c]).unwrap();
    frame.add_members(members(&[(a, b), (b, c)])).unwrap();
    frame
        .add_supports([
            Support::roller(a, RollerOrientation::Y),
            Support::roller(c, RollerOrientation::Y),
        ])
        .unwrap();
    frame.add_loads([NodeLoad::force(0.0, -10.0, b)]).unwrap();

    // Nothing stops the beam sliding along X
    assert_eq!(frame.solve(), Err(FrameError::SingularSystem { free_dofs: 7 }));
}

#[test]
fn options_do_not_change_a_well_posed_solution() {
    let frame = closed_portal();

    let checked = frame.solve().unwrap();
    let unchecked = frame
        .solve_with(&AnalysisOptions::linear().without_statics_check())
        .unwrap();
    assert_eq!(checked, unchecked);
}

#[test]
fn solution_serializes_to_json() {
    let frame = closed_portal();
    let solution = frame.solve().unwrap();

    let json = serde_json::to_string(&solution).unwrap();
    let restored: FrameSolution = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.free_dofs, solution.free_dofs);
    assert_eq!(restored.fixed_dofs, solution.fixed_dofs);
    for dof in 0..solution.dof_count() {
        assert_relative_eq!(restored.displacements[dof], solution.displacements[dof], max_relative = 1e-12);
        assert_relative_eq!(restored.reactions[dof], solution.reactions[dof], epsilon = 1e-12, max_relative = 1e-12);
    }

    let summary = serde_json::to_value(frame.summary(&solution)).unwrap();
    assert_eq!(summary["num_members"], 4);
    assert_eq!(summary["total_dofs"], 12);
}
