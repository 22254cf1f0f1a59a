//! End-to-end Steiner tree solving.
//!
//! Graph and terminals in, best tree out: shortest paths are computed once,
//! the distance-network heuristic seeds the search, and one or more
//! annealing chains refine it with the edge-exchange neighborhood.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ConfigError, SteinerError, SteinerResult};
use crate::graph::{Graph, NodeId, SteinerTree};
use crate::heuristic::HAlgorithm;
use crate::neighborhood::Neighborhood;
use crate::paths::ShortestPaths;
use crate::random::create_rng;
use crate::sa::{SaConfig, SaProblem, SaResult, SaRunner};

/// The Steiner tree problem as seen by the annealing driver.
///
/// Holds the heuristic's tree as the starting point for every chain.
pub struct SteinerProblem<'a> {
    neighborhood: Neighborhood<'a>,
    initial: SteinerTree,
}

impl<'a> SteinerProblem<'a> {
    /// Builds the initial tree with [`HAlgorithm`].
    pub fn new(
        graph: &'a Graph,
        terminals: &[NodeId],
        paths: &'a ShortestPaths,
    ) -> SteinerResult<Self> {
        let initial = HAlgorithm::new(graph, terminals, paths).steiner_tree()?;
        Ok(Self {
            neighborhood: Neighborhood::new(graph, paths),
            initial,
        })
    }

    /// The heuristic's tree.
    pub fn initial(&self) -> &SteinerTree {
        &self.initial
    }
}

impl SaProblem for SteinerProblem<'_> {
    type Solution = SteinerTree;
    type Error = SteinerError;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> SteinerResult<SteinerTree> {
        Ok(self.initial.clone())
    }

    fn cost(&self, tree: &SteinerTree) -> f64 {
        tree.cost()
    }

    fn neighbor<R: Rng>(&self, tree: &SteinerTree, rng: &mut R) -> SteinerResult<SteinerTree> {
        Ok(self.neighborhood.generate(tree, rng)?)
    }
}

/// Solves Steiner tree instances.
pub struct SteinerSolver;

impl SteinerSolver {
    /// Finds a low-cost Steiner tree for `terminals` on `graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_steiner::graph::{Graph, NodeId};
    /// use u_steiner::sa::SaConfig;
    /// use u_steiner::solver::SteinerSolver;
    ///
    /// let g = Graph::with_edges(&[(1, 2, 1.0), (2, 3, 1.0), (1, 3, 3.0), (2, 4, 1.0)]).unwrap();
    /// let terminals = [NodeId(1), NodeId(3), NodeId(4)];
    /// let result = SteinerSolver::solve(&g, &terminals, &SaConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(result.best_cost, 3.0);
    /// assert!(result.best.is_terminal(NodeId(4)));
    /// ```
    pub fn solve(
        graph: &Graph,
        terminals: &[NodeId],
        config: &SaConfig,
    ) -> SteinerResult<SaResult<SteinerTree>> {
        config.validate()?;
        let paths = ShortestPaths::new(graph);
        Self::solve_with_paths(graph, terminals, &paths, config)
    }

    /// Like [`solve`](Self::solve), reusing distance tables already built
    /// for `graph`.
    pub fn solve_with_paths(
        graph: &Graph,
        terminals: &[NodeId],
        paths: &ShortestPaths,
        config: &SaConfig,
    ) -> SteinerResult<SaResult<SteinerTree>> {
        config.validate()?;
        let problem = SteinerProblem::new(graph, terminals, paths)?;
        tracing::info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            terminals = problem.initial().terminal_count(),
            cost = problem.initial().cost(),
            "initial solution"
        );

        let base_seed = config.seed.unwrap_or_else(rand::random);
        let results = run_chains(&problem, config, base_seed)?;

        let best = results
            .into_iter()
            .min_by(|a, b| a.best_cost.total_cmp(&b.best_cost))
            .ok_or_else(|| ConfigError("no annealing chain ran".into()))?;
        tracing::info!(
            cost = best.best_cost,
            iterations = best.iterations,
            stop_reason = ?best.stop_reason,
            "annealing finished"
        );
        Ok(best)
    }
}

/// Runs `config.chains` independent chains, chain `i` seeded `base_seed + i`.
fn run_chains(
    problem: &SteinerProblem<'_>,
    config: &SaConfig,
    base_seed: u64,
) -> SteinerResult<Vec<SaResult<SteinerTree>>> {
    let run_one = |chain: usize| {
        let mut rng = create_rng(base_seed.wrapping_add(chain as u64));
        SaRunner::run_with_rng(problem, config, &mut rng)
    };

    #[cfg(feature = "parallel")]
    if config.parallel {
        return (0..config.chains).into_par_iter().map(&run_one).collect();
    }

    (0..config.chains).map(&run_one).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::StopReason;
    use crate::test_utils::{n, nine_node_graph, nine_node_terminals};

    #[test]
    fn test_solve_nine_nodes() {
        let g = nine_node_graph();
        let terminals = nine_node_terminals();
        let config = SaConfig::default().with_seed(42);

        let result = SteinerSolver::solve(&g, &terminals, &config).unwrap();

        assert!(result.best_cost >= 8.0 - 1e-9, "below optimum: {}", result.best_cost);
        assert!(result.best_cost <= result.initial_cost);
        let tree = &result.best;
        assert!(terminals.iter().all(|&t| tree.is_terminal(t) && tree.contains(t)));
        assert!(tree.leaves().all(|l| tree.is_terminal(l)));
        assert!((tree.cost() - tree.total_weight()).abs() < 1e-9);
    }

    #[test]
    fn test_solve_best_history_non_increasing() {
        let g = nine_node_graph();
        let terminals = nine_node_terminals();
        let config = SaConfig::default().with_stagnation(0.0, 1).with_seed(5);

        let result = SteinerSolver::solve(&g, &terminals, &config).unwrap();

        assert_eq!(result.stop_reason, StopReason::Exhausted);
        assert_eq!(result.iterations, config.max_iterations());
        for w in result.cost_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_solve_seed_reproducible() {
        let g = nine_node_graph();
        let terminals = nine_node_terminals();
        let config = SaConfig::default().with_stages(5).with_seed(99);

        let a = SteinerSolver::solve(&g, &terminals, &config).unwrap();
        let b = SteinerSolver::solve(&g, &terminals, &config).unwrap();
        assert_eq!(a.cost_history, b.cost_history);
        let ea: Vec<_> = a.best.edges().copied().collect();
        let eb: Vec<_> = b.best.edges().copied().collect();
        assert_eq!(ea, eb);
    }

    #[test]
    fn test_solve_multiple_chains_picks_best() {
        let g = nine_node_graph();
        let terminals = nine_node_terminals();
        let config = SaConfig::default()
            .with_stages(3)
            .with_iterations_per_stage(10)
            .with_chains(4)
            .with_seed(3);

        let result = SteinerSolver::solve(&g, &terminals, &config).unwrap();
        for chain in 0..4u64 {
            let single = SteinerSolver::solve(
                &g,
                &terminals,
                &config.clone().with_chains(1).with_seed(3 + chain),
            )
            .unwrap();
            assert!(result.best_cost <= single.best_cost);
        }
    }

    #[test]
    fn test_solve_reuses_paths() {
        let g = nine_node_graph();
        let paths = ShortestPaths::new(&g);
        let config = SaConfig::default().with_seed(8);

        let pair = SteinerSolver::solve_with_paths(&g, &[n(1), n(4)], &paths, &config).unwrap();
        assert!((pair.best_cost - 4.0).abs() < 1e-9);

        let all = SteinerSolver::solve_with_paths(&g, &nine_node_terminals(), &paths, &config)
            .unwrap();
        assert!(all.best_cost >= pair.best_cost);
    }

    #[test]
    fn test_solve_errors() {
        let g = nine_node_graph();
        let config = SaConfig::default().with_seed(1);
        assert_eq!(
            SteinerSolver::solve(&g, &[], &config).unwrap_err(),
            SteinerError::NoTerminals
        );
        assert_eq!(
            SteinerSolver::solve(&g, &[n(1), n(77)], &config).unwrap_err(),
            SteinerError::UnknownTerminal(n(77))
        );
        assert!(matches!(
            SteinerSolver::solve(&g, &[n(1)], &config.clone().with_chains(0)),
            Err(SteinerError::Config(_))
        ));
    }

    #[test]
    fn test_solve_single_terminal() {
        let g = nine_node_graph();
        let result =
            SteinerSolver::solve(&g, &[n(6)], &SaConfig::default().with_seed(2)).unwrap();
        assert_eq!(result.best_cost, 0.0);
        assert_eq!(result.best.node_count(), 1);
        assert_eq!(result.acceptance_scale, None);
    }
}
