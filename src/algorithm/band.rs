//! Band-partitioned single-source shortest paths.
//!
//! The distance range is swept in half-open bands `[B, B + delta)`. Inside a band the
//! algorithm first runs a few rounds of Bellman-Ford relaxation restricted to the band. If
//! the band converges within that budget every band vertex is final. Otherwise the vertices
//! whose latest improvement has not been propagated yet become pivots: band vertices no
//! farther than the closest pivot are settled on the spot, and only the pivots go through a
//! small local heap. No step ever orders the whole frontier.
//!
//! Each band still scans the frontier twice, once for its minimum and once to collect the
//! band members, so a run costs O(|frontier| * bands) on top of the relaxations. Very
//! narrow configured widths make that term dominate.

use log::{debug, info, trace};
use num_traits::NumCast;
use serde::{Deserialize, Serialize};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{MinQueue, SparseSet};
use crate::graph::{Graph, IndexedGraph, Vertex, Weight};
use crate::{Error, Result};

/// Tuning parameters of [`BandSSSP`].
///
/// None of them affects the computed distances, only how the work is split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandConfig {
    /// Fixed band width. When unset it is derived from the mean edge weight and graph size.
    pub band_width: Option<f64>,

    /// Fixed number of bounded relaxation rounds per band. When unset it grows with the
    /// logarithm of the band size.
    pub rounds: Option<usize>,

    /// Lower limit for the derived number of rounds
    pub min_rounds: usize,
}

impl Default for BandConfig {
    fn default() -> Self {
        BandConfig {
            band_width: None,
            rounds: None,
            min_rounds: 2,
        }
    }
}

impl BandConfig {
    /// Checks the configuration before a run
    pub fn validate(&self) -> Result<()> {
        if let Some(width) = self.band_width {
            if !(width.is_finite() && width > 0.0) {
                return Err(Error::InvalidConfig(format!(
                    "band width must be positive and finite, got {}",
                    width
                )));
            }
        }
        if self.rounds == Some(0) {
            return Err(Error::InvalidConfig("round budget must be at least 1".to_string()));
        }
        if self.min_rounds == 0 {
            return Err(Error::InvalidConfig("minimum round budget must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Counters collected during one run of [`BandSSSP`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandStats {
    /// Bands processed
    pub bands: usize,
    /// Times the boundary skipped an empty stretch of the distance range
    pub boundary_jumps: usize,
    /// Bellman-Ford rounds over all bands
    pub relaxation_rounds: usize,
    /// Successful edge relaxations
    pub edge_relaxations: usize,
    /// Largest band seen
    pub max_band_size: usize,
    /// Vertices settled because bounded relaxation converged on them
    pub settled_by_relaxation: usize,
    /// Vertices settled without ordering because no pivot could improve them
    pub settled_immediately: usize,
    /// Pivots handed to ordered resolution
    pub pivots: usize,
    /// Vertices settled when extracted from the pivot heap
    pub settled_by_pivots: usize,
    /// Heap extractions, stale ones included
    pub heap_pops: usize,
}

impl BandStats {
    /// Total number of settled (reachable) vertices
    pub fn settled(&self) -> usize {
        self.settled_by_relaxation + self.settled_immediately + self.settled_by_pivots
    }
}

/// Band-partitioned SSSP algorithm
#[derive(Debug, Clone, Default)]
pub struct BandSSSP {
    config: BandConfig,
}

impl BandSSSP {
    /// Create a new instance with automatically derived parameters
    pub fn new() -> Self {
        BandSSSP {
            config: BandConfig::default(),
        }
    }

    pub fn with_config(config: BandConfig) -> Self {
        BandSSSP { config }
    }

    /// Use a fixed band width
    pub fn with_band_width(mut self, width: f64) -> Self {
        self.config.band_width = Some(width);
        self
    }

    /// Use a fixed round budget per band
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.config.rounds = Some(rounds);
        self
    }

    /// Set the lower limit of the derived round budget
    pub fn with_min_rounds(mut self, min_rounds: usize) -> Self {
        self.config.min_rounds = min_rounds;
        self
    }

    pub fn config(&self) -> &BandConfig {
        &self.config
    }

    /// Band width used for `graph`: the configured one, or the mean edge weight scaled
    /// by `max(2, log2 n)`. Graphs whose weights are all zero fall back to a width of one.
    pub fn band_width_for<V, W>(&self, graph: &IndexedGraph<V, W>) -> Result<W>
    where
        V: Vertex,
        W: Weight,
    {
        if let Some(width) = self.config.band_width {
            return <W as NumCast>::from(width).ok_or_else(|| {
                Error::InvalidConfig(format!("band width {} does not fit the weight type", width))
            });
        }

        let factor = (graph.vertex_count().max(2) as f64).log2().max(2.0);
        let width = graph
            .average_weight()
            .and_then(|avg| <W as NumCast>::from(factor).map(|factor| avg * factor));

        Ok(match width {
            Some(width) if width > W::zero() && width.is_finite() => width,
            _ => W::one(),
        })
    }

    /// Round budget for a band of `band_size` vertices
    fn rounds_for(&self, band_size: usize) -> usize {
        self.config.rounds.unwrap_or_else(|| {
            let by_size = ((band_size + 1) as f64).log2().ceil() as usize;
            by_size.max(self.config.min_rounds)
        })
    }

    /// Runs the algorithm and also returns the collected counters
    pub fn run_with_stats<V, W>(
        &self,
        graph: &IndexedGraph<V, W>,
        source: usize,
    ) -> Result<(Vec<Option<W>>, BandStats)>
    where
        V: Vertex,
        W: Weight,
    {
        self.config.validate()?;
        if source >= graph.vertex_count() {
            return Err(Error::UnknownSource(format!("index {}", source)));
        }

        let width = self.band_width_for(graph)?;
        debug!(
            "Band SSSP on {} vertices, {} edges, band width {:?}",
            graph.vertex_count(),
            graph.edge_count(),
            width
        );

        let run = BandRun::new(graph, source);
        let (distances, stats) = run.execute(self, width);

        info!(
            "Band SSSP settled {} vertices in {} bands ({} pivots, {} settled without ordering)",
            stats.settled(),
            stats.bands,
            stats.pivots,
            stats.settled_by_relaxation + stats.settled_immediately
        );
        Ok((distances, stats))
    }

    /// Like [`ShortestPathAlgorithm::shortest_distances`] but also returns the counters
    pub fn shortest_distances_with_stats<V, W, G>(
        &self,
        graph: &G,
        source: &V,
    ) -> Result<(ShortestPathResult<V, W>, BandStats)>
    where
        V: Vertex,
        W: Weight,
        G: Graph<V, W> + ?Sized,
    {
        let indexed = IndexedGraph::build(graph)?;
        let source_index = indexed.source_index(source)?;
        let (distances, stats) = self.run_with_stats(&indexed, source_index)?;
        let result = ShortestPathResult {
            source: source.clone(),
            distances: indexed.distance_map(&distances),
        };
        Ok((result, stats))
    }
}

impl<W> ShortestPathAlgorithm<W> for BandSSSP
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "BandSSSP"
    }

    fn distances_indexed<V>(&self, graph: &IndexedGraph<V, W>, source: usize) -> Result<Vec<Option<W>>>
    where
        V: Vertex,
    {
        self.run_with_stats(graph, source).map(|(distances, _)| distances)
    }
}

/// Mutable state of a single run. Dropped when the run returns.
struct BandRun<'g, V, W>
where
    V: Vertex,
    W: Weight,
{
    graph: &'g IndexedGraph<V, W>,

    /// Tentative distances, infinite until reached
    dist: Vec<W>,

    /// Vertices whose distance is final
    settled: Vec<bool>,

    /// Unsettled vertices with a finite tentative distance
    frontier: SparseSet,

    /// Vertices of the current band
    band: SparseSet,

    /// Vertices improved in the last relaxation round
    pending: SparseSet,

    /// Vertices improved in the current relaxation round
    next: SparseSet,

    stats: BandStats,
}

impl<'g, V, W> BandRun<'g, V, W>
where
    V: Vertex,
    W: Weight,
{
    fn new(graph: &'g IndexedGraph<V, W>, source: usize) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![W::infinity(); n];
        let mut frontier = SparseSet::new(n);
        dist[source] = W::zero();
        frontier.insert(source);

        BandRun {
            graph,
            dist,
            settled: vec![false; n],
            frontier,
            band: SparseSet::new(n),
            pending: SparseSet::new(n),
            next: SparseSet::new(n),
            stats: BandStats::default(),
        }
    }

    fn execute(mut self, algorithm: &BandSSSP, width: W) -> (Vec<Option<W>>, BandStats) {
        let mut boundary = W::zero();

        while let Some(floor) = self.frontier_min() {
            let mut upper = boundary + width;
            if floor >= upper {
                // Nothing left below the next band: move the boundary to the closest vertex
                boundary = floor;
                upper = floor + width;
                self.stats.boundary_jumps += 1;
            }
            if upper <= floor {
                // The width vanished in rounding next to a large boundary
                upper = floor + floor;
            }

            self.process_band(algorithm, boundary, upper);
            boundary = upper;
        }

        let distances = self
            .dist
            .iter()
            .zip(&self.settled)
            .map(|(&d, &settled)| if settled { Some(d) } else { None })
            .collect();
        (distances, self.stats)
    }

    /// Smallest tentative distance on the frontier, by a linear scan
    fn frontier_min(&self) -> Option<W> {
        self.frontier.iter().map(|v| self.dist[v]).min()
    }

    /// Settles every vertex with tentative distance below `upper`
    fn process_band(&mut self, algorithm: &BandSSSP, boundary: W, upper: W) {
        self.stats.bands += 1;

        self.band.clear();
        for v in self.frontier.iter() {
            if self.dist[v] < upper {
                self.band.insert(v);
            }
        }
        let band_size = self.band.len();
        self.stats.max_band_size = self.stats.max_band_size.max(band_size);

        let mut pending = std::mem::take(&mut self.pending);
        let mut next = std::mem::take(&mut self.next);
        pending.clear();
        for v in self.band.iter() {
            pending.insert(v);
        }

        // Bounded relaxation
        let budget = algorithm.rounds_for(band_size);
        let mut rounds = 0;
        let mut improved = Vec::new();
        while rounds < budget && !pending.is_empty() {
            rounds += 1;
            next.clear();
            for &u in pending.as_slice() {
                improved.clear();
                self.relax_out(u, upper, &mut improved);
                for &(v, _) in &improved {
                    next.insert(v);
                }
            }
            std::mem::swap(&mut pending, &mut next);
        }
        self.stats.relaxation_rounds += rounds;

        let pivot_count = pending.len();
        if !pending.is_empty() {
            self.stats.pivots += pivot_count;

            // Anything a pivot could still improve ends up at or above the closest pivot
            let pivot_floor = pending
                .iter()
                .map(|v| self.dist[v])
                .min()
                .unwrap_or(upper);
            for v in self.band.iter() {
                if !pending.contains(v) && self.dist[v] <= pivot_floor {
                    self.settled[v] = true;
                    self.frontier.remove(v);
                    self.stats.settled_immediately += 1;
                }
            }

            self.resolve_pivots(&pending, upper);
        }

        // Every remaining band vertex was propagated after its last improvement
        for v in self.band.iter() {
            if !self.settled[v] {
                self.settled[v] = true;
                self.frontier.remove(v);
                self.stats.settled_by_relaxation += 1;
            }
        }

        debug!(
            "band [{:?}, {:?}): {} vertices, {} rounds, {} pivots",
            boundary, upper, self.band.len(), rounds, pivot_count
        );

        self.pending = pending;
        self.next = next;
    }

    /// Resolves the pivots of the current band in increasing distance order
    fn resolve_pivots(&mut self, pivots: &SparseSet, upper: W) {
        let mut heap = MinQueue::from_entries(pivots.iter().map(|v| (v, self.dist[v])));
        let mut improved = Vec::new();

        while let Some((u, du)) = heap.pop() {
            self.stats.heap_pops += 1;
            if self.settled[u] || du != self.dist[u] {
                continue;
            }
            self.settled[u] = true;
            self.frontier.remove(u);
            self.stats.settled_by_pivots += 1;
            trace!("pivot {} settled at {:?}", u, du);

            improved.clear();
            self.relax_out(u, upper, &mut improved);
            for &(v, dv) in &improved {
                heap.push(v, dv);
            }
        }
    }

    /// Relaxes every edge out of `u`.
    ///
    /// Improved targets join the frontier; those that land below `upper` also join the
    /// band and are reported in `improved`.
    fn relax_out(&mut self, u: usize, upper: W, improved: &mut Vec<(usize, W)>) {
        let graph = self.graph;
        let du = self.dist[u];
        for &(v, weight) in graph.outgoing(u) {
            let candidate = du + weight;
            if candidate < self.dist[v] {
                debug_assert!(!self.settled[v], "settled vertex {} improved", v);
                self.dist[v] = candidate;
                self.frontier.insert(v);
                self.stats.edge_relaxations += 1;
                if candidate < upper {
                    self.band.insert(v);
                    improved.push((v, candidate));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AdjacencyGraph, MutableGraph};
    use ordered_float::OrderedFloat;

    type W = OrderedFloat<f64>;

    fn chain(len: usize, weight: f64) -> IndexedGraph<usize, W> {
        let mut graph = AdjacencyGraph::new();
        for v in 0..len - 1 {
            graph.add_edge(v, v + 1, OrderedFloat(weight));
        }
        IndexedGraph::build(&graph).unwrap()
    }

    #[test]
    fn default_band_width_scales_mean_weight() {
        let graph = chain(4, 3.0);
        // log2(4) = 2
        assert_eq!(BandSSSP::new().band_width_for(&graph).unwrap(), OrderedFloat(6.0));
    }

    #[test]
    fn zero_weights_fall_back_to_unit_band_width() {
        let graph = chain(5, 0.0);
        assert_eq!(BandSSSP::new().band_width_for(&graph).unwrap(), OrderedFloat(1.0));
    }

    #[test]
    fn rounds_grow_with_band_size() {
        let algorithm = BandSSSP::new();
        assert_eq!(algorithm.rounds_for(1), 2);
        assert_eq!(algorithm.rounds_for(7), 3);
        assert_eq!(algorithm.rounds_for(1000), 10);
        assert_eq!(BandSSSP::new().with_rounds(4).rounds_for(1000), 4);
    }

    #[test]
    fn long_chain_in_one_band_goes_through_pivots() {
        // One band holds the whole chain but one round only reaches one hop
        let graph = chain(6, 1.0);
        let algorithm = BandSSSP::new().with_band_width(100.0).with_rounds(1);

        let (distances, stats) = algorithm.run_with_stats(&graph, 0).unwrap();
        let expected: Vec<Option<W>> = (0..6).map(|d| Some(OrderedFloat(d as f64))).collect();
        assert_eq!(distances, expected);
        assert_eq!(stats.bands, 1);
        assert_eq!(stats.pivots, 1);
        assert_eq!(stats.settled_immediately, 1);
        assert_eq!(stats.settled(), 6);
    }

    #[test]
    fn narrow_bands_jump_over_gaps() {
        let mut graph = AdjacencyGraph::new();
        graph.add_edge("s", "far", OrderedFloat(1000.0));
        let indexed = IndexedGraph::build(&graph).unwrap();

        let algorithm = BandSSSP::new().with_band_width(1.0);
        let (distances, stats) = algorithm.run_with_stats(&indexed, 0).unwrap();

        assert_eq!(distances[1], Some(OrderedFloat(1000.0)));
        assert_eq!(stats.bands, 2);
        assert_eq!(stats.boundary_jumps, 1);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let graph = chain(2, 1.0);

        for algorithm in [
            BandSSSP::new().with_band_width(0.0),
            BandSSSP::new().with_band_width(f64::INFINITY),
            BandSSSP::new().with_rounds(0),
            BandSSSP::new().with_min_rounds(0),
        ] {
            assert!(matches!(
                algorithm.run_with_stats(&graph, 0),
                Err(Error::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: BandConfig = serde_json::from_str(r#"{"rounds": 3}"#).unwrap();
        assert_eq!(config.rounds, Some(3));
        assert_eq!(config.band_width, None);
        assert_eq!(config.min_rounds, 2);
    }
}
