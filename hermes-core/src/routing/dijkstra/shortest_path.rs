use std::collections::BinaryHeap;

use hashbrown::{HashMap, HashSet};
use log::{debug, trace, warn};

use super::state::State;
use crate::{GuidewayEdge, HermesGraph};

/// Dijkstra's algorithm for the cheapest sequence of edges from `start` to `goal`.
///
/// Returns the edges in travel order. An empty result means there is nothing
/// to travel: either `start == goal` or the goal is unreachable. Malformed
/// edge costs are normalized to the fallback weight before relaxation.
pub fn find_path<'g>(graph: &'g HermesGraph, start: &str, goal: &str) -> Vec<&'g GuidewayEdge> {
    trace!("Searching path {start} -> {goal}");

    if start == goal {
        return Vec::new();
    }

    let estimated_nodes = graph.station_count();
    let mut distances: HashMap<&str, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<&str, &'g GuidewayEdge> =
        HashMap::with_capacity(estimated_nodes);
    let mut visited: HashSet<&str> = HashSet::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::new();

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == goal {
            break;
        }

        // Stale heap entry for an already settled node
        if !visited.insert(node) {
            continue;
        }

        for edge in graph.neighbors(node) {
            let next = edge.to.as_str();
            let next_cost = cost + edge.routing_cost();

            if next_cost < distances.get(next).copied().unwrap_or(f64::INFINITY) {
                distances.insert(next, next_cost);
                predecessors.insert(next, edge);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    if !predecessors.contains_key(goal) {
        debug!(
            "No path found from {start} to {goal} ({} stations visited)",
            visited.len()
        );
        return Vec::new();
    }

    // Follow predecessors backward from goal to start
    let mut path = Vec::new();
    let mut current = goal;
    while current != start {
        let Some(&edge) = predecessors.get(current) else {
            warn!("Backtrack failed at {current} while searching {start} -> {goal}");
            return Vec::new();
        };
        if path.len() >= graph.edge_count() {
            warn!("Predecessor chain for {start} -> {goal} does not reach the start");
            return Vec::new();
        }
        path.push(edge);
        current = edge.from.as_str();
    }
    path.reverse(); // Now path is from start to goal

    debug!(
        "Path {start} -> {goal}: {}",
        path.iter()
            .map(|e| format!("{}->{}", e.from, e.to))
            .collect::<Vec<_>>()
            .join(", ")
    );
    path
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{Station, geometry::lat_lon, loading::build_graph, RawEdge, routing::path_cost};

    fn graph_with(stations: &[&str], edges: &[(&str, &str, f64)]) -> HermesGraph {
        let mut graph = HermesGraph::with_stations(
            stations
                .iter()
                .enumerate()
                .map(|(i, id)| Station::new(*id, *id, lat_lon(0.0, i as f64 * 0.01))),
        );
        for &(from, to, cost) in edges {
            let path = vec![lat_lon(0.0, 0.0), lat_lon(0.0, 0.01)];
            graph.insert_edge(GuidewayEdge::new(from, to, path.clone()).with_cost(cost));
            graph.insert_edge(
                GuidewayEdge::new(to, from, path.into_iter().rev().collect()).with_cost(cost),
            );
        }
        graph
    }

    fn hops(path: &[&GuidewayEdge]) -> Vec<(String, String)> {
        path.iter()
            .map(|e| (e.from.clone(), e.to.clone()))
            .collect()
    }

    #[test]
    fn chain_is_followed() {
        let graph = graph_with(&["A", "B", "C"], &[("A", "B", 5.0), ("B", "C", 7.0)]);

        let path = find_path(&graph, "A", "C");
        assert_eq!(
            hops(&path),
            vec![
                ("A".to_string(), "B".to_string()),
                ("B".to_string(), "C".to_string())
            ]
        );
        assert_relative_eq!(path_cost(&path), 12.0);
    }

    #[test]
    fn shorter_chain_beats_direct_long_edge() {
        let graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", 5.0), ("B", "C", 7.0), ("A", "C", 20.0)],
        );

        let path = find_path(&graph, "A", "C");
        assert_eq!(path.len(), 2);
        assert_relative_eq!(path_cost(&path), 12.0);
    }

    #[test]
    fn start_equals_goal_is_empty() {
        let graph = graph_with(&["A", "B"], &[("A", "B", 1.0)]);
        assert!(find_path(&graph, "A", "A").is_empty());
    }

    #[test]
    fn unreachable_goal_is_empty() {
        let graph = graph_with(&["A", "B", "C", "D"], &[("A", "B", 1.0), ("C", "D", 1.0)]);
        assert!(find_path(&graph, "A", "D").is_empty());
        assert!(find_path(&graph, "A", "nowhere").is_empty());
        assert!(find_path(&graph, "nowhere", "A").is_empty());
    }

    #[test]
    fn malformed_cost_counts_as_fallback_weight() {
        let graph = graph_with(
            &["A", "B", "C"],
            &[("A", "B", f64::NAN), ("B", "C", 1.0), ("A", "C", 3.0)],
        );

        let path = find_path(&graph, "A", "C");
        assert_eq!(path.len(), 2);
        assert_relative_eq!(path_cost(&path), 2.0);
    }

    #[test]
    fn routes_over_built_geometry() {
        let stations = vec![
            Station::new("cp", "Connaught Place", lat_lon(28.6315, 77.2167)),
            Station::new("indiaGate", "India Gate", lat_lon(28.6129, 77.2295)),
            Station::new("khanMarket", "Khan Market", lat_lon(28.6006, 77.2270)),
            Station::new("aiims", "AIIMS", lat_lon(28.5672, 77.2100)),
        ];
        let raw: Vec<RawEdge> = stations
            .windows(2)
            .map(|pair| {
                RawEdge::new(
                    pair[0].id.clone(),
                    pair[1].id.clone(),
                    vec![pair[0].position, pair[1].position],
                )
            })
            .collect();
        let graph = build_graph(&stations, &raw);

        let path = find_path(&graph, "aiims", "cp");
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].from, "aiims");
        assert_eq!(path[2].to, "cp");
        assert_eq!(path[0].path[0], stations[3].position);
    }

    /// Cheapest simple path by exhaustive depth-first enumeration
    fn brute_force(graph: &HermesGraph, node: &str, goal: &str, seen: &mut Vec<String>) -> f64 {
        if node == goal {
            return 0.0;
        }
        let mut best = f64::INFINITY;
        for edge in graph.neighbors(node) {
            if seen.contains(&edge.to) {
                continue;
            }
            seen.push(edge.to.clone());
            let rest = brute_force(graph, &edge.to, goal, seen);
            seen.pop();
            best = best.min(edge.routing_cost() + rest);
        }
        best
    }

    #[test]
    fn matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(7);
        let ids: Vec<String> = (0..7).map(|i| format!("s{i}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

        for _ in 0..40 {
            let edge_count = rng.random_range(3..12);
            let edges: Vec<(&str, &str, f64)> = (0..edge_count)
                .map(|_| {
                    let from = id_refs[rng.random_range(0..ids.len())];
                    let to = id_refs[rng.random_range(0..ids.len())];
                    (from, to, f64::from(rng.random_range(0..20_u32)))
                })
                .filter(|(from, to, _)| from != to)
                .collect();
            let graph = graph_with(&id_refs, &edges);

            for start in &id_refs {
                for goal in &id_refs {
                    if start == goal {
                        continue;
                    }
                    let expected =
                        brute_force(&graph, start, goal, &mut vec![(*start).to_string()]);
                    let path = find_path(&graph, start, goal);

                    if expected.is_infinite() {
                        assert!(path.is_empty(), "{start} -> {goal} should be unreachable");
                    } else {
                        assert!(!path.is_empty(), "{start} -> {goal} should be reachable");
                        assert_eq!(path[0].from, *start);
                        assert_eq!(path[path.len() - 1].to, *goal);
                        assert!(path.windows(2).all(|w| w[0].to == w[1].from));
                        assert_relative_eq!(path_cost(&path), expected);
                    }
                }
            }
        }
    }
}
