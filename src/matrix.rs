use hermes_core::prelude::*;
use log::warn;
use pyo3::prelude::*;
#[cfg(feature = "stubgen")]
use pyo3_stub_gen::derive::gen_stub_pyfunction;
use rayon::prelude::*;

use crate::model::PyNetwork;

/// Route cost between every pair of the given stations
///
/// Parameters
/// ----------
/// network : Network
///     Network to route on
/// station_ids : list[str]
///     Stations forming both the rows and the columns of the matrix
///
/// Returns
/// -------
/// list[list[float | None]]
///     ``matrix[i][j]`` is the cost in metres from ``station_ids[i]`` to
///     ``station_ids[j]``, 0 on the diagonal and None where there is no route
#[cfg_attr(feature = "stubgen", gen_stub_pyfunction)]
#[pyfunction]
pub fn cost_matrix(
    py: Python<'_>,
    network: &PyNetwork,
    station_ids: Vec<String>,
) -> Vec<Vec<Option<f64>>> {
    let graph = &network.network.graph;

    for id in station_ids.iter().filter(|id| !graph.contains_station(id)) {
        warn!("Station {id} is not in the network, its row and column will be empty");
    }

    py.detach(|| {
        station_ids
            .par_iter()
            .map(|start| {
                station_ids
                    .iter()
                    .map(|goal| {
                        if start == goal {
                            return graph.contains_station(start).then_some(0.0);
                        }
                        let path = find_path(graph, start, goal);
                        (!path.is_empty()).then(|| path_cost(&path))
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    })
}
