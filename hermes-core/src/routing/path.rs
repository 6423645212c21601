use geo::Point;

use crate::GuidewayEdge;

/// Total routing cost of a sequence of edges
pub fn path_cost(path: &[&GuidewayEdge]) -> f64 {
    path.iter().map(|edge| edge.routing_cost()).sum()
}

/// Joins polylines end to end, collapsing a point repeated where one
/// polyline ends and the next begins.
pub fn join_polylines<'a>(polylines: impl IntoIterator<Item = &'a [Point<f64>]>) -> Vec<Point<f64>> {
    let mut joined: Vec<Point<f64>> = Vec::new();
    for polyline in polylines {
        let skip = usize::from(joined.last().is_some_and(|last| polyline.first() == Some(last)));
        joined.extend_from_slice(&polyline[skip..]);
    }
    joined
}

/// The single polyline travelled along a found path, ready for animation
pub fn concatenate_paths(path: &[&GuidewayEdge]) -> Vec<Point<f64>> {
    join_polylines(path.iter().map(|edge| edge.path.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::lat_lon;

    #[test]
    fn shared_junction_points_are_collapsed() {
        let ab = GuidewayEdge::new("a", "b", vec![lat_lon(0.0, 0.0), lat_lon(0.0, 1.0)]);
        let bc = GuidewayEdge::new(
            "b",
            "c",
            vec![lat_lon(0.0, 1.0), lat_lon(0.5, 1.5), lat_lon(1.0, 2.0)],
        );
        let cd = GuidewayEdge::new("c", "d", vec![lat_lon(1.1, 2.0), lat_lon(2.0, 2.0)]);

        let points = concatenate_paths(&[&ab, &bc, &cd]);
        assert_eq!(points.len(), 6);
        assert_eq!(points[1], lat_lon(0.0, 1.0));
        assert_eq!(points[2], lat_lon(0.5, 1.5));
    }

    #[test]
    fn empty_path_has_no_points() {
        assert!(concatenate_paths(&[]).is_empty());
        assert_eq!(path_cost(&[]), 0.0);
    }
}
