use std::sync::{Arc, PoisonError, RwLock};

use getset::{CopyGetters, Getters};
use itertools::Itertools;
use log::warn;

use geometry::{GeometryError, Shape, Triangle, WorldMove, WorldPoint};

use crate::SensingError;

/// A solid object the sensors can see, described as a polygon of `mesh`
/// offsets around `center`.
#[derive(Clone, Debug, PartialEq, CopyGetters, Getters)]
pub struct Target {
    #[get_copy = "pub"]
    center: WorldPoint,
    #[get = "pub"]
    mesh: Vec<WorldMove>,
}

impl Target {
    pub fn new(center: WorldPoint, mesh: Vec<WorldMove>) -> Result<Self, SensingError> {
        if mesh.len() < 2 {
            return Err(SensingError::TooFewMeshPoints { count: mesh.len() });
        }
        Ok(Target { center, mesh })
    }

    pub fn moved_to(&self, center: WorldPoint) -> Self {
        Target {
            center,
            mesh: self.mesh.clone(),
        }
    }

    /// Fans the mesh around the center: one triangle per pair of
    /// neighbouring mesh points, including the pair closing the loop.
    pub fn triangles(&self) -> Result<Vec<Triangle>, GeometryError> {
        self.mesh
            .iter()
            .circular_tuple_windows()
            .map(|(&a, &b)| {
                Triangle::new([self.center, self.center + a, self.center + b])
                    .validated()
                    .map_err(|e| {
                        warn!("target at {:?} has a flat mesh triangle", self.center);
                        e
                    })
            })
            .collect()
    }

    pub fn obstacles(&self) -> Result<Vec<Shape>, GeometryError> {
        Ok(self.triangles()?.into_iter().map(Shape::from).collect())
    }
}

/// Shared scene of targets.
///
/// Writers replace the list wholesale, so a snapshot handed to a poll never
/// changes underneath it.
#[derive(Clone, Debug, Default)]
pub struct TargetRegistry {
    targets: Arc<RwLock<Arc<Vec<Target>>>>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn update<R>(&self, change: impl FnOnce(&mut Vec<Target>) -> R) -> R {
        let mut guard = self.targets.write().unwrap_or_else(PoisonError::into_inner);
        change(Arc::make_mut(&mut *guard))
    }

    /// Returns the index of the new target.
    pub fn add(&self, target: Target) -> usize {
        self.update(|targets| {
            targets.push(target);
            targets.len() - 1
        })
    }
    pub fn remove(&self, index: usize) -> Option<Target> {
        self.update(|targets| (index < targets.len()).then(|| targets.remove(index)))
    }
    pub fn clear(&self) {
        self.update(|targets| targets.clear())
    }
    /// False if there is no target at `index`.
    pub fn set_center(&self, index: usize, center: WorldPoint) -> bool {
        self.update(|targets| match targets.get_mut(index) {
            Some(target) => {
                target.center = center;
                true
            }
            None => false,
        })
    }

    pub fn snapshot(&self) -> Arc<Vec<Target>> {
        let guard = self.targets.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use geometry::{point2, vec2, Obstacle};
    use ntest::assert_false;
    use pretty_assertions::assert_eq;

    use super::*;

    fn square_target(x: f64, y: f64) -> Target {
        Target::new(
            point2(x, y),
            vec![vec2(-5.0, -5.0), vec2(5.0, -5.0), vec2(5.0, 5.0), vec2(-5.0, 5.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_new__needs_two_mesh_points() {
        assert_eq!(
            Target::new(point2(0.0, 0.0), vec![vec2(1.0, 0.0)]),
            Err(SensingError::TooFewMeshPoints { count: 1 })
        );
        assert!(Target::new(point2(0.0, 0.0), vec![]).is_err());
    }

    #[test]
    fn test_triangles__fan_with_closing_triangle() {
        let triangles = square_target(10.0, 10.0).triangles().unwrap();
        assert_eq!(triangles.len(), 4);
        assert_eq!(
            triangles[0].vertices(),
            [point2(10.0, 10.0), point2(5.0, 5.0), point2(15.0, 5.0)]
        );
        assert_eq!(
            triangles[3].vertices(),
            [point2(10.0, 10.0), point2(5.0, 15.0), point2(5.0, 5.0)]
        );
    }

    #[test]
    fn test_triangles__two_points_make_two_triangles() {
        let sliver = Target::new(point2(0.0, 0.0), vec![vec2(1.0, 0.0), vec2(0.0, 1.0)]).unwrap();
        let triangles = sliver.triangles().unwrap();
        assert_eq!(triangles.len(), 2);
        assert_eq!(triangles[1].vertices()[1], point2(0.0, 1.0));
    }

    #[test]
    fn test_triangles__flat_mesh_is_rejected() {
        let flat = Target::new(point2(0.0, 0.0), vec![vec2(1.0, 0.0), vec2(2.0, 0.0)]).unwrap();
        assert!(matches!(
            flat.triangles(),
            Err(GeometryError::DegenerateShape { .. })
        ));
    }

    #[test]
    fn test_obstacles_cover_the_mesh() {
        let obstacles = square_target(0.0, 0.0).obstacles().unwrap();
        let covered = |p| obstacles.iter().any(|o| o.lies_inside(p).unwrap());
        assert!(covered(point2(4.0, 4.0)));
        assert!(covered(point2(-4.0, 1.0)));
        assert_false!(covered(point2(6.0, 0.0)));
    }

    #[test]
    fn test_moved_to_keeps_mesh() {
        let moved = square_target(0.0, 0.0).moved_to(point2(3.0, 4.0));
        assert_eq!(moved.center(), point2(3.0, 4.0));
        assert_eq!(moved.mesh().len(), 4);
    }

    #[test]
    fn test_registry__add_remove_clear() {
        let registry = TargetRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.add(square_target(0.0, 0.0)), 0);
        assert_eq!(registry.add(square_target(50.0, 0.0)), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.remove(0).map(|t| t.center()), Some(point2(0.0, 0.0)));
        assert_eq!(registry.remove(5), None);
        assert_eq!(registry.snapshot()[0].center(), point2(50.0, 0.0));
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_registry__snapshot_is_stable() {
        let registry = TargetRegistry::new();
        registry.add(square_target(0.0, 0.0));
        let before = registry.snapshot();
        assert!(registry.set_center(0, point2(20.0, 0.0)));
        registry.add(square_target(40.0, 0.0));
        assert_eq!(before.len(), 1);
        assert_eq!(before[0].center(), point2(0.0, 0.0));
        assert_eq!(registry.snapshot()[0].center(), point2(20.0, 0.0));
        assert_false!(registry.set_center(9, point2(0.0, 0.0)));
    }

    #[test]
    fn test_registry__clones_share_targets() {
        let registry = TargetRegistry::new();
        let other_handle = registry.clone();
        std::thread::spawn(move || {
            other_handle.add(square_target(1.0, 1.0));
        })
        .join()
        .unwrap();
        assert_eq!(registry.len(), 1);
    }
}
