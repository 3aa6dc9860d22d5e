//! Shape list with a lazily recomputed overlap snapshot.

use overlapkit_core::{PathCommand, SceneError, Shape, ShapeId};
use tracing::debug;

use crate::boolean::{ClipEngine, CsgClipper};
use crate::options::EngineConfig;
use crate::overlap::{compute_overlaps_with, IntersectionRecord};
use crate::resolver::{resolve_detailed_with, Resolution};

/// Ordered canvas shapes plus the overlap index derived from them.
///
/// Any edit drops the cached overlaps; the next query recomputes them.
#[derive(Debug, Clone)]
pub struct Scene<E: ClipEngine = CsgClipper> {
    shapes: Vec<Shape>,
    config: EngineConfig,
    engine: E,
    overlaps: Option<Vec<IntersectionRecord>>,
}

impl Default for Scene<CsgClipper> {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene<CsgClipper> {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_engine(CsgClipper, config)
    }
}

impl<E: ClipEngine> Scene<E> {
    pub fn with_engine(engine: E, config: EngineConfig) -> Self {
        Self {
            shapes: Vec::new(),
            config,
            engine,
            overlaps: None,
        }
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| &s.id == id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// True when the next query will recompute overlaps.
    pub fn is_stale(&self) -> bool {
        self.overlaps.is_none()
    }

    /// Append a shape. Ids must be unique within the scene.
    pub fn add_shape(&mut self, shape: Shape) -> Result<(), SceneError> {
        if self.shape(&shape.id).is_some() {
            return Err(SceneError::DuplicateId(shape.id.to_string()));
        }
        self.shapes.push(shape);
        self.invalidate();
        Ok(())
    }

    pub fn remove_shape(&mut self, id: &ShapeId) -> Result<Shape, SceneError> {
        let index = self.index_of(id)?;
        let removed = self.shapes.remove(index);
        self.invalidate();
        Ok(removed)
    }

    /// Swap a shape's outline in place, keeping its position in the order.
    pub fn replace_path(&mut self, id: &ShapeId, path: Vec<PathCommand>) -> Result<(), SceneError> {
        let index = self.index_of(id)?;
        self.shapes[index].path = path;
        self.invalidate();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
        self.invalidate();
    }

    /// Current overlap snapshot, recomputed if any shape changed.
    pub fn overlaps(&mut self) -> &[IntersectionRecord] {
        self.refresh();
        self.overlaps.as_deref().unwrap_or(&[])
    }

    /// Resolve a point against the current shapes.
    pub fn resolve(&mut self, x: f64, y: f64) -> Option<Resolution> {
        self.refresh();
        let overlaps = self.overlaps.as_deref().unwrap_or(&[]);
        resolve_detailed_with(
            &self.shapes,
            overlaps,
            x,
            y,
            &self.engine,
            &self.config.tessellation,
        )
    }

    fn index_of(&self, id: &ShapeId) -> Result<usize, SceneError> {
        self.shapes
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| SceneError::UnknownId(id.to_string()))
    }

    fn invalidate(&mut self) {
        if self.overlaps.take().is_some() {
            debug!(shapes = self.shapes.len(), "Overlap snapshot invalidated");
        }
    }

    fn refresh(&mut self) {
        if self.overlaps.is_none() {
            self.overlaps = Some(compute_overlaps_with(
                &self.shapes,
                &self.engine,
                &self.config,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::rectangle;
    use overlapkit_core::Point;

    fn rect(id: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Shape {
        Shape::new(id, rectangle(Point::new(x0, y0), Point::new(x1, y1)))
    }

    #[test]
    fn test_edits_invalidate_snapshot() {
        let mut scene = Scene::new();
        scene.add_shape(rect("a", 0.0, 0.0, 10.0, 10.0)).unwrap();
        scene.add_shape(rect("b", 5.0, 5.0, 15.0, 15.0)).unwrap();
        assert!(scene.is_stale());
        assert_eq!(scene.overlaps().len(), 1);
        assert!(!scene.is_stale());

        scene
            .replace_path(
                &ShapeId::from("b"),
                rectangle(Point::new(50.0, 50.0), Point::new(60.0, 60.0)),
            )
            .unwrap();
        assert!(scene.is_stale());
        assert!(scene.overlaps().is_empty());
    }

    #[test]
    fn test_scene_can_move_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scene>();
        assert_send_sync::<Resolution>();
        assert_send_sync::<IntersectionRecord>();
    }

    #[test]
    fn test_duplicate_and_unknown_ids() {
        let mut scene = Scene::new();
        scene.add_shape(rect("a", 0.0, 0.0, 1.0, 1.0)).unwrap();
        assert_eq!(
            scene.add_shape(rect("a", 5.0, 5.0, 6.0, 6.0)),
            Err(SceneError::DuplicateId("a".to_string()))
        );
        assert_eq!(
            scene.remove_shape(&ShapeId::from("zz")).unwrap_err(),
            SceneError::UnknownId("zz".to_string())
        );
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn test_resolve_follows_edits() {
        let mut scene = Scene::new();
        scene.add_shape(rect("a", 0.0, 0.0, 10.0, 10.0)).unwrap();
        scene.add_shape(rect("b", 5.0, 5.0, 15.0, 15.0)).unwrap();
        assert!(scene.resolve(7.0, 7.0).unwrap().is_shared());

        let removed = scene.remove_shape(&ShapeId::from("b")).unwrap();
        assert_eq!(removed.id.as_str(), "b");
        let res = scene.resolve(7.0, 7.0).unwrap();
        assert!(!res.is_shared());
        assert_eq!(res.owners(), vec![&ShapeId::from("a")]);

        scene.clear();
        assert!(scene.is_empty());
        assert!(scene.resolve(7.0, 7.0).is_none());
    }
}
