use geometry::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SensingError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("a target mesh needs at least 2 points, got {count}")]
    TooFewMeshPoints { count: usize },
    #[error("the listener thread is gone")]
    ListenerDisconnected,
}
