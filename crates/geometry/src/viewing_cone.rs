use std::f64::consts::{FRAC_PI_2, PI};

use euclid::Transform2D;
use getset::CopyGetters;
use log::trace;
use ordered_float::OrderedFloat;

use crate::{
    point_to_string, GeometryError, LineSegment, Obstacle, PointList, Shape, SimulationFrame,
    Triangle, TriangleFrame, WorldMove, WorldMoveExt, WorldPoint,
};

/// A sensor's field of view: the wedge between two border rays leaving `apex`
/// at `half_angle` either side of the `apex -> look_at` axis.
///
/// A finite cone ends at the chord between its two corners, which sit at the
/// axis length along each border. An infinite cone is bounded by angle only.
///
/// Obstacles are borrowed for the lifetime of one query, the cone never owns
/// or mutates them.
#[derive(Clone, Debug, CopyGetters)]
pub struct ViewingCone<'a> {
    #[get_copy = "pub"]
    apex: WorldPoint,
    #[get_copy = "pub"]
    look_at: WorldPoint,
    #[get_copy = "pub"]
    half_angle: f64,
    #[get_copy = "pub"]
    infinite: bool,
    #[get_copy = "pub"]
    ccw_border: LineSegment,
    #[get_copy = "pub"]
    cw_border: LineSegment,
    to_wedge_frame: Option<Transform2D<f64, SimulationFrame, TriangleFrame>>,
    obstacles: Vec<&'a Shape>,
}

impl<'a> ViewingCone<'a> {
    pub fn new(
        apex: WorldPoint,
        look_at: WorldPoint,
        half_angle: f64,
        infinite: bool,
    ) -> Result<Self, GeometryError> {
        if !(half_angle > 0.0 && half_angle < PI) {
            return Err(GeometryError::InvalidConeAngle { half_angle });
        }
        let axis = look_at - apex;
        if axis.square_length() == 0.0 {
            return Err(GeometryError::DegenerateCone);
        }
        let ccw_border = LineSegment::new(apex, axis.rotated_radians(half_angle)).with_infinite(infinite);
        let cw_border = LineSegment::new(apex, axis.rotated_radians(-half_angle)).with_infinite(infinite);
        let to_wedge_frame = if infinite {
            None
        } else {
            // the wedge triangle folds flat at a right half-angle
            if half_angle >= FRAC_PI_2 {
                return Err(GeometryError::InvalidConeAngle { half_angle });
            }
            let wedge = Triangle::new([apex, ccw_border.end(), cw_border.end()]);
            Some(
                wedge
                    .to_triangle_frame()
                    .map_err(|_| GeometryError::InvalidConeAngle { half_angle })?,
            )
        };
        Ok(ViewingCone {
            apex,
            look_at,
            half_angle,
            infinite,
            ccw_border,
            cw_border,
            to_wedge_frame,
            obstacles: vec![],
        })
    }

    /// `opening_angle` spans both sides of the axis.
    pub fn from_opening_angle(
        apex: WorldPoint,
        look_at: WorldPoint,
        opening_angle: f64,
        infinite: bool,
    ) -> Result<Self, GeometryError> {
        Self::new(apex, look_at, opening_angle / 2.0, infinite)
    }

    pub fn set_look_at(&mut self, look_at: WorldPoint) -> Result<(), GeometryError> {
        let reaimed = ViewingCone::new(self.apex, look_at, self.half_angle, self.infinite)?;
        *self = ViewingCone {
            obstacles: std::mem::take(&mut self.obstacles),
            ..reaimed
        };
        Ok(())
    }

    pub fn axis(&self) -> WorldMove {
        self.look_at - self.apex
    }
    /// Far ends of the counter-clockwise and clockwise borders.
    pub fn corners(&self) -> [WorldPoint; 2] {
        [self.ccw_border.end(), self.cw_border.end()]
    }
    pub fn borders(&self) -> [LineSegment; 2] {
        [self.ccw_border, self.cw_border]
    }

    pub fn add_obstacle(&mut self, obstacle: &'a Shape) {
        self.obstacles.push(obstacle);
    }
    pub fn add_obstacles(&mut self, obstacles: impl IntoIterator<Item = &'a Shape>) {
        self.obstacles.extend(obstacles);
    }
    pub fn remove_all_obstacles(&mut self) {
        self.obstacles.clear();
    }
    pub fn obstacles(&self) -> &[&'a Shape] {
        &self.obstacles
    }

    /// Borders and apex are inside.
    pub fn lies_inside(&self, p: WorldPoint) -> bool {
        match self.to_wedge_frame {
            Some(to_wedge_frame) => {
                let local = to_wedge_frame.transform_point(p);
                local.x >= 0.0 && local.y >= 0.0 && local.x + local.y <= 1.0
            }
            None => {
                let offset = p - self.apex;
                offset.square_length() == 0.0
                    || self.axis().angle_to(offset).radians.abs() <= self.half_angle
            }
        }
    }

    /// Points of `obstacle` that could be the nearest thing this cone sees: its
    /// closest point to the apex when that lies in the wedge, and every place
    /// its boundary crosses a border.
    fn visible_candidates(&self, obstacle: &Shape, borders: &[LineSegment; 2]) -> PointList {
        let mut candidates = PointList::new();
        let closest = obstacle.closest_point_to(self.apex);
        if self.lies_inside(closest) {
            trace!("closest point {} is inside the cone", point_to_string(closest));
            candidates.push(closest);
        }
        let crossings = obstacle.intersections_with(borders);
        trace!("{} border crossings for {:?}", crossings.len(), obstacle);
        candidates.extend(crossings);
        candidates
    }

    /// Nearest visible point of any of `obstacles`, the first one found on ties.
    pub fn closest_point_among<'s>(
        &self,
        obstacles: impl IntoIterator<Item = &'s Shape>,
    ) -> Option<WorldPoint> {
        let borders = self.borders();
        obstacles
            .into_iter()
            .flat_map(|obstacle| self.visible_candidates(obstacle, &borders))
            .min_by_key(|&candidate| OrderedFloat((candidate - self.apex).square_length()))
    }

    pub fn closest_obstacle(&self) -> Option<WorldPoint> {
        self.closest_point_among(self.obstacles.iter().copied())
    }

    pub fn distance_to_closest(&self) -> Option<f64> {
        self.closest_obstacle()
            .map(|point| (point - self.apex).length())
    }
}

pub fn closest_obstacle_point(cone: &ViewingCone, obstacles: &[Shape]) -> Option<WorldPoint> {
    cone.closest_point_among(obstacles)
}

pub fn distance_to_closest(cone: &ViewingCone, obstacles: &[Shape]) -> Option<f64> {
    closest_obstacle_point(cone, obstacles).map(|point| (point - cone.apex()).length())
}
