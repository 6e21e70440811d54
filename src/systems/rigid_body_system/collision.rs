use crate::rigid_body::{Axis, RigidBody};

/// Overlap extent of two boxes along X and Y.
///
/// Only meaningful when the boxes actually overlap.
#[inline]
pub(super) fn penetration(a: &RigidBody, b: &RigidBody) -> (f64, f64) {
    let px = (a.right() - b.left()).min(b.right() - a.left());
    let py = (a.bottom() - b.top()).min(b.bottom() - a.top());
    (px, py)
}

/// Minimum-translation axis. Exact ties go to Y.
#[inline]
pub(super) fn resolution_axis(px: f64, py: f64) -> Axis {
    if px < py {
        Axis::X
    } else {
        Axis::Y
    }
}

/// Push direction for `a` along `axis`: -1 when a's center is strictly
/// before b's, otherwise +1. Coincident centers therefore push `a` toward
/// +axis and `b` toward -axis.
#[inline]
fn push_direction(a: &RigidBody, b: &RigidBody, axis: Axis) -> f64 {
    if a.center().get(axis) < b.center().get(axis) {
        -1.0
    } else {
        1.0
    }
}

/// Separate two overlapping boxes along the shallower axis and swap their
/// velocities on that axis, scaled by the mean restitution.
///
/// Mass plays no part: a light and a heavy box exchange velocity the same
/// way. The perpendicular velocity is left alone.
pub(super) fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody) -> Axis {
    let (px, py) = penetration(a, b);
    let axis = resolution_axis(px, py);
    let depth = match axis {
        Axis::X => px,
        Axis::Y => py,
    };

    let direction = push_direction(a, b, axis);
    let push = depth / 2.0;
    *a.pos.get_mut(axis) += direction * push;
    *b.pos.get_mut(axis) -= direction * push;

    let avg_restitution = (a.restitution() + b.restitution()) / 2.0;
    let va = a.velocity.get(axis);
    let vb = b.velocity.get(axis);
    *a.velocity.get_mut(axis) = vb * avg_restitution;
    *b.velocity.get_mut(axis) = va * avg_restitution;

    axis
}

/// Single all-pairs pass in `i < j` order. Returns (pairs tested, resolved).
///
/// A body can take part in several resolutions within one pass; nothing is
/// iterated to convergence, leftover overlap is handled on later steps.
pub(super) fn resolve_all(bodies: &mut [RigidBody]) -> (u32, u32) {
    let mut tested = 0u32;
    let mut resolved = 0u32;
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            tested = tested.saturating_add(1);
            // i < j, so body i lives in `head` and body j starts `tail`.
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if a.overlaps(b) {
                resolve_pair(a, b);
                resolved = resolved.saturating_add(1);
            }
        }
    }

    (tested, resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::Vec2;
    use float_cmp::approx_eq;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> RigidBody {
        RigidBody::new(x, y, w, h, 1.0).unwrap()
    }

    #[test]
    fn penetration_uses_smaller_side_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(8.0, 5.0, 10.0, 10.0);
        assert_eq!(penetration(&a, &b), (2.0, 5.0));
        assert_eq!(penetration(&b, &a), (2.0, 5.0));
    }

    #[test]
    fn equal_depths_resolve_on_y() {
        assert_eq!(resolution_axis(3.0, 3.0), Axis::Y);
        assert_eq!(resolution_axis(2.999, 3.0), Axis::X);
        assert_eq!(resolution_axis(4.0, 3.0), Axis::Y);
    }

    #[test]
    fn horizontal_hit_separates_on_x_only() {
        let mut a = rect(0.0, 0.0, 10.0, 10.0);
        let mut b = rect(8.0, 1.0, 10.0, 10.0);

        let axis = resolve_pair(&mut a, &mut b);
        assert_eq!(axis, Axis::X);
        assert_eq!(a.pos, Vec2::new(-1.0, 0.0));
        assert_eq!(b.pos, Vec2::new(9.0, 1.0));
        assert!(approx_eq!(f64, a.right(), b.left(), epsilon = 1e-12));
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn vertical_hit_pushes_upper_body_up() {
        let mut top = rect(0.0, 0.0, 20.0, 10.0);
        let mut bottom = rect(2.0, 6.0, 20.0, 10.0);

        let axis = resolve_pair(&mut top, &mut bottom);
        assert_eq!(axis, Axis::Y);
        assert_eq!(top.pos.y, -2.0);
        assert_eq!(bottom.pos.y, 8.0);
        // X extent untouched by a Y resolution.
        assert_eq!(top.pos.x, 0.0);
        assert_eq!(bottom.pos.x, 2.0);
    }

    #[test]
    fn order_of_arguments_flips_direction_consistently() {
        let mut a = rect(8.0, 1.0, 10.0, 10.0);
        let mut b = rect(0.0, 0.0, 10.0, 10.0);
        resolve_pair(&mut a, &mut b);
        // a is to the right, so it moves right.
        assert_eq!(a.pos.x, 9.0);
        assert_eq!(b.pos.x, -1.0);
    }

    #[test]
    fn coincident_centers_push_first_body_positive() {
        let mut a = rect(0.0, 0.0, 10.0, 10.0);
        let mut b = rect(0.0, 0.0, 10.0, 10.0);

        let axis = resolve_pair(&mut a, &mut b);
        assert_eq!(axis, Axis::Y);
        assert_eq!(a.pos.y, 5.0);
        assert_eq!(b.pos.y, -5.0);
    }

    #[test]
    fn elastic_head_on_swaps_velocities_exactly() {
        let mut a = rect(0.0, 0.0, 10.0, 10.0).with_restitution(1.0).with_velocity(50.0, 7.0);
        let mut b = rect(9.0, 0.5, 10.0, 10.0).with_restitution(1.0).with_velocity(-50.0, -3.0);

        assert_eq!(resolve_pair(&mut a, &mut b), Axis::X);
        assert_eq!(a.velocity, Vec2::new(-50.0, 7.0));
        assert_eq!(b.velocity, Vec2::new(50.0, -3.0));
    }

    #[test]
    fn exchange_ignores_mass_and_scales_by_mean_restitution() {
        let mut light = RigidBody::new(0.0, 0.0, 10.0, 10.0, 1.0)
            .unwrap()
            .with_restitution(0.2)
            .with_velocity(0.0, 40.0);
        let mut heavy = RigidBody::new(0.0, 9.0, 10.0, 10.0, 1000.0)
            .unwrap()
            .with_restitution(0.6)
            .with_velocity(0.0, -10.0);

        assert_eq!(resolve_pair(&mut light, &mut heavy), Axis::Y);
        assert!(approx_eq!(f64, light.velocity.y, -4.0, ulps = 4));
        assert!(approx_eq!(f64, heavy.velocity.y, 16.0, ulps = 4));
    }

    #[test]
    fn resolve_all_skips_separated_and_touching_pairs() {
        let mut bodies = vec![
            rect(0.0, 0.0, 10.0, 10.0),
            rect(10.0, 0.0, 10.0, 10.0), // touches body 0
            rect(50.0, 50.0, 10.0, 10.0),
        ];
        let (tested, resolved) = resolve_all(&mut bodies);
        assert_eq!(tested, 3);
        assert_eq!(resolved, 0);
    }

    #[test]
    fn resolve_all_visits_pairs_in_index_order() {
        // Body 1 overlaps both neighbours; (0,1) resolves first and moves
        // body 1 right by 1, which changes the (1,2) overlap depth.
        let mut bodies = vec![
            rect(0.0, 0.0, 10.0, 10.0),
            rect(8.0, 0.5, 10.0, 10.0),
            rect(16.0, 1.0, 10.0, 10.0),
        ];
        let (tested, resolved) = resolve_all(&mut bodies);
        assert_eq!(tested, 3);
        assert_eq!(resolved, 2);
        assert_eq!(bodies[0].pos.x, -1.0);
        // (0,1): body 1 -> 9.0. (1,2): depth 19 - 16 = 3 -> 7.5 and 17.5.
        assert_eq!(bodies[1].pos.x, 7.5);
        assert_eq!(bodies[2].pos.x, 17.5);
    }
}
