//! # Projectile Simulation
//!
//! Advances a projectile one vertex per tick.
//!
//! Plain bullets fly straight through walls and die at the grid edge.
//! Missiles follow open corridors: when the wall ahead is closed they turn
//! onto a random open perpendicular side, and die when boxed in.

use crate::game::{Direction, Projectile, Vertex};
use crate::generation::MazeGraph;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

/// Moves projectiles over a read-only maze.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileSimulator<'a> {
    maze: &'a MazeGraph,
}

impl<'a> ProjectileSimulator<'a> {
    /// Creates a simulator over `maze`.
    pub fn new(maze: &'a MazeGraph) -> Self {
        Self { maze }
    }

    /// Runs one tick of `projectile`'s flight.
    ///
    /// Returns `false` when the projectile is destroyed this tick: its
    /// lifetime ran out, it would leave the grid, or (for missiles) every
    /// way forward is walled off. A destroyed projectile is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazechase::{Direction, GridDims, MazeGraph, Projectile, ProjectileKind, ProjectileSimulator, Role};
    /// use rand::SeedableRng;
    ///
    /// let maze = MazeGraph::empty(GridDims::new(1, 4));
    /// let simulator = ProjectileSimulator::new(&maze);
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    /// let mut bullet = Projectile::new(Role::Cop, 0, Direction::Right, ProjectileKind::Bullet, 2);
    ///
    /// assert!(simulator.advance(&mut bullet, &mut rng));
    /// assert_eq!(bullet.position, 1);
    /// assert_eq!(bullet.remaining_lifetime, 1);
    /// ```
    pub fn advance<R: Rng + ?Sized>(&self, projectile: &mut Projectile, rng: &mut R) -> bool {
        if projectile.remaining_lifetime == 0 {
            return false;
        }

        let next = if projectile.is_missile() {
            self.missile_step(projectile, rng)
        } else {
            self.maze
                .dims()
                .step(projectile.position, projectile.direction)
                .map(|next| (next, projectile.direction))
        };

        match next {
            Some((vertex, direction)) => {
                trace!(
                    "{:?} {} -> {} heading {:?}",
                    projectile.kind,
                    projectile.position,
                    vertex,
                    direction
                );
                projectile.position = vertex;
                projectile.direction = direction;
                projectile.remaining_lifetime -= 1;
                true
            }
            None => false,
        }
    }

    /// Straight ahead if the wall is open, else a ricochet.
    fn missile_step<R: Rng + ?Sized>(
        &self,
        projectile: &Projectile,
        rng: &mut R,
    ) -> Option<(Vertex, Direction)> {
        if let Some(next) = self.open_step(projectile.position, projectile.direction) {
            return Some((next, projectile.direction));
        }

        let mut turns = projectile.direction.perpendicular();
        turns.shuffle(rng);
        turns.into_iter().find_map(|turn| {
            self.open_step(projectile.position, turn)
                .map(|next| (next, turn))
        })
    }

    fn open_step(&self, from: Vertex, direction: Direction) -> Option<Vertex> {
        self.maze
            .dims()
            .step(from, direction)
            .filter(|&next| self.maze.is_open(from, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GridDims, ProjectileKind, Role};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn missile(position: Vertex, direction: Direction, lifetime: u32) -> Projectile {
        Projectile::new(Role::Cop, position, direction, ProjectileKind::Missile, lifetime)
    }

    fn bullet(position: Vertex, direction: Direction, lifetime: u32) -> Projectile {
        Projectile::new(Role::Cop, position, direction, ProjectileKind::Bullet, lifetime)
    }

    #[test]
    fn test_bullet_ignores_walls() {
        let maze = MazeGraph::empty(GridDims::new(3, 3));
        let simulator = ProjectileSimulator::new(&maze);
        let mut rng = StdRng::seed_from_u64(1);
        let mut shot = bullet(0, Direction::Down, 5);

        assert!(simulator.advance(&mut shot, &mut rng));
        assert!(simulator.advance(&mut shot, &mut rng));
        assert_eq!(shot.position, 6);
        assert_eq!(shot.remaining_lifetime, 3);
    }

    #[test]
    fn test_bullet_dies_at_edge_without_wrapping() {
        let maze = MazeGraph::empty(GridDims::new(2, 3));
        let simulator = ProjectileSimulator::new(&maze);
        let mut rng = StdRng::seed_from_u64(1);
        let mut shot = bullet(2, Direction::Right, 5);

        assert!(!simulator.advance(&mut shot, &mut rng));
        assert_eq!(shot.position, 2);
        assert_eq!(shot.remaining_lifetime, 5);
    }

    #[test]
    fn test_lifetime_expiry() {
        let maze = MazeGraph::empty(GridDims::new(1, 10));
        let simulator = ProjectileSimulator::new(&maze);
        let mut rng = StdRng::seed_from_u64(1);
        let mut shot = bullet(0, Direction::Right, 2);

        assert!(simulator.advance(&mut shot, &mut rng));
        assert!(simulator.advance(&mut shot, &mut rng));
        assert!(!simulator.advance(&mut shot, &mut rng));
        assert_eq!(shot.position, 2);
    }

    #[test]
    fn test_missile_flies_straight_through_open_walls() {
        let maze = MazeGraph::from_traversal(GridDims::new(1, 3), &[(0, 1), (1, 2)]);
        let simulator = ProjectileSimulator::new(&maze);
        let mut rng = StdRng::seed_from_u64(1);
        let mut shot = missile(0, Direction::Right, 5);

        assert!(simulator.advance(&mut shot, &mut rng));
        assert_eq!((shot.position, shot.direction), (1, Direction::Right));
    }

    #[test]
    fn test_missile_ricochets_onto_single_opening() {
        // 0 - 1   2
        //     |
        // 3   4   5
        let maze = MazeGraph::from_traversal(GridDims::new(2, 3), &[(0, 1), (1, 4)]);
        let simulator = ProjectileSimulator::new(&maze);

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut shot = missile(1, Direction::Right, 5);
            assert!(simulator.advance(&mut shot, &mut rng));
            assert_eq!(shot.position, 4);
            assert_eq!(shot.direction, Direction::Down);
        }
    }

    #[test]
    fn test_missile_ricochet_picks_an_open_side() {
        // Wall ahead of 4 going up; both sides open.
        let maze = MazeGraph::from_traversal(GridDims::new(2, 3), &[(3, 4), (4, 5)]);
        let simulator = ProjectileSimulator::new(&maze);

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut shot = missile(4, Direction::Up, 5);
            assert!(simulator.advance(&mut shot, &mut rng));
            assert!(matches!(
                (shot.position, shot.direction),
                (3, Direction::Left) | (5, Direction::Right)
            ));
        }
    }

    #[test]
    fn test_missile_boxed_in_is_destroyed() {
        let maze = MazeGraph::from_traversal(GridDims::new(1, 3), &[(0, 1)]);
        let simulator = ProjectileSimulator::new(&maze);
        let mut rng = StdRng::seed_from_u64(4);
        let mut shot = missile(1, Direction::Right, 5);

        assert!(!simulator.advance(&mut shot, &mut rng));
        assert_eq!(shot.position, 1);
    }

    #[test]
    fn test_missile_does_not_reverse() {
        // Dead end at 1 with the only opening behind it.
        let maze = MazeGraph::from_traversal(GridDims::new(2, 2), &[(0, 1)]);
        let simulator = ProjectileSimulator::new(&maze);
        let mut rng = StdRng::seed_from_u64(2);
        let mut shot = missile(1, Direction::Right, 5);

        assert!(!simulator.advance(&mut shot, &mut rng));
    }
}
