// Breadth-first flood fills over the board
//
// All searches are 8-directional with unit step cost. Blocked cells are
// impassable; pawn cells are passable unless a search says otherwise.

use crate::game_repr::{Board, Coord, BOARD_SIZE};
use std::collections::VecDeque;

/// Distance value for cells the search never reached
pub const UNREACHABLE: u8 = u8::MAX;

/// Per-cell shortest step counts from one source, indexed `[row][col]`
pub type DistanceMap = [[u8; BOARD_SIZE]; BOARD_SIZE];

fn at(map: &DistanceMap, c: Coord) -> u8 {
    map[c.row as usize][c.col as usize]
}

fn set(map: &mut DistanceMap, c: Coord, d: u8) {
    map[c.row as usize][c.col as usize] = d;
}

/// Shortest distance from `from` to every cell, `UNREACHABLE` where walled off
pub fn distance_map(board: &Board, from: Coord) -> DistanceMap {
    let mut dist = [[UNREACHABLE; BOARD_SIZE]; BOARD_SIZE];
    let mut queue = VecDeque::with_capacity(BOARD_SIZE * BOARD_SIZE);

    set(&mut dist, from, 0);
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        let next = at(&dist, cur) + 1;
        for n in cur.neighbors() {
            if board.get(n).is_blocked() || at(&dist, n) <= next {
                continue;
            }
            set(&mut dist, n, next);
            queue.push_back(n);
        }
    }

    dist
}

/// Cells reachable from `from` within `radius` steps, not counting `from` itself
pub fn local_space(board: &Board, from: Coord, radius: u8) -> usize {
    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut queue = VecDeque::new();
    let mut count = 0;

    visited[from.row as usize][from.col as usize] = true;
    queue.push_back((from, 0u8));

    while let Some((cur, d)) = queue.pop_front() {
        if cur != from {
            count += 1;
        }
        if d == radius {
            continue;
        }
        for n in cur.neighbors() {
            let seen = &mut visited[n.row as usize][n.col as usize];
            if *seen || board.get(n).is_blocked() {
                continue;
            }
            *seen = true;
            queue.push_back((n, d + 1));
        }
    }

    count
}

/// Size of the region reachable from `from` (inclusive) when `wall` is also
/// treated as impassable. Used to measure a pawn's room with the opposing
/// pawn in the way.
pub fn reachable_area(board: &Board, from: Coord, wall: Coord) -> usize {
    let mut visited = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut queue = VecDeque::new();
    let mut count = 0;

    visited[from.row as usize][from.col as usize] = true;
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        count += 1;
        for n in cur.neighbors() {
            let seen = &mut visited[n.row as usize][n.col as usize];
            if *seen || n == wall || board.get(n).is_blocked() {
                continue;
            }
            *seen = true;
            queue.push_back(n);
        }
    }

    count
}
