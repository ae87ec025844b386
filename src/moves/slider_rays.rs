//! Ray walking shared by the sliding pieces (rook, bishop, queen).

use crate::board_state::chess_types::Color;
use crate::board_state::coordinate::Coordinate;
use crate::board_state::position::Position;

pub const ORTHOGONAL_STEPS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const DIAGONAL_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Unit step from `from` toward `to` when both share a rank, file or diagonal.
pub fn unit_step(from: Coordinate, to: Coordinate) -> Option<(i8, i8)> {
    if !from.is_valid() || !to.is_valid() {
        return None;
    }
    let d_rank = to.rank() - from.rank();
    let d_file = to.file() - from.file();
    if d_rank == 0 && d_file == 0 {
        return None;
    }
    if d_rank != 0 && d_file != 0 && d_rank.abs() != d_file.abs() {
        return None;
    }
    Some((d_rank.signum(), d_file.signum()))
}

/// True when every square strictly between `from` and `to` along `step` is empty.
pub fn path_is_clear(position: &Position, from: Coordinate, to: Coordinate, step: (i8, i8)) -> bool {
    let mut current = from;
    loop {
        let Some(next) = current.offset(step.0, step.1) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !position.is_empty(next) {
            return false;
        }
        current = next;
    }
}

/// Shape test for a slider restricted to `steps`: `to` lies on one of the rays
/// and nothing stands in between. The destination itself is not inspected.
pub fn slides_to(position: &Position, from: Coordinate, to: Coordinate, steps: &[(i8, i8)]) -> bool {
    if !from.is_valid() || !to.is_valid() {
        return false;
    }
    match unit_step(from, to) {
        Some(step) if steps.contains(&step) => path_is_clear(position, from, to, step),
        _ => false,
    }
}

/// Pushes every square reachable along `steps`. Each ray stops at the first
/// occupied square, which is included only when it holds an enemy piece.
pub fn trace_rays(
    position: &Position,
    color: Color,
    from: Coordinate,
    steps: &[(i8, i8)],
    out: &mut Vec<Coordinate>,
) {
    for &(d_rank, d_file) in steps {
        let mut current = from;
        while let Some(next) = current.offset(d_rank, d_file) {
            match position.get_piece(next) {
                None => out.push(next),
                Some(piece) => {
                    if piece.color != color {
                        out.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
